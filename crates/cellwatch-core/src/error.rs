use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read keyword file {path}: {source}")]
    KeywordsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse keyword file: {0}")]
    KeywordsFileParse(#[from] serde_yaml::Error),

    #[error("keyword table validation failed: {0}")]
    Validation(String),
}
