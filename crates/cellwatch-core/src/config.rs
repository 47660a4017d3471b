use std::path::PathBuf;

use crate::app_config::{AppConfig, FeedUrls, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the defaults reproduce the fixed output path
/// and feed endpoints.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let feed_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "feed URL must not be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    let defaults = FeedUrls::default();
    let feeds = FeedUrls {
        pubmed: feed_url("CELLWATCH_PUBMED_FEED_URL", &defaults.pubmed)?,
        nature: feed_url("CELLWATCH_NATURE_FEED_URL", &defaults.nature)?,
        clinical_trials: feed_url(
            "CELLWATCH_CLINICALTRIALS_FEED_URL",
            &defaults.clinical_trials,
        )?,
        nmpa: feed_url("CELLWATCH_NMPA_FEED_URL", &defaults.nmpa)?,
        fda: feed_url("CELLWATCH_FDA_FEED_URL", &defaults.fda)?,
    };

    let output_path = PathBuf::from(or_default("CELLWATCH_OUTPUT_PATH", "data/latest.json"));
    let log_level = or_default("CELLWATCH_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64(
        "CELLWATCH_REQUEST_TIMEOUT_SECS",
        &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
    )?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CELLWATCH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    let user_agent = or_default("CELLWATCH_USER_AGENT", "cellwatch/0.1 (feed-digest)");
    let keywords_path = lookup("CELLWATCH_KEYWORDS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
        keywords_path,
        feeds,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
