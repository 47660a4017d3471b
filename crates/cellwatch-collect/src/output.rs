//! Writing the report document.

use std::path::Path;

use cellwatch_core::RunReport;

use crate::error::CollectError;

/// Serialize `report` as pretty-printed JSON (two-space indent, UTF-8 as-is).
///
/// # Errors
///
/// Returns [`CollectError::Serialize`] if serialization fails.
pub fn render_report(report: &RunReport) -> Result<String, CollectError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write `report` to `path`, creating the parent directory if needed.
///
/// Any existing file is replaced.
///
/// # Errors
///
/// Returns [`CollectError::Io`] if the directory or file cannot be written.
pub async fn write_report(path: &Path, report: &RunReport) -> Result<(), CollectError> {
    let json = render_report(report)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| CollectError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
    }

    tokio::fs::write(path, json)
        .await
        .map_err(|e| CollectError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
    tracing::info!(path = %path.display(), "wrote report");
    Ok(())
}
