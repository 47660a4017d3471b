//! One collection run, from config to written report.

use std::path::Path;

use anyhow::Context;
use chrono::Local;

use cellwatch_collect::{collect_report, render_report, write_report, FeedCatalog, FeedClient};
use cellwatch_core::{load_keywords, AppConfig, KeywordTable, RunReport};

/// Keyword table from the configured file, or the built-in table.
///
/// # Errors
///
/// Returns an error if a configured keyword file cannot be loaded.
pub(crate) fn resolve_keywords(config: &AppConfig) -> anyhow::Result<KeywordTable> {
    match &config.keywords_path {
        Some(path) => load_keywords(path)
            .with_context(|| format!("loading keyword table from {}", path.display())),
        None => Ok(KeywordTable::default()),
    }
}

/// Collect every feed once and build the report, stamped with local time.
///
/// # Errors
///
/// Returns an error if the keyword table or HTTP client cannot be set up.
/// Feed failures are not errors; they only shrink the report.
pub(crate) async fn collect(config: &AppConfig) -> anyhow::Result<RunReport> {
    let keywords = resolve_keywords(config)?;
    let client = FeedClient::new(config.request_timeout_secs, &config.user_agent)?;
    let catalog = FeedCatalog::from_urls(&config.feeds);

    tracing::info!(
        sources = catalog.academic.len() + 1 + catalog.policy.len(),
        "starting collection run"
    );
    let report = collect_report(&client, &catalog, &keywords, Local::now().naive_local()).await;
    Ok(report)
}

/// Run once: collect, then write the report (or print it on a dry run).
///
/// # Errors
///
/// Returns an error if setup fails or the report cannot be written.
pub(crate) async fn run_once(
    config: &AppConfig,
    output_override: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let report = collect(config).await?;

    if dry_run {
        println!("{}", render_report(&report)?);
        return Ok(());
    }

    let path = output_override.unwrap_or(config.output_path.as_path());
    write_report(path, &report)
        .await
        .with_context(|| format!("writing report to {}", path.display()))?;
    println!(
        "wrote {} (academic={}, clinical={}, policy={})",
        path.display(),
        report.counts.academic,
        report.counts.clinical,
        report.counts.policy
    );
    Ok(())
}
