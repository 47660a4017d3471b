//! Run orchestration: three collectors in sequence, one report.

use chrono::NaiveDateTime;

use cellwatch_core::{KeywordTable, RunReport};

use crate::client::FeedClient;
use crate::collectors::{collect_academic, collect_clinical, collect_policy};
use crate::sources::FeedCatalog;

/// Run every collector once and assemble the report.
///
/// 1. Academic feeds (PubMed, Nature).
/// 2. Clinical-trial feed.
/// 3. Policy feeds, keyword-filtered.
///
/// Collectors never fail: a broken source only shrinks its category. The
/// returned report is complete even when every feed was unreachable.
pub async fn collect_report(
    client: &FeedClient,
    catalog: &FeedCatalog,
    keywords: &KeywordTable,
    generated_at: NaiveDateTime,
) -> RunReport {
    let academic = collect_academic(client, &catalog.academic).await;
    let clinical = collect_clinical(client, &catalog.clinical).await;
    let policy = collect_policy(client, &catalog.policy, keywords).await;

    let report = RunReport::new(generated_at, academic, clinical, policy);
    tracing::info!(
        academic = report.counts.academic,
        clinical = report.counts.clinical,
        policy = report.counts.policy,
        "report assembled"
    );
    report
}
