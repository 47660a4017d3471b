use std::sync::LazyLock;

use regex::Regex;

use cellwatch_core::{Category, CategoryResult, FeedItem, ItemOrigin};

use super::{finish, leading, source_contribution};
use crate::client::FeedClient;
use crate::date::parse_entry_date;
use crate::error::CollectError;
use crate::parse::FeedEntry;
use crate::sources::FeedSource;

static TRIAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"NCT\d+").expect("valid trial id regex"));

/// The first `NCT<digits>` identifier in `link`, or an empty string.
#[must_use]
pub fn extract_trial_id(link: &str) -> String {
    TRIAL_ID
        .find(link)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Collect the newest registered trials.
///
/// Every entry of the feed is read. One entry with an unparseable date
/// empties the whole source, the same as a failed fetch.
pub async fn collect_clinical(client: &FeedClient, source: &FeedSource) -> CategoryResult {
    let result = fetch_source(client, source).await;
    let items = source_contribution(Category::Clinical, source, result);
    finish(Category::Clinical, items)
}

async fn fetch_source(
    client: &FeedClient,
    source: &FeedSource,
) -> Result<Vec<FeedItem>, CollectError> {
    let entries = client.fetch_entries(&source.url).await?;
    clinical_items(entries, source)
}

fn clinical_items(
    entries: Vec<FeedEntry>,
    source: &FeedSource,
) -> Result<Vec<FeedItem>, CollectError> {
    leading(entries, source)
        .map(|entry| -> Result<FeedItem, CollectError> {
            let trial_id = extract_trial_id(&entry.link);
            let date = parse_entry_date(entry.published()?)?;
            Ok(FeedItem {
                date,
                title: entry.title,
                origin: ItemOrigin::TrialId(trial_id),
                link: entry.link,
            })
        })
        .collect()
}
