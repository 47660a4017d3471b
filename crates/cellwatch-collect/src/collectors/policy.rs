use cellwatch_core::{Category, CategoryResult, FeedItem, ItemOrigin, KeywordTable};

use super::{finish, leading, source_contribution};
use crate::client::FeedClient;
use crate::date::parse_entry_date;
use crate::error::CollectError;
use crate::parse::FeedEntry;
use crate::sources::FeedSource;

/// Collect on-topic regulatory announcements from the policy feeds.
///
/// Each feed is failure-isolated: a broken domestic feed leaves the
/// international feed's items intact and vice versa.
pub async fn collect_policy(
    client: &FeedClient,
    sources: &[FeedSource],
    keywords: &KeywordTable,
) -> CategoryResult {
    let mut items = Vec::new();
    for source in sources {
        let result = fetch_source(client, source, keywords).await;
        items.extend(source_contribution(Category::Policy, source, result));
    }
    finish(Category::Policy, items)
}

async fn fetch_source(
    client: &FeedClient,
    source: &FeedSource,
    keywords: &KeywordTable,
) -> Result<Vec<FeedItem>, CollectError> {
    let entries = client.fetch_entries(&source.url).await?;
    policy_items(entries, source, keywords)
}

/// Keep the leading entries whose title or description hits a keyword for
/// the feed's locale. Dates are only parsed for kept entries.
fn policy_items(
    entries: Vec<FeedEntry>,
    source: &FeedSource,
    keywords: &KeywordTable,
) -> Result<Vec<FeedItem>, CollectError> {
    leading(entries, source)
        .filter(|entry| {
            let hit = keywords.matches(
                Category::Policy,
                source.locale,
                &[entry.title.as_str(), entry.description.as_str()],
            );
            if !hit {
                tracing::debug!(source = source.id, title = %entry.title, "off-topic entry skipped");
            }
            hit
        })
        .map(|entry| -> Result<FeedItem, CollectError> {
            let date = parse_entry_date(entry.published()?)?;
            Ok(FeedItem {
                date,
                title: entry.title,
                origin: ItemOrigin::Agency(source.label.clone()),
                link: entry.link,
            })
        })
        .collect()
}
