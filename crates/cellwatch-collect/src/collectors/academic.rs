use cellwatch_core::{Category, CategoryResult, FeedItem, ItemOrigin};

use super::{finish, leading, source_contribution};
use crate::client::FeedClient;
use crate::date::parse_entry_date;
use crate::error::CollectError;
use crate::parse::FeedEntry;
use crate::sources::FeedSource;

/// Collect the newest publications across the academic feeds.
pub async fn collect_academic(client: &FeedClient, sources: &[FeedSource]) -> CategoryResult {
    let mut items = Vec::new();
    for source in sources {
        let result = fetch_source(client, source).await;
        items.extend(source_contribution(Category::Academic, source, result));
    }
    finish(Category::Academic, items)
}

async fn fetch_source(
    client: &FeedClient,
    source: &FeedSource,
) -> Result<Vec<FeedItem>, CollectError> {
    let entries = client.fetch_entries(&source.url).await?;
    academic_items(entries, source)
}

/// Map the leading entries of one feed; any undatable entry fails the source.
fn academic_items(
    entries: Vec<FeedEntry>,
    source: &FeedSource,
) -> Result<Vec<FeedItem>, CollectError> {
    leading(entries, source)
        .map(|entry| -> Result<FeedItem, CollectError> {
            let date = parse_entry_date(entry.published()?)?;
            Ok(FeedItem {
                date,
                title: entry.title,
                origin: ItemOrigin::Source(source.label.clone()),
                link: entry.link,
            })
        })
        .collect()
}
