//! Category collectors.
//!
//! Each collector reads its feeds one after another and returns a finished
//! [`CategoryResult`]. A source that fails to fetch or parse is logged and
//! contributes nothing; it never fails the collector.

mod academic;
mod clinical;
mod policy;

pub use academic::collect_academic;
pub use clinical::{collect_clinical, extract_trial_id};
pub use policy::collect_policy;

use cellwatch_core::{Category, CategoryResult, FeedItem};

use crate::error::CollectError;
use crate::parse::FeedEntry;
use crate::sources::FeedSource;

/// Leading entries of a feed, honoring the source's pre-limit.
fn leading(entries: Vec<FeedEntry>, source: &FeedSource) -> impl Iterator<Item = FeedEntry> {
    entries
        .into_iter()
        .take(source.max_entries.unwrap_or(usize::MAX))
}

/// Degrade a failed source to an empty contribution.
fn source_contribution(
    category: Category,
    source: &FeedSource,
    result: Result<Vec<FeedItem>, CollectError>,
) -> Vec<FeedItem> {
    match result {
        Ok(items) => {
            tracing::debug!(
                %category,
                source = source.id,
                count = items.len(),
                "collected feed items"
            );
            items
        }
        Err(e) => {
            tracing::warn!(
                %category,
                source = source.id,
                url = %source.url,
                error = %e,
                "feed source failed; contributing no items"
            );
            Vec::new()
        }
    }
}

fn finish(category: Category, items: Vec<FeedItem>) -> CategoryResult {
    let fetched = items.len();
    let result = CategoryResult::from_items(items);
    tracing::info!(%category, fetched, kept = result.len(), "category collected");
    result
}
