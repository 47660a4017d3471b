//! The fixed set of upstream feeds and what each contributes.

use cellwatch_core::{FeedUrls, Locale};

/// One upstream feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    /// Short identifier used in log fields.
    pub id: &'static str,
    /// Label written into each item (`source` or `agency`).
    pub label: String,
    pub url: String,
    /// How many leading entries to consider; `None` reads the whole feed.
    pub max_entries: Option<usize>,
    /// Language of the feed, selecting which keyword rules apply.
    pub locale: Locale,
}

impl FeedSource {
    fn new(
        id: &'static str,
        label: &str,
        url: &str,
        max_entries: Option<usize>,
        locale: Locale,
    ) -> Self {
        Self {
            id,
            label: label.to_string(),
            url: url.to_string(),
            max_entries,
            locale,
        }
    }
}

/// Academic feeds read at most this many entries each.
pub const ACADEMIC_ENTRIES_PER_SOURCE: usize = 5;
/// Policy feeds scan at most this many entries each before filtering.
pub const POLICY_ENTRIES_PER_SOURCE: usize = 10;

/// Every feed the collectors read, grouped by category.
#[derive(Debug, Clone)]
pub struct FeedCatalog {
    pub academic: Vec<FeedSource>,
    pub clinical: FeedSource,
    pub policy: Vec<FeedSource>,
}

impl FeedCatalog {
    #[must_use]
    pub fn from_urls(urls: &FeedUrls) -> Self {
        Self {
            academic: vec![
                FeedSource::new(
                    "pubmed",
                    "PubMed",
                    &urls.pubmed,
                    Some(ACADEMIC_ENTRIES_PER_SOURCE),
                    Locale::En,
                ),
                FeedSource::new(
                    "nature",
                    "Nature",
                    &urls.nature,
                    Some(ACADEMIC_ENTRIES_PER_SOURCE),
                    Locale::En,
                ),
            ],
            clinical: FeedSource::new(
                "clinicaltrials",
                "ClinicalTrials.gov",
                &urls.clinical_trials,
                None,
                Locale::En,
            ),
            policy: vec![
                FeedSource::new(
                    "nmpa",
                    "国家药监局",
                    &urls.nmpa,
                    Some(POLICY_ENTRIES_PER_SOURCE),
                    Locale::Zh,
                ),
                FeedSource::new(
                    "fda",
                    "FDA",
                    &urls.fda,
                    Some(POLICY_ENTRIES_PER_SOURCE),
                    Locale::En,
                ),
            ],
        }
    }
}
