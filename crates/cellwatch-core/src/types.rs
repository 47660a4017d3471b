use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Upper bound on items kept per category after sorting.
pub const MAX_ITEMS_PER_CATEGORY: usize = 10;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Academic,
    Clinical,
    Policy,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Academic => write!(f, "academic"),
            Category::Clinical => write!(f, "clinical"),
            Category::Policy => write!(f, "policy"),
        }
    }
}

/// The per-category label carried by an item.
///
/// Flattened into the item when serialized, so an academic item gets a
/// `source` key, a clinical item a `trialId` key and a policy item an
/// `agency` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ItemOrigin {
    #[serde(rename = "source")]
    Source(String),
    /// `NCT` followed by digits, or empty when the link carries no identifier.
    #[serde(rename = "trialId")]
    TrialId(String),
    #[serde(rename = "agency")]
    Agency(String),
}

/// One normalized feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub date: NaiveDate,
    pub title: String,
    #[serde(flatten)]
    pub origin: ItemOrigin,
    pub link: String,
}

/// Items for one category, newest first, at most [`MAX_ITEMS_PER_CATEGORY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryResult(Vec<FeedItem>);

impl CategoryResult {
    /// Sort `items` by date descending and keep the first ten.
    ///
    /// The sort is stable, so items sharing a date keep their merge order.
    #[must_use]
    pub fn from_items(mut items: Vec<FeedItem>) -> Self {
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items.truncate(MAX_ITEMS_PER_CATEGORY);
        Self(items)
    }

    #[must_use]
    pub fn items(&self) -> &[FeedItem] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub academic: usize,
    pub clinical: usize,
    pub policy: usize,
}

impl CategoryCounts {
    #[must_use]
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Academic => self.academic,
            Category::Clinical => self.clinical,
            Category::Policy => self.policy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestItems {
    pub academic: CategoryResult,
    pub clinical: CategoryResult,
    pub policy: CategoryResult,
}

impl LatestItems {
    #[must_use]
    pub fn get(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Academic => &self.academic,
            Category::Clinical => &self.clinical,
            Category::Policy => &self.policy,
        }
    }
}

/// The document written at the end of each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    #[serde(serialize_with = "serialize_timestamp")]
    pub last_updated: NaiveDateTime,
    #[serde(serialize_with = "serialize_timestamp")]
    pub next_update: NaiveDateTime,
    pub counts: CategoryCounts,
    pub latest: LatestItems,
}

impl RunReport {
    /// Assemble a report from the three collector results.
    ///
    /// Counts are taken from the truncated sequences, never from the number
    /// of entries fetched upstream.
    #[must_use]
    pub fn new(
        generated_at: NaiveDateTime,
        academic: CategoryResult,
        clinical: CategoryResult,
        policy: CategoryResult,
    ) -> Self {
        let counts = CategoryCounts {
            academic: academic.len(),
            clinical: clinical.len(),
            policy: policy.len(),
        };
        Self {
            last_updated: generated_at,
            next_update: next_update_after(generated_at),
            counts,
            latest: LatestItems {
                academic,
                clinical,
                policy,
            },
        }
    }
}

/// 08:00 on the calendar day after `now`.
#[must_use]
pub fn next_update_after(now: NaiveDateTime) -> NaiveDateTime {
    let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN);
    let tomorrow = now
        .date()
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDate::MAX);
    tomorrow.and_time(eight)
}

fn serialize_timestamp<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn academic_item(title: &str, day: u32) -> FeedItem {
        FeedItem {
            date: date(2025, 10, day),
            title: title.to_string(),
            origin: ItemOrigin::Source("PubMed".to_string()),
            link: format!("https://pubmed.ncbi.nlm.nih.gov/{day}/"),
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).expect("valid time")
    }

    #[test]
    fn category_result_sorts_newest_first() {
        let result = CategoryResult::from_items(vec![
            academic_item("a", 3),
            academic_item("b", 9),
            academic_item("c", 5),
        ]);
        let days: Vec<u32> = result
            .items()
            .iter()
            .map(|i| chrono::Datelike::day(&i.date))
            .collect();
        assert_eq!(days, vec![9, 5, 3]);
    }

    #[test]
    fn category_result_truncates_to_ten() {
        let items = (1..=14).map(|d| academic_item("x", d)).collect();
        let result = CategoryResult::from_items(items);
        assert_eq!(result.len(), MAX_ITEMS_PER_CATEGORY);
        assert_eq!(result.items()[0].date, date(2025, 10, 14));
        assert_eq!(result.items()[9].date, date(2025, 10, 5));
    }

    #[test]
    fn category_result_keeps_merge_order_for_equal_dates() {
        let result = CategoryResult::from_items(vec![
            academic_item("first", 4),
            academic_item("second", 4),
            academic_item("newer", 6),
        ]);
        let titles: Vec<&str> = result.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["newer", "first", "second"]);
    }

    #[test]
    fn next_update_is_eight_am_next_day() {
        assert_eq!(
            next_update_after(at(2025, 10, 6, 21, 15, 0)),
            at(2025, 10, 7, 8, 0, 0)
        );
        // Early-morning runs still point at tomorrow, not later today.
        assert_eq!(
            next_update_after(at(2025, 10, 6, 2, 0, 0)),
            at(2025, 10, 7, 8, 0, 0)
        );
        assert_eq!(
            next_update_after(at(2025, 12, 31, 23, 59, 59)),
            at(2026, 1, 1, 8, 0, 0)
        );
    }

    #[test]
    fn run_report_counts_match_truncated_lengths() {
        let academic = CategoryResult::from_items((1..=13).map(|d| academic_item("a", d)).collect());
        let report = RunReport::new(
            at(2025, 10, 6, 9, 30, 0),
            academic,
            CategoryResult::default(),
            CategoryResult::from_items(vec![academic_item("p", 2)]),
        );
        for category in [Category::Academic, Category::Clinical, Category::Policy] {
            assert_eq!(
                report.counts.get(category),
                report.latest.get(category).len(),
                "count mismatch for {category}"
            );
        }
        assert_eq!(report.counts.academic, 10);
        assert_eq!(report.counts.clinical, 0);
        assert_eq!(report.counts.policy, 1);
    }

    #[test]
    fn run_report_serializes_to_published_shape() {
        let academic = CategoryResult::from_items(vec![academic_item("Organoid study", 6)]);
        let clinical = CategoryResult::from_items(vec![FeedItem {
            date: date(2025, 10, 5),
            title: "CAR-T in lupus".to_string(),
            origin: ItemOrigin::TrialId("NCT01234567".to_string()),
            link: "https://clinicaltrials.gov/study/NCT01234567".to_string(),
        }]);
        let policy = CategoryResult::from_items(vec![FeedItem {
            date: date(2025, 10, 4),
            title: "关于细胞治疗产品的通告".to_string(),
            origin: ItemOrigin::Agency("国家药监局".to_string()),
            link: "https://www.nmpa.gov.cn/xxgk/1.html".to_string(),
        }]);
        let report = RunReport::new(at(2025, 10, 6, 9, 5, 7), academic, clinical, policy);

        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["lastUpdated"], "2025-10-06 09:05:07");
        assert_eq!(value["nextUpdate"], "2025-10-07 08:00:00");
        assert_eq!(
            value["counts"],
            serde_json::json!({"academic": 1, "clinical": 1, "policy": 1})
        );
        assert_eq!(
            value["latest"]["academic"][0],
            serde_json::json!({
                "date": "2025-10-06",
                "title": "Organoid study",
                "source": "PubMed",
                "link": "https://pubmed.ncbi.nlm.nih.gov/6/"
            })
        );
        assert_eq!(value["latest"]["clinical"][0]["trialId"], "NCT01234567");
        assert_eq!(value["latest"]["policy"][0]["agency"], "国家药监局");
        assert!(value["latest"]["policy"][0].get("source").is_none());
    }

    #[test]
    fn item_keys_serialize_in_declared_order() {
        let item = academic_item("t", 1);
        let json = serde_json::to_string(&item).expect("serialize");
        let date_at = json.find("\"date\"").expect("date key");
        let title_at = json.find("\"title\"").expect("title key");
        let source_at = json.find("\"source\"").expect("source key");
        let link_at = json.find("\"link\"").expect("link key");
        assert!(date_at < title_at && title_at < source_at && source_at < link_at);
    }
}
