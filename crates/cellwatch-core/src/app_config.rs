use std::path::PathBuf;

pub const DEFAULT_PUBMED_FEED_URL: &str = "https://pubmed.ncbi.nlm.nih.gov/rss/search/1lYixSZLGOzU9hM/?limit=10&utm_campaign=pubmed-2&fc=20210111085146";
pub const DEFAULT_NATURE_FEED_URL: &str = "https://www.nature.com/search.rss?q=stem+cell+OR+immune+cell+therapy&date_range=last_7_days&order=relevance";
pub const DEFAULT_CLINICALTRIALS_FEED_URL: &str = "https://clinicaltrials.gov/ct2/results/rss.xml?rcv_d=30&lup_d=30&term=stem+cell+OR+immune+cell+therapy&type=Intr&cntry=CN&cntry=US&count=10";
pub const DEFAULT_NMPA_FEED_URL: &str = "https://www.nmpa.gov.cn/directory/web/nmpa/rss/ypjgdt.xml";
pub const DEFAULT_FDA_FEED_URL: &str =
    "https://www.fda.gov/about-fda/contact-fda/stay-informed/rss-feeds/drugs/rss.xml";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Upper bound on the TCP/TLS connect phase; never longer than the request timeout.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Endpoint for each of the five upstream feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrls {
    pub pubmed: String,
    pub nature: String,
    pub clinical_trials: String,
    pub nmpa: String,
    pub fda: String,
}

impl Default for FeedUrls {
    fn default() -> Self {
        Self {
            pubmed: DEFAULT_PUBMED_FEED_URL.to_string(),
            nature: DEFAULT_NATURE_FEED_URL.to_string(),
            clinical_trials: DEFAULT_CLINICALTRIALS_FEED_URL.to_string(),
            nmpa: DEFAULT_NMPA_FEED_URL.to_string(),
            fda: DEFAULT_FDA_FEED_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub keywords_path: Option<PathBuf>,
    pub feeds: FeedUrls,
}
