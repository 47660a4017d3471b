//! Domain types and configuration for the cellwatch feed digest.
//!
//! Holds the normalized item model, the per-run report written to disk, the
//! policy keyword table and the environment-driven application config. No
//! network or filesystem-output code lives here.

pub mod app_config;
pub mod config;
pub mod error;
pub mod keywords;
pub mod types;

pub use app_config::{AppConfig, FeedUrls, CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use keywords::{load_keywords, KeywordRule, KeywordTable, Locale};
pub use types::{
    next_update_after, Category, CategoryCounts, CategoryResult, FeedItem, ItemOrigin,
    LatestItems, RunReport, MAX_ITEMS_PER_CATEGORY,
};
