//! Feed collection for cellwatch.
//!
//! Fetches the academic, clinical-trial and regulatory feeds, normalizes
//! their entries into [`cellwatch_core::FeedItem`]s, and writes the run
//! report. Sources are read one at a time; a failing source is logged and
//! skipped rather than failing the run.

pub mod client;
pub mod collectors;
pub mod date;
pub mod error;
pub mod output;
pub mod parse;
pub mod pipeline;
pub mod sources;

pub use client::FeedClient;
pub use error::CollectError;
pub use output::{render_report, write_report};
pub use parse::{parse_feed, FeedEntry};
pub use pipeline::collect_report;
pub use sources::{FeedCatalog, FeedSource};
