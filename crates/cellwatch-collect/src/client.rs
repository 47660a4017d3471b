//! HTTP client for fetching syndication feeds.

use std::time::Duration;

use cellwatch_core::CONNECT_TIMEOUT_SECS;
use reqwest::Client;

use crate::error::CollectError;
use crate::parse::{parse_feed, FeedEntry};

/// Connect timeout for a client whose whole request may take `timeout_secs`.
fn connect_timeout(timeout_secs: u64) -> Duration {
    Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs))
}

/// Thin wrapper over `reqwest` that fetches a feed and parses its entries.
///
/// One client is built per run and shared by every collector.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a `FeedClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CollectError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(connect_timeout(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and parses the body as RSS or Atom.
    ///
    /// # Errors
    ///
    /// - [`CollectError::Http`] on network failure or a non-2xx status.
    /// - [`CollectError::Xml`] if the body is not a well-formed feed.
    pub async fn fetch_entries(&self, url: &str) -> Result<Vec<FeedEntry>, CollectError> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        parse_feed(&body)
    }
}
