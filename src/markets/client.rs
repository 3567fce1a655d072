//! HTTP client for the CoinGecko markets feed.
//!
//! One endpoint, one fixed query (see [`crate::config`]). Errors are
//! reduced to [`FetchError`] at this boundary; callers keep their current
//! state when a fetch fails.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::types::MarketEntry;
use crate::config;

/// Failure surface of a markets fetch: network, status, or decode.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("markets API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode markets response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the markets endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MarketsClient {
    client: Client,
    base_url: String,
}

impl MarketsClient {
    /// Create a client against the production CoinGecko host
    pub fn new() -> Self {
        Self::with_base_url(config::COINGECKO_BASE_URL)
    }

    /// Create a client against a custom host (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch one page of market snapshots, preserving upstream order
    /// (descending market cap, per the fixed query).
    pub async fn fetch_markets(&self) -> Result<Vec<MarketEntry>, FetchError> {
        let url = format!("{}{}", self.base_url, config::MARKETS_PATH);

        info!("Fetching markets from URL: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&config::markets_query())
            .send()
            .await?;

        let status = response.status();
        debug!("Markets API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Markets API error response ({}): {}", status, body);
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await?;
        let entries: Vec<MarketEntry> = serde_json::from_str(&body)?;

        info!("Received {} market entries", entries.len());
        Ok(entries)
    }
}

impl Default for MarketsClient {
    fn default() -> Self {
        Self::new()
    }
}
