//! Compiled-in endpoint configuration for the CoinGecko markets feed.
//!
//! The query shape is fixed: USD pricing, descending market cap, a single
//! page of ten entries, no sparkline series. Nothing here is configurable
//! at call time; tests override the base URL on the client constructor
//! instead.

/// Production CoinGecko API host
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";

/// Markets endpoint path (returns a JSON array of market snapshots)
pub const MARKETS_PATH: &str = "/api/v3/coins/markets";

/// Quote currency for all prices and volumes
pub const VS_CURRENCY: &str = "usd";

/// Upstream ordering of the response
pub const ORDER: &str = "market_cap_desc";

/// Page size of the single fetched page
pub const PER_PAGE: u32 = 10;

/// Page number (pagination beyond page 1 is out of scope)
pub const PAGE: u32 = 1;

/// Sparkline series are never requested
pub const SPARKLINE: bool = false;

/// Fixed query parameters, ready for `reqwest::RequestBuilder::query`
pub fn markets_query() -> Vec<(&'static str, String)> {
    vec![
        ("vs_currency", VS_CURRENCY.to_string()),
        ("order", ORDER.to_string()),
        ("per_page", PER_PAGE.to_string()),
        ("page", PAGE.to_string()),
        ("sparkline", SPARKLINE.to_string()),
    ]
}
