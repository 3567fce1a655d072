//! Market snapshot types decoded from the CoinGecko `/coins/markets` feed.

use serde::{Deserialize, Deserializer, Serialize};

/// One asset's market snapshot, under the upstream field names.
///
/// Numeric fields arrive as `null` for thinly traded assets; they default
/// to zero rather than failing the whole decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketEntry {
    /// Opaque stable identifier (e.g. "bitcoin"), unique within a response
    pub id: String,
    /// Human-readable display name (e.g. "Bitcoin"), not guaranteed unique
    pub name: String,
    /// Ticker symbol, rendered upper-cased (upstream sends lowercase)
    pub symbol: String,
    /// Icon URL
    pub image: String,
    /// Spot price in the quote currency, displayed to two decimals
    #[serde(default, deserialize_with = "null_to_zero")]
    pub current_price: f64,
    /// Market capitalization; sort key only, never displayed
    #[serde(default, deserialize_with = "null_to_zero")]
    pub market_cap: f64,
    /// 24h trading volume, displayed with thousands grouping
    #[serde(default, deserialize_with = "null_to_zero")]
    pub total_volume: f64,
    /// 24h price change; sort key only, never displayed
    #[serde(default, deserialize_with = "null_to_zero")]
    pub price_change_percentage_24h: f64,
}

fn null_to_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
