//! `/global` payload (delivered inside a `{"data": ...}` envelope)

use crate::market::CurrencyMap;
use serde::{Deserialize, Serialize};

/// Aggregate statistics across all tracked coins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub active_cryptocurrencies: u64,
    #[serde(default)]
    pub upcoming_icos: u64,
    #[serde(default)]
    pub ongoing_icos: u64,
    #[serde(default)]
    pub ended_icos: u64,
    pub markets: u64,
    #[serde(default)]
    pub total_market_cap: CurrencyMap,
    #[serde(default)]
    pub total_volume: CurrencyMap,
    /// Coin symbol -> share of total market cap, in percent
    #[serde(default)]
    pub market_cap_percentage: CurrencyMap,
    pub market_cap_change_percentage_24h_usd: Option<f64>,
    /// Unix seconds
    pub updated_at: Option<i64>,
}

impl GlobalStats {
    /// Market cap dominance of a coin symbol (e.g. "btc"), in percent
    pub fn dominance(&self, symbol: &str) -> Option<f64> {
        self.market_cap_percentage.get(symbol).copied()
    }
}
