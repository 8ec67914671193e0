//! Exchange listings of a coin

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One market a coin trades on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerQuote {
    /// Base asset symbol or contract address
    pub base: String,
    /// Quote asset symbol or contract address
    pub target: String,
    pub market: TickerMarket,
    /// Last traded price, in `target`
    pub last: Option<f64>,
    /// 24h volume, in `base`
    pub volume: Option<f64>,
    pub cost_to_move_up_usd: Option<f64>,
    pub cost_to_move_down_usd: Option<f64>,
    #[serde(default)]
    pub converted_last: ConvertedValues,
    #[serde(default)]
    pub converted_volume: ConvertedValues,
    /// "green", "yellow" or "red"
    pub trust_score: Option<String>,
    pub bid_ask_spread_percentage: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
    pub last_traded_at: Option<DateTime<Utc>>,
    pub last_fetch_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_anomaly: bool,
    #[serde(default)]
    pub is_stale: bool,
    pub trade_url: Option<String>,
    pub token_info_url: Option<String>,
    pub coin_id: Option<String>,
    pub target_coin_id: Option<String>,
}

impl TickerQuote {
    /// `BASE/TARGET`
    pub fn pair(&self) -> String {
        format!("{}/{}", self.base, self.target)
    }

    /// Whether the quote can be relied on: fresh and not flagged as an outlier
    pub fn is_usable(&self) -> bool {
        !self.is_stale && !self.is_anomaly
    }
}

/// Source market of a ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerMarket {
    pub name: String,
    pub identifier: String,
    #[serde(default)]
    pub has_trading_incentive: bool,
    pub logo: Option<String>,
}

/// A value converted into the fixed reference currencies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertedValues {
    pub btc: Option<f64>,
    pub eth: Option<f64>,
    pub usd: Option<f64>,
}
