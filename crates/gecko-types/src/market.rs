//! Market figures: per-currency snapshots, ranked listings and chart series

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Currency code -> amount
pub type CurrencyMap = HashMap<String, f64>;

/// Currency code -> timestamp
pub type CurrencyDateMap = HashMap<String, DateTime<Utc>>;

/// `market_data` block of `/coins/{id}`
///
/// Every figure is keyed by currency unless the field name says otherwise;
/// the un-suffixed `price_change_percentage_*` fields are quoted in USD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub current_price: CurrencyMap,
    #[serde(default)]
    pub market_cap: CurrencyMap,
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub fully_diluted_valuation: CurrencyMap,
    #[serde(default)]
    pub total_volume: CurrencyMap,
    #[serde(default)]
    pub high_24h: CurrencyMap,
    #[serde(default)]
    pub low_24h: CurrencyMap,

    // All-time high / low
    #[serde(default)]
    pub ath: CurrencyMap,
    #[serde(default)]
    pub ath_change_percentage: CurrencyMap,
    #[serde(default)]
    pub ath_date: CurrencyDateMap,
    #[serde(default)]
    pub atl: CurrencyMap,
    #[serde(default)]
    pub atl_change_percentage: CurrencyMap,
    #[serde(default)]
    pub atl_date: CurrencyDateMap,

    // Supply
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub circulating_supply: Option<f64>,

    pub roi: Option<Roi>,

    // USD-quoted changes
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub price_change_percentage_14d: Option<f64>,
    pub price_change_percentage_30d: Option<f64>,
    pub price_change_percentage_60d: Option<f64>,
    pub price_change_percentage_200d: Option<f64>,
    pub price_change_percentage_1y: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,

    // Per-currency changes
    #[serde(default)]
    pub price_change_24h_in_currency: CurrencyMap,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: CurrencyMap,
    #[serde(default)]
    pub price_change_percentage_24h_in_currency: CurrencyMap,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: CurrencyMap,
    #[serde(default)]
    pub price_change_percentage_14d_in_currency: CurrencyMap,
    #[serde(default)]
    pub price_change_percentage_30d_in_currency: CurrencyMap,
    #[serde(default)]
    pub price_change_percentage_60d_in_currency: CurrencyMap,
    #[serde(default)]
    pub price_change_percentage_200d_in_currency: CurrencyMap,
    #[serde(default)]
    pub price_change_percentage_1y_in_currency: CurrencyMap,
    #[serde(default)]
    pub market_cap_change_24h_in_currency: CurrencyMap,
    #[serde(default)]
    pub market_cap_change_percentage_24h_in_currency: CurrencyMap,

    /// Only present when `sparkline=true` was requested
    pub sparkline_7d: Option<Sparkline>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl MarketSnapshot {
    /// Current price in `currency`
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        self.current_price.get(currency).copied()
    }

    /// Market cap in `currency`
    pub fn market_cap_in(&self, currency: &str) -> Option<f64> {
        self.market_cap.get(currency).copied()
    }

    /// All-time high in `currency` together with the date it was set
    pub fn ath_in(&self, currency: &str) -> Option<(f64, Option<DateTime<Utc>>)> {
        let price = self.ath.get(currency).copied()?;
        Some((price, self.ath_date.get(currency).copied()))
    }

    /// All-time low in `currency` together with the date it was set
    pub fn atl_in(&self, currency: &str) -> Option<(f64, Option<DateTime<Utc>>)> {
        let price = self.atl.get(currency).copied()?;
        Some((price, self.atl_date.get(currency).copied()))
    }
}

/// Return on investment since listing (ICO coins only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub times: f64,
    pub currency: String,
    pub percentage: f64,
}

/// Seven days of hourly prices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}

/// Ranked, single-currency row from `/coins/markets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketListing {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub ath_date: Option<DateTime<Utc>>,
    pub atl: Option<f64>,
    pub atl_change_percentage: Option<f64>,
    pub atl_date: Option<DateTime<Utc>>,
    pub roi: Option<Roi>,
    pub last_updated: Option<DateTime<Utc>>,
    /// Only present when `sparkline=true` was requested
    pub sparkline_in_7d: Option<Sparkline>,

    // Only present for the horizons listed in `price_change_percentage`
    pub price_change_percentage_1h_in_currency: Option<f64>,
    pub price_change_percentage_24h_in_currency: Option<f64>,
    pub price_change_percentage_7d_in_currency: Option<f64>,
    pub price_change_percentage_14d_in_currency: Option<f64>,
    pub price_change_percentage_30d_in_currency: Option<f64>,
    pub price_change_percentage_200d_in_currency: Option<f64>,
    pub price_change_percentage_1y_in_currency: Option<f64>,
}

/// Price, market cap and volume of a coin on a past date (`/coins/{id}/history`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalMarketData {
    #[serde(default)]
    pub current_price: CurrencyMap,
    #[serde(default)]
    pub market_cap: CurrencyMap,
    #[serde(default)]
    pub total_volume: CurrencyMap,
}

/// One `[timestamp_ms, value]` sample of a chart series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ChartPoint {
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: i64,
    pub value: f64,
}

impl From<(f64, f64)> for ChartPoint {
    fn from((timestamp_ms, value): (f64, f64)) -> Self {
        Self {
            timestamp_ms: timestamp_ms as i64,
            value,
        }
    }
}

impl From<ChartPoint> for (f64, f64) {
    fn from(point: ChartPoint) -> Self {
        (point.timestamp_ms as f64, point.value)
    }
}

impl ChartPoint {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp_ms).single()
    }
}

/// `/coins/{id}/market_chart` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<ChartPoint>,
    #[serde(default)]
    pub market_caps: Vec<ChartPoint>,
    #[serde(default)]
    pub total_volumes: Vec<ChartPoint>,
}

impl MarketChart {
    /// Most recent price sample
    pub fn latest_price(&self) -> Option<ChartPoint> {
        self.prices.iter().max_by_key(|p| p.timestamp_ms).copied()
    }
}
