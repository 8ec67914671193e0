//! `/exchanges*` and `/exchange_rates` payloads

use crate::enums::RateType;
use crate::ticker::TickerQuote;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `/exchanges` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: String,
    pub name: String,
    pub year_established: Option<i64>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub has_trading_incentive: Option<bool>,
    pub trust_score: Option<i64>,
    pub trust_score_rank: Option<i64>,
    pub trade_volume_24h_btc: Option<f64>,
    pub trade_volume_24h_btc_normalized: Option<f64>,
}

/// `/exchanges/{id}` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeDetail {
    pub name: String,
    pub year_established: Option<i64>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub facebook_url: Option<String>,
    pub reddit_url: Option<String>,
    pub telegram_url: Option<String>,
    pub twitter_handle: Option<String>,
    pub centralized: Option<bool>,
    pub public_notice: Option<String>,
    pub alert_notice: Option<String>,
    pub has_trading_incentive: Option<bool>,
    pub trust_score: Option<i64>,
    pub trust_score_rank: Option<i64>,
    pub trade_volume_24h_btc: Option<f64>,
    pub trade_volume_24h_btc_normalized: Option<f64>,
    /// Top 100 tickers on this exchange
    #[serde(default)]
    pub tickers: Vec<TickerQuote>,
}

/// One entry of the BTC-denominated rate table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub name: String,
    pub unit: String,
    /// Units of this currency per 1 BTC
    pub value: f64,
    #[serde(rename = "type")]
    pub rate_type: RateType,
}

/// Currency code -> rate against BTC
pub type ExchangeRates = HashMap<String, ExchangeRate>;

/// Convert `amount` of currency `from` into currency `to` through the BTC table
pub fn convert_amount(rates: &ExchangeRates, amount: f64, from: &str, to: &str) -> Option<f64> {
    let from = rates.get(from)?;
    let to = rates.get(to)?;
    if from.value == 0.0 {
        return None;
    }
    Some(amount / from.value * to.value)
}
