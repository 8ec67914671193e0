//! Ordering, horizon and rate-type enums used by requests and responses

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort order for `/coins/markets`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarketOrder {
    /// Largest market cap first
    #[default]
    MarketCapDesc,
    /// Smallest market cap first
    MarketCapAsc,
    /// Highest 24h volume first
    VolumeDesc,
    /// Lowest 24h volume first
    VolumeAsc,
    /// Identifier, Z to A
    IdDesc,
    /// Identifier, A to Z
    IdAsc,
}

impl MarketOrder {
    /// Returns the order as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarketCapDesc => "market_cap_desc",
            Self::MarketCapAsc => "market_cap_asc",
            Self::VolumeDesc => "volume_desc",
            Self::VolumeAsc => "volume_asc",
            Self::IdDesc => "id_desc",
            Self::IdAsc => "id_asc",
        }
    }
}

impl fmt::Display for MarketOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for `/coins/{id}/tickers`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickerOrder {
    /// Most trusted markets first
    TrustScoreDesc,
    /// Least trusted markets first
    TrustScoreAsc,
    /// Highest volume first
    VolumeDesc,
}

impl TickerOrder {
    /// Returns the order as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrustScoreDesc => "trust_score_desc",
            Self::TrustScoreAsc => "trust_score_asc",
            Self::VolumeDesc => "volume_desc",
        }
    }
}

impl fmt::Display for TickerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizon for the `price_change_percentage` listing columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceChangeWindow {
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "7d")]
    D7,
    #[serde(rename = "14d")]
    D14,
    #[serde(rename = "30d")]
    D30,
    #[serde(rename = "200d")]
    D200,
    #[serde(rename = "1y")]
    Y1,
}

impl PriceChangeWindow {
    /// All supported horizons, shortest first
    pub const ALL: [PriceChangeWindow; 7] = [
        Self::H1,
        Self::H24,
        Self::D7,
        Self::D14,
        Self::D30,
        Self::D200,
        Self::Y1,
    ];

    /// Returns the horizon as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "1h",
            Self::H24 => "24h",
            Self::D7 => "7d",
            Self::D14 => "14d",
            Self::D30 => "30d",
            Self::D200 => "200d",
            Self::Y1 => "1y",
        }
    }
}

impl fmt::Display for PriceChangeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of unit in the `/exchange_rates` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum RateType {
    Crypto,
    Fiat,
    Commodity,
    /// Any kind this client does not know yet
    #[serde(other)]
    Other,
}
