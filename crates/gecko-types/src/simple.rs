//! `/ping` and `/simple/*` payloads

use crate::decimal::FlexDecimal;
use crate::error::ModelError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// `/ping` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ping {
    pub gecko_says: String,
}

/// `/simple/supported_vs_currencies` response
pub type SupportedVsCurrencies = Vec<String>;

/// `/simple/price` response: id -> (currency -> price)
///
/// The API silently omits ids and currencies it does not recognize, so a
/// lookup on this mapping can miss even when the request looked valid.
/// `null` prices are dropped during decoding and behave like omitted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SimplePrices(HashMap<String, HashMap<String, Decimal>>);

impl SimplePrices {
    /// Wrap an already-built mapping
    pub fn new(prices: HashMap<String, HashMap<String, Decimal>>) -> Self {
        Self(prices)
    }

    /// Price of `id` in `currency`, if both keys are present
    pub fn get(&self, id: &str, currency: &str) -> Option<Decimal> {
        self.0.get(id)?.get(currency).copied()
    }

    /// Per-currency prices of one id
    pub fn currencies(&self, id: &str) -> Option<&HashMap<String, Decimal>> {
        self.0.get(id)
    }

    /// Ids present in the response
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Select one id/currency pair as a [`PriceQuote`]
    pub fn quote(&self, id: &str, currency: &str) -> Result<PriceQuote, ModelError> {
        PriceQuote::from_prices(self, id, currency)
    }

    pub fn into_inner(self) -> HashMap<String, HashMap<String, Decimal>> {
        self.0
    }
}

impl<'de> Deserialize<'de> for SimplePrices {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, HashMap<String, Option<FlexDecimal>>> =
            HashMap::deserialize(deserializer)?;

        let prices = raw
            .into_iter()
            .map(|(id, by_currency)| {
                let by_currency = by_currency
                    .into_iter()
                    .filter_map(|(currency, price)| price.map(|p| (currency, p.0)))
                    .collect();
                (id, by_currency)
            })
            .collect();

        Ok(Self(prices))
    }
}

/// A single id/currency price picked out of [`SimplePrices`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Coin identifier (e.g. "bitcoin")
    pub id: String,
    /// Currency code (e.g. "usd")
    pub currency: String,
    /// Price of one unit of `id` in `currency`
    pub price: Decimal,
}

impl PriceQuote {
    /// Build a quote from a price mapping
    ///
    /// Fails if either the id or the currency is not a key of the mapping.
    pub fn from_prices(prices: &SimplePrices, id: &str, currency: &str) -> Result<Self, ModelError> {
        let by_currency = prices.currencies(id).ok_or_else(|| ModelError::UnknownId {
            id: id.to_string(),
        })?;

        let price = by_currency
            .get(currency)
            .copied()
            .ok_or_else(|| ModelError::UnknownCurrency {
                id: id.to_string(),
                currency: currency.to_string(),
            })?;

        Ok(Self {
            id: id.to_string(),
            currency: currency.to_string(),
            price,
        })
    }
}
