//! Lossless decimal decoding for price fields
//!
//! CoinGecko sends prices as bare JSON numbers. Going through `f64` and then
//! `Decimal::from_f64` would pick up binary noise, so numbers are parsed from
//! their textual form instead.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn from_repr<E: Error>(value: StringOrNumber) -> Result<Decimal, E> {
    match value {
        StringOrNumber::String(s) => Decimal::from_str(&s).map_err(E::custom),
        StringOrNumber::Number(n) => {
            let s = n.to_string();
            // Scientific notation (e.g. 5e-9) goes through f64
            if s.contains('e') || s.contains('E') {
                let f = n.as_f64().ok_or_else(|| E::custom("invalid number"))?;
                Decimal::from_f64(f).ok_or_else(|| E::custom("cannot convert to decimal"))
            } else {
                Decimal::from_str(&s).map_err(E::custom)
            }
        }
    }
}

/// Deserialize a required decimal from a JSON number or string
pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    from_repr(StringOrNumber::deserialize(deserializer)?)
}

/// Deserialize an optional decimal; `null` and absent both map to `None`
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(value) => from_repr(value).map(Some),
        None => Ok(None),
    }
}

/// A decimal that decodes from either a JSON number or a numeric string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexDecimal(pub Decimal);

impl<'de> Deserialize<'de> for FlexDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(FlexDecimal)
    }
}
