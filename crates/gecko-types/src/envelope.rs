//! Wrapper objects some endpoints nest their payload in

use serde::Deserialize;

/// `{"data": ...}` envelope used by `/global`
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `{"rates": ...}` envelope used by `/exchange_rates`
#[derive(Debug, Clone, Deserialize)]
pub struct RatesEnvelope<T> {
    pub rates: T,
}

/// A payload that arrives wrapped and is handed to callers unwrapped
pub trait Envelope {
    type Inner;

    fn into_inner(self) -> Self::Inner;
}

impl<T> Envelope for DataEnvelope<T> {
    type Inner = T;

    fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Envelope for RatesEnvelope<T> {
    type Inner = T;

    fn into_inner(self) -> T {
        self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_data_envelope_unwraps() {
        let env: DataEnvelope<HashMap<String, u32>> =
            serde_json::from_str(r#"{"data": {"markets": 12}}"#).unwrap();
        assert_eq!(env.into_inner()["markets"], 12);
    }

    #[test]
    fn test_missing_key_is_error() {
        let env = serde_json::from_str::<RatesEnvelope<HashMap<String, u32>>>(r#"{"data": {}}"#);
        assert!(env.is_err());
    }
}
