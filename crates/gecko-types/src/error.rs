//! Error types for model construction

use thiserror::Error;

/// Errors raised while deriving a model value from a decoded payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The identifier is not a key of the price mapping
    #[error("no price entry for id '{id}'")]
    UnknownId { id: String },

    /// The identifier exists but has no price in the requested currency
    #[error("no '{currency}' price for id '{id}'")]
    UnknownCurrency { id: String, currency: String },
}

impl ModelError {
    /// Identifier the lookup was made for
    pub fn id(&self) -> &str {
        match self {
            Self::UnknownId { id } | Self::UnknownCurrency { id, .. } => id,
        }
    }
}

/// Token bucket settings that cannot produce tokens
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateLimitError {
    /// A bucket of capacity 0 never holds a token
    #[error("rate limit burst must be at least 1")]
    ZeroCapacity,

    #[error("refill rate must be finite and positive, got {0}")]
    InvalidRefillRate(f64),
}
