//! Error types for REST API operations

use crate::context::CancelReason;
use crate::transport::TransportError;
use gecko_types::RateLimitError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// One or more required parameters were empty
    #[error("Missing required parameter(s): {}", .fields.join(", "))]
    MissingParameter {
        /// Names of the missing parameters, in declaration order
        fields: Vec<&'static str>,
    },

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The call context was cancelled or its deadline passed
    #[error("Request cancelled: {0}")]
    Cancelled(CancelReason),

    /// The request failed below the HTTP layer
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// API answered with a non-2xx status
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Failed to parse response
    #[error("Decode error at '{path}': {message}")]
    Decode {
        /// Path of the offending field (`.` for the document root)
        path: String,
        /// Underlying parser message
        message: String,
    },

    /// A derived lookup did not find its key in the response
    #[error("Not found: no '{currency}' price for '{id}'")]
    NotFound {
        /// Requested identifier
        id: String,
        /// Requested currency code
        currency: String,
    },

    /// Client could not be built from its configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RestError {
    /// Build a missing-parameter error from the names of empty fields
    pub fn missing(fields: Vec<&'static str>) -> Self {
        Self::MissingParameter { fields }
    }

    /// Build a not-found error for the pair the caller asked for
    pub fn not_found(id: impl Into<String>, currency: impl Into<String>) -> Self {
        Self::NotFound {
            id: id.into(),
            currency: currency.into(),
        }
    }

    /// Check if repeating the call could succeed
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if the API rejected the call for exceeding its rate limit
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Api { status: 429, .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status, for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<RateLimitError> for RestError {
    fn from(err: RateLimitError) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
