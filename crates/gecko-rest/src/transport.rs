//! HTTP transport abstraction
//!
//! This module provides a trait-based abstraction over the HTTP client,
//! enabling unit testing of the request pipeline without real network calls
//! and letting callers bring their own client (proxies, custom TLS, pools).

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Transport layer errors
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// Could not connect (DNS, refused, TLS handshake)
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request did not complete within the client timeout
    #[error("request timed out")]
    Timeout,

    /// Any other failure while sending or reading the body
    #[error("request failed: {0}")]
    Request(String),

    /// The underlying client could not be constructed
    #[error("client build failed: {0}")]
    Build(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_builder() {
            Self::Build(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// A fully-read HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A 200 response with a JSON body
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: vec![("content-type".into(), "application/json".into())],
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header block as it would appear on the wire
    pub fn header_block(&self) -> String {
        self.headers
            .iter()
            .map(|(name, value)| format!("{}: {}\r\n", name, value))
            .collect()
    }
}

/// Trait for HTTP transport abstraction
///
/// Implementations only perform the GET; rate limiting, status handling and
/// decoding happen above this layer.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET for `url` and read the whole body
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Settings for the default reqwest-backed transport
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Total per-request timeout
    pub timeout: Duration,
    /// Idle connections kept per host
    ///
    /// reqwest has no cap on active connections. Requests that overlap (a
    /// slow response outliving the limiter interval) may open a second one.
    pub pool_max_idle_per_host: usize,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            pool_max_idle_per_host: 1,
            user_agent: concat!("gecko-rest/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Real HTTP transport using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport from settings
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing client as-is
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self), level = "debug")]
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        debug!(status, len = body.len(), "Response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transport_config() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.pool_max_idle_per_host, 1);
        assert!(config.user_agent.starts_with("gecko-rest/"));
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new(&TransportConfig::default()).is_ok());
    }

    #[test]
    fn test_response_helpers() {
        let ok = HttpResponse::ok(r#"{"gecko_says":"hi"}"#);
        assert!(ok.is_success());
        assert_eq!(ok.header_block(), "content-type: application/json\r\n");

        let throttled = HttpResponse::with_status(429, "Throttled");
        assert!(!throttled.is_success());
    }
}
