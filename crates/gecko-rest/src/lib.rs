//! REST API client for the CoinGecko public API v3
//!
//! This crate provides a typed, rate-limited client for CoinGecko's market
//! data endpoints: spot prices, coin records and history, market listings,
//! categories, exchanges, conversion rates, search and global totals.
//!
//! # Features
//!
//! - **Typed responses**: every payload decodes into a `gecko-types` model
//! - **Rate limiting**: one token bucket shared by every call through a client
//! - **Cancellation**: per-call contexts with explicit cancel and deadlines
//! - **Pluggable transport**: swap reqwest for any [`HttpTransport`]
//!
//! # Example
//!
//! ```no_run
//! use gecko_rest::{CoinGeckoClient, CoinsMarketsRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoClient::new()?;
//!
//!     let prices = client.simple_price(&["bitcoin", "ethereum"], &["usd", "eur"]).await?;
//!     println!("BTC/USD: {:?}", prices.get("bitcoin", "usd"));
//!
//!     let top = client.coins_markets(&CoinsMarketsRequest::new("usd").with_per_page(10)).await?;
//!     for row in top {
//!         println!("{:>3} {}", row.market_cap_rank.unwrap_or_default(), row.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rate Limiting
//!
//! The public API allows roughly 50 calls per minute. By default the client
//! spaces requests 800ms apart with no burst. Pass a shared
//! [`RateLimiter`] through [`ClientConfig::with_rate_limiter`] to pace
//! several clients together. The client never retries; see
//! [`RestError::is_retryable`].

pub mod client;
pub mod context;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod limiter;
pub mod params;
mod pipeline;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, CoinGeckoClient, ContextClient, DEFAULT_BASE_URL};
pub use context::{CallContext, CancelReason, CancelSource};
pub use error::{RestError, RestResult};
pub use limiter::{shared_rate_limiter, RateLimiter, SharedRateLimiter};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportConfig, TransportError};

// Re-export request types
pub use types::{CoinRequest, CoinTickersRequest, CoinsMarketsRequest, MarketChartRequest};

// Re-export the data model
pub use gecko_types;
