//! Response models for the CoinGecko REST API v3
//!
//! This crate provides the typed shapes decoded from every payload the
//! `gecko-rest` client can return, along with the small primitives shared
//! across the workspace. It has minimal dependencies and can be used
//! independently, e.g. to decode captured responses.
//!
//! # Key Types
//!
//! - [`SimplePrices`], [`PriceQuote`] - `/simple/price` mapping and single-pair view
//! - [`CoinSummary`], [`CoinDetail`], [`MarketSnapshot`] - coin records
//! - [`MarketListing`] - ranked rows from `/coins/markets`
//! - [`TickerQuote`] - one exchange listing for a coin
//! - [`Category`], [`Exchange`], [`ExchangeRate`], [`GlobalStats`], [`SearchResult`]
//! - [`MarketOrder`], [`PriceChangeWindow`], [`TickerOrder`] - request enums
//! - [`TokenBucket`], [`TokenBucketConfig`] - client-side rate limiting

pub mod category;
pub mod coin;
pub mod decimal;
pub mod enums;
pub mod envelope;
pub mod error;
pub mod exchange;
pub mod global;
pub mod market;
pub mod rate_limit;
pub mod search;
pub mod simple;
pub mod ticker;

// Re-export commonly used types
pub use category::*;
pub use coin::*;
pub use enums::*;
pub use envelope::*;
pub use error::*;
pub use exchange::*;
pub use global::*;
pub use market::*;
pub use rate_limit::*;
pub use search::*;
pub use simple::*;
pub use ticker::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
