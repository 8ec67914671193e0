//! API endpoint implementations
//!
//! Endpoints are grouped by the API's own sections. Each group borrows the
//! client's pipeline and carries the call context its requests run under.

pub mod coins;
pub mod exchanges;
pub mod general;
pub mod simple;

pub use coins::CoinEndpoints;
pub use exchanges::ExchangeEndpoints;
pub use general::GeneralEndpoints;
pub use simple::SimpleEndpoints;
