//! Request types for endpoints with more than a couple of arguments
//!
//! Each request validates its required fields and renders its own query
//! parameters; the endpoint methods only add the path.

use gecko_types::{MarketOrder, PriceChangeWindow, TickerOrder};

use crate::error::RestResult;
use crate::params::{require, QueryParams};

// ============================================================================
// /coins/markets
// ============================================================================

/// Request for the ranked market listing
#[derive(Debug, Clone, PartialEq)]
pub struct CoinsMarketsRequest {
    /// Quote currency (required)
    pub vs_currency: String,
    /// Sort order, `market_cap_desc` when unset
    pub order: Option<MarketOrder>,
    /// Restrict the listing to these ids
    pub ids: Vec<String>,
    /// Rows per page; out-of-range values fall back to 100
    pub per_page: i64,
    pub page: i64,
    /// Include 7 day sparkline prices
    pub sparkline: bool,
    /// Extra `price_change_percentage_*_in_currency` columns
    pub price_change_percentage: Vec<PriceChangeWindow>,
}

impl CoinsMarketsRequest {
    /// First page of 100 rows quoted in `vs_currency`
    pub fn new(vs_currency: impl Into<String>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            order: None,
            ids: Vec::new(),
            per_page: 100,
            page: 1,
            sparkline: false,
            price_change_percentage: Vec::new(),
        }
    }

    pub fn with_order(mut self, order: MarketOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = sparkline;
        self
    }

    /// Add a price-change horizon column
    pub fn with_price_change(mut self, window: PriceChangeWindow) -> Self {
        self.price_change_percentage.push(window);
        self
    }

    pub fn validate(&self) -> RestResult<()> {
        require(&[("vs_currency", self.vs_currency.as_str())])
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("vs_currency", self.vs_currency.as_str())
            .push("order", self.order.unwrap_or_default().as_str())
            .push_list("ids", &self.ids)
            .push_per_page(self.per_page)
            .push_page(self.page)
            .push_bool("sparkline", self.sparkline)
            .push_list(
                "price_change_percentage",
                self.price_change_percentage.iter().map(PriceChangeWindow::as_str),
            );
        params
    }
}

// ============================================================================
// /coins/{id}
// ============================================================================

/// Request for a single coin's full record
///
/// Each flag switches a section of the response on or off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinRequest {
    pub id: String,
    pub localization: bool,
    pub tickers: bool,
    pub market_data: bool,
    pub community_data: bool,
    pub developer_data: bool,
    pub sparkline: bool,
}

impl CoinRequest {
    /// Every section the API returns by default (all but the sparkline)
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            localization: true,
            tickers: true,
            market_data: true,
            community_data: true,
            developer_data: true,
            sparkline: false,
        }
    }

    /// Identity, links and description only
    pub fn minimal(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            localization: false,
            tickers: false,
            market_data: false,
            community_data: false,
            developer_data: false,
            sparkline: false,
        }
    }

    pub fn with_localization(mut self, enabled: bool) -> Self {
        self.localization = enabled;
        self
    }

    pub fn with_tickers(mut self, enabled: bool) -> Self {
        self.tickers = enabled;
        self
    }

    pub fn with_market_data(mut self, enabled: bool) -> Self {
        self.market_data = enabled;
        self
    }

    pub fn with_community_data(mut self, enabled: bool) -> Self {
        self.community_data = enabled;
        self
    }

    pub fn with_developer_data(mut self, enabled: bool) -> Self {
        self.developer_data = enabled;
        self
    }

    pub fn with_sparkline(mut self, enabled: bool) -> Self {
        self.sparkline = enabled;
        self
    }

    pub fn validate(&self) -> RestResult<()> {
        require(&[("id", self.id.as_str())])
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_bool("localization", self.localization)
            .push_bool("tickers", self.tickers)
            .push_bool("market_data", self.market_data)
            .push_bool("community_data", self.community_data)
            .push_bool("developer_data", self.developer_data)
            .push_bool("sparkline", self.sparkline);
        params
    }
}

// ============================================================================
// /coins/{id}/tickers
// ============================================================================

/// Request for a coin's exchange listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinTickersRequest {
    pub id: String,
    /// Only listings on these exchanges
    pub exchange_ids: Vec<String>,
    /// Pages hold 100 tickers
    pub page: Option<i64>,
    pub order: Option<TickerOrder>,
    /// Include 2% order book depth
    pub depth: bool,
}

impl CoinTickersRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            exchange_ids: Vec::new(),
            page: None,
            order: None,
            depth: false,
        }
    }

    pub fn with_exchange_ids<I, S>(mut self, exchange_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exchange_ids = exchange_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_order(mut self, order: TickerOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_depth(mut self, depth: bool) -> Self {
        self.depth = depth;
        self
    }

    pub fn validate(&self) -> RestResult<()> {
        require(&[("id", self.id.as_str())])
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_list("exchange_ids", &self.exchange_ids);
        if let Some(page) = self.page {
            params.push_page(page);
        }
        params
            .push_opt("order", self.order.map(|o| o.as_str()))
            .push_bool("depth", self.depth);
        params
    }
}

// ============================================================================
// /coins/{id}/market_chart
// ============================================================================

/// Request for historical price, market cap and volume series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketChartRequest {
    pub id: String,
    pub vs_currency: String,
    /// Number of days back, or `max`
    pub days: String,
    /// Data granularity, e.g. `daily`; automatic when unset
    pub interval: Option<String>,
}

impl MarketChartRequest {
    pub fn new(id: impl Into<String>, vs_currency: impl Into<String>, days: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            days: days.into(),
            interval: None,
        }
    }

    /// Whole history of the coin
    pub fn max(id: impl Into<String>, vs_currency: impl Into<String>) -> Self {
        Self::new(id, vs_currency, "max")
    }

    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    pub fn validate(&self) -> RestResult<()> {
        require(&[
            ("id", self.id.as_str()),
            ("vs_currency", self.vs_currency.as_str()),
            ("days", self.days.as_str()),
        ])
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("vs_currency", self.vs_currency.as_str())
            .push("days", self.days.as_str())
            .push_opt("interval", self.interval.as_deref());
        params
    }
}
