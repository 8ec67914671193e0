//! `/coins` endpoints

use chrono::NaiveDate;
use gecko_types::{
    Category, CategoryListItem, CoinDetail, CoinHistory, CoinSummary, CoinTickers, MarketChart,
    MarketListing,
};
use tracing::{debug, instrument};

use crate::context::CallContext;
use crate::error::{RestError, RestResult};
use crate::params::{require, QueryParams};
use crate::pipeline::Pipeline;
use crate::types::{CoinRequest, CoinTickersRequest, CoinsMarketsRequest, MarketChartRequest};

/// Date format of the `/coins/{id}/history` `date` parameter
pub const HISTORY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Coin listing, detail, history and category endpoints
pub struct CoinEndpoints<'a> {
    pipeline: &'a Pipeline,
    ctx: CallContext,
}

impl<'a> CoinEndpoints<'a> {
    pub(crate) fn new(pipeline: &'a Pipeline, ctx: CallContext) -> Self {
        Self { pipeline, ctx }
    }

    /// Every supported coin as id, symbol and name
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<Vec<CoinSummary>> {
        debug!("Fetching coin list");
        self.pipeline
            .get(&self.ctx, &["coins", "list"], &QueryParams::new())
            .await
    }

    /// Ranked market rows
    #[instrument(skip(self))]
    pub async fn markets(&self, request: &CoinsMarketsRequest) -> RestResult<Vec<MarketListing>> {
        request.validate()?;
        debug!("Fetching markets in {}", request.vs_currency);

        self.pipeline
            .get(&self.ctx, &["coins", "markets"], &request.to_params())
            .await
    }

    /// Full record for one coin
    #[instrument(skip(self))]
    pub async fn get(&self, request: &CoinRequest) -> RestResult<CoinDetail> {
        request.validate()?;
        debug!("Fetching coin {}", request.id);

        self.pipeline
            .get(&self.ctx, &["coins", request.id.as_str()], &request.to_params())
            .await
    }

    /// Exchange listings for one coin
    #[instrument(skip(self))]
    pub async fn tickers(&self, request: &CoinTickersRequest) -> RestResult<CoinTickers> {
        request.validate()?;
        debug!("Fetching tickers for {}", request.id);

        self.pipeline
            .get(
                &self.ctx,
                &["coins", request.id.as_str(), "tickers"],
                &request.to_params(),
            )
            .await
    }

    /// Snapshot of a coin on a past day
    ///
    /// # Arguments
    /// * `id` - Coin id
    /// * `date` - Day in `dd-mm-yyyy` form (e.g., "30-12-2017")
    /// * `localization` - Include localized names
    #[instrument(skip(self))]
    pub async fn history(&self, id: &str, date: &str, localization: bool) -> RestResult<CoinHistory> {
        require(&[("id", id), ("date", date)])?;
        NaiveDate::parse_from_str(date, HISTORY_DATE_FORMAT).map_err(|e| {
            RestError::InvalidParameter(format!("date '{}' is not dd-mm-yyyy: {}", date, e))
        })?;

        debug!("Fetching history for {} on {}", id, date);

        let mut params = QueryParams::new();
        params
            .push("date", date)
            .push_bool("localization", localization);

        self.pipeline
            .get(&self.ctx, &["coins", id, "history"], &params)
            .await
    }

    /// [`history`](Self::history) for a typed date
    pub async fn history_on(&self, id: &str, date: NaiveDate, localization: bool) -> RestResult<CoinHistory> {
        let date = date.format(HISTORY_DATE_FORMAT).to_string();
        self.history(id, &date, localization).await
    }

    /// Price, market cap and volume series
    #[instrument(skip(self))]
    pub async fn market_chart(&self, request: &MarketChartRequest) -> RestResult<MarketChart> {
        request.validate()?;
        debug!("Fetching {} day chart for {}", request.days, request.id);

        self.pipeline
            .get(
                &self.ctx,
                &["coins", request.id.as_str(), "market_chart"],
                &request.to_params(),
            )
            .await
    }

    /// Category ids and names
    #[instrument(skip(self))]
    pub async fn categories_list(&self) -> RestResult<Vec<CategoryListItem>> {
        debug!("Fetching category list");
        self.pipeline
            .get(&self.ctx, &["coins", "categories", "list"], &QueryParams::new())
            .await
    }

    /// Categories with market data
    #[instrument(skip(self))]
    pub async fn categories(&self) -> RestResult<Vec<Category>> {
        debug!("Fetching categories");
        self.pipeline
            .get(&self.ctx, &["coins", "categories"], &QueryParams::new())
            .await
    }
}
