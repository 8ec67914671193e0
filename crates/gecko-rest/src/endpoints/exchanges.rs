//! `/exchanges` and `/exchange_rates` endpoints

use gecko_types::{Exchange, ExchangeDetail, ExchangeRates, RatesEnvelope};
use tracing::{debug, instrument};

use crate::context::CallContext;
use crate::error::RestResult;
use crate::params::{require, QueryParams};
use crate::pipeline::Pipeline;

/// Exchange directory and BTC conversion rates
pub struct ExchangeEndpoints<'a> {
    pipeline: &'a Pipeline,
    ctx: CallContext,
}

impl<'a> ExchangeEndpoints<'a> {
    pub(crate) fn new(pipeline: &'a Pipeline, ctx: CallContext) -> Self {
        Self { pipeline, ctx }
    }

    /// One page of active exchanges, ranked by trust score
    ///
    /// # Arguments
    /// * `per_page` - Rows per page (1-250, otherwise 100)
    /// * `page` - Page number, passed through as given
    #[instrument(skip(self))]
    pub async fn list(&self, per_page: i64, page: i64) -> RestResult<Vec<Exchange>> {
        debug!("Fetching exchanges page {}", page);

        let mut params = QueryParams::new();
        params.push_per_page(per_page).push_page(page);

        self.pipeline.get(&self.ctx, &["exchanges"], &params).await
    }

    /// Metadata and top tickers for one exchange
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> RestResult<ExchangeDetail> {
        require(&[("id", id)])?;
        debug!("Fetching exchange {}", id);

        self.pipeline
            .get(&self.ctx, &["exchanges", id], &QueryParams::new())
            .await
    }

    /// BTC-relative conversion table, unwrapped from its `rates` envelope
    #[instrument(skip(self))]
    pub async fn rates(&self) -> RestResult<ExchangeRates> {
        debug!("Fetching exchange rates");
        self.pipeline
            .get_enveloped::<RatesEnvelope<ExchangeRates>>(
                &self.ctx,
                &["exchange_rates"],
                &QueryParams::new(),
            )
            .await
    }
}
