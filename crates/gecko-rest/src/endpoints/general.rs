//! Status, search and global endpoints

use gecko_types::{DataEnvelope, GlobalStats, Ping, SearchResult};
use tracing::{debug, instrument};

use crate::context::CallContext;
use crate::error::RestResult;
use crate::params::{require, QueryParams};
use crate::pipeline::Pipeline;

/// Endpoints outside the coin and exchange sections
pub struct GeneralEndpoints<'a> {
    pipeline: &'a Pipeline,
    ctx: CallContext,
}

impl<'a> GeneralEndpoints<'a> {
    pub(crate) fn new(pipeline: &'a Pipeline, ctx: CallContext) -> Self {
        Self { pipeline, ctx }
    }

    /// Check API server status
    #[instrument(skip(self))]
    pub async fn ping(&self) -> RestResult<Ping> {
        debug!("Pinging API");
        self.pipeline
            .get(&self.ctx, &["ping"], &QueryParams::new())
            .await
    }

    /// Search coins, exchanges and categories by name or symbol
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> RestResult<SearchResult> {
        require(&[("query", query)])?;
        debug!("Searching for {}", query);

        let mut params = QueryParams::new();
        params.push("query", query);

        self.pipeline.get(&self.ctx, &["search"], &params).await
    }

    /// Market-wide totals, unwrapped from their `data` envelope
    #[instrument(skip(self))]
    pub async fn global(&self) -> RestResult<GlobalStats> {
        debug!("Fetching global stats");
        self.pipeline
            .get_enveloped::<DataEnvelope<GlobalStats>>(&self.ctx, &["global"], &QueryParams::new())
            .await
    }
}
