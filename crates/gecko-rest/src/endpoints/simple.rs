//! `/simple` price endpoints

use gecko_types::{PriceQuote, SimplePrices, SupportedVsCurrencies};
use tracing::{debug, instrument};

use crate::context::CallContext;
use crate::error::{RestError, RestResult};
use crate::params::{require, QueryParams};
use crate::pipeline::Pipeline;

/// Spot price endpoints
pub struct SimpleEndpoints<'a> {
    pipeline: &'a Pipeline,
    ctx: CallContext,
}

impl<'a> SimpleEndpoints<'a> {
    pub(crate) fn new(pipeline: &'a Pipeline, ctx: CallContext) -> Self {
        Self { pipeline, ctx }
    }

    /// Current price of every id in every currency
    ///
    /// Inputs are trimmed and lowercased; the API answers with lowercase keys.
    /// Ids the API does not know are absent from the result rather than an
    /// error.
    ///
    /// # Arguments
    /// * `ids` - Coin ids (e.g., ["bitcoin", "ethereum"])
    /// * `vs_currencies` - Currency codes (e.g., ["usd", "eur"])
    #[instrument(skip(self))]
    pub async fn price(&self, ids: &[&str], vs_currencies: &[&str]) -> RestResult<SimplePrices> {
        let ids = normalize(ids);
        let vs_currencies = normalize(vs_currencies);
        let joined_ids = ids.join(",");
        let joined_currencies = vs_currencies.join(",");
        require(&[
            ("ids", joined_ids.as_str()),
            ("vs_currencies", joined_currencies.as_str()),
        ])?;

        debug!("Fetching {} price(s) in {} currencies", ids.len(), vs_currencies.len());

        let mut params = QueryParams::new();
        params
            .push_list("ids", &ids)
            .push_list("vs_currencies", &vs_currencies);

        self.pipeline
            .get(&self.ctx, &["simple", "price"], &params)
            .await
    }

    /// Price of one id in one currency
    ///
    /// Fails with [`RestError::NotFound`](crate::RestError::NotFound) when the
    /// API has no price for the pair.
    #[instrument(skip(self))]
    pub async fn single_price(&self, id: &str, vs_currency: &str) -> RestResult<PriceQuote> {
        let id = id.trim().to_lowercase();
        let vs_currency = vs_currency.trim().to_lowercase();
        require(&[("id", id.as_str()), ("vs_currency", vs_currency.as_str())])?;

        let prices = self.price(&[id.as_str()], &[vs_currency.as_str()]).await?;
        prices
            .quote(&id, &vs_currency)
            .map_err(|_| RestError::not_found(id.as_str(), vs_currency.as_str()))
    }

    /// Every currency code accepted as `vs_currencies`
    #[instrument(skip(self))]
    pub async fn supported_vs_currencies(&self) -> RestResult<SupportedVsCurrencies> {
        debug!("Fetching supported vs currencies");
        self.pipeline
            .get(
                &self.ctx,
                &["simple", "supported_vs_currencies"],
                &QueryParams::new(),
            )
            .await
    }
}

fn normalize(values: &[&str]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_drops_blanks() {
        assert_eq!(normalize(&[" Bitcoin", "", "ETH"]), vec!["bitcoin", "eth"]);
        assert!(normalize(&["  "]).is_empty());
    }
}
