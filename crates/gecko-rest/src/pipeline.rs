//! Shared request pipeline
//!
//! Every endpoint call goes through the same steps: build the URL, wait for
//! a rate-limiter token, issue the GET, normalize the status and decode the
//! body. Cancellation is checked while waiting for the token and while the
//! request is in flight.

use std::sync::Arc;
use std::time::Instant;

use gecko_types::Envelope;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::context::CallContext;
use crate::decode::{decode, decode_enveloped};
use crate::error::{RestError, RestResult};
use crate::limiter::SharedRateLimiter;
use crate::params::QueryParams;
use crate::transport::HttpTransport;

pub(crate) struct Pipeline {
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
    limiter: SharedRateLimiter,
    debug: bool,
}

impl Pipeline {
    pub(crate) fn new(
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
        limiter: SharedRateLimiter,
        debug: bool,
    ) -> RestResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RestError::Configuration(format!("invalid base URL '{}': {}", base_url, e)))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(RestError::Configuration(format!(
                "base URL must be an http(s) URL, got '{}'",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            transport,
            limiter,
            debug,
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn limiter(&self) -> &SharedRateLimiter {
        &self.limiter
    }

    /// Base URL + percent-encoded path segments + query string
    pub(crate) fn url(&self, segments: &[&str], params: &QueryParams) -> RestResult<String> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| RestError::Configuration("base URL cannot take a path".into()))?
            .pop_if_empty()
            .extend(segments);

        if !params.is_empty() {
            url.set_query(Some(&params.encode()?));
        }

        Ok(url.into())
    }

    /// Rate-limited GET returning the raw body of a 2xx response
    pub(crate) async fn execute(&self, ctx: &CallContext, url: &str) -> RestResult<Vec<u8>> {
        if let Some(reason) = ctx.cancelled() {
            return Err(RestError::Cancelled(reason));
        }

        tokio::select! {
            biased;
            reason = ctx.done() => {
                debug!(%reason, "Cancelled while waiting for rate limiter");
                return Err(RestError::Cancelled(reason));
            }
            _ = self.limiter.acquire() => {}
        }

        let started = Instant::now();
        let response = tokio::select! {
            biased;
            reason = ctx.done() => {
                warn!(url, %reason, "Abandoning in-flight request");
                return Err(RestError::Cancelled(reason));
            }
            result = self.transport.get(url) => result?,
        };
        let elapsed = started.elapsed();

        if self.debug {
            info!(
                url,
                status = response.status,
                elapsed_ms = elapsed.as_millis() as u64,
                headers = %response.header_block(),
                body = %String::from_utf8_lossy(&response.body),
                "Response dump"
            );
        }

        if !response.is_success() {
            return Err(RestError::Api {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        Ok(response.body)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        segments: &[&str],
        params: &QueryParams,
    ) -> RestResult<T> {
        let url = self.url(segments, params)?;
        let body = self.execute(ctx, &url).await?;
        decode(&body)
    }

    pub(crate) async fn get_enveloped<E>(
        &self,
        ctx: &CallContext,
        segments: &[&str],
        params: &QueryParams,
    ) -> RestResult<E::Inner>
    where
        E: Envelope + DeserializeOwned,
    {
        let url = self.url(segments, params)?;
        let body = self.execute(ctx, &url).await?;
        decode_enveloped::<E>(&body)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("base_url", &self.base_url.as_str())
            .field("limiter", &self.limiter.config())
            .field("debug", &self.debug)
            .finish()
    }
}
