//! Main REST client implementation

use crate::context::CallContext;
use crate::endpoints::{CoinEndpoints, ExchangeEndpoints, GeneralEndpoints, SimpleEndpoints};
use crate::error::{RestError, RestResult};
use crate::limiter::{RateLimiter, SharedRateLimiter};
use crate::pipeline::Pipeline;
use crate::transport::{HttpTransport, ReqwestTransport, TransportConfig};
use crate::types::{CoinRequest, CoinTickersRequest, CoinsMarketsRequest, MarketChartRequest};
use gecko_types::{
    Category, CategoryListItem, CoinDetail, CoinHistory, CoinSummary, CoinTickers, Exchange,
    ExchangeDetail, ExchangeRates, GlobalStats, MarketChart, MarketListing, Ping, PriceQuote,
    SearchResult, SimplePrices, SupportedVsCurrencies,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// CoinGecko REST API client
///
/// Cheap to clone; clones share one rate limiter and one connection pool.
///
/// # Example
///
/// ```no_run
/// use gecko_rest::CoinGeckoClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinGeckoClient::new()?;
///
///     let btc = client.simple_single_price("bitcoin", "usd").await?;
///     println!("{} = {} {}", btc.id, btc.price, btc.currency);
///
///     let global = client.global().await?;
///     println!("Active coins: {}", global.active_cryptocurrencies);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinGeckoClient {
    pipeline: Arc<Pipeline>,
}

impl CoinGeckoClient {
    /// Create a client for the public API with default settings
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport = match config.transport {
            Some(transport) => transport,
            None => {
                if config.timeout.is_zero() {
                    return Err(RestError::Configuration("timeout must be greater than zero".into()));
                }
                let transport_config = TransportConfig {
                    timeout: config.timeout,
                    pool_max_idle_per_host: config.pool_max_idle_per_host,
                    user_agent: config.user_agent,
                };
                let transport = ReqwestTransport::new(&transport_config)
                    .map_err(|e| RestError::Configuration(e.to_string()))?;
                Arc::new(transport) as Arc<dyn HttpTransport>
            }
        };

        let limiter = config
            .rate_limiter
            .unwrap_or_else(|| Arc::new(RateLimiter::default()));

        let pipeline = Pipeline::new(&config.base_url, transport, limiter, config.debug)?;

        info!(base_url = %pipeline.base_url(), "Created CoinGecko REST client");

        Ok(Self {
            pipeline: Arc::new(pipeline),
        })
    }

    /// Base URL every request is resolved against
    pub fn base_url(&self) -> &str {
        self.pipeline.base_url().as_str()
    }

    /// The limiter shared by all calls through this client
    pub fn rate_limiter(&self) -> SharedRateLimiter {
        Arc::clone(self.pipeline.limiter())
    }

    /// Run the next calls under `ctx` instead of the background context
    pub fn with_context(&self, ctx: CallContext) -> ContextClient<'_> {
        ContextClient {
            pipeline: &self.pipeline,
            ctx,
        }
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Get `/simple` endpoints
    pub fn simple(&self) -> SimpleEndpoints<'_> {
        SimpleEndpoints::new(&self.pipeline, CallContext::background())
    }

    /// Get `/coins` endpoints
    pub fn coins(&self) -> CoinEndpoints<'_> {
        CoinEndpoints::new(&self.pipeline, CallContext::background())
    }

    /// Get `/exchanges` and `/exchange_rates` endpoints
    pub fn exchange_api(&self) -> ExchangeEndpoints<'_> {
        ExchangeEndpoints::new(&self.pipeline, CallContext::background())
    }

    /// Get ping, search and global endpoints
    pub fn general(&self) -> GeneralEndpoints<'_> {
        GeneralEndpoints::new(&self.pipeline, CallContext::background())
    }

    // ========================================================================
    // Simple
    // ========================================================================

    /// Check API server status
    pub async fn ping(&self) -> RestResult<Ping> {
        self.general().ping().await
    }

    /// Prices of several coins in several currencies
    pub async fn simple_price(&self, ids: &[&str], vs_currencies: &[&str]) -> RestResult<SimplePrices> {
        self.simple().price(ids, vs_currencies).await
    }

    /// Price of one coin in one currency
    pub async fn simple_single_price(&self, id: &str, vs_currency: &str) -> RestResult<PriceQuote> {
        self.simple().single_price(id, vs_currency).await
    }

    /// Currency codes accepted by the price endpoints
    pub async fn simple_supported_vs_currencies(&self) -> RestResult<SupportedVsCurrencies> {
        self.simple().supported_vs_currencies().await
    }

    // ========================================================================
    // Coins
    // ========================================================================

    /// All coin ids, symbols and names
    pub async fn coins_list(&self) -> RestResult<Vec<CoinSummary>> {
        self.coins().list().await
    }

    /// Ranked market rows
    pub async fn coins_markets(&self, request: &CoinsMarketsRequest) -> RestResult<Vec<MarketListing>> {
        self.coins().markets(request).await
    }

    /// Full record for one coin
    pub async fn coin(&self, request: &CoinRequest) -> RestResult<CoinDetail> {
        self.coins().get(request).await
    }

    /// Exchange listings for one coin
    pub async fn coin_tickers(&self, request: &CoinTickersRequest) -> RestResult<CoinTickers> {
        self.coins().tickers(request).await
    }

    /// Snapshot of a coin on a past day (`date` as `dd-mm-yyyy`)
    pub async fn coin_history(&self, id: &str, date: &str, localization: bool) -> RestResult<CoinHistory> {
        self.coins().history(id, date, localization).await
    }

    /// Price, market cap and volume series
    pub async fn coin_market_chart(&self, request: &MarketChartRequest) -> RestResult<MarketChart> {
        self.coins().market_chart(request).await
    }

    /// Category ids and names
    pub async fn categories_list(&self) -> RestResult<Vec<CategoryListItem>> {
        self.coins().categories_list().await
    }

    /// Categories with market data
    pub async fn categories(&self) -> RestResult<Vec<Category>> {
        self.coins().categories().await
    }

    // ========================================================================
    // Exchanges
    // ========================================================================

    /// One page of exchanges
    pub async fn exchanges(&self, per_page: i64, page: i64) -> RestResult<Vec<Exchange>> {
        self.exchange_api().list(per_page, page).await
    }

    /// One exchange with its tickers
    pub async fn exchange(&self, id: &str) -> RestResult<ExchangeDetail> {
        self.exchange_api().get(id).await
    }

    /// BTC conversion rates
    pub async fn exchange_rates(&self) -> RestResult<ExchangeRates> {
        self.exchange_api().rates().await
    }

    // ========================================================================
    // General
    // ========================================================================

    /// Search by name or symbol
    pub async fn search(&self, query: &str) -> RestResult<SearchResult> {
        self.general().search(query).await
    }

    /// Market-wide totals
    pub async fn global(&self) -> RestResult<GlobalStats> {
        self.general().global().await
    }
}

impl std::fmt::Debug for CoinGeckoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoClient")
            .field("pipeline", &self.pipeline)
            .finish()
    }
}

/// Client view whose endpoint groups run under one [`CallContext`]
pub struct ContextClient<'a> {
    pipeline: &'a Pipeline,
    ctx: CallContext,
}

impl<'a> ContextClient<'a> {
    pub fn context(&self) -> &CallContext {
        &self.ctx
    }

    pub fn simple(&self) -> SimpleEndpoints<'a> {
        SimpleEndpoints::new(self.pipeline, self.ctx.clone())
    }

    pub fn coins(&self) -> CoinEndpoints<'a> {
        CoinEndpoints::new(self.pipeline, self.ctx.clone())
    }

    pub fn exchange_api(&self) -> ExchangeEndpoints<'a> {
        ExchangeEndpoints::new(self.pipeline, self.ctx.clone())
    }

    pub fn general(&self) -> GeneralEndpoints<'a> {
        GeneralEndpoints::new(self.pipeline, self.ctx.clone())
    }
}

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// API root, trailing `/` optional
    pub base_url: String,
    /// Total per-request timeout
    pub timeout: Duration,
    /// Idle connections kept per host
    pub pool_max_idle_per_host: usize,
    pub user_agent: String,
    /// Log every response (status, headers, body, latency) at INFO
    pub debug: bool,
    /// Replaces the reqwest transport; timeout, pool and user agent are then unused
    pub transport: Option<Arc<dyn HttpTransport>>,
    /// Limiter to use instead of a fresh one; share it to pace several clients together
    pub rate_limiter: Option<SharedRateLimiter>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let transport = TransportConfig::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pool_max_idle_per_host: transport.pool_max_idle_per_host,
            user_agent: transport.user_agent,
            debug: false,
            transport: None,
            rate_limiter: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `COINGECKO_BASE_URL`, `COINGECKO_TIMEOUT_SECS`
    /// and `COINGECKO_DEBUG`
    pub fn from_env() -> RestResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RestResult<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("COINGECKO_BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(secs) = lookup("COINGECKO_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or_else(|| {
                    RestError::Configuration(format!(
                        "COINGECKO_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                        secs
                    ))
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(debug) = lookup("COINGECKO_DEBUG") {
            config.debug = matches!(debug.trim().to_ascii_lowercase().as_str(), "1" | "true");
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Use a custom transport
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a specific (possibly shared) rate limiter
    pub fn with_rate_limiter(mut self, limiter: SharedRateLimiter) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("pool_max_idle_per_host", &self.pool_max_idle_per_host)
            .field("user_agent", &self.user_agent)
            .field("debug", &self.debug)
            .field("custom_transport", &self.transport.is_some())
            .field("rate_limiter", &self.rate_limiter.as_ref().map(|l| l.config()))
            .finish()
    }
}
