//! Common test utilities and fixtures for integration tests
//!
//! Contains sample JSON bodies trimmed from live CoinGecko API v3 responses
//! and a mock transport that replays them.

#![allow(dead_code)]

use async_trait::async_trait;
use gecko_rest::{
    ClientConfig, CoinGeckoClient, HttpResponse, HttpTransport, RateLimiter, SharedRateLimiter,
    TransportError,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL: &str = "http://mock.local/api/v3";

/// Sample `/ping` response
pub const PING: &str = r#"{"gecko_says": "(V3) To the Moon!"}"#;

/// Sample `/simple/price?ids=bitcoin,ethereum&vs_currencies=usd,myr`
pub const SIMPLE_PRICE: &str = r#"{
    "bitcoin": {"usd": 67187.33, "myr": 316312.05},
    "ethereum": {"usd": 3532.19, "myr": 16629.35}
}"#;

/// Sample `/simple/price?ids=bitcoin&vs_currencies=usd`
pub const SIMPLE_PRICE_BTC_USD: &str = r#"{"bitcoin": {"usd": 67187.33}}"#;

pub const SUPPORTED_VS_CURRENCIES: &str = r#"["btc", "eth", "usd", "eur", "myr"]"#;

pub const COINS_LIST: &str = r#"[
    {"id": "bitcoin", "symbol": "btc", "name": "Bitcoin"},
    {"id": "ethereum", "symbol": "eth", "name": "Ethereum"},
    {"id": "tether", "symbol": "usdt", "name": "Tether"}
]"#;

pub const COINS_MARKETS: &str = r#"[
    {
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
        "current_price": 67187.33,
        "market_cap": 1324166423885,
        "market_cap_rank": 1,
        "fully_diluted_valuation": 1410922850220,
        "total_volume": 26184413212,
        "high_24h": 67523,
        "low_24h": 65870,
        "price_change_24h": 1062.12,
        "price_change_percentage_24h": 1.6063,
        "circulating_supply": 19709200,
        "total_supply": 21000000,
        "max_supply": 21000000,
        "ath": 73738,
        "ath_change_percentage": -8.88,
        "ath_date": "2024-03-14T07:10:36.635Z",
        "atl": 67.81,
        "atl_change_percentage": 98983.6,
        "atl_date": "2013-07-06T00:00:00.000Z",
        "roi": null,
        "last_updated": "2024-06-01T12:00:30.262Z",
        "price_change_percentage_1h_in_currency": 0.21
    },
    {
        "id": "ethereum",
        "symbol": "eth",
        "name": "Ethereum",
        "current_price": 3532.19,
        "market_cap": 424486744573,
        "market_cap_rank": 2,
        "total_volume": 11453862385,
        "roi": {"times": 48.68, "currency": "btc", "percentage": 4868.1},
        "last_updated": "2024-06-01T12:00:31.108Z",
        "price_change_percentage_1h_in_currency": -0.08
    }
]"#;

pub const COIN_DETAIL: &str = r#"{
    "id": "bitcoin",
    "symbol": "btc",
    "name": "Bitcoin",
    "categories": ["Cryptocurrency", "Layer 1 (L1)"],
    "description": {"en": "Bitcoin is the first successful internet money."},
    "links": {"homepage": ["http://www.bitcoin.org", "", ""], "repos_url": {"github": ["https://github.com/bitcoin/bitcoin"], "bitbucket": []}},
    "image": {"thumb": "https://a/thumb.png", "small": "https://a/small.png", "large": "https://a/large.png"},
    "genesis_date": "2009-01-03",
    "market_cap_rank": 1,
    "market_data": {
        "current_price": {"usd": 67187.33, "eur": 61922.1},
        "market_cap": {"usd": 1324166423885},
        "total_supply": 21000000,
        "circulating_supply": 19709200,
        "price_change_percentage_24h": 1.6063
    },
    "last_updated": "2024-06-01T12:00:30.262Z"
}"#;

pub const COIN_TICKERS: &str = r#"{
    "name": "Bitcoin",
    "tickers": [
        {
            "base": "BTC",
            "target": "USDT",
            "market": {"name": "Binance", "identifier": "binance", "has_trading_incentive": false},
            "last": 67180.01,
            "volume": 25112.47,
            "converted_last": {"btc": 0.99986, "eth": 19.02, "usd": 67178},
            "converted_volume": {"btc": 25108, "eth": 477711, "usd": 1686917000},
            "trust_score": "green",
            "bid_ask_spread_percentage": 0.010015,
            "timestamp": "2024-06-01T12:00:11+00:00",
            "is_anomaly": false,
            "is_stale": false,
            "trade_url": "https://www.binance.com/en/trade/BTC_USDT",
            "coin_id": "bitcoin",
            "target_coin_id": "tether"
        }
    ]
}"#;

pub const COIN_HISTORY: &str = r#"{
    "id": "bitcoin",
    "symbol": "btc",
    "name": "Bitcoin",
    "image": {"thumb": "https://a/thumb.png", "small": "https://a/small.png"},
    "market_data": {
        "current_price": {"usd": 14112.11},
        "market_cap": {"usd": 236360000000},
        "total_volume": {"usd": 12800000000}
    },
    "community_data": {"twitter_followers": 603664},
    "public_interest_stats": {"alexa_rank": 2912, "bing_matches": null}
}"#;

pub const MARKET_CHART: &str = r#"{
    "prices": [[1711843200000, 69702.31], [1711929600000, 71246.95]],
    "market_caps": [[1711843200000, 1370247487960.09], [1711929600000, 1401370211582.37]],
    "total_volumes": [[1711843200000, 16408802301.84], [1711929600000, 19723005998.22]]
}"#;

pub const CATEGORIES_LIST: &str = r#"[
    {"category_id": "aave-tokens", "name": "Aave Tokens"},
    {"category_id": "layer-1", "name": "Layer 1 (L1)"}
]"#;

pub const CATEGORIES: &str = r#"[
    {
        "id": "layer-1",
        "name": "Layer 1 (L1)",
        "market_cap": 2061406861196.41,
        "market_cap_change_24h": -0.66,
        "content": "",
        "top_3_coins": ["https://a/1.png", "https://a/2.png", "https://a/3.png"],
        "volume_24h": 61146432400.17,
        "updated_at": "2024-04-06T08:25:46.402Z"
    }
]"#;

pub const EXCHANGES: &str = r#"[
    {
        "id": "bybit_spot",
        "name": "Bybit",
        "year_established": 2018,
        "country": "British Virgin Islands",
        "url": "https://www.bybit.com",
        "has_trading_incentive": false,
        "trust_score": 10,
        "trust_score_rank": 1,
        "trade_volume_24h_btc": 51075.62,
        "trade_volume_24h_btc_normalized": 47765.58
    }
]"#;

pub const EXCHANGE_DETAIL: &str = r#"{
    "name": "Binance",
    "year_established": 2017,
    "country": "Cayman Islands",
    "centralized": true,
    "trust_score": 10,
    "trust_score_rank": 1,
    "trade_volume_24h_btc": 207319.13,
    "tickers": [
        {
            "base": "ETH",
            "target": "USDT",
            "market": {"name": "Binance", "identifier": "binance"},
            "last": 3532.1,
            "volume": 321004.2,
            "trust_score": "green"
        }
    ]
}"#;

pub const EXCHANGE_RATES: &str = r#"{
    "rates": {
        "btc": {"name": "Bitcoin", "unit": "BTC", "value": 1.0, "type": "crypto"},
        "eth": {"name": "Ether", "unit": "ETH", "value": 19.02, "type": "crypto"},
        "usd": {"name": "US Dollar", "unit": "$", "value": 67187.33, "type": "fiat"},
        "xau": {"name": "Gold - Troy Ounce", "unit": "XAU", "value": 28.9, "type": "commodity"}
    }
}"#;

pub const SEARCH: &str = r#"{
    "coins": [
        {"id": "ethereum", "name": "Ethereum", "api_symbol": "ethereum", "symbol": "ETH", "market_cap_rank": 2, "thumb": "https://a/t.png", "large": "https://a/l.png"},
        {"id": "ethereum-wormhole", "name": "Ethereum (Wormhole)", "api_symbol": "ethereum-wormhole", "symbol": "ETH", "market_cap_rank": null}
    ],
    "exchanges": [{"id": "ethfinex", "name": "Ethfinex", "market_type": "spot"}],
    "icos": [],
    "categories": [{"id": 4, "name": "Ethereum Ecosystem"}],
    "nfts": []
}"#;

pub const GLOBAL: &str = r#"{
    "data": {
        "active_cryptocurrencies": 13690,
        "upcoming_icos": 0,
        "ongoing_icos": 49,
        "ended_icos": 3376,
        "markets": 1046,
        "total_market_cap": {"btc": 39003.7, "usd": 2623005598870.49},
        "total_volume": {"btc": 1239.4, "usd": 83355008183.33},
        "market_cap_percentage": {"btc": 50.44, "eth": 14.92},
        "market_cap_change_percentage_24h_usd": 1.72,
        "updated_at": 1717243200
    }
}"#;

/// Replays canned responses and records every requested URL
///
/// Routes match on the end of the URL path, so `/coins/categories` and
/// `/coins/categories/list` are distinct. Unrouted paths answer 404.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<(String, Result<HttpResponse, TransportError>)>>,
    requests: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every response takes `delay` to arrive
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Answer 200 with `body` for paths ending in `path`
    pub fn route(self, path: &str, body: &str) -> Self {
        self.route_response(path, HttpResponse::ok(body))
    }

    pub fn route_response(self, path: &str, response: HttpResponse) -> Self {
        self.routes.lock().push((path.to_string(), Ok(response)));
        self
    }

    pub fn route_error(self, path: &str, error: TransportError) -> Self {
        self.routes.lock().push((path.to_string(), Err(error)));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<String> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(url.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let path = url.split('?').next().unwrap_or(url);
        let routes = self.routes.lock();
        routes
            .iter()
            .find(|(route, _)| path.ends_with(route.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| Ok(HttpResponse::with_status(404, r#"{"error":"Not Found"}"#)))
    }
}

/// Client over `mock` that never waits on the limiter
pub fn mock_client(mock: Arc<MockTransport>) -> CoinGeckoClient {
    client_with_limiter(mock, Arc::new(RateLimiter::permissive()))
}

pub fn client_with_limiter(mock: Arc<MockTransport>, limiter: SharedRateLimiter) -> CoinGeckoClient {
    CoinGeckoClient::with_config(
        ClientConfig::new()
            .with_base_url(BASE_URL)
            .with_transport(mock)
            .with_rate_limiter(limiter),
    )
    .unwrap()
}

/// Query string of a recorded URL
pub fn query_of(url: &str) -> &str {
    url.split_once('?').map(|(_, q)| q).unwrap_or("")
}
