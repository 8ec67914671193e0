//! Coin records: the summary shape and the richer detail/history views

use crate::market::{HistoricalMarketData, MarketSnapshot};
use crate::ticker::TickerQuote;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id, symbol and display name of a coin
///
/// This is the full shape of `/coins/list` rows and is nested (flattened in
/// JSON) inside [`CoinDetail`] and [`CoinHistory`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinSummary {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

/// Language code -> text
pub type Localized = HashMap<String, String>;

/// Thumbnail / small / large image URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
}

/// `/coins/{id}` response
///
/// Market, community, developer and ticker sections are absent unless the
/// matching flag was set on the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    #[serde(flatten)]
    pub summary: CoinSummary,
    pub asset_platform_id: Option<String>,
    /// Platform id -> contract address
    #[serde(default)]
    pub platforms: HashMap<String, String>,
    pub block_time_in_minutes: Option<u32>,
    pub hashing_algorithm: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub public_notice: Option<String>,
    /// Empty unless `localization=true`
    #[serde(default)]
    pub localization: Localized,
    #[serde(default)]
    pub description: Localized,
    pub links: Option<Links>,
    #[serde(default)]
    pub image: ImageSet,
    pub country_origin: Option<String>,
    pub genesis_date: Option<NaiveDate>,
    pub sentiment_votes_up_percentage: Option<f64>,
    pub sentiment_votes_down_percentage: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub coingecko_rank: Option<u32>,
    pub coingecko_score: Option<f64>,
    pub developer_score: Option<f64>,
    pub community_score: Option<f64>,
    pub liquidity_score: Option<f64>,
    pub public_interest_score: Option<f64>,
    pub market_data: Option<MarketSnapshot>,
    pub community_data: Option<CommunityMetrics>,
    pub developer_data: Option<DeveloperMetrics>,
    pub public_interest_stats: Option<PublicInterestMetrics>,
    #[serde(default)]
    pub status_updates: Vec<StatusUpdate>,
    pub last_updated: Option<DateTime<Utc>>,
    pub tickers: Option<Vec<TickerQuote>>,
}

impl CoinDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    /// English description, if one was published
    pub fn description_en(&self) -> Option<&str> {
        self.description
            .get("en")
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Project links; list fields keep the API's empty-string padding stripped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, deserialize_with = "non_empty")]
    pub homepage: Vec<String>,
    pub whitepaper: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub blockchain_site: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub official_forum_url: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub chat_url: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub announcement_url: Vec<String>,
    pub twitter_screen_name: Option<String>,
    pub facebook_username: Option<String>,
    pub bitcointalk_thread_identifier: Option<u64>,
    pub telegram_channel_identifier: Option<String>,
    pub subreddit_url: Option<String>,
    #[serde(default)]
    pub repos_url: ReposUrl,
}

/// Source repositories by host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReposUrl {
    #[serde(default, deserialize_with = "non_empty")]
    pub github: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub bitbucket: Vec<String>,
}

fn non_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect())
}

/// Social reach figures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityMetrics {
    pub facebook_likes: Option<u64>,
    pub twitter_followers: Option<u64>,
    pub reddit_average_posts_48h: Option<f64>,
    pub reddit_average_comments_48h: Option<f64>,
    pub reddit_subscribers: Option<u64>,
    pub reddit_accounts_active_48h: Option<u64>,
    pub telegram_channel_user_count: Option<u64>,
}

/// Repository activity figures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperMetrics {
    pub forks: Option<u64>,
    pub stars: Option<u64>,
    pub subscribers: Option<u64>,
    pub total_issues: Option<u64>,
    pub closed_issues: Option<u64>,
    pub pull_requests_merged: Option<u64>,
    pub pull_request_contributors: Option<u64>,
    #[serde(default)]
    pub code_additions_deletions_4_weeks: CodeChanges,
    pub commit_count_4_weeks: Option<u64>,
    #[serde(default)]
    pub last_4_weeks_commit_activity_series: Vec<u32>,
}

/// Lines added / removed over the last four weeks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeChanges {
    pub additions: Option<i64>,
    pub deletions: Option<i64>,
}

/// Web-traffic figures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInterestMetrics {
    pub alexa_rank: Option<u64>,
    pub bing_matches: Option<u64>,
}

/// A project announcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub user: Option<String>,
    pub user_title: Option<String>,
    #[serde(default)]
    pub pin: bool,
    /// Shape varies by project type; kept opaque
    pub project: Option<serde_json::Value>,
}

/// `/coins/{id}/tickers` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinTickers {
    pub name: String,
    #[serde(default)]
    pub tickers: Vec<TickerQuote>,
}

/// `/coins/{id}/history` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinHistory {
    #[serde(flatten)]
    pub summary: CoinSummary,
    #[serde(default)]
    pub localization: Localized,
    #[serde(default)]
    pub image: ImageSet,
    /// Absent for dates before the coin was listed
    pub market_data: Option<HistoricalMarketData>,
    pub community_data: Option<CommunityMetrics>,
    pub developer_data: Option<DeveloperMetrics>,
    pub public_interest_stats: Option<PublicInterestMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL: &str = r#"{
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "asset_platform_id": null,
        "platforms": {"": ""},
        "block_time_in_minutes": 10,
        "hashing_algorithm": "SHA-256",
        "categories": ["Cryptocurrency", "Layer 1 (L1)"],
        "localization": {"en": "Bitcoin", "de": "Bitcoin"},
        "description": {"en": "Bitcoin is the first successful internet money."},
        "links": {
            "homepage": ["http://www.bitcoin.org", "", ""],
            "blockchain_site": ["https://mempool.space/", null],
            "official_forum_url": ["https://bitcointalk.org/", ""],
            "chat_url": ["", ""],
            "announcement_url": ["", ""],
            "twitter_screen_name": "bitcoin",
            "facebook_username": "bitcoins",
            "bitcointalk_thread_identifier": null,
            "telegram_channel_identifier": "",
            "subreddit_url": "https://www.reddit.com/r/Bitcoin/",
            "repos_url": {"github": ["https://github.com/bitcoin/bitcoin"], "bitbucket": []}
        },
        "image": {
            "thumb": "https://assets.coingecko.com/coins/images/1/thumb/bitcoin.png",
            "small": "https://assets.coingecko.com/coins/images/1/small/bitcoin.png",
            "large": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png"
        },
        "country_origin": "",
        "genesis_date": "2009-01-03",
        "market_cap_rank": 1,
        "coingecko_rank": 1,
        "coingecko_score": 83.151,
        "developer_score": 99.241,
        "community_score": 83.341,
        "liquidity_score": 100.011,
        "public_interest_score": 0.073,
        "community_data": {
            "facebook_likes": null,
            "twitter_followers": 6769000,
            "reddit_average_posts_48h": 4.167,
            "reddit_subscribers": 4917406
        },
        "developer_data": {
            "forks": 36262,
            "stars": 78000,
            "code_additions_deletions_4_weeks": {"additions": 1570, "deletions": -1948},
            "last_4_weeks_commit_activity_series": [1, 0, 3]
        },
        "public_interest_stats": {"alexa_rank": 9440, "bing_matches": null},
        "status_updates": [],
        "last_updated": "2024-04-07T16:49:31.736Z"
    }"#;

    #[test]
    fn test_coin_detail_flags_off() {
        let detail: CoinDetail = serde_json::from_str(DETAIL).unwrap();

        assert_eq!(detail.id(), "bitcoin");
        assert_eq!(detail.summary.symbol, "btc");
        assert_eq!(detail.genesis_date, NaiveDate::from_ymd_opt(2009, 1, 3));
        assert!(detail.market_data.is_none());
        assert!(detail.tickers.is_none());
        assert!(detail.description_en().unwrap().starts_with("Bitcoin is"));
    }

    #[test]
    fn test_links_drop_padding() {
        let detail: CoinDetail = serde_json::from_str(DETAIL).unwrap();
        let links = detail.links.unwrap();

        assert_eq!(links.homepage, vec!["http://www.bitcoin.org".to_string()]);
        assert_eq!(links.blockchain_site.len(), 1);
        assert!(links.chat_url.is_empty());
        assert_eq!(links.repos_url.github.len(), 1);
        assert_eq!(links.bitcointalk_thread_identifier, None);
    }

    #[test]
    fn test_nested_metrics() {
        let detail: CoinDetail = serde_json::from_str(DETAIL).unwrap();

        let community = detail.community_data.unwrap();
        assert_eq!(community.facebook_likes, None);
        assert_eq!(community.twitter_followers, Some(6_769_000));

        let developer = detail.developer_data.unwrap();
        assert_eq!(developer.code_additions_deletions_4_weeks.deletions, Some(-1948));
        assert_eq!(developer.last_4_weeks_commit_activity_series, vec![1, 0, 3]);

        let interest = detail.public_interest_stats.unwrap();
        assert_eq!(interest.alexa_rank, Some(9440));
    }

    #[test]
    fn test_history_without_market_data() {
        let json = r#"{
            "id": "steem",
            "symbol": "steem",
            "name": "Steem",
            "image": {"thumb": "t", "small": "s"}
        }"#;
        let history: CoinHistory = serde_json::from_str(json).unwrap();

        assert_eq!(history.summary.name, "Steem");
        assert_eq!(history.image.large, None);
        assert!(history.market_data.is_none());
    }
}
