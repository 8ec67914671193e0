//! `/search` payload

use serde::{Deserialize, Serialize};

/// A coin matched by a search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub api_symbol: Option<String>,
    pub market_cap_rank: Option<u32>,
    pub thumb: Option<String>,
    pub large: Option<String>,
}

/// `/search` response
///
/// Only coins are modeled; the other result groups are passed through as
/// raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub coins: Vec<SearchCoin>,
    #[serde(default)]
    pub exchanges: Vec<serde_json::Value>,
    #[serde(default)]
    pub icos: Vec<serde_json::Value>,
    #[serde(default)]
    pub categories: Vec<serde_json::Value>,
    #[serde(default)]
    pub nfts: Vec<serde_json::Value>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
            && self.exchanges.is_empty()
            && self.icos.is_empty()
            && self.categories.is_empty()
            && self.nfts.is_empty()
    }

    /// Best-ranked coin match, if any has a market cap rank
    pub fn top_coin(&self) -> Option<&SearchCoin> {
        self.coins
            .iter()
            .filter(|c| c.market_cap_rank.is_some())
            .min_by_key(|c| c.market_cap_rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result() {
        let json = r#"{
            "coins": [
                {"id": "ethereum-pow-iou", "name": "EthereumPoW", "api_symbol": "ethereum-pow-iou",
                 "symbol": "ETHW", "market_cap_rank": 402, "thumb": "t", "large": "l"},
                {"id": "ethereum", "name": "Ethereum", "api_symbol": "ethereum",
                 "symbol": "ETH", "market_cap_rank": 2, "thumb": "t", "large": "l"},
                {"id": "eth-unranked", "name": "Unranked", "symbol": "ETHU", "market_cap_rank": null}
            ],
            "exchanges": [{"id": "ethfinex", "name": "Ethfinex", "market_type": "spot"}],
            "icos": [],
            "categories": [{"id": 4, "name": "Ethereum Ecosystem"}],
            "nfts": []
        }"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.coins.len(), 3);
        assert_eq!(result.top_coin().unwrap().id, "ethereum");
        assert_eq!(result.exchanges[0]["name"], "Ethfinex");
        assert!(!result.is_empty());
    }

    #[test]
    fn test_empty_search() {
        let result: SearchResult = serde_json::from_str(r#"{"coins": []}"#).unwrap();
        assert!(result.is_empty());
        assert!(result.top_coin().is_none());
    }
}
