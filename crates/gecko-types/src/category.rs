//! `/coins/categories*` payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `/coins/categories/list` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListItem {
    pub category_id: String,
    pub name: String,
}

/// `/coins/categories` row, with market data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub market_cap: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub content: Option<String>,
    /// Image URLs of the three largest coins in the category
    #[serde(default)]
    pub top_3_coins: Vec<String>,
    pub volume_24h: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
}
