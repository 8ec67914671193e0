//! Query parameter encoding
//!
//! Converts typed call arguments into the query strings the API expects:
//! comma-joined lists (omitted when empty), `true`/`false` booleans and a
//! clamped `per_page`.

use crate::error::{RestError, RestResult};

/// `per_page` used when the caller's value is out of range
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Largest `per_page` the API accepts
pub const MAX_PER_PAGE: u32 = 250;

/// Clamp a page size to [1, 250], substituting the default outside that range
pub fn clamp_per_page(per_page: i64) -> u32 {
    if (1..=MAX_PER_PAGE as i64).contains(&per_page) {
        per_page as u32
    } else {
        DEFAULT_PER_PAGE
    }
}

/// Boolean as the literal token the API expects
pub fn encode_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Fail with the names of every required field that is blank
pub fn require(fields: &[(&'static str, &str)]) -> RestResult<()> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RestError::missing(missing))
    }
}

/// Ordered list of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key, value.into()));
        self
    }

    pub fn push_opt(&mut self, key: &'static str, value: Option<impl Into<String>>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn push_bool(&mut self, key: &'static str, value: bool) -> &mut Self {
        self.push(key, encode_bool(value))
    }

    /// Comma-join `items` in order; nothing is added for an empty list
    pub fn push_list<I, S>(&mut self, key: &'static str, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = items
            .into_iter()
            .map(|item| item.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");

        if !joined.is_empty() {
            self.push(key, joined);
        }
        self
    }

    pub fn push_per_page(&mut self, per_page: i64) -> &mut Self {
        self.push("per_page", clamp_per_page(per_page).to_string())
    }

    /// Page numbers pass through untouched; the API treats `<= 0` as page 1
    pub fn push_page(&mut self, page: i64) -> &mut Self {
        self.push("page", page.to_string())
    }

    /// Value of the first parameter named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` form of the parameters
    pub fn encode(&self) -> RestResult<String> {
        serde_urlencoded::to_string(&self.pairs).map_err(|e| RestError::InvalidParameter(e.to_string()))
    }
}
