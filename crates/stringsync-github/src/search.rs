use serde::Deserialize;

/// Response from GitHub's code search API.
/// `GET /search/code?q={query}`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<SearchItem>,
}

/// A single code search hit.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub path: String,
}
