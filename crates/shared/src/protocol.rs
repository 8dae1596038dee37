use serde::{Deserialize, Serialize};

use crate::domain::ProfileRecord;

/// Path of the search endpoint relative to the backend base URL.
pub const SEARCH_PATH: &str = "api/search";

/// Query string of `GET /api/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    pub question: String,
}

/// Body of a successful search response. A missing or null `results`
/// member is an empty result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ProfileRecord>>,
}

impl SearchResponse {
    pub fn into_results(self) -> Vec<ProfileRecord> {
        self.results.unwrap_or_default()
    }
}
