use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::ProfileRecord,
    error::FailureReason,
    protocol::{SearchQuery, SearchResponse, SEARCH_PATH},
};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search backend url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("search request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("search backend returned HTTP {0}")]
    Status(StatusCode),
    #[error("search response is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<&SearchError> for FailureReason {
    fn from(value: &SearchError) -> Self {
        match value {
            SearchError::InvalidBaseUrl { .. } | SearchError::Transport(_) => {
                FailureReason::Transport
            }
            SearchError::Status(status) => FailureReason::Status(status.as_u16()),
            SearchError::Decode(_) => FailureReason::Decode,
        }
    }
}

/// Anything that can answer a profile search. The desktop app talks to
/// [`SearchClient`]; tests substitute their own backends.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, question: &str) -> Result<Vec<ProfileRecord>, SearchError>;
}

#[derive(Debug, Clone, Default)]
pub struct SearchClientOptions {
    /// Per-request timeout. `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

/// HTTP client for `GET {base_url}/api/search?question=...`.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        Self::with_options(base_url, SearchClientOptions::default())
    }

    pub fn with_options(base_url: &str, options: SearchClientOptions) -> Result<Self, SearchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(SearchError::Transport)?;
        Self::with_http_client(base_url, http)
    }

    pub fn with_http_client(base_url: &str, http: Client) -> Result<Self, SearchError> {
        Ok(Self {
            http,
            endpoint: search_endpoint(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn search(&self, question: &str) -> Result<Vec<ProfileRecord>, SearchError> {
        debug!(endpoint = %self.endpoint, question, "sending search request");
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&SearchQuery {
                question: question.to_string(),
            })
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, question, "search backend rejected request");
            return Err(SearchError::Status(status));
        }

        let body = response.bytes().await.map_err(SearchError::Transport)?;
        let parsed: SearchResponse = serde_json::from_slice(&body).map_err(SearchError::Decode)?;
        let results = parsed.into_results();
        info!(count = results.len(), question, "search completed");
        Ok(results)
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(&self, question: &str) -> Result<Vec<ProfileRecord>, SearchError> {
        SearchClient::search(self, question).await
    }
}

fn search_endpoint(base_url: &str) -> Result<Url, SearchError> {
    let invalid = |reason: String| SearchError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut base = Url::parse(base_url.trim()).map_err(|err| invalid(err.to_string()))?;
    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        return Err(invalid("expected an http or https url".to_string()));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    base.set_fragment(None);

    base.join(SEARCH_PATH).map_err(|err| invalid(err.to_string()))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
