use thiserror::Error;

/// Shown when a search succeeds with zero records.
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// Shown for every failed search. The underlying cause is logged, not displayed.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to perform search. Please try again.";

/// Why a search did not produce a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("backend unreachable")]
    Transport,
    #[error("backend answered with HTTP {0}")]
    Status(u16),
    #[error("malformed response body")]
    Decode,
    #[error("search could not be queued")]
    Queue,
}

impl FailureReason {
    /// Text the user sees for this failure. Identical for every reason.
    pub fn user_message(&self) -> &'static str {
        SEARCH_FAILED_MESSAGE
    }
}
