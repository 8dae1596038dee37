//! Events flowing from the backend worker to the UI thread.

use shared::{domain::ProfileRecord, error::FailureReason};

/// Result of one search as seen by the UI. The transport detail has already
/// been logged by the worker and is reduced to a [`FailureReason`].
pub type SearchOutcome = Result<Vec<ProfileRecord>, FailureReason>;

#[derive(Debug)]
pub enum UiEvent {
    SearchSettled {
        generation: u64,
        outcome: SearchOutcome,
    },
    /// The worker could not start and will not answer any command.
    BackendUnavailable(String),
}
