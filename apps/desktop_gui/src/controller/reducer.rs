//! Search widget state and its transitions.
//!
//! The egui update loop is the only writer. Every submission bumps a
//! generation counter and only the settlement tagged with the current
//! generation is applied, so an older response that arrives late cannot
//! overwrite a newer one.

use shared::{
    domain::ProfileRecord,
    error::{FailureReason, NO_RESULTS_MESSAGE},
};

use crate::controller::events::{SearchOutcome, UiEvent};

pub const SEARCH_LABEL: &str = "🔍 Search";
pub const SEARCHING_LABEL: &str = "Searching...";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    /// A request is in flight. The last result set stays visible meanwhile.
    Loading { previous: Vec<ProfileRecord> },
    Success(Vec<ProfileRecord>),
    Empty,
    Failed(FailureReason),
}

/// How the user asked for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTrigger {
    Button,
    EnterKey,
}

/// A submission accepted by [`SearchWidgetState::begin_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub question: String,
}

/// Soft or hard message shown in the error block under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNotice {
    NoResults,
    Failed(FailureReason),
}

impl SearchNotice {
    pub fn message(&self) -> &'static str {
        match self {
            SearchNotice::NoResults => NO_RESULTS_MESSAGE,
            SearchNotice::Failed(reason) => reason.user_message(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SearchWidgetState {
    query: String,
    request: RequestState,
    generation: u64,
}

impl SearchWidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer bound to the text input; edited on every keystroke.
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.request, RequestState::Loading { .. })
    }

    pub fn action_label(&self) -> &'static str {
        if self.is_loading() {
            SEARCHING_LABEL
        } else {
            SEARCH_LABEL
        }
    }

    /// The search button is disabled while a request is in flight.
    pub fn action_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn results(&self) -> &[ProfileRecord] {
        match &self.request {
            RequestState::Success(results) => results,
            RequestState::Loading { previous } => previous,
            RequestState::Idle | RequestState::Empty | RequestState::Failed(_) => &[],
        }
    }

    pub fn notice(&self) -> Option<SearchNotice> {
        match self.request {
            RequestState::Empty => Some(SearchNotice::NoResults),
            RequestState::Failed(reason) => Some(SearchNotice::Failed(reason)),
            _ => None,
        }
    }

    /// Starts a search for the current query.
    ///
    /// Returns `None` without touching any state when the query is blank, or
    /// when the button is pressed while loading. Enter while loading is
    /// accepted and supersedes the in-flight request.
    pub fn begin_search(&mut self, trigger: SearchTrigger) -> Option<SearchTicket> {
        if self.query.trim().is_empty() {
            return None;
        }
        if trigger == SearchTrigger::Button && self.is_loading() {
            tracing::debug!("ignoring search button while a request is in flight");
            return None;
        }

        let previous = match std::mem::take(&mut self.request) {
            RequestState::Success(results) => results,
            RequestState::Loading { previous } => previous,
            RequestState::Idle | RequestState::Empty | RequestState::Failed(_) => Vec::new(),
        };
        self.generation += 1;
        self.request = RequestState::Loading { previous };

        tracing::debug!(
            generation = self.generation,
            ?trigger,
            "search started"
        );
        Some(SearchTicket {
            generation: self.generation,
            question: self.query.clone(),
        })
    }

    /// Applies the outcome of the request tagged `generation`. Returns `false`
    /// when the outcome belongs to a superseded request and was dropped.
    pub fn settle(&mut self, generation: u64, outcome: SearchOutcome) -> bool {
        if generation != self.generation || !self.is_loading() {
            tracing::debug!(
                generation,
                current = self.generation,
                "dropping stale search outcome"
            );
            return false;
        }

        self.request = match outcome {
            Ok(results) if results.is_empty() => RequestState::Empty,
            Ok(results) => RequestState::Success(results),
            Err(reason) => RequestState::Failed(reason),
        };
        true
    }
}

/// Folds one backend event into the widget state.
pub fn apply_event(state: &mut SearchWidgetState, event: UiEvent) {
    match event {
        UiEvent::SearchSettled {
            generation,
            outcome,
        } => {
            state.settle(generation, outcome);
        }
        UiEvent::BackendUnavailable(reason) => {
            tracing::error!(%reason, "search backend worker unavailable");
            if state.is_loading() {
                let generation = state.generation();
                state.settle(generation, Err(FailureReason::Queue));
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
