//! Feedback retrieval controller.
//!
//! Every search takes a new generation number before it suspends on the
//! network. When the response arrives, it is applied only if its
//! generation is still the newest one issued; otherwise it is dropped.
//! This gives last-request-wins ordering no matter how responses
//! interleave.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use intake_client::FeedbackBackend;
use intake_core::{CoreError, FeedbackRecord, SearchField, SearchQuery};

use crate::lock;

/// The only failure text shown to users; transport detail is logged.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load data";

/// Lifecycle of the current search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryState {
    Idle,
    Loading {
        query: SearchQuery,
    },
    Succeeded {
        query: SearchQuery,
        /// Server order, never re-sorted.
        records: Vec<FeedbackRecord>,
    },
    Failed {
        query: SearchQuery,
        message: String,
    },
}

/// Result of one [`RetrievalController::search`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The response was applied; carries the records now displayed.
    Loaded(Vec<FeedbackRecord>),
    /// The request failed; the controller is in [`QueryState::Failed`].
    Failed,
    /// A newer search was issued meanwhile; this response was dropped.
    Superseded,
    /// The controller was torn down; this response was dropped.
    Discarded,
}

struct RetrievalState {
    pending_field: String,
    pending_value: String,
    query: QueryState,
    generation: u64,
}

/// Owns one search form and its result table.
pub struct RetrievalController {
    backend: Arc<dyn FeedbackBackend>,
    state: Mutex<RetrievalState>,
    cancel: CancellationToken,
}

impl RetrievalController {
    pub fn new(backend: Arc<dyn FeedbackBackend>) -> Self {
        Self {
            backend,
            state: Mutex::new(RetrievalState {
                pending_field: String::new(),
                pending_value: String::new(),
                query: QueryState::Idle,
                generation: 0,
            }),
            cancel: CancellationToken::new(),
        }
    }

    /// Update the pending query exactly as entered. Checked by
    /// [`search`](Self::search).
    pub fn set_query(&self, field: impl Into<String>, value: impl Into<String>) {
        let mut state = lock(&self.state);
        state.pending_field = field.into();
        state.pending_value = value.into();
    }

    pub fn set_search_field(&self, field: SearchField) {
        lock(&self.state).pending_field = field.as_str().to_string();
    }

    pub fn set_search_value(&self, value: impl Into<String>) {
        lock(&self.state).pending_value = value.into();
    }

    /// The pending `(field, value)` as entered.
    pub fn pending_query(&self) -> (String, String) {
        let state = lock(&self.state);
        (state.pending_field.clone(), state.pending_value.clone())
    }

    pub fn state(&self) -> QueryState {
        lock(&self.state).query.clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(lock(&self.state).query, QueryState::Loading { .. })
    }

    /// Records of the last successful search; empty in every other state.
    pub fn records(&self) -> Vec<FeedbackRecord> {
        match &lock(&self.state).query {
            QueryState::Succeeded { records, .. } => records.clone(),
            _ => Vec::new(),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match &lock(&self.state).query {
            QueryState::Failed { message, .. } => Some(message.clone()),
            _ => None,
        }
    }

    /// Run the pending query.
    ///
    /// Returns `Err` without touching state or the network when the
    /// pending field is not a [`SearchField`] or either part is empty.
    pub async fn search(&self) -> Result<SearchOutcome, CoreError> {
        let (query, generation) = {
            let mut state = lock(&self.state);
            let query = SearchQuery::parse(&state.pending_field, &state.pending_value)?;
            state.generation += 1;
            state.query = QueryState::Loading {
                query: query.clone(),
            };
            (query, state.generation)
        };

        tracing::debug!(field = %query.field, generation, "Searching feedback records");

        let response = tokio::select! {
            _ = self.cancel.cancelled() => return Ok(SearchOutcome::Discarded),
            response = self.backend.retrieve(&query) => response,
        };

        let mut state = lock(&self.state);
        if self.cancel.is_cancelled() {
            return Ok(SearchOutcome::Discarded);
        }
        if state.generation != generation {
            tracing::debug!(
                generation,
                current = state.generation,
                "Dropping superseded search response",
            );
            return Ok(SearchOutcome::Superseded);
        }

        match response {
            Ok(records) => {
                tracing::info!(field = %query.field, count = records.len(), "Feedback records loaded");
                state.query = QueryState::Succeeded {
                    query,
                    records: records.clone(),
                };
                Ok(SearchOutcome::Loaded(records))
            }
            Err(e) => {
                tracing::error!(field = %query.field, error = %e, "Error fetching feedback records");
                state.query = QueryState::Failed {
                    query,
                    message: LOAD_FAILURE_MESSAGE.to_string(),
                };
                Ok(SearchOutcome::Failed)
            }
        }
    }

    /// [`set_query`](Self::set_query) followed by [`search`](Self::search).
    pub async fn search_for(
        &self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<SearchOutcome, CoreError> {
        self.set_query(field, value);
        self.search().await
    }

    /// Tear the controller down; in-flight responses are discarded.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for RetrievalController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
