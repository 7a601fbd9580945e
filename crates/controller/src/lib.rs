//! Form submission and retrieval controllers.
//!
//! [`FormController`] owns one intake form's values and its single
//! in-flight submission; [`RetrievalController`] owns one search and
//! guarantees last-request-wins ordering. Both are driven by discrete
//! events (input, network response, timer) and never hold their state
//! lock across an await point.

pub mod form;
pub mod notify;
pub mod retrieval;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use form::{FormController, SubmissionState, SubmitOutcome, STATUS_FAILURE, STATUS_SUCCESS};
pub use notify::{NotificationSink, Notifier, DISMISS_DELAY};
pub use retrieval::{QueryState, RetrievalController, SearchOutcome, LOAD_FAILURE_MESSAGE};

/// Lock controller state. A panic while holding the lock cannot leave the
/// state half-written (every critical section is a plain assignment), so a
/// poisoned lock is recovered rather than propagated.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
