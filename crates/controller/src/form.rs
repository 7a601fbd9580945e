//! Intake form controller.
//!
//! One controller type serves both form variants; the variant is carried
//! by the [`ValidationPolicy`] it is constructed with. Lifecycle:
//!
//! ```text
//! Idle --submit(valid)--> Submitting --2xx--> Succeeded --edit/reset--> Idle
//!                              \------error--> Failed    --reset------> Idle
//! ```
//!
//! An invalid submit leaves the state untouched.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use intake_client::FeedbackBackend;
use intake_core::validation::policy::MSG_DEMO_DATE_INVALID;
use intake_core::validation::{evaluate_policy, RuleType};
use intake_core::{
    CoreError, FieldViolation, FormField, FormValues, ValidationPolicy, ValidationResult, Variant,
};

use crate::lock;
use crate::notify::{NotificationSink, Notifier};

pub const STATUS_SUCCESS: &str = "Form submitted successfully!";
pub const STATUS_FAILURE: &str = "Failed to submit form.";

/// Where the form is in its single-submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of one [`FormController::submit`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(ValidationResult),
    /// Another submission is still in flight; nothing was sent.
    Busy,
    /// The API accepted the record. Carries the response body.
    Succeeded(serde_json::Value),
    /// The API rejected the record or could not be reached.
    Failed,
    /// The controller was torn down before the response was applied.
    Discarded,
}

struct FormState {
    values: FormValues,
    touched: BTreeSet<FormField>,
    submission: SubmissionState,
    status: Option<&'static str>,
}

impl FormState {
    fn initial() -> Self {
        Self {
            values: FormValues::default(),
            touched: BTreeSet::new(),
            submission: SubmissionState::Idle,
            status: None,
        }
    }
}

/// Returns the form to `Idle` if the submit future is dropped before a
/// response is applied, so a cancelled submit never leaves it locked.
struct InFlight<'a> {
    state: &'a Mutex<FormState>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        if state.submission == SubmissionState::Submitting {
            tracing::debug!("Submission dropped before completion, form unlocked");
            state.submission = SubmissionState::Idle;
        }
    }
}

/// Owns one mounted intake form.
pub struct FormController {
    policy: ValidationPolicy,
    backend: Arc<dyn FeedbackBackend>,
    notifier: Notifier,
    state: Mutex<FormState>,
    cancel: CancellationToken,
}

impl FormController {
    pub fn new(
        policy: ValidationPolicy,
        backend: Arc<dyn FeedbackBackend>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let cancel = CancellationToken::new();
        Self {
            policy,
            backend,
            notifier: Notifier::new(sink, cancel.child_token()),
            state: Mutex::new(FormState::initial()),
            cancel,
        }
    }

    /// Controller using the built-in policy of `variant`.
    pub fn for_variant(
        variant: Variant,
        backend: Arc<dyn FeedbackBackend>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self::new(variant.policy(), backend, sink)
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn variant(&self) -> Variant {
        self.policy.variant()
    }

    // ---- input ----

    /// Update one field from raw input and mark it touched.
    ///
    /// The first edit after a successful submission starts a new entry and
    /// returns the controller to [`SubmissionState::Idle`].
    pub fn set_field(&self, field: FormField, raw: &str) -> Result<(), CoreError> {
        let mut state = lock(&self.state);
        state.values.set(field, raw)?;
        state.touched.insert(field);
        if state.submission == SubmissionState::Succeeded {
            state.submission = SubmissionState::Idle;
        }
        Ok(())
    }

    /// [`set_field`](Self::set_field) by field name.
    pub fn set_field_by_name(&self, name: &str, raw: &str) -> Result<(), CoreError> {
        self.set_field(name.parse()?, raw)
    }

    /// Set the online-interest selector directly; `None` is the placeholder.
    pub fn set_interested_online(&self, choice: Option<bool>) {
        let mut state = lock(&self.state);
        state.values.interested_online = choice;
        state.touched.insert(FormField::InterestedOnline);
    }

    /// Restore initial values and return to [`SubmissionState::Idle`].
    ///
    /// Ignored while a submission is in flight.
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        if state.submission == SubmissionState::Submitting {
            return;
        }
        *state = FormState::initial();
    }

    // ---- read side ----

    pub fn values(&self) -> FormValues {
        lock(&self.state).values.clone()
    }

    pub fn state(&self) -> SubmissionState {
        lock(&self.state).submission
    }

    /// Whether a new submit would be accepted.
    pub fn can_submit(&self) -> bool {
        self.state() != SubmissionState::Submitting
    }

    /// Outcome text of the last resolved submission.
    pub fn status_text(&self) -> Option<&'static str> {
        lock(&self.state).status
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        lock(&self.state).touched.contains(&field)
    }

    /// Apply the active policy to `values`. Pure; never calls the network.
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        evaluate_policy(&self.policy, values)
    }

    /// Every current violation, touched or not.
    pub fn errors(&self) -> ValidationResult {
        let values = self.values();
        self.validate(&values)
    }

    /// Violations of touched fields only -- what a form displays.
    pub fn visible_errors(&self) -> ValidationResult {
        let state = lock(&self.state);
        self.validate(&state.values)
            .filtered(|field| state.touched.contains(&field))
    }

    // ---- submission ----

    /// Validate and, when valid, send the current values.
    ///
    /// At most one submission is in flight per controller; concurrent
    /// calls return [`SubmitOutcome::Busy`]. On success the form is reset
    /// and the success banner shown; on failure the values are kept.
    /// Dropping the returned future mid-flight returns the form to
    /// [`SubmissionState::Idle`].
    pub async fn submit(&self) -> SubmitOutcome {
        let variant = self.variant();

        let submission = {
            let mut state = lock(&self.state);
            if state.submission == SubmissionState::Submitting {
                tracing::debug!(%variant, "Submit ignored, submission already in flight");
                return SubmitOutcome::Busy;
            }

            let result = self.validate(&state.values);
            if !result.is_valid() {
                state.touched.extend(FormField::ALL);
                tracing::debug!(%variant, errors = result.len(), "Submit blocked by validation");
                return SubmitOutcome::Invalid(result);
            }

            let submission = match state.values.to_submission() {
                Ok(submission) => submission,
                Err(e) => {
                    // Reachable only with a custom policy lacking a date rule.
                    tracing::warn!(%variant, error = %e, "Submit blocked by unparseable date");
                    state.touched.insert(FormField::DemoDate);
                    return SubmitOutcome::Invalid(ValidationResult::from_iter([FieldViolation {
                        field: FormField::DemoDate,
                        rule_type: RuleType::DateFormat,
                        message: MSG_DEMO_DATE_INVALID.to_string(),
                    }]));
                }
            };

            state.submission = SubmissionState::Submitting;
            submission
        };

        let _in_flight = InFlight { state: &self.state };
        tracing::info!(%variant, "Submitting feedback");

        let response = tokio::select! {
            _ = self.cancel.cancelled() => {
                tracing::debug!(%variant, "Submission abandoned on teardown");
                return SubmitOutcome::Discarded;
            }
            response = self.backend.submit(variant, &submission) => response,
        };

        if self.cancel.is_cancelled() {
            return SubmitOutcome::Discarded;
        }

        match response {
            Ok(body) => {
                tracing::info!(%variant, "Feedback submitted");
                {
                    let mut state = lock(&self.state);
                    state.values = FormValues::default();
                    state.touched.clear();
                    state.submission = SubmissionState::Succeeded;
                    state.status = Some(STATUS_SUCCESS);
                }
                self.notifier.show_success();
                SubmitOutcome::Succeeded(body)
            }
            Err(e) => {
                tracing::error!(%variant, error = %e, "Failed to submit feedback");
                {
                    let mut state = lock(&self.state);
                    state.submission = SubmissionState::Failed;
                    state.status = Some(STATUS_FAILURE);
                }
                self.notifier.dismiss();
                SubmitOutcome::Failed
            }
        }
    }

    /// Tear the form down: pending banner timers are cancelled and an
    /// in-flight response is discarded instead of applied.
    pub fn teardown(&self) {
        self.notifier.shutdown();
        self.cancel.cancel();
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
