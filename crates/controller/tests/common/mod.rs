//! Shared fakes for controller integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::{oneshot, Notify};
use tokio::time::Instant;

use intake_client::{ApiError, FeedbackBackend};
use intake_controller::{FormController, NotificationSink};
use intake_core::{
    FeedbackRecord, FeedbackSubmission, FormField, FormValues, RecordId, SearchQuery, Variant,
};

// ---------------------------------------------------------------------------
// Fake backend
// ---------------------------------------------------------------------------

/// Scriptable in-memory feedback API.
///
/// Calls can be held open with [`hold_submit`](Self::hold_submit) /
/// [`hold_retrieve`](Self::hold_retrieve) to control the order in which
/// responses resolve.
#[derive(Default)]
pub struct FakeBackend {
    submit_results: Mutex<VecDeque<Result<Value, u16>>>,
    submit_gate: Mutex<Option<oneshot::Receiver<()>>>,
    records: Mutex<HashMap<String, Result<Vec<FeedbackRecord>, u16>>>,
    retrieve_gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    pub submissions: Mutex<Vec<(Variant, FeedbackSubmission)>>,
    pub queries: Mutex<Vec<SearchQuery>>,
    /// Notified each time a call enters the backend.
    pub started: Notify,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next submit; `Err` carries an HTTP status.
    pub fn respond_submit(&self, result: Result<Value, u16>) {
        self.submit_results.lock().unwrap().push_back(result);
    }

    /// Hold the next submit open until the returned sender fires.
    pub fn hold_submit(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.submit_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn set_records(&self, value: &str, records: Vec<FeedbackRecord>) {
        self.records
            .lock()
            .unwrap()
            .insert(value.to_string(), Ok(records));
    }

    pub fn fail_retrieve(&self, value: &str, status: u16) {
        self.records
            .lock()
            .unwrap()
            .insert(value.to_string(), Err(status));
    }

    /// Hold searches for `value` open until the returned sender fires.
    pub fn hold_retrieve(&self, value: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.retrieve_gates
            .lock()
            .unwrap()
            .insert(value.to_string(), rx);
        tx
    }

    pub fn submit_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

fn status_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        body: "scripted failure".to_string(),
    }
}

#[async_trait]
impl FeedbackBackend for FakeBackend {
    async fn submit(
        &self,
        variant: Variant,
        submission: &FeedbackSubmission,
    ) -> Result<Value, ApiError> {
        self.submissions
            .lock()
            .unwrap()
            .push((variant, submission.clone()));
        let gate = self.submit_gate.lock().unwrap().take();
        self.started.notify_one();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let scripted = self.submit_results.lock().unwrap().pop_front();
        match scripted.unwrap_or_else(|| Ok(json!({ "id": 1 }))) {
            Ok(body) => Ok(body),
            Err(status) => Err(status_error(status)),
        }
    }

    async fn retrieve(&self, query: &SearchQuery) -> Result<Vec<FeedbackRecord>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        let gate = self.retrieve_gates.lock().unwrap().remove(&query.value);
        self.started.notify_one();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let result = self.records.lock().unwrap().get(&query.value).cloned();
        match result.unwrap_or_else(|| Ok(Vec::new())) {
            Ok(records) => Ok(records),
            Err(status) => Err(status_error(status)),
        }
    }
}

// ---------------------------------------------------------------------------
// Recording sink
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkEvent {
    Show,
    Hide,
}

/// Notification sink that records every call with its (tokio) time.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(Instant, SinkEvent)>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<(Instant, SinkEvent)> {
        self.events.lock().unwrap().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.events
            .lock()
            .unwrap()
            .last()
            .is_some_and(|(_, event)| *event == SinkEvent::Show)
    }

    pub fn count(&self, kind: SinkEvent) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, event)| *event == kind)
            .count()
    }

    pub fn hide_times(&self) -> Vec<Instant> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, event)| *event == SinkEvent::Hide)
            .map(|(at, _)| *at)
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn show(&self) {
        self.events
            .lock()
            .unwrap()
            .push((Instant::now(), SinkEvent::Show));
    }

    fn hide(&self) {
        self.events
            .lock()
            .unwrap()
            .push((Instant::now(), SinkEvent::Hide));
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Values that satisfy the school policy (and therefore both policies).
pub fn complete_values() -> FormValues {
    FormValues {
        student_name: "Ishaan Rao".into(),
        father_details: "Prakash, farmer".into(),
        mother_details: "Sunita, nurse".into(),
        contact_number: "9988776655".into(),
        address: "7 Temple Road, Mysuru".into(),
        school_name: "Sacred Heart".into(),
        interested_online: Some(true),
        demo_date: "2024-10-05".into(),
        sales_ref_name: "Priya".into(),
    }
}

pub fn record(id: i64, name: &str) -> FeedbackRecord {
    FeedbackRecord {
        id: RecordId::Number(id),
        student_name: Some(name.to_string()),
        father_details: None,
        mother_details: None,
        contact_number: Some("9000000000".into()),
        address: None,
        school_name: None,
        interested_online: Some(false),
        demo_date: None,
        sales_ref_name: None,
    }
}

/// Type every value into the controller, field by field.
pub fn fill(controller: &FormController, values: &FormValues) {
    for field in FormField::ALL {
        match values.text(field) {
            Some(text) => controller.set_field(field, text).unwrap(),
            None => controller.set_interested_online(values.interested_online),
        }
    }
}
