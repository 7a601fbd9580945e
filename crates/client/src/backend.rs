//! The seam between the controllers and the remote API.

use async_trait::async_trait;
use intake_core::{FeedbackRecord, FeedbackSubmission, SearchQuery, Variant};

use crate::api::{ApiError, FeedbackApi};

/// Remote feedback storage as seen by the controllers.
///
/// Implemented by [`FeedbackApi`]; tests substitute in-memory fakes to
/// control response timing.
#[async_trait]
pub trait FeedbackBackend: Send + Sync {
    /// Store one record for the given form variant.
    async fn submit(
        &self,
        variant: Variant,
        submission: &FeedbackSubmission,
    ) -> Result<serde_json::Value, ApiError>;

    /// Fetch records matching the query, in server order.
    async fn retrieve(&self, query: &SearchQuery) -> Result<Vec<FeedbackRecord>, ApiError>;
}

#[async_trait]
impl FeedbackBackend for FeedbackApi {
    async fn submit(
        &self,
        variant: Variant,
        submission: &FeedbackSubmission,
    ) -> Result<serde_json::Value, ApiError> {
        self.submit_feedback(variant, submission).await
    }

    async fn retrieve(&self, query: &SearchQuery) -> Result<Vec<FeedbackRecord>, ApiError> {
        self.retrieve_feedback(query).await
    }
}
