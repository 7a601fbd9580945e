//! REST API client for the feedback-storage endpoints.
//!
//! Wraps `POST /feedback/{variant}` and `GET /retrieve/feedback/{variant}`
//! using [`reqwest`].

use std::time::Duration;

use intake_core::{FeedbackRecord, FeedbackSubmission, SearchQuery, Variant};

use crate::config::ClientConfig;

/// Variant whose records the retrieval endpoint serves.
pub const RETRIEVE_VARIANT: Variant = Variant::School;

/// HTTP client for one feedback API deployment.
#[derive(Debug, Clone)]
pub struct FeedbackApi {
    client: reqwest::Client,
    api_base: String,
}

/// Errors from the feedback REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Feedback API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response whose body is not the expected JSON shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FeedbackApi {
    /// Create a client with default reqwest settings.
    ///
    /// * `api_base` - Base HTTP URL without trailing slash, e.g. `http://host:5000`.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    /// Create a client honoring the configured request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.api_base.clone()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Submit one feedback record.
    ///
    /// Sends `POST /feedback/{variant}`. Any 2xx is a success; the body is
    /// returned as JSON when it parses, otherwise as a JSON string.
    pub async fn submit_feedback(
        &self,
        variant: Variant,
        submission: &FeedbackSubmission,
    ) -> Result<serde_json::Value, ApiError> {
        tracing::debug!(%variant, "POST feedback");
        let response = self
            .client
            .post(format!("{}/feedback/{}", self.api_base, variant.endpoint_suffix()))
            .json(submission)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }

    /// Fetch the records matching `query`.
    ///
    /// Sends `GET /retrieve/feedback/school?field=..&value=..`. The server
    /// decides matching and order; an empty array is a valid result.
    pub async fn retrieve_feedback(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<FeedbackRecord>, ApiError> {
        tracing::debug!(field = %query.field, "GET feedback records");
        let response = self
            .client
            .get(format!(
                "{}/retrieve/feedback/{}",
                self.api_base,
                RETRIEVE_VARIANT.endpoint_suffix()
            ))
            .query(&[("field", query.field.as_str()), ("value", query.value.as_str())])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Feedback API returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
