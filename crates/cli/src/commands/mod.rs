//! Subcommand handlers

use std::sync::Arc;

use anyhow::Context;

use intake_client::{ClientConfig, FeedbackApi, FeedbackBackend};

pub mod fields;
pub mod retrieve;
pub mod submit;

/// Resolve the API configuration and build the HTTP backend.
pub fn backend(api_base: Option<String>) -> anyhow::Result<Arc<dyn FeedbackBackend>> {
    let config = ClientConfig::from_env_with_base(api_base)?;
    tracing::debug!(api_base = %config.api_base, timeout_secs = config.request_timeout_secs, "Using feedback API");

    let api = FeedbackApi::from_config(&config).context("Failed to build HTTP client")?;
    Ok(Arc::new(api))
}
