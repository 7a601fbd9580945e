//! REST client for the remote feedback-storage API.
//!
//! Provides the environment-driven [`ClientConfig`], the reqwest-backed
//! [`FeedbackApi`], and the [`FeedbackBackend`] trait the controllers are
//! written against.

pub mod api;
pub mod backend;
pub mod config;

pub use api::{ApiError, FeedbackApi};
pub use backend::FeedbackBackend;
pub use config::{ClientConfig, ConfigError};
