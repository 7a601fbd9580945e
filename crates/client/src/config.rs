/// Client configuration loaded from environment variables.
///
/// Resolved once by the process entry point and handed to
/// [`FeedbackApi::from_config`](crate::FeedbackApi::from_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the feedback API, without a trailing slash.
    pub api_base: String,
    /// Per-request HTTP timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: normalize_base(api_base.into())?,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `API_BASE_URL`         | --      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_base(None)
    }

    /// Like [`from_env`](Self::from_env), but an explicit `api_base` takes
    /// precedence over `API_BASE_URL`.
    pub fn from_env_with_base(api_base: Option<String>) -> Result<Self, ConfigError> {
        let api_base = match api_base {
            Some(base) => base,
            None => std::env::var("API_BASE_URL").map_err(|_| ConfigError::Missing("API_BASE_URL"))?,
        };
        let request_timeout_secs = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base: normalize_base(api_base)?,
            request_timeout_secs,
        })
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

fn normalize_base(raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            name: "API_BASE_URL",
            expected: "an http(s) URL",
            value: raw,
        });
    }
    Ok(trimmed.to_string())
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::Invalid {
            name: "REQUEST_TIMEOUT_SECS",
            expected: "a positive integer",
            value: raw.to_string(),
        }),
    }
}
