//! Connection settings for [`HttpTransport`](crate::HttpTransport).

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default user agent for backend requests.
pub const DEFAULT_USER_AGENT: &str = "dispatch-client/0.1";

/// Default overall request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default pause before the single retry, in milliseconds.
const DEFAULT_RETRY_BACKOFF_MILLIS: u64 = 2_000;

/// Error type for [`HttpTransport`](crate::HttpTransport) construction failures.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The base URL is not an absolute `http` or `https` URL.
    #[error("invalid base URL {base_url:?}: {reason}")]
    InvalidBaseUrl {
        /// URL as supplied by the caller.
        base_url: String,
        /// Why the URL was rejected.
        reason: String,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`HttpTransport`](crate::HttpTransport).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use dispatch_client::ClientConfig;
///
/// let config = ClientConfig::new("http://dispatch.example.com:8080")
///     .with_timeout(Duration::from_secs(10))
///     .with_retry_backoff(Duration::from_millis(500));
/// assert_eq!(config.timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the dispatch backend (e.g., `"http://localhost:8080"`).
    pub base_url: String,
    /// Overall timeout for one attempt, connect through body.
    pub timeout: Duration,
    /// Pause between a failed attempt and its retry.
    pub retry_backoff: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MILLIS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pause before retrying a failed attempt.
    #[must_use]
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the base URL and return it without a trailing slash.
    pub(crate) fn validated_base_url(&self) -> Result<String, ClientBuildError> {
        let invalid = |reason: String| ClientBuildError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason,
        };
        let parsed = Url::parse(self.base_url.trim()).map_err(|err| invalid(err.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_owned()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_owned()));
        }
        Ok(parsed.as_str().trim_end_matches('/').to_owned())
    }
}
