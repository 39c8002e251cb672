use thiserror::Error;

use super::Method;

/// Errors from [`Transport::send`](super::Transport::send).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be built (bad header, malformed URL).
    #[error("cannot build {method} request for {url}: {message}")]
    Request {
        /// Method of the failed request.
        method: Method,
        /// Full request URL.
        url: String,
        /// Underlying error description.
        message: String,
    },
    /// Connecting or exchanging the request failed.
    #[error("{method} {url} failed: {message}")]
    Network {
        /// Method of the failed request.
        method: Method,
        /// Full request URL.
        url: String,
        /// Underlying error description.
        message: String,
    },
    /// No response arrived within the configured timeout.
    #[error("{method} {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Method of the failed request.
        method: Method,
        /// Full request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// A response arrived but its body could not be read.
    #[error("cannot read response body of {method} {url}: {message}")]
    Body {
        /// Method of the failed request.
        method: Method,
        /// Full request URL.
        url: String,
        /// Underlying error description.
        message: String,
    },
}

impl TransportError {
    /// True when another attempt could succeed.
    ///
    /// Only failures that happen before a response is received qualify. Once
    /// the backend has answered, resending could apply the request twice.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}
