//! Authenticated request transport with a single retry.
//!
//! [`Transport`] is the seam between typed operations and the network.
//! [`HttpTransport`] implements it over a shared `reqwest` client; tests use
//! [`StubTransport`](crate::test_support::StubTransport).

mod error;
mod http;
mod retry;

use std::fmt;

use dispatch_core::Credentials;

pub use error::TransportError;
pub use http::HttpTransport;

/// HTTP methods used by the dispatch backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a snapshot.
    Get,
    /// Update an existing entity.
    Put,
    /// Create a new entity.
    Post,
}

impl Method {
    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
        }
    }

    /// True for methods that carry a JSON body.
    #[must_use]
    pub const fn sends_json(self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Send one request to the backend and return the raw response body.
///
/// Implementations retry exactly once on transport-level failure and never
/// retry once a response has been received.
pub trait Transport: Send + Sync {
    /// Send `body` to `path` (relative to the backend base URL).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response could be obtained.
    fn send(
        &self,
        credentials: &Credentials,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<Vec<u8>, TransportError>;
}
