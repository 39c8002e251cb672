//! Test utilities for dispatch operations.
//!
//! This module provides [`StubTransport`], a deterministic test double for
//! [`Transport`] that replays pre-configured responses and records every call
//! without touching the network.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use dispatch_core::Credentials;

use crate::transport::{Method, Transport, TransportError};

/// A call observed by [`StubTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// User name from the credentials.
    pub user: String,
    /// HTTP method.
    pub method: Method,
    /// Endpoint path.
    pub path: String,
    /// Request body, if any.
    pub body: Option<Vec<u8>>,
}

impl RecordedCall {
    /// Request body as UTF-8 text.
    #[must_use]
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Stub [`Transport`] for testing.
///
/// Responses are replayed in the order they were queued; once the queue is
/// exhausted every call answers with an empty body.
///
/// # Example
///
/// ```
/// use dispatch_client::test_support::StubTransport;
/// use dispatch_client::{Method, Transport};
/// use dispatch_core::Credentials;
///
/// let transport = StubTransport::new().with_body("[]");
/// let body = transport.send(&Credentials::new("u"), Method::Get, "/stops/", None)?;
///
/// assert_eq!(body, b"[]");
/// assert_eq!(transport.calls().len(), 1);
/// # Ok::<(), dispatch_client::TransportError>(())
/// ```
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    /// Create a transport that answers every call with an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    #[must_use]
    pub fn with_body(self, body: impl Into<Vec<u8>>) -> Self {
        self.push(Ok(body.into()));
        self
    }

    /// Queue a transport failure.
    #[must_use]
    pub fn with_error(self, error: TransportError) -> Self {
        self.push(Err(error));
        self
    }

    /// Queue a response on a shared transport.
    pub fn push(&self, response: Result<Vec<u8>, TransportError>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    /// Calls observed so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for StubTransport {
    fn send(
        &self,
        credentials: &Credentials,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<Vec<u8>, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                user: credentials.user().to_owned(),
                method,
                path: path.to_owned(),
                body: body.map(<[u8]>::to_vec),
            });
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
