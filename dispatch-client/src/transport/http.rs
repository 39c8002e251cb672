//! `reqwest`-backed [`Transport`].
//!
//! The [`Transport`] trait is synchronous so operations can be called from
//! plain threads. This transport bridges the async HTTP client to that
//! interface by blocking on a Tokio runtime it owns.

use std::{panic, thread};

use log::warn;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use dispatch_core::Credentials;

use super::retry::retry_once;
use super::{Method, Transport, TransportError};
use crate::config::{ClientBuildError, ClientConfig};

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP transport to the dispatch backend.
///
/// One `reqwest` client is shared by every call, so connections are reused
/// and the transport can be shared across threads behind an `Arc`.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the transport uses its own
/// stored runtime. When called from within a multi-threaded Tokio runtime it
/// uses that runtime's handle with [`tokio::task::block_in_place`]. From
/// within a `current_thread` runtime it drives its own runtime on a scoped
/// thread, since blocking on a runtime from inside another one panics. The
/// caller's runtime is blocked for the duration of the call.
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
    base_url: String,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("base_url", &self.base_url)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Create a transport with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientBuildError> {
        let base_url = config.validated_base_url()?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            base_url,
            runtime,
        })
    }

    /// Validated base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configuration this transport was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Join an endpoint path onto the base URL.
    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send_async(
        &self,
        credentials: &Credentials,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<Vec<u8>, TransportError> {
        let url = self.url_for(path);
        retry_once(self.config.retry_backoff, || {
            self.attempt(credentials, method, &url, body)
        })
        .await
    }

    /// Issue one request and read the whole body.
    async fn attempt(
        &self,
        credentials: &Credentials,
        method: Method,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<Vec<u8>, TransportError> {
        let mut request = self
            .client
            .request(to_reqwest(method), url)
            .basic_auth(credentials.user(), Some(credentials.password()));
        if method.sends_json() {
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        }
        if let Some(bytes) = body {
            request = request.body(bytes.to_vec());
        }

        let response = request
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, method, url))?;

        // The backend reports application errors in the body, so a non-2xx
        // status is noted but the body is still handed to the caller.
        let status = response.status();
        if !status.is_success() {
            warn!("{method} {url} returned HTTP {status}");
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| TransportError::Body {
                method,
                url: url.to_owned(),
                message: err.to_string(),
            })?;
        Ok(bytes.to_vec())
    }

    /// Convert a reqwest error raised before any response arrived.
    fn convert_reqwest_error(
        &self,
        error: &reqwest::Error,
        method: Method,
        url: &str,
    ) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                method,
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if error.is_builder() {
            return TransportError::Request {
                method,
                url: url.to_owned(),
                message: error.to_string(),
            };
        }

        TransportError::Network {
            method,
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

const fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Put => reqwest::Method::PUT,
        Method::Post => reqwest::Method::POST,
    }
}

impl Transport for HttpTransport {
    /// Send a request, retrying once after the configured backoff if no
    /// response could be obtained.
    ///
    /// # Runtime requirements
    ///
    /// Safe to call from plain threads and from inside any Tokio runtime; see
    /// the type-level docs for how each case is driven.
    fn send(
        &self,
        credentials: &Credentials,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<Vec<u8>, TransportError> {
        let future = self.send_async(credentials, method, path, body);
        let outcome = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            Ok(_) => thread::scope(|scope| {
                scope
                    .spawn(move || self.runtime.block_on(future))
                    .join()
                    .unwrap_or_else(|payload| panic::resume_unwind(payload))
            }),
            Err(_) => self.runtime.block_on(future),
        };

        outcome.inspect_err(|err| {
            warn!(
                "request failed after retry: user={} method={} path={} body={}: {err}",
                credentials.user(),
                method,
                path,
                body.map(String::from_utf8_lossy).unwrap_or_default()
            );
        })
    }
}
