//! HTTP integration layer for the fleet dispatch backend.
//!
//! Responsibilities:
//! - Send authenticated requests and retry once on transport failure
//!   ([`transport`]).
//! - Encode entities and classify response bodies ([`codec`]).
//! - Offer typed fetch, update and create operations ([`sync`]).
//!
//! Boundaries:
//! - Domain records and travel time estimates live in `dispatch-core`.
//! - No caching; every call reads or writes a full snapshot.
//!
//! Invariants:
//! - At most two network attempts per call.
//! - No global mutable state; the HTTP client is owned by the transport.
//!
//! # Example
//!
//! ```no_run
//! use dispatch_client::{EntitySync, HttpTransport};
//! use dispatch_core::{Credentials, Request};
//! use dispatch_client::sync::SaveMethod;
//!
//! let sync = EntitySync::new(HttpTransport::new("http://localhost:8080")?);
//! let credentials = Credentials::new("cust12");
//!
//! let created = sync.save_request(SaveMethod::Create, &credentials, &Request::new(1, 2, 10, 50, true))?;
//! let stops = sync.get_locations(&credentials, "/stops/")?;
//! println!("request {} created; {} stops known", created.id, stops.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub mod codec;
mod config;
pub mod sync;
pub mod transport;

#[doc(hidden)]
pub mod test_support;

pub use codec::{CodecError, Entity, EntityKind};
pub use config::{ClientBuildError, ClientConfig, DEFAULT_USER_AGENT};
pub use sync::{Endpoint, EntitySync, SaveMethod, SyncError};
pub use transport::{HttpTransport, Method, Transport, TransportError};
