//! Typed fetch, update and create operations over a [`Transport`].
//!
//! [`EntitySync`] routes each entity kind to its fixed endpoint, encodes
//! outgoing snapshots and classifies responses. Cab, route and leg updates
//! are fire-and-forget: failures are logged and never reach the caller.

mod endpoint;
mod error;

use std::fmt;
use std::str::FromStr;

use dispatch_core::{Credentials, Leg, Location, Request, Route, Status, Vehicle};
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::codec::{self, CodecError, Entity, EntityKind};
use crate::transport::{Method, Transport};

pub use endpoint::Endpoint;
pub use error::SyncError;

/// How [`EntitySync::save_request`] submits a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveMethod {
    /// `POST`: create a request; the backend answers with the stored record.
    Create,
    /// `PUT`: update a request; the backend answers with an empty body.
    Update,
}

impl SaveMethod {
    /// HTTP method used on the wire.
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::Create => Method::Post,
            Self::Update => Method::Put,
        }
    }
}

impl fmt::Display for SaveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.method(), f)
    }
}

/// Error returned when parsing an unknown [`SaveMethod`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported save method {0:?}; expected POST or PUT")]
pub struct ParseSaveMethodError(String);

impl FromStr for SaveMethod {
    type Err = ParseSaveMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("POST") {
            Ok(Self::Create)
        } else if s.eq_ignore_ascii_case("PUT") {
            Ok(Self::Update)
        } else {
            Err(ParseSaveMethodError(s.to_owned()))
        }
    }
}

/// Typed operations against the dispatch backend.
///
/// # Examples
///
/// ```
/// use dispatch_client::EntitySync;
/// use dispatch_client::test_support::StubTransport;
/// use dispatch_core::{Credentials, status};
///
/// let transport = StubTransport::new().with_body(r#"{"Id":4,"Location":2,"Status":"FREE"}"#);
/// let sync = EntitySync::new(transport);
///
/// let cab = sync.get_vehicle(&Credentials::new("cab4"), "/cabs/")?;
/// assert!(cab.status.is(status::FREE));
/// # Ok::<(), dispatch_client::SyncError>(())
/// ```
#[derive(Debug)]
pub struct EntitySync<T> {
    transport: T,
}

impl<T: Transport> EntitySync<T> {
    /// Wrap a transport.
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Transport used for every call.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the entity of `kind` at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Transport`] when no response arrives,
    /// [`SyncError::EmptyBody`] for an empty body,
    /// [`SyncError::ServerMessage`] for an error envelope and
    /// [`SyncError::Decode`] when the body is not a `kind`.
    pub fn get(
        &self,
        credentials: &Credentials,
        kind: EntityKind,
        path: &str,
    ) -> Result<Entity, SyncError> {
        Ok(match kind {
            EntityKind::Vehicle => Entity::Vehicle(self.get_vehicle(credentials, path)?),
            EntityKind::Request => Entity::Request(self.get_request(credentials, path)?),
            EntityKind::Route => Entity::Route(self.get_route(credentials, path)?),
            EntityKind::Locations => Entity::Locations(self.get_locations(credentials, path)?),
        })
    }

    /// Fetch a single cab.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub fn get_vehicle(&self, credentials: &Credentials, path: &str) -> Result<Vehicle, SyncError> {
        self.fetch(credentials, EntityKind::Vehicle, path)
    }

    /// Fetch a single ride request.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub fn get_request(&self, credentials: &Credentials, path: &str) -> Result<Request, SyncError> {
        self.fetch(credentials, EntityKind::Request, path)
    }

    /// Fetch a single route.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub fn get_route(&self, credentials: &Credentials, path: &str) -> Result<Route, SyncError> {
        self.fetch(credentials, EntityKind::Route, path)
    }

    /// Fetch the stop catalogue.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub fn get_locations(
        &self,
        credentials: &Credentials,
        path: &str,
    ) -> Result<Vec<Location>, SyncError> {
        self.fetch(credentials, EntityKind::Locations, path)
    }

    fn fetch<E: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        kind: EntityKind,
        path: &str,
    ) -> Result<E, SyncError> {
        let body = self.transport.send(credentials, Method::Get, path, None)?;
        codec::decode_as(&body, kind).map_err(|err| {
            if matches!(err, CodecError::Decode { .. }) {
                warn!("cannot decode {kind} from {path}: {err}");
            }
            SyncError::from_codec(err, path)
        })
    }

    /// Push a cab's location and status. Failures are logged, not returned.
    pub fn update_vehicle(
        &self,
        credentials: &Credentials,
        id: i64,
        location: i64,
        status: impl Into<Status>,
    ) {
        let cab = Vehicle::new(id, location, status);
        self.push(credentials, Endpoint::Vehicles, &cab);
    }

    /// Push a full leg snapshot. Failures are logged, not returned.
    pub fn update_leg(&self, credentials: &Credentials, leg: &Leg) {
        self.push(credentials, Endpoint::Legs, leg);
    }

    /// Push a full route snapshot. Failures are logged, not returned.
    pub fn update_route(&self, credentials: &Credentials, route: &Route) {
        self.push(credentials, Endpoint::Routes, route);
    }

    /// Fire-and-forget `PUT` shared by the update operations.
    fn push<E: Serialize>(&self, credentials: &Credentials, endpoint: Endpoint, entity: &E) {
        let path = endpoint.path();
        let payload = match codec::encode(entity) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("{err}; user={} path={path}", credentials.user());
                return;
            }
        };
        debug!(
            "PUT {path} user={} body={}",
            credentials.user(),
            String::from_utf8_lossy(&payload)
        );
        if let Err(err) = self.put_payload(credentials, path, &payload) {
            warn!(
                "update dropped: user={} path={path} body={}: {err}",
                credentials.user(),
                String::from_utf8_lossy(&payload)
            );
        }
    }

    /// `PUT` an encoded snapshot and check the acknowledgement.
    ///
    /// An empty body or any body without the error envelope acknowledges the
    /// update.
    fn put_payload(
        &self,
        credentials: &Credentials,
        path: &str,
        payload: &[u8],
    ) -> Result<(), SyncError> {
        let body = self
            .transport
            .send(credentials, Method::Put, path, Some(payload))?;
        match codec::classify(&body) {
            Ok(_) | Err(CodecError::EmptyBody) => Ok(()),
            Err(err) => Err(SyncError::from_codec(err, path)),
        }
    }

    /// Create (`POST`) or update (`PUT`) a ride request.
    ///
    /// A create returns the stored request as decoded from the response. An
    /// update returns `Request::default()`: the backend acknowledges updates
    /// with an empty body, and any body that is not an error envelope is
    /// accepted as well.
    ///
    /// The HTTP status plays no part in this. An update answered by an
    /// error status with an empty body, such as a proxy's `502`, still
    /// returns `Request::default()`; the transport logs the status at `warn`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Transport`] when no response arrives and
    /// [`SyncError::ServerMessage`] for an error envelope. A create also
    /// fails with [`SyncError::EmptyBody`] or [`SyncError::Decode`].
    pub fn save_request(
        &self,
        method: SaveMethod,
        credentials: &Credentials,
        request: &Request,
    ) -> Result<Request, SyncError> {
        let path = Endpoint::Requests.path();
        let payload = codec::encode(request).map_err(|err| SyncError::from_codec(err, path))?;
        let body = self
            .transport
            .send(credentials, method.method(), path, Some(&payload))
            .inspect_err(|err| {
                warn!(
                    "{err}; user={} method={method} body={}",
                    credentials.user(),
                    String::from_utf8_lossy(&payload)
                );
            })?;

        match method {
            SaveMethod::Update => match codec::classify(&body) {
                Ok(_) | Err(CodecError::EmptyBody) => Ok(Request::default()),
                Err(err) => Err(SyncError::from_codec(err, path)),
            },
            SaveMethod::Create => codec::decode_as(&body, EntityKind::Request).map_err(|err| {
                if matches!(err, CodecError::Decode { .. }) {
                    warn!(
                        "cannot decode created request: user={} from={} to={}",
                        credentials.user(),
                        request.from,
                        request.to
                    );
                }
                SyncError::from_codec(err, path)
            }),
        }
    }
}
