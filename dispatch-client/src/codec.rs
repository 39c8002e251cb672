//! Wire encoding of entities and classification of response bodies.
//!
//! The backend speaks JSON. Besides decode failures, two body shapes are
//! classified before decoding is attempted:
//!
//! - an empty body, which most operations treat as an error;
//! - an application error envelope, a JSON object with a top-level
//!   `message` key. Bodies that are not JSON but mention `message` are
//!   treated the same way. A `message` string nested inside an otherwise
//!   valid entity is not an error.

use std::fmt;

use dispatch_core::{Location, Request, Route, Vehicle};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Key identifying an application error envelope.
const MESSAGE_MARKER: &str = "message";

/// The closed set of shapes a fetch can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A single cab.
    Vehicle,
    /// A single ride request.
    Request,
    /// A single route with its legs.
    Route,
    /// The stop catalogue.
    Locations,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vehicle => "vehicle",
            Self::Request => "request",
            Self::Route => "route",
            Self::Locations => "location list",
        })
    }
}

/// A decoded entity of one of the [`EntityKind`] shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// A single cab.
    Vehicle(Vehicle),
    /// A single ride request.
    Request(Request),
    /// A single route with its legs.
    Route(Route),
    /// The stop catalogue.
    Locations(Vec<Location>),
}

impl Entity {
    /// Shape of this entity.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Vehicle(_) => EntityKind::Vehicle,
            Self::Request(_) => EntityKind::Request,
            Self::Route(_) => EntityKind::Route,
            Self::Locations(_) => EntityKind::Locations,
        }
    }
}

/// Errors from encoding entities or classifying and decoding bodies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The response body was empty.
    #[error("empty response body")]
    EmptyBody,
    /// The backend answered with an application error.
    #[error("server reported an error: {message}")]
    ServerMessage {
        /// Error text reported by the backend.
        message: String,
    },
    /// The body does not have the shape of the requested kind.
    #[error("cannot decode {kind}: {message}")]
    Decode {
        /// Kind that was requested.
        kind: EntityKind,
        /// Parser error description.
        message: String,
    },
    /// The entity could not be serialized.
    #[error("cannot encode entity: {message}")]
    Encode {
        /// Serializer error description.
        message: String,
    },
}

/// Serialize a full entity snapshot.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
///
/// # Examples
///
/// ```
/// use dispatch_client::codec::encode;
/// use dispatch_core::{Vehicle, status};
///
/// let bytes = encode(&Vehicle::new(1, 4, status::FREE))?;
/// assert_eq!(bytes, br#"{"Id":1,"Location":4,"Status":"FREE"}"#);
/// # Ok::<(), dispatch_client::CodecError>(())
/// ```
pub fn encode<T: Serialize>(entity: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(entity).map_err(|err| CodecError::Encode {
        message: err.to_string(),
    })
}

/// Reject empty bodies and application error envelopes.
///
/// # Errors
///
/// Returns [`CodecError::EmptyBody`] or [`CodecError::ServerMessage`].
pub fn classify(body: &[u8]) -> Result<&[u8], CodecError> {
    if body.is_empty() {
        return Err(CodecError::EmptyBody);
    }
    match server_message(body) {
        Some(message) => Err(CodecError::ServerMessage { message }),
        None => Ok(body),
    }
}

/// Classify `body` and decode it into `kind`.
///
/// # Errors
///
/// Returns the [`classify`] errors, or [`CodecError::Decode`] when the body
/// does not parse as `kind`.
///
/// # Examples
///
/// ```
/// use dispatch_client::codec::decode;
/// use dispatch_client::{CodecError, Entity, EntityKind};
///
/// let entity = decode(br#"{"Id":3,"Status":"ASSIGNED","Legs":[]}"#, EntityKind::Route)?;
/// assert!(matches!(entity, Entity::Route(route) if route.id == 3));
///
/// assert_eq!(decode(b"", EntityKind::Vehicle), Err(CodecError::EmptyBody));
/// # Ok::<(), CodecError>(())
/// ```
pub fn decode(body: &[u8], kind: EntityKind) -> Result<Entity, CodecError> {
    Ok(match kind {
        EntityKind::Vehicle => Entity::Vehicle(decode_as(body, kind)?),
        EntityKind::Request => Entity::Request(decode_as(body, kind)?),
        EntityKind::Route => Entity::Route(decode_as(body, kind)?),
        EntityKind::Locations => Entity::Locations(decode_as(body, kind)?),
    })
}

/// Typed decode shared by [`decode`] and the sync operations.
pub(crate) fn decode_as<E: DeserializeOwned>(
    body: &[u8],
    kind: EntityKind,
) -> Result<E, CodecError> {
    let body = classify(body)?;
    serde_json::from_slice(body).map_err(|err| CodecError::Decode {
        kind,
        message: err.to_string(),
    })
}

/// Extract the error text from an application error envelope.
fn server_message(body: &[u8]) -> Option<String> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields.get(MESSAGE_MARKER).map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }),
        Ok(_) => None,
        Err(_) => {
            let text = String::from_utf8_lossy(body);
            text.contains(MESSAGE_MARKER).then(|| text.into_owned())
        }
    }
}
