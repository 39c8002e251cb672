use thiserror::Error;

use crate::codec::{CodecError, EntityKind};
use crate::transport::TransportError;

/// Errors surfaced by [`EntitySync`](super::EntitySync) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// No response could be obtained, even after the retry.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The backend answered with an empty body where content was expected.
    #[error("empty response body from {path}")]
    EmptyBody {
        /// Endpoint path that was called.
        path: String,
    },
    /// The backend answered with an application error.
    #[error("server reported an error for {path}: {message}")]
    ServerMessage {
        /// Endpoint path that was called.
        path: String,
        /// Error text reported by the backend.
        message: String,
    },
    /// The body does not have the shape of the requested kind.
    #[error("cannot decode {kind} from {path}: {message}")]
    Decode {
        /// Endpoint path that was called.
        path: String,
        /// Kind that was requested.
        kind: EntityKind,
        /// Parser error description.
        message: String,
    },
    /// The outgoing entity could not be serialized.
    #[error("cannot encode payload for {path}: {message}")]
    Encode {
        /// Endpoint path that would have been called.
        path: String,
        /// Serializer error description.
        message: String,
    },
}

impl SyncError {
    /// Attach the endpoint path to a codec error.
    pub(crate) fn from_codec(error: CodecError, path: &str) -> Self {
        let path = path.to_owned();
        match error {
            CodecError::EmptyBody => Self::EmptyBody { path },
            CodecError::ServerMessage { message } => Self::ServerMessage { path, message },
            CodecError::Decode { kind, message } => Self::Decode {
                path,
                kind,
                message,
            },
            CodecError::Encode { message } => Self::Encode { path, message },
        }
    }
}
