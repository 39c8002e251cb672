//! Opaque status tokens shared by cabs, routes, legs and requests.
//!
//! The backend owns the status vocabulary and may grow it at any time, so a
//! status is carried as the token the server sent rather than a closed enum.
//! The constants below name the tokens this client commonly writes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cab is idle and can be dispatched.
pub const FREE: &str = "FREE";
/// Cab, route or request has been given an assignment.
pub const ASSIGNED: &str = "ASSIGNED";
/// Cab is out of service.
pub const CHARGING: &str = "CHARGING";
/// Request was accepted by the backend and awaits a cab.
pub const RECEIVED: &str = "RECEIVED";
/// Request or route was accepted by the customer.
pub const ACCEPTED: &str = "ACCEPTED";
/// Route or leg is under way.
pub const STARTED: &str = "STARTED";
/// Customer was collected.
pub const PICKEDUP: &str = "PICKEDUP";
/// Request, route or leg finished.
pub const COMPLETED: &str = "COMPLETED";
/// Request was cancelled before completion.
pub const CANCELLED: &str = "CANCELLED";

/// A status token as exchanged on the wire.
///
/// # Examples
///
/// ```
/// use dispatch_core::{Status, status};
///
/// let free = Status::from(status::FREE);
/// assert!(free.is(status::FREE));
/// assert_eq!(free.to_string(), "FREE");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(String);

impl Status {
    /// Wrap a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token as sent by the backend.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against a token, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, token: &str) -> bool {
        self.0.eq_ignore_ascii_case(token)
    }

    /// True when the backend has not reported a status yet.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Status {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Status {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("FREE", FREE, true)]
    #[case("free", FREE, true)]
    #[case("ASSIGNED", FREE, false)]
    fn matches_tokens_case_insensitively(
        #[case] raw: &str,
        #[case] token: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(Status::from(raw).is(token), expected);
    }

    #[rstest]
    fn serialises_as_bare_string() {
        let json = serde_json::to_string(&Status::from(CHARGING)).expect("serialise status");
        assert_eq!(json, "\"CHARGING\"");
    }

    #[rstest]
    fn keeps_unknown_tokens() {
        let status: Status = serde_json::from_str("\"MAINTENANCE\"").expect("decode status");
        assert_eq!(status.as_str(), "MAINTENANCE");
        assert!(!status.is_unset());
    }
}
