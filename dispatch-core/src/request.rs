//! Ride requests ("demands") submitted by customers.

use serde::{Deserialize, Serialize};

use crate::{Status, Vehicle};

/// A customer's trip request.
///
/// `wait` and `loss` are constraints supplied by the customer. `eta`,
/// `distance` and `cab` are filled in by the backend once the request is
/// matched to a cab and stay at their zero values until then.
///
/// # Examples
///
/// ```
/// use dispatch_core::Request;
///
/// let request = Request::new(3, 8, 15, 70, true);
/// assert!(!request.is_assigned());
/// assert_eq!(request.eta, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Request {
    /// Identifier assigned by the backend; zero before creation.
    pub id: i64,
    /// Origin stop id.
    pub from: i64,
    /// Destination stop id.
    pub to: i64,
    /// Minutes until pickup; set only once a cab is assigned.
    pub eta: i32,
    /// Customer accepts a shared ride.
    pub shared: bool,
    /// Request has been placed in a pool.
    pub in_pool: bool,
    /// Assigned cab; the default snapshot until assignment.
    pub cab: Vehicle,
    /// Status token.
    pub status: Status,
    /// Maximum wait for assignment, in minutes.
    pub wait: i32,
    /// Maximum tolerated pooling detour, in percent.
    pub loss: i32,
    /// Trip duration in minutes, computed by the backend.
    pub distance: i32,
}

impl Request {
    /// Build an unassigned request with the customer's constraints.
    #[must_use]
    pub fn new(from: i64, to: i64, wait: i32, loss: i32, shared: bool) -> Self {
        Self {
            from,
            to,
            wait,
            loss,
            shared,
            ..Self::default()
        }
    }

    /// True once the backend has attached a cab to this request.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.cab.id > 0
    }

    /// True when the derived fields still hold their pre-assignment values.
    ///
    /// Requests that are not assigned must report `eta == 0` and
    /// `distance == 0`; anything else points at a backend inconsistency.
    #[must_use]
    pub fn derived_fields_consistent(&self) -> bool {
        self.is_assigned() || (self.eta == 0 && self.distance == 0)
    }
}
