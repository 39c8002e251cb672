//! Routes assigned to cabs and the legs they are made of.

use serde::{Deserialize, Serialize};

use crate::Status;

/// One origin-to-destination segment of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Leg {
    /// Identifier, unique among legs.
    pub id: i64,
    /// Origin stop id.
    pub from: i64,
    /// Destination stop id.
    pub to: i64,
    /// Position of the leg within its route.
    pub place: i32,
    /// Status token.
    pub status: Status,
}

/// An ordered set of legs driven by one cab.
///
/// # Examples
///
/// ```
/// use dispatch_core::{Leg, Route, status};
///
/// let leg = Leg { id: 9, from: 1, to: 2, place: 0, status: status::ASSIGNED.into() };
/// let route = Route { id: 3, status: status::ASSIGNED.into(), legs: vec![leg] };
///
/// assert!(route.contains_leg(9));
/// assert_eq!(route.next_leg().map(|leg| leg.to), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Route {
    /// Identifier, unique among routes.
    pub id: i64,
    /// Status token.
    pub status: Status,
    /// Legs in the order received from the backend.
    pub legs: Vec<Leg>,
}

impl Route {
    /// True when `leg_id` is one of this route's legs.
    #[must_use]
    pub fn contains_leg(&self, leg_id: i64) -> bool {
        self.legs.iter().any(|leg| leg.id == leg_id)
    }

    /// The leg with the lowest `place` that has not completed yet.
    #[must_use]
    pub fn next_leg(&self) -> Option<&Leg> {
        self.legs
            .iter()
            .filter(|leg| !leg.status.is(crate::status::COMPLETED))
            .min_by_key(|leg| leg.place)
    }
}
