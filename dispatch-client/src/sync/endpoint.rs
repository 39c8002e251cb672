use std::fmt;

use crate::codec::EntityKind;

/// Fixed backend paths, one per entity kind.
///
/// Ids travel in the payload, never in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Cabs.
    Vehicles,
    /// Ride requests.
    Requests,
    /// Routes.
    Routes,
    /// Route legs.
    Legs,
    /// Stop catalogue.
    Locations,
}

impl Endpoint {
    /// Path relative to the backend base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Vehicles => "/cabs/",
            Self::Requests => "/orders/",
            Self::Routes => "/routes/",
            Self::Legs => "/legs/",
            Self::Locations => "/stops/",
        }
    }
}

impl From<EntityKind> for Endpoint {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Vehicle => Self::Vehicles,
            EntityKind::Request => Self::Requests,
            EntityKind::Route => Self::Routes,
            EntityKind::Locations => Self::Locations,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
