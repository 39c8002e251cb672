//! Stops that cabs travel between.

use geo::Point;
use serde::{Deserialize, Serialize};

/// Heading of a stop.
///
/// Some backends publish an integer compass bearing, others a free-form
/// facing tag. Both decode into this type and round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bearing {
    /// Compass bearing in degrees.
    Degrees(i32),
    /// Facing tag such as `"N"` or `"towards centre"`.
    Tag(String),
}

impl Default for Bearing {
    fn default() -> Self {
        Self::Degrees(0)
    }
}

/// A named stop with coordinates.
///
/// The backend emits stops with lower-case field names; PascalCase names are
/// accepted as well so catalogues exported by other tools decode unchanged.
///
/// # Examples
///
/// ```
/// use dispatch_core::Location;
///
/// let stop = Location::new(1, 52.2, 21.0);
/// let point = stop.point();
/// assert_eq!(point.x(), 21.0);
/// assert_eq!(point.y(), 52.2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Identifier, unique within a catalogue.
    #[serde(alias = "Id")]
    pub id: i64,
    /// Display name.
    #[serde(alias = "Name")]
    pub name: Option<String>,
    /// Facing of the stop.
    #[serde(alias = "Bearing")]
    pub bearing: Bearing,
    /// Latitude in degrees.
    #[serde(alias = "Latitude")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(alias = "Longitude")]
    pub longitude: f64,
}

impl Location {
    /// Construct an unnamed stop facing north.
    #[must_use]
    pub fn new(id: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: None,
            bearing: Bearing::default(),
            latitude,
            longitude,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Position as a `geo` point (`x` = longitude, `y` = latitude).
    #[must_use]
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}
