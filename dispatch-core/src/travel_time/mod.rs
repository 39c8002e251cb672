//! Estimate cab travel times between catalogue stops.
//!
//! Distances are great-circle distances computed with the spherical law of
//! cosines; times assume a constant cab speed of [`VEHICLE_SPEED_KMH`].
//! Single lookups scan the catalogue linearly, while [`TravelTimeMatrix`]
//! precomputes every pair for callers that query repeatedly.
//!
//! A trip always takes at least one minute. Identifiers missing from the
//! catalogue are reported with the [`NOT_FOUND`] sentinel and a log line
//! rather than an error, as travel time estimates are best-effort.

mod estimator;
mod matrix;

pub use estimator::{
    NOT_FOUND, VEHICLE_SPEED_KMH, distance_km, estimate_travel_time, minutes_for_distance,
    try_travel_time,
};
pub use matrix::TravelTimeMatrix;
