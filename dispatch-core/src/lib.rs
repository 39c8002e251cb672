//! Core domain types for the fleet dispatch client.
//!
//! The records here are the typed payloads exchanged with the dispatch
//! backend: stops, cabs, routes with their legs, and ride requests. They carry
//! no behaviour beyond a few invariant helpers; transfer logic lives in
//! `dispatch-client`.
//!
//! The [`travel_time`] module estimates how long a cab needs between two
//! stops of a catalogue using great-circle distance and a fixed cab speed.

#![forbid(unsafe_code)]

mod credentials;
mod location;
mod request;
mod route;
pub mod status;
pub mod travel_time;
mod vehicle;

pub use credentials::Credentials;
pub use location::{Bearing, Location};
pub use request::Request;
pub use route::{Leg, Route};
pub use status::Status;
pub use travel_time::{
    NOT_FOUND, TravelTimeMatrix, VEHICLE_SPEED_KMH, distance_km, estimate_travel_time,
    try_travel_time,
};
pub use vehicle::Vehicle;
