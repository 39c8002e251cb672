//! Facade crate for the cab dispatch client.
//!
//! This crate re-exports the domain types and travel-time estimator from
//! `dispatch-core`, and the HTTP synchronisation layer from `dispatch-client`
//! behind the `client` feature.

#![forbid(unsafe_code)]

pub use dispatch_core::{
    Bearing, Credentials, Leg, Location, NOT_FOUND, Request, Route, Status, TravelTimeMatrix,
    VEHICLE_SPEED_KMH, Vehicle, distance_km, estimate_travel_time, status, try_travel_time,
};

#[cfg(feature = "client")]
pub use dispatch_client::{
    ClientBuildError, ClientConfig, CodecError, Endpoint, Entity, EntityKind, EntitySync,
    HttpTransport, Method, SaveMethod, SyncError, Transport, TransportError,
};
