//! Great-circle distance and minute estimates for stop pairs.

use log::warn;

use crate::Location;

/// Assumed cab speed in kilometres per hour.
pub const VEHICLE_SPEED_KMH: f64 = 30.0;

/// Returned by [`estimate_travel_time`] when a stop id is not in the catalogue.
pub const NOT_FOUND: i32 = -1;

/// Statute miles per degree of arc (60 nautical miles × 1.1515).
const MILES_PER_DEGREE: f64 = 60.0 * 1.1515;
const KM_PER_MILE: f64 = 1.609344;

/// Great-circle distance between two stops in kilometres.
///
/// # Examples
///
/// ```
/// use dispatch_core::{Location, distance_km};
///
/// let a = Location::new(1, 52.2, 21.0);
/// let b = Location::new(2, 52.3, 21.1);
/// let km = distance_km(&a, &b);
/// assert!(km > 13.0 && km < 13.1);
/// ```
#[must_use]
pub fn distance_km(from: &Location, to: &Location) -> f64 {
    let (a, b) = (from.point(), to.point());
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let theta = (a.x() - b.x()).to_radians();
    let cosine = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * theta.cos();
    // Rounding can push identical points just past 1.0, where acos is NaN.
    let degrees = cosine.clamp(-1.0, 1.0).acos().to_degrees();
    degrees * MILES_PER_DEGREE * KM_PER_MILE
}

/// Convert a distance to whole minutes at [`VEHICLE_SPEED_KMH`].
///
/// The fractional part is truncated and the result is never below one.
///
/// # Examples
///
/// ```
/// use dispatch_core::travel_time::minutes_for_distance;
///
/// assert_eq!(minutes_for_distance(13.04), 26);
/// assert_eq!(minutes_for_distance(0.0), 1);
/// ```
#[must_use]
pub fn minutes_for_distance(km: f64) -> u32 {
    let minutes = km * (60.0 / VEHICLE_SPEED_KMH);
    // `as` saturates and maps NaN to zero, which the floor then lifts to one.
    let whole = minutes.trunc() as u32;
    whole.max(1)
}

/// Travel time in minutes between two catalogue stops.
///
/// Returns `None` when either id is absent. Duplicate ids resolve to the
/// first matching entry.
#[must_use]
pub fn try_travel_time(catalog: &[Location], from_id: i64, to_id: i64) -> Option<u32> {
    let from = find(catalog, from_id)?;
    let to = find(catalog, to_id)?;
    Some(minutes_for_distance(distance_km(from, to)))
}

/// Travel time in minutes between two catalogue stops, or [`NOT_FOUND`].
///
/// # Examples
///
/// ```
/// use dispatch_core::{Location, NOT_FOUND, estimate_travel_time};
///
/// let catalog = vec![Location::new(1, 52.2, 21.0), Location::new(2, 52.3, 21.1)];
///
/// assert_eq!(estimate_travel_time(&catalog, 1, 2), 26);
/// assert_eq!(estimate_travel_time(&catalog, 1, 1), 1);
/// assert_eq!(estimate_travel_time(&catalog, 1, 99), NOT_FOUND);
/// ```
#[must_use]
pub fn estimate_travel_time(catalog: &[Location], from_id: i64, to_id: i64) -> i32 {
    match try_travel_time(catalog, from_id, to_id) {
        Some(minutes) => i32::try_from(minutes).unwrap_or(i32::MAX),
        None => {
            warn!(
                "stop {from_id} or {to_id} not found in catalogue of {} stops",
                catalog.len()
            );
            NOT_FOUND
        }
    }
}

fn find(catalog: &[Location], id: i64) -> Option<&Location> {
    catalog.iter().find(|stop| stop.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Distance, Haversine};
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Vec<Location> {
        vec![
            Location::new(1, 52.2, 21.0),
            Location::new(2, 52.3, 21.1),
            Location::new(3, 52.2001, 21.0),
            Location::new(4, 54.35, 18.65),
        ]
    }

    #[rstest]
    fn nearby_stops_take_small_positive_time(catalog: Vec<Location>) {
        assert_eq!(estimate_travel_time(&catalog, 1, 2), 26);
    }

    #[rstest]
    fn agrees_with_haversine_distance(catalog: Vec<Location>) {
        let (a, b) = (&catalog[0], &catalog[3]);
        let haversine_km = Haversine.distance(a.point(), b.point()) / 1000.0;

        let km = distance_km(a, b);

        assert!(
            (km - haversine_km).abs() < 1.0,
            "law of cosines {km} km vs haversine {haversine_km} km"
        );
    }

    #[rstest]
    #[case(1, 1)]
    #[case(1, 3)]
    #[case(3, 1)]
    fn identical_or_adjacent_stops_take_one_minute(
        catalog: Vec<Location>,
        #[case] from: i64,
        #[case] to: i64,
    ) {
        assert_eq!(estimate_travel_time(&catalog, from, to), 1);
    }

    #[rstest]
    #[case(1, 99)]
    #[case(99, 1)]
    #[case(98, 99)]
    fn missing_stops_yield_sentinel(catalog: Vec<Location>, #[case] from: i64, #[case] to: i64) {
        assert_eq!(estimate_travel_time(&catalog, from, to), NOT_FOUND);
        assert_eq!(try_travel_time(&catalog, from, to), None);
    }

    #[rstest]
    fn empty_catalogue_yields_sentinel() {
        assert_eq!(estimate_travel_time(&[], 1, 1), NOT_FOUND);
    }

    #[rstest]
    fn duplicate_ids_resolve_to_first_entry() {
        let catalog = vec![
            Location::new(1, 52.2, 21.0),
            Location::new(2, 52.3, 21.1),
            Location::new(2, 10.0, 10.0),
        ];

        assert_eq!(estimate_travel_time(&catalog, 1, 2), 26);
    }

    #[rstest]
    #[case(0.0, 1)]
    #[case(0.49, 1)]
    #[case(0.5, 1)]
    #[case(1.0, 2)]
    #[case(13.6, 27)]
    #[case(f64::NAN, 1)]
    fn converts_distance_with_truncation_and_floor(#[case] km: f64, #[case] minutes: u32) {
        assert_eq!(minutes_for_distance(km), minutes);
    }
}
