//! Property-based tests for catalogue travel time estimates.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `estimate(a, b) == estimate(b, a)` for resolvable stops.
//! - **Floor:** resolvable pairs never take less than one minute.
//! - **Sentinel:** `NOT_FOUND` is returned exactly when a stop is missing.
//! - **Matrix agreement:** precomputed minutes match single lookups.

use dispatch_core::{Location, NOT_FOUND, TravelTimeMatrix, estimate_travel_time};
use proptest::prelude::*;

/// Catalogue of stops with ids `0..len` spread over central Europe.
fn catalog_strategy() -> impl Strategy<Value = Vec<Location>> {
    prop::collection::vec((49.0_f64..55.0, 14.0_f64..24.0), 1..12).prop_map(|coords| {
        coords
            .into_iter()
            .zip(0_i64..)
            .map(|((lat, lon), id)| Location::new(id, lat, lon))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn estimates_are_symmetric(catalog in catalog_strategy(), a in 0_i64..12, b in 0_i64..12) {
        prop_assert_eq!(
            estimate_travel_time(&catalog, a, b),
            estimate_travel_time(&catalog, b, a)
        );
    }

    #[test]
    fn resolvable_pairs_take_at_least_one_minute(
        catalog in catalog_strategy(),
        a in 0_i64..12,
        b in 0_i64..12,
    ) {
        let len = i64::try_from(catalog.len()).expect("catalogue length fits i64");
        prop_assume!(a < len && b < len);
        prop_assert!(estimate_travel_time(&catalog, a, b) >= 1);
    }

    #[test]
    fn sentinel_iff_a_stop_is_missing(
        catalog in catalog_strategy(),
        a in 0_i64..24,
        b in 0_i64..24,
    ) {
        let len = i64::try_from(catalog.len()).expect("catalogue length fits i64");
        let missing = a >= len || b >= len;
        prop_assert_eq!(estimate_travel_time(&catalog, a, b) == NOT_FOUND, missing);
        prop_assert_ne!(estimate_travel_time(&catalog, a, b), 0);
    }

    #[test]
    fn matrix_matches_single_lookups(catalog in catalog_strategy(), a in 0_i64..12, b in 0_i64..12) {
        prop_assume!(a != b);
        let matrix = TravelTimeMatrix::from_catalog(&catalog);
        let expected = estimate_travel_time(&catalog, a, b);
        let actual = matrix
            .minutes(a, b)
            .map_or(NOT_FOUND, |minutes| i32::try_from(minutes).expect("minutes fit i32"));
        prop_assert_eq!(actual, expected);
    }
}
