//! Precomputed travel times for every pair of catalogue stops.

use std::collections::HashMap;

use crate::Location;

use super::estimator::{distance_km, minutes_for_distance};

/// Symmetric matrix of travel minutes between catalogue stops.
///
/// Built once per catalogue load; lookups are by stop id. The diagonal is
/// zero, every other pair holds at least one minute.
///
/// # Examples
///
/// ```
/// use dispatch_core::{Location, TravelTimeMatrix};
///
/// let catalog = vec![Location::new(1, 52.2, 21.0), Location::new(2, 52.3, 21.1)];
/// let matrix = TravelTimeMatrix::from_catalog(&catalog);
///
/// assert_eq!(matrix.minutes(1, 2), Some(26));
/// assert_eq!(matrix.minutes(2, 1), Some(26));
/// assert_eq!(matrix.minutes(1, 1), Some(0));
/// assert_eq!(matrix.minutes(1, 99), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelTimeMatrix {
    index: HashMap<i64, usize>,
    minutes: Vec<Vec<u32>>,
}

impl TravelTimeMatrix {
    /// Compute travel minutes for all pairs in `catalog`.
    ///
    /// When ids repeat, the first entry wins, matching single lookups.
    #[must_use]
    pub fn from_catalog(catalog: &[Location]) -> Self {
        let mut index = HashMap::with_capacity(catalog.len());
        let mut stops: Vec<&Location> = Vec::with_capacity(catalog.len());
        for stop in catalog {
            index.entry(stop.id).or_insert_with(|| {
                stops.push(stop);
                stops.len() - 1
            });
        }

        let minutes = stops
            .iter()
            .enumerate()
            .map(|(i, from)| {
                stops
                    .iter()
                    .enumerate()
                    .map(|(j, to)| {
                        if i == j {
                            0
                        } else {
                            minutes_for_distance(distance_km(from, to))
                        }
                    })
                    .collect()
            })
            .collect();

        Self { index, minutes }
    }

    /// Travel minutes from `from_id` to `to_id`, if both are known.
    #[must_use]
    pub fn minutes(&self, from_id: i64, to_id: i64) -> Option<u32> {
        let row = *self.index.get(&from_id)?;
        let column = *self.index.get(&to_id)?;
        self.minutes.get(row)?.get(column).copied()
    }

    /// Number of distinct stops in the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    /// True when built from an empty catalogue.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}
