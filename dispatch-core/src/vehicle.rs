//! Cabs known to the dispatcher.

use serde::{Deserialize, Serialize};

use crate::Status;

/// A dispatchable cab.
///
/// `location` references a [`Location`](crate::Location) id. The default
/// value is the empty snapshot a request carries before assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Vehicle {
    /// Identifier, unique among cabs.
    pub id: i64,
    /// Stop the cab is at or heading to.
    pub location: i64,
    /// Status token such as `FREE` or `ASSIGNED`.
    pub status: Status,
}

impl Vehicle {
    /// Build a cab snapshot.
    pub fn new(id: i64, location: i64, status: impl Into<Status>) -> Self {
        Self {
            id,
            location,
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status;
    use rstest::rstest;

    #[rstest]
    fn encodes_pascal_case_fields() {
        let cab = Vehicle::new(4, 17, status::FREE);

        let json = serde_json::to_string(&cab).expect("encode cab");

        assert_eq!(json, r#"{"Id":4,"Location":17,"Status":"FREE"}"#);
    }

    #[rstest]
    fn ignores_server_only_fields() {
        let json = r#"{"Id":4,"Location":17,"Status":"ASSIGNED","Seats":4,"Name":"K-4"}"#;

        let cab: Vehicle = serde_json::from_str(json).expect("decode cab");

        assert_eq!(cab, Vehicle::new(4, 17, status::ASSIGNED));
    }
}
