//! Valid reference sets for new trip/service records
//!
//! Trips and services store driver names and vehicle plates as plain
//! snapshot strings. These projections are the only guard against new
//! records referencing nonexistent drivers/vehicles; existing records
//! are never re-validated against them.

use crate::error::{Error, Result};
use crate::types::{Driver, Vehicle};

/// Current driver-name and vehicle-plate sets, in collection order.
///
/// Rebuilt after every driver/vehicle mutation.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSets {
    pub driver_names: Vec<String>,
    pub vehicle_plates: Vec<String>,
}

impl ReferenceSets {
    pub fn rebuild(drivers: &[Driver], vehicles: &[Vehicle]) -> Self {
        Self {
            driver_names: drivers.iter().map(|d| d.name.clone()).collect(),
            vehicle_plates: vehicles.iter().map(|v| v.plate.clone()).collect(),
        }
    }

    /// Require `name` to be a currently registered driver.
    pub fn check_driver(&self, name: &str) -> Result<()> {
        if self.driver_names.iter().any(|n| n == name) {
            Ok(())
        } else {
            Err(Error::Validation {
                field: "driver",
                reason: format!("no registered driver named {:?}", name),
            })
        }
    }

    /// Require `plate` to be a currently registered vehicle.
    pub fn check_vehicle(&self, plate: &str) -> Result<()> {
        if self.vehicle_plates.iter().any(|p| p == plate) {
            Ok(())
        } else {
            Err(Error::Validation {
                field: "vehicle",
                reason: format!("no registered vehicle with plate {:?}", plate),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_projects_names_and_plates_in_order() {
        let drivers = vec![
            Driver { id: 1, name: "Maria".to_string() },
            Driver { id: 2, name: "Nikos".to_string() },
        ];
        let refs = ReferenceSets::rebuild(&drivers, &[]);
        assert_eq!(refs.driver_names, ["Maria", "Nikos"]);
        assert!(refs.vehicle_plates.is_empty());
    }

    #[test]
    fn unknown_references_are_rejected() {
        let refs = ReferenceSets::default();
        assert!(refs.check_driver("Maria").is_err());
        assert!(refs.check_vehicle("ABC-1234").is_err());
    }
}
