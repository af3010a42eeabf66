//! Core record types for the fleet engine
//!
//! The serde field names match the on-disk JSON documents
//! (`drivers.json`, `vehicles.json`, `trips.json`, `services.json`).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Calendar date wire format (`2025-03-14`).
pub const DATE_FMT: &str = "%Y-%m-%d";
/// Timestamp wire format (`2025-03-14 08:30`).
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

/// Serde adapter for `NaiveDate` in the fixed `YYYY-MM-DD` format.
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATE_FMT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FMT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FMT).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for `NaiveDateTime` in the fixed `YYYY-MM-DD HH:MM` format.
pub mod datetime_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATETIME_FMT;

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(DATETIME_FMT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATETIME_FMT).map_err(serde::de::Error::custom)
    }
}

/// Trim and require a non-empty text field.
pub fn require(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Parse a `YYYY-MM-DD` date, naming the field on failure.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FMT).map_err(|e| Error::Validation {
        field,
        reason: format!("expected YYYY-MM-DD, got {:?} ({})", value, e),
    })
}

/// Parse a `YYYY-MM-DD HH:MM` timestamp, naming the field on failure.
pub fn parse_datetime(field: &'static str, value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_FMT).map_err(|e| Error::Validation {
        field,
        reason: format!("expected YYYY-MM-DD HH:MM, got {:?} ({})", value, e),
    })
}

/// A registered driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    /// Dense 1-based id, reassigned after deletions
    #[serde(default)]
    pub id: u32,
    /// Driver name, case-insensitively unique
    pub name: String,
}

impl Driver {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            id: 0,
            name: require("driver name", name)?,
        })
    }
}

/// A fleet vehicle with its KTEO inspection dates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub id: u32,
    /// License plate, case-insensitively unique, stored upper-cased
    pub plate: String,
    /// Date the last KTEO inspection passed
    #[serde(with = "date_format")]
    pub kteo_passed: NaiveDate,
    /// Next KTEO due date. Not constrained to follow `kteo_passed`.
    #[serde(with = "date_format")]
    pub kteo_next: NaiveDate,
}

impl Vehicle {
    pub fn new(plate: &str, kteo_passed: &str, kteo_next: &str) -> Result<Self> {
        Ok(Self {
            id: 0,
            plate: require("plate", plate)?.to_uppercase(),
            kteo_passed: parse_date("kteo_passed", kteo_passed)?,
            kteo_next: parse_date("kteo_next", kteo_next)?,
        })
    }
}

/// A recorded trip
///
/// `driver` and `vehicle` are snapshots of the referenced records'
/// identifying fields at creation time, not live links. Renaming or
/// deleting the driver/vehicle later leaves the trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    #[serde(default)]
    pub id: u32,
    pub driver: String,
    pub vehicle: String,
    #[serde(with = "datetime_format")]
    pub depart: NaiveDateTime,
    #[serde(with = "datetime_format")]
    pub arrive: NaiveDateTime,
    #[serde(default)]
    pub details: String,
    /// Signature artifact file name, derived from the trip id
    pub signature: String,
}

impl Trip {
    pub fn new(
        driver: &str,
        vehicle: &str,
        depart: &str,
        arrive: &str,
        details: &str,
    ) -> Result<Self> {
        Ok(Self {
            id: 0,
            driver: require("driver", driver)?,
            vehicle: require("vehicle", vehicle)?,
            depart: parse_datetime("depart", depart)?,
            arrive: parse_datetime("arrive", arrive)?,
            details: details.trim().to_string(),
            signature: String::new(),
        })
    }
}

/// A vehicle service event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: u32,
    /// Snapshot of the vehicle plate at creation time
    pub vehicle: String,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    pub details: String,
}

impl Service {
    pub fn new(vehicle: &str, date: &str, details: &str) -> Result<Self> {
        Ok(Self {
            id: 0,
            vehicle: require("vehicle", vehicle)?,
            date: parse_date("date", date)?,
            details: require("details", details)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_name_is_trimmed_and_required() {
        assert_eq!(Driver::new("  Maria ").unwrap().name, "Maria");
        assert!(matches!(
            Driver::new("   "),
            Err(Error::Validation { field: "driver name", .. })
        ));
    }

    #[test]
    fn vehicle_plate_is_uppercased() {
        let v = Vehicle::new("abc-1234", "2025-01-10", "2026-01-10").unwrap();
        assert_eq!(v.plate, "ABC-1234");
    }

    #[test]
    fn bad_date_names_the_field() {
        let err = Vehicle::new("ABC-1234", "2025-13-40", "2026-01-10").unwrap_err();
        assert!(matches!(err, Error::Validation { field: "kteo_passed", .. }));
    }

    #[test]
    fn trip_round_trips_through_wire_format() {
        let trip = Trip {
            id: 3,
            driver: "Maria".to_string(),
            vehicle: "ABC-1234".to_string(),
            depart: parse_datetime("depart", "2025-06-01 08:30").unwrap(),
            arrive: parse_datetime("arrive", "2025-06-01 12:45").unwrap(),
            details: "Deliveries".to_string(),
            signature: "signature_3.png".to_string(),
        };
        let json = serde_json::to_string(&trip).unwrap();
        assert!(json.contains("\"depart\":\"2025-06-01 08:30\""));
        let back: Trip = serde_json::from_str(&json).unwrap();
        assert_eq!(back.arrive, trip.arrive);
    }

    #[test]
    fn missing_id_defaults_to_zero() {
        let d: Driver = serde_json::from_str(r#"{"name":"Nikos"}"#).unwrap();
        assert_eq!(d.id, 0);
    }
}
