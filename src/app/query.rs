//! Cross-collection search
//!
//! Case-insensitive substring search over all four collections,
//! returning tagged human-readable lines. Read-only.

use crate::app::Fleet;
use crate::types::{DATETIME_FMT, DATE_FMT};

/// Search drivers, vehicles, trips and services for `query`.
pub fn search(fleet: &Fleet, query: &str) -> Vec<String> {
    let q = query.to_lowercase();
    let mut results = Vec::new();

    for d in fleet.drivers.list() {
        if d.name.to_lowercase().contains(&q) {
            results.push(format!("[driver] {}", d.name));
        }
    }
    for v in fleet.vehicles.list() {
        let passed = v.kteo_passed.format(DATE_FMT).to_string();
        let next = v.kteo_next.format(DATE_FMT).to_string();
        if v.plate.to_lowercase().contains(&q) || passed.contains(&q) || next.contains(&q) {
            results.push(format!(
                "[vehicle] {} - KTEO passed: {} next: {}",
                v.plate, passed, next
            ));
        }
    }
    for t in fleet.trips.list() {
        if t.driver.to_lowercase().contains(&q)
            || t.vehicle.to_lowercase().contains(&q)
            || t.details.to_lowercase().contains(&q)
        {
            results.push(format!(
                "[trip] driver: {} vehicle: {} [{} -> {}] {}",
                t.driver,
                t.vehicle,
                t.depart.format(DATETIME_FMT),
                t.arrive.format(DATETIME_FMT),
                t.details
            ));
        }
    }
    for s in fleet.services.list() {
        if s.vehicle.to_lowercase().contains(&q) || s.details.to_lowercase().contains(&q) {
            results.push(format!(
                "[service] vehicle: {} date: {} {}",
                s.vehicle,
                s.date.format(DATE_FMT),
                s.details
            ));
        }
    }
    results
}
