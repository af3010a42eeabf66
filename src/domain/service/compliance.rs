//! KTEO compliance status
//!
//! Pure computation of a vehicle's inspection-deadline status from the
//! stored next-due date, and a fleet scan that turns Expired/Warning
//! vehicles into alert lines. Presentation is left to the caller; the
//! scan never mutates vehicle records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Vehicle, DATE_FMT};

/// Days before the due date at which a vehicle enters `Warning`.
pub const WARNING_DAYS: i64 = 15;
/// Days before the due date at which a vehicle enters `Notice`.
pub const NOTICE_DAYS: i64 = 30;

/// Inspection-deadline status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KteoStatus {
    /// Next due date is in the past
    Expired,
    /// Due within 15 days (a due date of today counts)
    Warning,
    /// Due within 30 days
    Notice,
    Ok,
    /// Stored due date failed to parse
    Invalid,
}

impl KteoStatus {
    pub fn label(&self) -> &'static str {
        match self {
            KteoStatus::Expired => "EXPIRED",
            KteoStatus::Warning => "WARNING",
            KteoStatus::Notice => "NOTICE",
            KteoStatus::Ok => "OK",
            KteoStatus::Invalid => "INVALID",
        }
    }
}

impl std::fmt::Display for KteoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Status of a parsed next-due date relative to `today`.
pub fn status(today: NaiveDate, kteo_next: NaiveDate) -> KteoStatus {
    let delta = (kteo_next - today).num_days();
    if delta < 0 {
        KteoStatus::Expired
    } else if delta < WARNING_DAYS {
        KteoStatus::Warning
    } else if delta < NOTICE_DAYS {
        KteoStatus::Notice
    } else {
        KteoStatus::Ok
    }
}

/// Status of a raw stored date string; unparseable input is `Invalid`.
pub fn status_raw(today: NaiveDate, kteo_next: &str) -> KteoStatus {
    match NaiveDate::parse_from_str(kteo_next.trim(), DATE_FMT) {
        Ok(date) => status(today, date),
        Err(_) => KteoStatus::Invalid,
    }
}

/// Scan the fleet and collect alert lines for Expired/Warning vehicles.
///
/// Idempotent and read-only; the same input always yields the same lines.
pub fn scan_fleet(today: NaiveDate, vehicles: &[Vehicle]) -> Vec<String> {
    let mut alerts = Vec::new();
    for vehicle in vehicles {
        match status(today, vehicle.kteo_next) {
            KteoStatus::Expired => {
                alerts.push(format!("Vehicle {} has an expired KTEO!", vehicle.plate));
            }
            KteoStatus::Warning => {
                alerts.push(format!("Vehicle {} needs KTEO soon.", vehicle.plate));
            }
            _ => {}
        }
    }
    alerts
}
