//! Domain services

pub mod compliance;

pub use compliance::{scan_fleet, status, status_raw, KteoStatus};
