//! Domain module containing the record contract and services

pub mod repository;
pub mod service;

pub use repository::{Record, UniqueKey};
pub use service::compliance::{scan_fleet, status, status_raw, KteoStatus};
