//! Fleet Keeper Library
//!
//! Local record keeping for a small vehicle fleet: drivers, vehicles,
//! trips and service events persisted as flat JSON files, with KTEO
//! compliance status and trip document export.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod infrastructure;
pub mod output;
pub mod types;
