//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "fleet-keeper")]
#[command(version)]
#[command(about = "Fleet record keeping: drivers, vehicles, trips, service events, KTEO compliance")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory override. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage drivers
    Driver {
        #[command(subcommand)]
        action: DriverAction,
    },

    /// Manage vehicles and their KTEO dates
    Vehicle {
        #[command(subcommand)]
        action: VehicleAction,
    },

    /// Record and manage trips
    Trip {
        #[command(subcommand)]
        action: TripAction,
    },

    /// Record and manage vehicle service events
    Service {
        #[command(subcommand)]
        action: ServiceAction,
    },

    /// One-shot KTEO compliance scan over all vehicles
    Status,

    /// Periodic KTEO compliance scan (runs until interrupted)
    Watch {
        /// Seconds between scans
        #[arg(long, default_value = "3600")]
        interval_secs: u64,
    },

    /// Search across all record collections
    Search {
        /// Substring to look for (case-insensitive)
        query: String,
    },

    /// Copy all data files into a backup folder
    Backup {
        /// Destination folder (created if absent)
        destination: PathBuf,
    },

    /// Import data files from a backup folder (overwrites same-named files)
    Import {
        /// Source backup folder
        source: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum DriverAction {
    /// Register a driver
    Add {
        /// Driver name (unique, case-insensitive)
        name: String,
    },
    /// Rename a driver. Existing trips keep the old name.
    Update {
        id: u32,
        name: String,
    },
    /// Delete a driver; remaining ids are renumbered 1..N
    Remove {
        id: u32,
    },
    /// List drivers
    List,
}

#[derive(Subcommand)]
pub enum VehicleAction {
    /// Register a vehicle
    Add {
        /// License plate (unique, case-insensitive; stored upper-cased)
        plate: String,

        /// Date the last KTEO passed (YYYY-MM-DD)
        #[arg(long)]
        kteo_passed: String,

        /// Next KTEO due date (YYYY-MM-DD)
        #[arg(long)]
        kteo_next: String,
    },
    /// Update a vehicle; omitted fields keep their current values
    Update {
        id: u32,

        #[arg(long)]
        plate: Option<String>,

        #[arg(long)]
        kteo_passed: Option<String>,

        #[arg(long)]
        kteo_next: Option<String>,
    },
    /// Delete a vehicle. Trips/services keep its plate as a snapshot.
    Remove {
        id: u32,
    },
    /// List vehicles with their KTEO status
    List,
}

#[derive(Subcommand)]
pub enum TripAction {
    /// Record a trip
    Add {
        /// Name of a registered driver
        #[arg(long)]
        driver: String,

        /// Plate of a registered vehicle
        #[arg(long)]
        vehicle: String,

        /// Departure (YYYY-MM-DD HH:MM)
        #[arg(long)]
        depart: String,

        /// Arrival (YYYY-MM-DD HH:MM)
        #[arg(long)]
        arrive: String,

        /// Free-text details
        #[arg(long, default_value = "")]
        details: String,

        /// Signature image to attach (copied next to the record files)
        #[arg(long, short = 's')]
        signature: PathBuf,
    },
    /// Update a trip; omitted fields keep their current values
    Update {
        id: u32,

        #[arg(long)]
        driver: Option<String>,

        #[arg(long)]
        vehicle: Option<String>,

        #[arg(long)]
        depart: Option<String>,

        #[arg(long)]
        arrive: Option<String>,

        #[arg(long)]
        details: Option<String>,

        /// Replacement signature image
        #[arg(long, short = 's')]
        signature: Option<PathBuf>,
    },
    /// Delete a trip and its signature artifact
    Remove {
        id: u32,
    },
    /// List trips
    List,
    /// Export one trip as a document
    Export {
        id: u32,

        /// Output file path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ServiceAction {
    /// Record a service event
    Add {
        /// Plate of a registered vehicle
        #[arg(long)]
        vehicle: String,

        /// Service date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// What was done (required)
        #[arg(long)]
        details: String,
    },
    /// Update a service event; omitted fields keep their current values
    Update {
        id: u32,

        #[arg(long)]
        vehicle: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        details: Option<String>,
    },
    /// Delete a service event
    Remove {
        id: u32,
    },
    /// List service events
    List,
}
