//! Command handlers

use std::path::Path;
use std::thread;
use std::time::Duration;

use chrono::Local;

use crate::app::{query, Fleet};
use crate::cli::{
    Cli, Commands, DriverAction, OutputFormat, ServiceAction, TripAction, VehicleAction,
};
use crate::config::Config;
use crate::error::Result;
use crate::export::{PlainDocument, TripDocument};
use crate::output;
use crate::types::{DATETIME_FMT, DATE_FMT};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Driver { action } => cmd_driver(&cli, &config, action, format),
        Commands::Vehicle { action } => cmd_vehicle(&cli, &config, action, format),
        Commands::Trip { action } => cmd_trip(&cli, &config, action, format),
        Commands::Service { action } => cmd_service(&cli, &config, action, format),
        Commands::Status => cmd_status(&config, format),
        Commands::Watch { interval_secs } => cmd_watch(&config, *interval_secs, format),
        Commands::Search { query } => cmd_search(&config, query, format),
        Commands::Backup { destination } => cmd_backup(&cli, &config, destination),
        Commands::Import { source } => cmd_import(&cli, &config, source),
        Commands::Config {
            show,
            set_data_dir,
            set_output,
            reset,
        } => cmd_config(*show, set_data_dir.clone(), *set_output, *reset),
    }
}

fn open_fleet(config: &Config) -> Result<Fleet> {
    Fleet::open(&config.data_dir())
}

fn cmd_driver(cli: &Cli, config: &Config, action: &DriverAction, format: OutputFormat) -> Result<()> {
    let mut fleet = open_fleet(config)?;
    match action {
        DriverAction::Add { name } => {
            let driver = fleet.add_driver(name)?;
            if cli.verbose {
                eprintln!("Registered driver #{}", driver.id);
            }
            output::print_drivers(format, std::slice::from_ref(&driver))
        }
        DriverAction::Update { id, name } => {
            let driver = fleet.update_driver(*id, name)?;
            output::print_drivers(format, std::slice::from_ref(&driver))
        }
        DriverAction::Remove { id } => {
            let removed = fleet.remove_driver(*id)?;
            println!("Deleted driver {}", removed.name);
            Ok(())
        }
        DriverAction::List => output::print_drivers(format, fleet.drivers.list()),
    }
}

fn cmd_vehicle(
    cli: &Cli,
    config: &Config,
    action: &VehicleAction,
    format: OutputFormat,
) -> Result<()> {
    let mut fleet = open_fleet(config)?;
    let today = Local::now().date_naive();
    match action {
        VehicleAction::Add {
            plate,
            kteo_passed,
            kteo_next,
        } => {
            let vehicle = fleet.add_vehicle(plate, kteo_passed, kteo_next)?;
            if cli.verbose {
                eprintln!("Registered vehicle #{}", vehicle.id);
            }
            let report = fleet.status_report(today);
            let row = report.into_iter().find(|r| r.vehicle.id == vehicle.id);
            output::print_vehicles(format, row.as_slice())
        }
        VehicleAction::Update {
            id,
            plate,
            kteo_passed,
            kteo_next,
        } => {
            // Omitted flags keep the record's current field values
            let current = fleet
                .vehicles
                .get(*id)
                .ok_or(crate::error::Error::NotFound { kind: "vehicle", id: *id })?
                .clone();
            let plate = plate.clone().unwrap_or(current.plate);
            let passed = kteo_passed
                .clone()
                .unwrap_or_else(|| current.kteo_passed.format(DATE_FMT).to_string());
            let next = kteo_next
                .clone()
                .unwrap_or_else(|| current.kteo_next.format(DATE_FMT).to_string());
            let vehicle = fleet.update_vehicle(*id, &plate, &passed, &next)?;
            let report = fleet.status_report(today);
            let row = report.into_iter().find(|r| r.vehicle.id == vehicle.id);
            output::print_vehicles(format, row.as_slice())
        }
        VehicleAction::Remove { id } => {
            let removed = fleet.remove_vehicle(*id)?;
            println!("Deleted vehicle {}", removed.plate);
            Ok(())
        }
        VehicleAction::List => output::print_vehicles(format, &fleet.status_report(today)),
    }
}

fn cmd_trip(cli: &Cli, config: &Config, action: &TripAction, format: OutputFormat) -> Result<()> {
    let mut fleet = open_fleet(config)?;
    match action {
        TripAction::Add {
            driver,
            vehicle,
            depart,
            arrive,
            details,
            signature,
        } => {
            let trip = fleet.add_trip(driver, vehicle, depart, arrive, details, signature)?;
            if cli.verbose {
                eprintln!("Recorded trip #{} ({})", trip.id, trip.signature);
            }
            output::print_trips(format, std::slice::from_ref(&trip))
        }
        TripAction::Update {
            id,
            driver,
            vehicle,
            depart,
            arrive,
            details,
            signature,
        } => {
            let current = fleet
                .trips
                .get(*id)
                .ok_or(crate::error::Error::NotFound { kind: "trip", id: *id })?
                .clone();
            let driver = driver.clone().unwrap_or(current.driver);
            let vehicle = vehicle.clone().unwrap_or(current.vehicle);
            let depart = depart
                .clone()
                .unwrap_or_else(|| current.depart.format(DATETIME_FMT).to_string());
            let arrive = arrive
                .clone()
                .unwrap_or_else(|| current.arrive.format(DATETIME_FMT).to_string());
            let details = details.clone().unwrap_or(current.details);
            let trip = fleet.update_trip(
                *id,
                &driver,
                &vehicle,
                &depart,
                &arrive,
                &details,
                signature.as_deref(),
            )?;
            output::print_trips(format, std::slice::from_ref(&trip))
        }
        TripAction::Remove { id } => {
            let removed = fleet.remove_trip(*id)?;
            println!("Deleted trip {} -> {}", removed.driver, removed.vehicle);
            Ok(())
        }
        TripAction::List => output::print_trips(format, fleet.trips.list()),
        TripAction::Export { id, output: out } => {
            let trip = fleet
                .trips
                .get(*id)
                .ok_or(crate::error::Error::NotFound { kind: "trip", id: *id })?
                .clone();
            let signature = fleet.signature_path(&trip);
            PlainDocument.render(&trip, signature.as_deref(), out)?;
            println!("Exported trip #{} to {}", trip.id, out.display());
            Ok(())
        }
    }
}

fn cmd_service(
    cli: &Cli,
    config: &Config,
    action: &ServiceAction,
    format: OutputFormat,
) -> Result<()> {
    let mut fleet = open_fleet(config)?;
    match action {
        ServiceAction::Add {
            vehicle,
            date,
            details,
        } => {
            let service = fleet.add_service(vehicle, date, details)?;
            if cli.verbose {
                eprintln!("Recorded service #{}", service.id);
            }
            output::print_services(format, std::slice::from_ref(&service))
        }
        ServiceAction::Update {
            id,
            vehicle,
            date,
            details,
        } => {
            let current = fleet
                .services
                .get(*id)
                .ok_or(crate::error::Error::NotFound { kind: "service", id: *id })?
                .clone();
            let vehicle = vehicle.clone().unwrap_or(current.vehicle);
            let date = date
                .clone()
                .unwrap_or_else(|| current.date.format(DATE_FMT).to_string());
            let details = details.clone().unwrap_or(current.details);
            let service = fleet.update_service(*id, &vehicle, &date, &details)?;
            output::print_services(format, std::slice::from_ref(&service))
        }
        ServiceAction::Remove { id } => {
            let removed = fleet.remove_service(*id)?;
            println!("Deleted service for {}", removed.vehicle);
            Ok(())
        }
        ServiceAction::List => output::print_services(format, fleet.services.list()),
    }
}

fn cmd_status(config: &Config, format: OutputFormat) -> Result<()> {
    let fleet = open_fleet(config)?;
    let today = Local::now().date_naive();
    output::print_vehicles(format, &fleet.status_report(today))?;
    output::print_alerts(format, &fleet.scan_alerts(today))
}

/// Periodic compliance scan: immediate pass, then one per interval.
/// The scan re-reads the data directory each round so edits made by
/// other invocations are picked up; it never mutates records.
fn cmd_watch(config: &Config, interval_secs: u64, format: OutputFormat) -> Result<()> {
    loop {
        let fleet = open_fleet(config)?;
        let today = Local::now().date_naive();
        println!("[{}] KTEO scan", Local::now().format(DATETIME_FMT));
        output::print_alerts(format, &fleet.scan_alerts(today))?;
        thread::sleep(Duration::from_secs(interval_secs));
    }
}

fn cmd_search(config: &Config, query_str: &str, format: OutputFormat) -> Result<()> {
    let fleet = open_fleet(config)?;
    let results = query::search(&fleet, query_str);
    output::print_search_results(format, &results)
}

fn cmd_backup(cli: &Cli, config: &Config, destination: &Path) -> Result<()> {
    let fleet = open_fleet(config)?;
    let copied = fleet.backup(destination)?;
    if cli.verbose {
        for name in &copied {
            eprintln!("copied {}", name);
        }
    }
    println!("Backup complete ({} files).", copied.len());
    Ok(())
}

fn cmd_import(cli: &Cli, config: &Config, source: &Path) -> Result<()> {
    let mut fleet = open_fleet(config)?;
    let imported = fleet.import(source)?;
    if cli.verbose {
        for name in &imported {
            eprintln!("imported {}", name);
        }
    }
    println!("Import complete ({} files).", imported.len());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<std::path::PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut changed = false;
    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }
    if let Some(fmt) = set_output {
        config.output_format = fmt;
        changed = true;
    }
    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        print!("{}", config);
    }
    Ok(())
}
