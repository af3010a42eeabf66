//! Output formatting module

use crate::app::fleet::VehicleStatus;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::{Driver, Service, Trip, DATETIME_FMT, DATE_FMT};

pub fn print_drivers(format: OutputFormat, drivers: &[Driver]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(drivers)?);
        return Ok(());
    }
    println!("\nDrivers ({})", drivers.len());
    println!("{:<5} NAME", "ID");
    for d in drivers {
        println!("{:<5} {}", d.id, d.name);
    }
    Ok(())
}

pub fn print_vehicles(format: OutputFormat, vehicles: &[VehicleStatus]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }
    println!("\nVehicles ({})", vehicles.len());
    println!(
        "{:<5} {:<12} {:<12} {:<12} STATUS",
        "ID", "PLATE", "KTEO PASSED", "KTEO NEXT"
    );
    for row in vehicles {
        let v = &row.vehicle;
        println!(
            "{:<5} {:<12} {:<12} {:<12} {}",
            v.id,
            v.plate,
            v.kteo_passed.format(DATE_FMT),
            v.kteo_next.format(DATE_FMT),
            row.status
        );
    }
    Ok(())
}

pub fn print_trips(format: OutputFormat, trips: &[Trip]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(trips)?);
        return Ok(());
    }
    println!("\nTrips ({})", trips.len());
    println!(
        "{:<5} {:<16} {:<12} {:<17} {:<17} DETAILS",
        "ID", "DRIVER", "VEHICLE", "DEPART", "ARRIVE"
    );
    for t in trips {
        println!(
            "{:<5} {:<16} {:<12} {:<17} {:<17} {}",
            t.id,
            t.driver,
            t.vehicle,
            t.depart.format(DATETIME_FMT),
            t.arrive.format(DATETIME_FMT),
            t.details
        );
    }
    Ok(())
}

pub fn print_services(format: OutputFormat, services: &[Service]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(services)?);
        return Ok(());
    }
    println!("\nService events ({})", services.len());
    println!("{:<5} {:<12} {:<12} DETAILS", "ID", "VEHICLE", "DATE");
    for s in services {
        println!(
            "{:<5} {:<12} {:<12} {}",
            s.id,
            s.vehicle,
            s.date.format(DATE_FMT),
            s.details
        );
    }
    Ok(())
}

/// Print compliance alert lines; says so when there are none.
pub fn print_alerts(format: OutputFormat, alerts: &[String]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(alerts)?);
        return Ok(());
    }
    if alerts.is_empty() {
        println!("All vehicles are within their KTEO dates.");
    } else {
        for alert in alerts {
            println!("{}", alert);
        }
    }
    Ok(())
}

/// Print search result lines.
pub fn print_search_results(format: OutputFormat, results: &[String]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("No results found.");
    } else {
        for line in results {
            println!("{}", line);
        }
    }
    Ok(())
}
