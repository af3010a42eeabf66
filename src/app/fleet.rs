//! Fleet engine composition
//!
//! Owns the four record repositories and the data directory, and wires
//! the pieces together: reference-set validation for new trip/service
//! records, the trip signature artifact lifecycle, compliance scans,
//! and whole-dataset backup/import.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::service::compliance::{self, KteoStatus};
use crate::error::Result;
use crate::infrastructure::backup;
use crate::infrastructure::persistence::FileRepository;
use crate::infrastructure::signatures;
use crate::types::{Driver, Service, Trip, Vehicle};

use super::edit_mode::EditController;
use super::references::ReferenceSets;

/// A vehicle paired with its computed compliance status.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleStatus {
    pub vehicle: Vehicle,
    pub status: KteoStatus,
}

/// The record engine over one data directory.
///
/// All mutations go through these methods; repository access for reads
/// is public so callers can list collections directly.
pub struct Fleet {
    data_dir: PathBuf,
    pub drivers: FileRepository<Driver>,
    pub vehicles: FileRepository<Vehicle>,
    pub trips: FileRepository<Trip>,
    pub services: FileRepository<Service>,
    references: ReferenceSets,
}

impl Fleet {
    /// Open (or initialize) the engine over `data_dir`.
    ///
    /// A corrupt record file is reported via the log and replaced by an
    /// empty in-memory collection; the file itself is kept on disk.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let drivers = FileRepository::open_lenient(data_dir)?;
        let vehicles = FileRepository::open_lenient(data_dir)?;
        let trips = FileRepository::open_lenient(data_dir)?;
        let services = FileRepository::open_lenient(data_dir)?;
        let references = ReferenceSets::rebuild(drivers.list(), vehicles.list());
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            drivers,
            vehicles,
            trips,
            services,
            references,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Current valid driver/vehicle reference sets for new records.
    pub fn references(&self) -> &ReferenceSets {
        &self.references
    }

    fn rebuild_references(&mut self) {
        self.references = ReferenceSets::rebuild(self.drivers.list(), self.vehicles.list());
    }

    // --- Drivers ---

    /// One submission path for insert and update: the edit controller
    /// dispatches on whether an edit target was selected.
    fn submit_driver(&mut self, target: Option<u32>, name: &str) -> Result<Driver> {
        let mut ctl = EditController::new();
        if let Some(id) = target {
            ctl.begin_edit(&self.drivers, id)?;
        }
        let stored = ctl.submit(&mut self.drivers, Driver::new(name)?)?;
        self.rebuild_references();
        Ok(stored)
    }

    pub fn add_driver(&mut self, name: &str) -> Result<Driver> {
        self.submit_driver(None, name)
    }

    /// Rename a driver. Existing trips keep their snapshot of the old
    /// name; only the reference set for new trips changes.
    pub fn update_driver(&mut self, id: u32, name: &str) -> Result<Driver> {
        self.submit_driver(Some(id), name)
    }

    pub fn remove_driver(&mut self, id: u32) -> Result<Driver> {
        let removed = self.drivers.delete(id)?;
        self.rebuild_references();
        Ok(removed)
    }

    // --- Vehicles ---

    fn submit_vehicle(
        &mut self,
        target: Option<u32>,
        plate: &str,
        kteo_passed: &str,
        kteo_next: &str,
    ) -> Result<Vehicle> {
        let mut ctl = EditController::new();
        if let Some(id) = target {
            ctl.begin_edit(&self.vehicles, id)?;
        }
        let stored = ctl.submit(&mut self.vehicles, Vehicle::new(plate, kteo_passed, kteo_next)?)?;
        self.rebuild_references();
        Ok(stored)
    }

    pub fn add_vehicle(
        &mut self,
        plate: &str,
        kteo_passed: &str,
        kteo_next: &str,
    ) -> Result<Vehicle> {
        self.submit_vehicle(None, plate, kteo_passed, kteo_next)
    }

    pub fn update_vehicle(
        &mut self,
        id: u32,
        plate: &str,
        kteo_passed: &str,
        kteo_next: &str,
    ) -> Result<Vehicle> {
        self.submit_vehicle(Some(id), plate, kteo_passed, kteo_next)
    }

    /// Delete a vehicle. Trips and services that reference its plate
    /// keep the snapshot string unchanged (no cascade).
    pub fn remove_vehicle(&mut self, id: u32) -> Result<Vehicle> {
        let removed = self.vehicles.delete(id)?;
        self.rebuild_references();
        Ok(removed)
    }

    // --- Trips ---

    #[allow(clippy::too_many_arguments)]
    fn submit_trip(
        &mut self,
        target: Option<u32>,
        driver: &str,
        vehicle: &str,
        depart: &str,
        arrive: &str,
        details: &str,
        signature_image: Option<&Path>,
    ) -> Result<Trip> {
        let mut trip = Trip::new(driver, vehicle, depart, arrive, details)?;
        self.references.check_driver(&trip.driver)?;
        self.references.check_vehicle(&trip.vehicle)?;

        let mut ctl = EditController::new();
        let artifact_id = match target {
            Some(id) => {
                ctl.begin_edit(&self.trips, id)?;
                id
            }
            None => self.trips.next_id(),
        };
        trip.signature = signatures::signature_file_name(artifact_id);
        if let Some(image) = signature_image {
            signatures::attach_signature(&self.data_dir, artifact_id, image)?;
        }
        ctl.submit(&mut self.trips, trip)
    }

    /// Record a trip. The driver and vehicle must currently exist; the
    /// stored strings are snapshots from that moment on. The signature
    /// image is copied into the data directory under a name derived
    /// from the new trip's id.
    pub fn add_trip(
        &mut self,
        driver: &str,
        vehicle: &str,
        depart: &str,
        arrive: &str,
        details: &str,
        signature_image: &Path,
    ) -> Result<Trip> {
        self.submit_trip(
            None,
            driver,
            vehicle,
            depart,
            arrive,
            details,
            Some(signature_image),
        )
    }

    /// Update a trip in place. The artifact name is kept; a new
    /// signature image, if given, replaces the artifact's content.
    #[allow(clippy::too_many_arguments)]
    pub fn update_trip(
        &mut self,
        id: u32,
        driver: &str,
        vehicle: &str,
        depart: &str,
        arrive: &str,
        details: &str,
        signature_image: Option<&Path>,
    ) -> Result<Trip> {
        self.submit_trip(
            Some(id),
            driver,
            vehicle,
            depart,
            arrive,
            details,
            signature_image,
        )
    }

    /// Delete a trip and its signature artifact, then keep the
    /// surviving artifacts' names in step with the reindexed ids.
    pub fn remove_trip(&mut self, id: u32) -> Result<Trip> {
        let removed = self.trips.delete(id)?;
        signatures::remove_signature(&self.data_dir, &removed.signature);

        let data_dir = self.data_dir.clone();
        self.trips.for_each_mut(|trip| {
            let expected = signatures::signature_file_name(trip.id);
            if trip.signature != expected {
                signatures::rename_signature(&data_dir, &trip.signature, &expected);
                trip.signature = expected;
            }
        })?;
        Ok(removed)
    }

    /// Resolve a trip's signature artifact path, if present on disk.
    pub fn signature_path(&self, trip: &Trip) -> Option<PathBuf> {
        signatures::resolve_signature(&self.data_dir, &trip.signature)
    }

    // --- Services ---

    fn submit_service(
        &mut self,
        target: Option<u32>,
        vehicle: &str,
        date: &str,
        details: &str,
    ) -> Result<Service> {
        let service = Service::new(vehicle, date, details)?;
        self.references.check_vehicle(&service.vehicle)?;

        let mut ctl = EditController::new();
        if let Some(id) = target {
            ctl.begin_edit(&self.services, id)?;
        }
        ctl.submit(&mut self.services, service)
    }

    pub fn add_service(&mut self, vehicle: &str, date: &str, details: &str) -> Result<Service> {
        self.submit_service(None, vehicle, date, details)
    }

    pub fn update_service(
        &mut self,
        id: u32,
        vehicle: &str,
        date: &str,
        details: &str,
    ) -> Result<Service> {
        self.submit_service(Some(id), vehicle, date, details)
    }

    pub fn remove_service(&mut self, id: u32) -> Result<Service> {
        self.services.delete(id)
    }

    // --- Compliance ---

    /// Status of every vehicle, in collection order. Read-only.
    pub fn status_report(&self, today: NaiveDate) -> Vec<VehicleStatus> {
        self.vehicles
            .list()
            .iter()
            .map(|v| VehicleStatus {
                vehicle: v.clone(),
                status: compliance::status(today, v.kteo_next),
            })
            .collect()
    }

    /// Alert lines for expired / soon-due vehicles.
    pub fn scan_alerts(&self, today: NaiveDate) -> Vec<String> {
        compliance::scan_fleet(today, self.vehicles.list())
    }

    // --- Backup / import ---

    pub fn backup(&self, destination: &Path) -> Result<Vec<String>> {
        backup::backup_all(&self.data_dir, destination)
    }

    /// Overlay a backup folder onto the data directory and reload all
    /// collections from disk.
    pub fn import(&mut self, source: &Path) -> Result<Vec<String>> {
        let imported = backup::import_all(source, &self.data_dir)?;
        self.reload()?;
        Ok(imported)
    }

    /// Reload every collection from disk and rebuild the reference sets.
    pub fn reload(&mut self) -> Result<()> {
        self.drivers = FileRepository::open_lenient(&self.data_dir)?;
        self.vehicles = FileRepository::open_lenient(&self.data_dir)?;
        self.trips = FileRepository::open_lenient(&self.data_dir)?;
        self.services = FileRepository::open_lenient(&self.data_dir)?;
        self.rebuild_references();
        Ok(())
    }
}
