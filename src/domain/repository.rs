//! Record contract shared by all persisted collections

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::{Driver, Service, Trip, Vehicle};

/// The uniqueness-constrained field of a record, as entered.
///
/// Comparison is done on the case-folded value so that `"Γιάννης"` and
/// `"γιάννης"` collide.
#[derive(Debug, Clone)]
pub struct UniqueKey {
    pub field: &'static str,
    pub value: String,
}

impl UniqueKey {
    pub fn folded(&self) -> String {
        self.value.to_lowercase()
    }
}

/// A record kind persisted as one JSON array file.
///
/// Ids are dense and 1-based within each collection; the repository owns
/// assignment and post-delete reindexing.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// File name inside the data directory
    const FILE_NAME: &'static str;
    /// Human-readable kind label used in errors and output
    const KIND: &'static str;

    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);

    /// The field checked for case-insensitive duplicates, if any.
    fn unique_key(&self) -> Option<UniqueKey> {
        None
    }
}

impl Record for Driver {
    const FILE_NAME: &'static str = "drivers.json";
    const KIND: &'static str = "driver";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn unique_key(&self) -> Option<UniqueKey> {
        Some(UniqueKey {
            field: "driver name",
            value: self.name.clone(),
        })
    }
}

impl Record for Vehicle {
    const FILE_NAME: &'static str = "vehicles.json";
    const KIND: &'static str = "vehicle";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn unique_key(&self) -> Option<UniqueKey> {
        Some(UniqueKey {
            field: "plate",
            value: self.plate.clone(),
        })
    }
}

impl Record for Trip {
    const FILE_NAME: &'static str = "trips.json";
    const KIND: &'static str = "trip";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Record for Service {
    const FILE_NAME: &'static str = "services.json";
    const KIND: &'static str = "service";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
