//! Trip document adapter
//!
//! The engine's contract with the document backend: given a resolved
//! trip and the path of its signature artifact (if present), produce a
//! single fixed-layout document. A PDF backend lives behind the same
//! trait; the shipped renderer writes a plain UTF-8 trip sheet. Export
//! never mutates live data.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Trip, DATETIME_FMT};

/// Renders one trip into one output file.
pub trait TripDocument {
    fn render(&self, trip: &Trip, signature: Option<&Path>, output: &Path) -> Result<()>;
}

/// Fixed-layout plain-text trip sheet.
#[derive(Debug, Default)]
pub struct PlainDocument;

impl TripDocument for PlainDocument {
    fn render(&self, trip: &Trip, signature: Option<&Path>, output: &Path) -> Result<()> {
        let file = File::create(output).map_err(|e| Error::Export(e.to_string()))?;
        let mut w = BufWriter::new(file);

        writeln!(w, "Trip sheet #{}", trip.id)?;
        writeln!(w, "==================")?;
        writeln!(w, "Driver:    {}", trip.driver)?;
        writeln!(w, "Vehicle:   {}", trip.vehicle)?;
        writeln!(w, "Departure: {}", trip.depart.format(DATETIME_FMT))?;
        writeln!(w, "Arrival:   {}", trip.arrive.format(DATETIME_FMT))?;
        writeln!(w, "Details:   {}", trip.details)?;
        match signature {
            Some(path) => writeln!(w, "Signature: {}", path.display())?,
            None => writeln!(w, "Signature: (none)")?,
        }
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_datetime;
    use tempfile::tempdir;

    fn sample_trip() -> Trip {
        Trip {
            id: 2,
            driver: "Maria".to_string(),
            vehicle: "ABC-1234".to_string(),
            depart: parse_datetime("depart", "2025-06-01 08:30").unwrap(),
            arrive: parse_datetime("arrive", "2025-06-01 12:45").unwrap(),
            details: "Warehouse run".to_string(),
            signature: "signature_2.png".to_string(),
        }
    }

    #[test]
    fn renders_all_fields_in_fixed_layout() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("trip.txt");
        PlainDocument.render(&sample_trip(), None, &out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("Trip sheet #2"));
        assert!(text.contains("Driver:    Maria"));
        assert!(text.contains("Departure: 2025-06-01 08:30"));
        assert!(text.contains("Signature: (none)"));
    }

    #[test]
    fn references_signature_artifact_when_present() {
        let dir = tempdir().unwrap();
        let sig = dir.path().join("signature_2.png");
        std::fs::write(&sig, b"png").unwrap();
        let out = dir.path().join("trip.txt");

        PlainDocument.render(&sample_trip(), Some(&sig), &out).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("signature_2.png"));
    }
}
