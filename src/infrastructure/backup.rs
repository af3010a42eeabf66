//! Whole-dataset backup and import
//!
//! Backup copies every file in the data directory (record files and
//! signature artifacts) into a destination folder. Import overlays the
//! files found in a backup folder onto the live directory: same-named
//! files are overwritten, live files absent from the backup are left
//! untouched. Neither operation rolls back on partial failure; the
//! caller must reload all repositories after an import.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Copy every regular file in `data_dir` into `destination`, creating
/// the destination if absent.
pub fn backup_all(data_dir: &Path, destination: &Path) -> Result<Vec<String>> {
    fs::create_dir_all(destination).map_err(|e| {
        Error::Backup(format!("cannot create {}: {}", destination.display(), e))
    })?;

    let mut copied = Vec::new();
    for entry in read_files(data_dir).map_err(Error::Backup)? {
        let name = file_name(&entry);
        fs::copy(&entry, destination.join(&name))
            .map_err(|e| Error::Backup(format!("copying {}: {}", name, e)))?;
        copied.push(name);
    }
    Ok(copied)
}

/// Overlay every regular file in `source` onto `data_dir`, returning the
/// names of the imported files.
pub fn import_all(source: &Path, data_dir: &Path) -> Result<Vec<String>> {
    fs::create_dir_all(data_dir)
        .map_err(|e| Error::Restore(format!("cannot create {}: {}", data_dir.display(), e)))?;

    let mut imported = Vec::new();
    for entry in read_files(source).map_err(Error::Restore)? {
        let name = file_name(&entry);
        fs::copy(&entry, data_dir.join(&name))
            .map_err(|e| Error::Restore(format!("copying {}: {}", name, e)))?;
        imported.push(name);
    }
    Ok(imported)
}

fn read_files(dir: &Path) -> std::result::Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("cannot read {}: {}", dir.display(), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("reading {}: {}", dir.display(), e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    // Stable order so backup reports are deterministic
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
