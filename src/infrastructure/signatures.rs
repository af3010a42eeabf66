//! Signature artifact handling
//!
//! One image file per trip, named from the trip id and stored alongside
//! the record files. The artifact is owned by its trip: it is created
//! when the trip is created, replaced in place on update, and removed
//! (best-effort) when the trip is deleted.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{Error, Result};

/// Image extensions accepted for signature input
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp"];

/// Artifact file name for a trip id.
pub fn signature_file_name(trip_id: u32) -> String {
    format!("signature_{}.png", trip_id)
}

/// Check if a path has a supported image extension
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Validate a signature source image exists and is decodable.
pub fn validate_signature_image(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    if !path.is_file() || !is_supported_image(path) {
        return Err(Error::Validation {
            field: "signature",
            reason: format!("{} is not a supported image file", path.display()),
        });
    }
    image::open(path)?;
    Ok(())
}

/// Copy a validated signature image into the data directory under the
/// trip's deterministic artifact name. Returns the artifact file name.
pub fn attach_signature(data_dir: &Path, trip_id: u32, source: &Path) -> Result<String> {
    validate_signature_image(source)?;
    let name = signature_file_name(trip_id);
    fs::copy(source, data_dir.join(&name))?;
    Ok(name)
}

/// Resolve a trip's stored signature file name to a path, if the
/// artifact exists.
pub fn resolve_signature(data_dir: &Path, signature: &str) -> Option<PathBuf> {
    if signature.is_empty() {
        return None;
    }
    let path = data_dir.join(signature);
    path.exists().then_some(path)
}

/// Remove a trip's signature artifact. Best-effort: failure is logged,
/// never fatal.
pub fn remove_signature(data_dir: &Path, signature: &str) {
    if signature.is_empty() {
        return;
    }
    let path = data_dir.join(signature);
    if !path.exists() {
        return;
    }
    if let Err(e) = fs::remove_file(&path) {
        warn!("could not remove signature artifact {}: {}", path.display(), e);
    }
}

/// Rename a signature artifact after trip reindexing, keeping artifact
/// names in step with the new ids. Best-effort, logged on failure.
pub fn rename_signature(data_dir: &Path, old_name: &str, new_name: &str) {
    if old_name == new_name || old_name.is_empty() {
        return;
    }
    let from = data_dir.join(old_name);
    if !from.exists() {
        return;
    }
    if let Err(e) = fs::rename(&from, data_dir.join(new_name)) {
        warn!("could not rename signature artifact {}: {}", from.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // Smallest valid 1x1 PNG
    fn write_png(path: &Path) {
        let img = image::RgbImage::new(1, 1);
        img.save(path).unwrap();
    }

    #[test]
    fn artifact_name_is_derived_from_id() {
        assert_eq!(signature_file_name(7), "signature_7.png");
    }

    #[test]
    fn attach_copies_under_deterministic_name() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("pad.png");
        write_png(&src);

        let name = attach_signature(dir.path(), 3, &src).unwrap();
        assert_eq!(name, "signature_3.png");
        assert!(dir.path().join("signature_3.png").exists());
    }

    #[test]
    fn attach_rejects_non_image_input() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("notes.txt");
        fs::write(&src, "not an image").unwrap();
        assert!(attach_signature(dir.path(), 1, &src).is_err());
    }

    #[test]
    fn remove_is_silent_when_artifact_is_already_gone() {
        let dir = tempdir().unwrap();
        remove_signature(dir.path(), "signature_9.png");
    }

    #[test]
    fn rename_moves_the_artifact() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("signature_3.png"));
        rename_signature(dir.path(), "signature_3.png", "signature_2.png");
        assert!(!dir.path().join("signature_3.png").exists());
        assert!(dir.path().join("signature_2.png").exists());
    }
}
