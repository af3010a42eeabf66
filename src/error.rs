//! Error types for fleet-keeper

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    #[error("No {kind} record with id {id}")]
    NotFound { kind: &'static str, id: u32 },

    #[error("Corrupt data file {}: {reason}", file.display())]
    DataCorruption { file: PathBuf, reason: String },

    #[error("Failed to persist {}: {source}", file.display())]
    Persistence {
        file: PathBuf,
        source: std::io::Error,
    },

    #[error("Backup failed: {0}")]
    Backup(String),

    #[error("Import failed: {0}")]
    Restore(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Export failed: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Recoverable input errors (bad field, duplicate), as opposed to
    /// IO or state failures.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::Duplicate { .. })
    }
}
