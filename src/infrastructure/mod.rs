//! Infrastructure layer
//!
//! Concrete persistence for the record collections, whole-dataset
//! backup/import, and signature artifact handling.

pub mod backup;
pub mod persistence;
pub mod signatures;
