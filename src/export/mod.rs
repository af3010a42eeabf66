//! Trip document export

pub mod document;

pub use document::{PlainDocument, TripDocument};
