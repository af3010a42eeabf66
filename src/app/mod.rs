//! Application layer
//!
//! Composes the record repositories into the fleet engine and carries
//! the use-case plumbing: edit-mode dispatch, valid reference sets for
//! new trip/service records, and cross-collection search.

pub mod edit_mode;
pub mod fleet;
pub mod query;
pub mod references;

pub use edit_mode::{EditController, EditMode};
pub use fleet::Fleet;
pub use references::ReferenceSets;
