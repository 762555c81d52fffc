//! # Hearing Slots Core
//!
//! Shared types for the hearing slot engine: the data model exchanged with
//! collaborating code, the error type, and the regional office reference
//! directory.

/// Regional office reference data
pub mod directory;
/// Error type shared by every crate in the workspace
pub mod errors;
/// Data model for offices, appointments, slots and custom time options
pub mod models;

pub use directory::OfficeDirectory;
pub use errors::{SchedulingError, SchedulingResult};
