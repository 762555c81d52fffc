//! # Hearing Slots Appointments
//!
//! The upstream side of slot generation: where already-booked appointments
//! come from, and how a late fetch result is reconciled with the venue and
//! date currently being scheduled.
//!
//! Fetching is the only asynchronous step. Generation itself stays
//! synchronous and is simply re-run once the appointments arrive.

pub mod mock;
pub mod refresher;
pub mod source;

pub use refresher::{SelectionKey, SlotRefresher};
pub use source::{AppointmentSource, InMemoryAppointments};
