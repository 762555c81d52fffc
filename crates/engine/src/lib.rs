//! # Hearing Slots Engine
//!
//! Computes bookable hearing times for regional offices in different
//! timezones while persisting every time as an Eastern `"HH:mm"` string.
//!
//! ## Components
//!
//! - **TimeZoneConverter**: date-aware wall-clock conversion between zones
//! - **RegionalOfficeBusinessHours**: per-venue bookable window, with overrides
//! - **SlotGenerator**: hourly grid merged with already-booked appointments
//! - **CustomTimeOptionGenerator**: quarter-hour alternative time list
//! - **SlotLabelFormatter**: single- and dual-zone renderings
//! - **SchedulingMode**: slot/custom picker state machine
//!
//! Every generator is a pure function of its arguments; callers regenerate
//! instead of caching or mutating results.

/// Venue business-hours policy
pub mod business_hours;
/// Environment-driven configuration
pub mod config;
/// Quarter-hour custom time options
pub mod custom_times;
/// Presentational time labels
pub mod labels;
/// Slot grid / custom time mode toggle
pub mod mode;
/// Slot grid generation and occupancy reconciliation
pub mod slots;
/// Tracing subscriber setup
pub mod telemetry;
/// Date-aware timezone conversion
pub mod timezone;

pub use business_hours::{BusinessHoursWindow, RegionalOfficeBusinessHours};
pub use config::EngineConfig;
pub use custom_times::CustomTimeOptionGenerator;
pub use labels::SlotLabelFormatter;
pub use mode::{CustomPicker, SchedulingMode, SlotPicker};
pub use slots::{SlotGenerator, SlotGrid};
pub use timezone::{EASTERN, TimeZoneConverter};
