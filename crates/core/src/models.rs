pub mod appointment;
pub mod office;
pub mod slot;
pub mod time_option;

pub use appointment::{ExistingAppointment, OccupantMetadata};
pub use office::RegionalOffice;
pub use slot::{DataQualityWarning, HearingSlot};
pub use time_option::CustomTimeOption;
