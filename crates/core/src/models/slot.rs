use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::appointment::{ExistingAppointment, OccupantMetadata};

/// One entry of a generated slot grid.
///
/// Slots are produced fresh by every generation call. Booked slots carry the
/// id and metadata of the appointment that holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingSlot {
    pub time: DateTime<Utc>,
    pub eastern_time_string: String,
    pub is_occupied: bool,
    pub occupying_appointment_id: Option<String>,
    pub occupant_metadata: Option<OccupantMetadata>,
    /// False for entries added beside the hourly grid: appointments between
    /// boundaries, and later bookings of a time that was already taken.
    pub on_grid: bool,
}

impl HearingSlot {
    pub fn open(time: DateTime<Utc>, eastern_time_string: String) -> Self {
        Self {
            time,
            eastern_time_string,
            is_occupied: false,
            occupying_appointment_id: None,
            occupant_metadata: None,
            on_grid: true,
        }
    }

    /// An entry for a booked appointment that matches no grid boundary.
    pub fn off_grid(
        time: DateTime<Utc>,
        eastern_time_string: String,
        appointment: &ExistingAppointment,
    ) -> Self {
        Self {
            on_grid: false,
            ..Self::open(time, eastern_time_string).occupied_by(appointment)
        }
    }

    pub fn occupied_by(self, appointment: &ExistingAppointment) -> Self {
        Self {
            is_occupied: true,
            occupying_appointment_id: Some(appointment.external_id.clone()),
            occupant_metadata: Some(appointment.occupant_metadata()),
            ..self
        }
    }
}

/// Problems in upstream appointment data that did not stop generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataQualityWarning {
    /// The time string is not `"HH:mm"`; the appointment was skipped.
    #[serde(rename_all = "camelCase")]
    UnparseableTime { external_id: String, raw: String },
    /// Another appointment already holds this time.
    #[serde(rename_all = "camelCase")]
    DuplicateBooking {
        external_id: String,
        eastern_time_string: String,
    },
}
