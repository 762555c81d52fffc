//! # Scheduling Mode
//!
//! The picker is either showing the hourly slot grid or the custom time list.
//! Each variant owns its own pending selection, so a slot selection cannot
//! exist while custom mode is active and vice versa. Switching modes drops
//! whatever was selected before.

use hearing_slots_core::{
    errors::{SchedulingError, SchedulingResult},
    models::{CustomTimeOption, HearingSlot},
};

/// Pending selection in slot-grid mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotPicker {
    selected: Option<String>,
}

impl SlotPicker {
    /// Selects an open slot, replacing any earlier selection.
    ///
    /// # Errors
    ///
    /// * `SchedulingError::SlotUnavailable` - The slot is already booked
    pub fn select(&mut self, slot: &HearingSlot) -> SchedulingResult<()> {
        if slot.is_occupied {
            return Err(SchedulingError::SlotUnavailable(
                slot.eastern_time_string.clone(),
            ));
        }
        self.selected = Some(slot.eastern_time_string.clone());
        Ok(())
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

/// Pending selection in custom-time mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomPicker {
    selected: Option<String>,
}

impl CustomPicker {
    pub fn select(&mut self, option: &CustomTimeOption) {
        self.selected = Some(option.value.clone());
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingMode {
    Slot(SlotPicker),
    Custom(CustomPicker),
}

impl Default for SchedulingMode {
    fn default() -> Self {
        SchedulingMode::Slot(SlotPicker::default())
    }
}

impl SchedulingMode {
    /// Enters custom mode, discarding any pending slot selection.
    pub fn into_custom(self) -> Self {
        match self {
            SchedulingMode::Slot(_) => SchedulingMode::Custom(CustomPicker::default()),
            custom @ SchedulingMode::Custom(_) => custom,
        }
    }

    /// Enters slot mode, discarding any pending custom selection.
    pub fn into_slots(self) -> Self {
        match self {
            SchedulingMode::Custom(_) => SchedulingMode::Slot(SlotPicker::default()),
            slot @ SchedulingMode::Slot(_) => slot,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            SchedulingMode::Slot(_) => self.into_custom(),
            SchedulingMode::Custom(_) => self.into_slots(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, SchedulingMode::Custom(_))
    }

    /// Eastern `"HH:mm"` value to submit, if anything is selected.
    pub fn selected_time(&self) -> Option<&str> {
        match self {
            SchedulingMode::Slot(picker) => picker.selected(),
            SchedulingMode::Custom(picker) => picker.selected(),
        }
    }

    /// Text of the link that switches to the other mode.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            SchedulingMode::Slot(_) => "Choose a custom time",
            SchedulingMode::Custom(_) => "Choose a time slot",
        }
    }
}
