//! # Slot Generation
//!
//! Builds the hour-aligned grid of bookable times for a venue and date, then
//! reconciles it with appointments that are already booked.
//!
//! ## Reconciliation
//!
//! 1. Each appointment time is parsed as Eastern `"HH:mm"`; unparseable ones are
//!    skipped and reported as data-quality warnings
//! 2. An appointment whose time equals a grid slot's Eastern time occupies it
//! 3. Appointments between grid boundaries, and additional appointments at a
//!    time that is already taken, become their own occupied entries so that no
//!    booked time disappears from view
//! 4. The merged sequence is ordered by instant

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Utc};
use hearing_slots_core::{
    errors::SchedulingResult,
    models::{DataQualityWarning, ExistingAppointment, HearingSlot, RegionalOffice},
};
use tracing::{debug, warn};

use crate::business_hours::{BusinessHoursWindow, RegionalOfficeBusinessHours};
use crate::timezone::{EASTERN, TimeZoneConverter, WIRE_TIME_FORMAT};

/// Ordered result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    slots: Vec<HearingSlot>,
    warnings: Vec<DataQualityWarning>,
}

impl SlotGrid {
    pub fn slots(&self) -> &[HearingSlot] {
        &self.slots
    }

    pub fn warnings(&self) -> &[DataQualityWarning] {
        &self.warnings
    }

    /// First entry at the given Eastern `"HH:mm"` time.
    pub fn get(&self, eastern_time_string: &str) -> Option<&HearingSlot> {
        self.slots
            .iter()
            .find(|slot| slot.eastern_time_string == eastern_time_string)
    }

    pub fn occupied(&self) -> impl Iterator<Item = &HearingSlot> {
        self.slots.iter().filter(|slot| slot.is_occupied)
    }

    pub fn available(&self) -> impl Iterator<Item = &HearingSlot> {
        self.slots.iter().filter(|slot| !slot.is_occupied)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn into_slots(self) -> Vec<HearingSlot> {
        self.slots
    }
}

/// Produces slot grids from a business-hours policy.
#[derive(Debug, Clone, Default)]
pub struct SlotGenerator {
    hours: RegionalOfficeBusinessHours,
}

impl SlotGenerator {
    pub fn new(hours: RegionalOfficeBusinessHours) -> Self {
        Self { hours }
    }

    pub fn business_hours(&self) -> &RegionalOfficeBusinessHours {
        &self.hours
    }

    /// Generates the slot grid for `office` on `date`, merged with
    /// `existing_appointments`.
    ///
    /// Identical arguments always produce identical grids.
    ///
    /// # Errors
    ///
    /// * `SchedulingError::Configuration` - Unknown venue code or timezone
    /// * `SchedulingError::NonexistentLocalTime` - A window boundary falls in a DST gap
    pub fn generate(
        &self,
        office: &RegionalOffice,
        date: NaiveDate,
        existing_appointments: &[ExistingAppointment],
    ) -> SchedulingResult<SlotGrid> {
        let window = self.hours.window_for(office)?;
        // An override window carries its own zone, but the venue's must still resolve
        TimeZoneConverter::parse_zone(&office.timezone)?;

        let mut slots = grid_slots(&window, date)?;
        let warnings = reconcile(&mut slots, &window, date, existing_appointments)?;
        slots.sort_by_key(|slot| slot.time);

        debug!(
            "Generated {} slots for {} on {} ({} occupied, {} warnings)",
            slots.len(),
            office.code,
            date,
            slots.iter().filter(|slot| slot.is_occupied).count(),
            warnings.len()
        );

        Ok(SlotGrid { slots, warnings })
    }
}

fn grid_slots(window: &BusinessHoursWindow, date: NaiveDate) -> SchedulingResult<Vec<HearingSlot>> {
    let mut slots = Vec::new();
    let mut wall = window.start_local;

    while wall <= window.end_local {
        let time = TimeZoneConverter::localize(wall, window.zone, date)?.with_timezone(&Utc);
        let eastern = TimeZoneConverter::convert(wall, window.zone, EASTERN, date)?;
        slots.push(HearingSlot::open(
            time,
            eastern.format(WIRE_TIME_FORMAT).to_string(),
        ));

        let (next, wrapped) = wall.overflowing_add_signed(Duration::hours(1));
        if wrapped != 0 {
            break;
        }
        wall = next;
    }

    Ok(slots)
}

fn reconcile(
    slots: &mut Vec<HearingSlot>,
    window: &BusinessHoursWindow,
    date: NaiveDate,
    appointments: &[ExistingAppointment],
) -> SchedulingResult<Vec<DataQualityWarning>> {
    let mut warnings = Vec::new();
    // A grid crossing the Eastern fall-back hour repeats a wire value; every
    // slot showing it is booked together since "HH:mm" cannot tell them apart
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (position, slot) in slots.iter().enumerate() {
        index
            .entry(slot.eastern_time_string.clone())
            .or_default()
            .push(position);
    }
    let (start, end) = window.bounds_on(date)?;
    let midpoint = start.with_timezone(&Utc) + (end - start) / 2;

    for appointment in appointments {
        let eastern = match TimeZoneConverter::parse_wire_time(&appointment.eastern_time_string) {
            Ok(time) => time,
            Err(_) => {
                warn!(
                    "Skipping appointment {} with unparseable time '{}'",
                    appointment.external_id, appointment.eastern_time_string
                );
                warnings.push(DataQualityWarning::UnparseableTime {
                    external_id: appointment.external_id.clone(),
                    raw: appointment.eastern_time_string.clone(),
                });
                continue;
            }
        };
        let key = eastern.format(WIRE_TIME_FORMAT).to_string();

        if let Some(positions) = index.get(&key) {
            if positions.iter().all(|&position| !slots[position].is_occupied) {
                for &position in positions {
                    slots[position] = slots[position].clone().occupied_by(appointment);
                }
                continue;
            }
            warn!(
                "Appointment {} double-books {} Eastern",
                appointment.external_id, key
            );
            warnings.push(DataQualityWarning::DuplicateBooking {
                external_id: appointment.external_id.clone(),
                eastern_time_string: key.clone(),
            });
        }

        let Some(time) = TimeZoneConverter::localize_nearest(eastern, EASTERN, midpoint) else {
            continue;
        };
        debug!(
            "Keeping off-grid appointment {} at {} Eastern",
            appointment.external_id, key
        );
        index.entry(key.clone()).or_insert_with(|| vec![slots.len()]);
        slots.push(HearingSlot::off_grid(time, key, appointment));
    }

    Ok(warnings)
}
