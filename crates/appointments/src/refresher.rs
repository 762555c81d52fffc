//! # Slot Refresher
//!
//! Fetch-then-regenerate coordination for one picker. Selecting a venue and
//! date shows the unbooked grid immediately; once that pair's appointments
//! arrive the grid is regenerated with them. A result fetched for a pair that
//! is no longer selected is dropped, so the last selection always wins.

use chrono::NaiveDate;
use eyre::{Result, WrapErr};
use hearing_slots_core::{
    errors::SchedulingResult,
    models::{ExistingAppointment, RegionalOffice},
};
use hearing_slots_engine::{SlotGenerator, SlotGrid};
use tracing::{debug, warn};

use crate::source::AppointmentSource;

/// Identifies which fetch a set of appointments belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    pub office_code: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
struct Selection {
    key: SelectionKey,
    office: RegionalOffice,
    grid: SlotGrid,
}

pub struct SlotRefresher<S> {
    source: S,
    generator: SlotGenerator,
    selection: Option<Selection>,
}

impl<S: AppointmentSource> SlotRefresher<S> {
    pub fn new(source: S, generator: SlotGenerator) -> Self {
        Self {
            source,
            generator,
            selection: None,
        }
    }

    /// Makes `office` on `date` the current selection and shows its grid
    /// without bookings until appointments are applied.
    ///
    /// # Errors
    ///
    /// * `SchedulingError::Configuration` - The venue cannot be scheduled; the
    ///   previous selection is kept
    pub fn select(&mut self, office: RegionalOffice, date: NaiveDate) -> SchedulingResult<SelectionKey> {
        let grid = self.generator.generate(&office, date, &[])?;
        let key = SelectionKey {
            office_code: office.code.clone(),
            date,
        };
        self.selection = Some(Selection {
            key: key.clone(),
            office,
            grid,
        });
        Ok(key)
    }

    pub fn current(&self) -> Option<&SelectionKey> {
        self.selection.as_ref().map(|selection| &selection.key)
    }

    pub fn grid(&self) -> Option<&SlotGrid> {
        self.selection.as_ref().map(|selection| &selection.grid)
    }

    /// Fetches the appointments for `key` without touching the selection.
    pub async fn fetch(&self, key: &SelectionKey) -> Result<Vec<ExistingAppointment>> {
        self.source
            .scheduled_appointments(&key.office_code, key.date)
            .await
            .wrap_err_with(|| {
                format!(
                    "Failed to fetch appointments for {} on {}",
                    key.office_code, key.date
                )
            })
    }

    /// Regenerates the grid with `appointments` if `key` is still selected.
    ///
    /// Returns `false` when the result is stale and was discarded.
    pub fn apply(
        &mut self,
        key: &SelectionKey,
        appointments: &[ExistingAppointment],
    ) -> SchedulingResult<bool> {
        let Some(selection) = self.selection.as_mut().filter(|selection| selection.key == *key) else {
            warn!(
                "Discarding stale appointments for {} on {}",
                key.office_code, key.date
            );
            return Ok(false);
        };

        selection.grid = self
            .generator
            .generate(&selection.office, key.date, appointments)?;
        debug!(
            "Applied {} appointments to {} on {}",
            appointments.len(),
            key.office_code,
            key.date
        );
        Ok(true)
    }

    /// Fetches and applies appointments for the current selection.
    ///
    /// Returns `None` when nothing is selected.
    pub async fn refresh(&mut self) -> Result<Option<&SlotGrid>> {
        let Some(key) = self.current().cloned() else {
            return Ok(None);
        };

        let appointments = self.fetch(&key).await?;
        self.apply(&key, &appointments)?;
        Ok(self.grid())
    }
}
