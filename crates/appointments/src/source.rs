use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use hearing_slots_core::models::ExistingAppointment;

/// Supplies the appointments already booked at a venue on a date.
#[async_trait]
pub trait AppointmentSource: Send + Sync {
    async fn scheduled_appointments(
        &self,
        office_code: &str,
        date: NaiveDate,
    ) -> Result<Vec<ExistingAppointment>>;
}

/// Appointment source backed by a map, for fixtures and local runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointments {
    booked: HashMap<(String, NaiveDate), Vec<ExistingAppointment>>,
}

impl InMemoryAppointments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        office_code: impl Into<String>,
        date: NaiveDate,
        appointment: ExistingAppointment,
    ) {
        self.booked
            .entry((office_code.into(), date))
            .or_default()
            .push(appointment);
    }

    pub fn with(
        mut self,
        office_code: impl Into<String>,
        date: NaiveDate,
        appointment: ExistingAppointment,
    ) -> Self {
        self.insert(office_code, date, appointment);
        self
    }
}

#[async_trait]
impl AppointmentSource for InMemoryAppointments {
    async fn scheduled_appointments(
        &self,
        office_code: &str,
        date: NaiveDate,
    ) -> Result<Vec<ExistingAppointment>> {
        Ok(self
            .booked
            .get(&(office_code.to_string(), date))
            .cloned()
            .unwrap_or_default())
    }
}
