use async_trait::async_trait;
use chrono::NaiveDate;
use hearing_slots_core::models::ExistingAppointment;
use mockall::mock;

use crate::source::AppointmentSource;

// Mock appointment source for testing
mock! {
    pub AppointmentSource {}

    #[async_trait]
    impl AppointmentSource for AppointmentSource {
        async fn scheduled_appointments(
            &self,
            office_code: &str,
            date: NaiveDate,
        ) -> eyre::Result<Vec<ExistingAppointment>>;
    }
}
