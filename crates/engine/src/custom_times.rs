use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use hearing_slots_core::{
    errors::SchedulingResult,
    models::{CustomTimeOption, RegionalOffice},
};
use tracing::debug;

use crate::business_hours::wall;
use crate::labels::SlotLabelFormatter;
use crate::timezone::TimeZoneConverter;

/// Fine-grained alternative to the slot grid: every quarter hour from 08:15
/// to 16:45 venue time, whatever is already booked.
#[derive(Debug, Clone, Copy)]
pub struct CustomTimeOptionGenerator {
    first: NaiveTime,
    last: NaiveTime,
    step: Duration,
}

impl Default for CustomTimeOptionGenerator {
    fn default() -> Self {
        Self {
            first: wall(8, 15),
            last: wall(16, 45),
            step: Duration::minutes(15),
        }
    }
}

impl CustomTimeOptionGenerator {
    /// Options for `office` on `date`; the date decides which DST offsets apply.
    ///
    /// # Errors
    ///
    /// * `SchedulingError::Configuration` - The venue's timezone is unknown
    pub fn generate(
        &self,
        office: &RegionalOffice,
        date: NaiveDate,
    ) -> SchedulingResult<Vec<CustomTimeOption>> {
        let zone = TimeZoneConverter::parse_zone(&office.timezone)?;
        let mut options = Vec::new();
        let mut local = self.first;

        while local <= self.last {
            let time = TimeZoneConverter::localize(local, zone, date)?.with_timezone(&Utc);
            options.push(CustomTimeOption {
                value: TimeZoneConverter::eastern_time_string(&time),
                label: SlotLabelFormatter::format_dual_zone(&time, zone),
            });

            let (next, wrapped) = local.overflowing_add_signed(self.step);
            if wrapped != 0 {
                break;
            }
            local = next;
        }

        debug!(
            "Generated {} custom time options for {} on {}",
            options.len(),
            office.code,
            date
        );

        Ok(options)
    }
}
