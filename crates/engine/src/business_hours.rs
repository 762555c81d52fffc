//! # Business Hours
//!
//! Resolves a venue to the span of the day in which hearings may be booked.
//! Most venues share one rule expressed in their own civil time. Exceptions
//! are rows in an override table keyed by venue code, each carrying its own
//! zone.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use hearing_slots_core::{
    OfficeDirectory,
    directory::CENTRAL_OFFICE_CODE,
    errors::{SchedulingError, SchedulingResult},
    models::RegionalOffice,
};
use serde::Deserialize;

use crate::timezone::{EASTERN, TimeZoneConverter};

/// Builds a wall-clock time from hours and minutes past midnight.
pub(crate) fn wall(hour: i64, minute: i64) -> NaiveTime {
    NaiveTime::default() + Duration::minutes(hour * 60 + minute)
}

/// Bookable span of a venue's day, read in `zone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHoursWindow {
    pub start_local: NaiveTime,
    pub end_local: NaiveTime,
    pub zone: Tz,
}

impl BusinessHoursWindow {
    /// The window's boundaries as instants on `date`.
    ///
    /// Viewing the returned instants through any other zone keeps them the
    /// same points in time; only their wall-clock rendering changes.
    pub fn bounds_on(&self, date: NaiveDate) -> SchedulingResult<(DateTime<Tz>, DateTime<Tz>)> {
        Ok((
            TimeZoneConverter::localize(self.start_local, self.zone, date)?,
            TimeZoneConverter::localize(self.end_local, self.zone, date)?,
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverrideRow {
    code: String,
    start_local: String,
    end_local: String,
    zone: String,
}

impl OverrideRow {
    fn into_window(self) -> SchedulingResult<(String, BusinessHoursWindow)> {
        let start_local = TimeZoneConverter::parse_wire_time(&self.start_local)?;
        let end_local = TimeZoneConverter::parse_wire_time(&self.end_local)?;
        if start_local >= end_local {
            return Err(SchedulingError::Configuration(format!(
                "business hours for '{}' end before they start",
                self.code
            )));
        }
        let zone = TimeZoneConverter::parse_zone(&self.zone)?;

        Ok((
            self.code,
            BusinessHoursWindow {
                start_local,
                end_local,
                zone,
            },
        ))
    }
}

/// Business-hours policy: a default local rule plus per-venue overrides.
#[derive(Debug, Clone)]
pub struct RegionalOfficeBusinessHours {
    directory: OfficeDirectory,
    default_start: NaiveTime,
    default_end: NaiveTime,
    overrides: BTreeMap<String, BusinessHoursWindow>,
}

impl RegionalOfficeBusinessHours {
    /// 08:30 to 15:30 venue time, except the headquarters venue which books
    /// 09:00 to 16:00 Eastern.
    pub fn standard(directory: OfficeDirectory) -> Self {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            CENTRAL_OFFICE_CODE.to_string(),
            BusinessHoursWindow {
                start_local: wall(9, 0),
                end_local: wall(16, 0),
                zone: EASTERN,
            },
        );

        Self {
            directory,
            default_start: wall(8, 30),
            default_end: wall(15, 30),
            overrides,
        }
    }

    /// Replaces the override table with rows loaded from JSON:
    /// `[{"code", "startLocal", "endLocal", "zone"}]`.
    pub fn with_overrides_json(mut self, json: &str) -> SchedulingResult<Self> {
        let rows: Vec<OverrideRow> = serde_json::from_str(json)?;
        self.overrides = rows
            .into_iter()
            .map(OverrideRow::into_window)
            .collect::<SchedulingResult<_>>()?;
        Ok(self)
    }

    pub fn directory(&self) -> &OfficeDirectory {
        &self.directory
    }

    pub fn window_for(&self, office: &RegionalOffice) -> SchedulingResult<BusinessHoursWindow> {
        if !self.directory.contains(&office.code) {
            return Err(SchedulingError::Configuration(format!(
                "unrecognized venue code '{}'",
                office.code
            )));
        }

        if let Some(window) = self.overrides.get(&office.code) {
            return Ok(*window);
        }

        Ok(BusinessHoursWindow {
            start_local: self.default_start,
            end_local: self.default_end,
            zone: TimeZoneConverter::parse_zone(&office.timezone)?,
        })
    }
}

impl Default for RegionalOfficeBusinessHours {
    fn default() -> Self {
        Self::standard(OfficeDirectory::builtin())
    }
}
