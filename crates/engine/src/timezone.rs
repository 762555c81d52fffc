//! # Timezone Conversion
//!
//! Wall-clock conversion between named zones for a specific calendar date.
//! Offsets are always looked up in the IANA database for that date, so a
//! venue's distance from Eastern time follows both zones' daylight-saving
//! rules rather than a fixed offset.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use hearing_slots_core::errors::{SchedulingError, SchedulingResult};

/// The zone appointment times are persisted in.
pub const EASTERN: Tz = chrono_tz::America::New_York;

/// Persisted wire format for appointment times.
pub const WIRE_TIME_FORMAT: &str = "%H:%M";

/// Stateless conversions between zones on a given date.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeZoneConverter;

impl TimeZoneConverter {
    /// Resolves an IANA zone identifier.
    ///
    /// # Errors
    ///
    /// * `SchedulingError::Configuration` - The identifier is not in the zone database
    pub fn parse_zone(id: &str) -> SchedulingResult<Tz> {
        id.trim()
            .parse::<Tz>()
            .map_err(|_| SchedulingError::Configuration(format!("unknown timezone '{id}'")))
    }

    /// Pins a wall-clock time in `zone` on `date` to an instant.
    ///
    /// Ambiguous times (the repeated hour when clocks fall back) resolve to
    /// the earlier instant.
    ///
    /// # Errors
    ///
    /// * `SchedulingError::NonexistentLocalTime` - The time falls in a spring-forward gap
    pub fn localize(wall: NaiveTime, zone: Tz, date: NaiveDate) -> SchedulingResult<DateTime<Tz>> {
        match zone.from_local_datetime(&date.and_time(wall)) {
            LocalResult::Single(instant) => Ok(instant),
            LocalResult::Ambiguous(earlier, _) => Ok(earlier),
            LocalResult::None => Err(SchedulingError::NonexistentLocalTime {
                time: wall.format(WIRE_TIME_FORMAT).to_string(),
                zone: zone.name().to_string(),
                date: date.to_string(),
            }),
        }
    }

    /// Converts a wall-clock time read in `from` on `date` into the wall-clock
    /// time shown in `to` at the same instant.
    pub fn convert(
        wall: NaiveTime,
        from: Tz,
        to: Tz,
        date: NaiveDate,
    ) -> SchedulingResult<NaiveTime> {
        Ok(Self::localize(wall, from, date)?.with_timezone(&to).time())
    }

    /// The instant showing `wall` in `zone` that lies closest to `anchor`,
    /// trying the anchor's civil date in `zone` and the days either side.
    /// Zones far apart can show the same instant on different dates.
    pub fn localize_nearest(
        wall: NaiveTime,
        zone: Tz,
        anchor: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let anchor_date = anchor.with_timezone(&zone).date_naive();

        [anchor_date.pred_opt(), Some(anchor_date), anchor_date.succ_opt()]
            .into_iter()
            .flatten()
            .filter_map(|day| Self::localize(wall, zone, day).ok())
            .map(|instant| instant.with_timezone(&Utc))
            .min_by_key(|candidate| (*candidate - anchor).num_seconds().abs())
    }

    /// Formats an instant as the Eastern `"HH:mm"` wire string.
    pub fn eastern_time_string(instant: &DateTime<Utc>) -> String {
        instant
            .with_timezone(&EASTERN)
            .format(WIRE_TIME_FORMAT)
            .to_string()
    }

    /// Parses an `"HH:mm"` wire string.
    ///
    /// # Errors
    ///
    /// * `SchedulingError::InvalidTime` - Not a valid 24-hour `"HH:mm"` time
    pub fn parse_wire_time(raw: &str) -> SchedulingResult<NaiveTime> {
        let trimmed = raw.trim();
        // chrono accepts single-digit fields; only the hour may omit its leading zero
        let minutes_are_two_digits = trimmed
            .split_once(':')
            .is_some_and(|(_, minutes)| minutes.len() == 2);
        if trimmed.len() > 5 || !minutes_are_two_digits {
            return Err(SchedulingError::InvalidTime(raw.to_string()));
        }
        NaiveTime::parse_from_str(trimmed, WIRE_TIME_FORMAT)
            .map_err(|_| SchedulingError::InvalidTime(raw.to_string()))
    }
}
