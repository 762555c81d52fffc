//! # Slot Labels
//!
//! Human-readable renderings of slot and option times. Formatting never
//! touches the underlying values; the Eastern `"HH:mm"` strings stay the only
//! thing handed to persistence.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use hearing_slots_core::{
    errors::{SchedulingError, SchedulingResult},
    models::HearingSlot,
};

use crate::business_hours::wall;
use crate::timezone::{EASTERN, TimeZoneConverter};

const SHORT_FORMAT: &str = "%-I:%M %P";
const LONG_FORMAT: &str = "%-I:%M %p";
const LONG_PARSE_FORMAT: &str = "%I:%M %p";
const DUAL_ZONE_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, Copy, Default)]
pub struct SlotLabelFormatter;

impl SlotLabelFormatter {
    /// Qualifier shown after a time, e.g. `Mountain` for `America/Denver`.
    pub fn zone_name(zone: Tz) -> Cow<'static, str> {
        let name = match zone.name() {
            "America/New_York"
            | "America/Detroit"
            | "America/Indiana/Indianapolis"
            | "America/Kentucky/Louisville" => "Eastern",
            "America/Chicago" | "America/Indiana/Knox" | "America/Menominee" => "Central",
            "America/Denver" | "America/Boise" | "America/Phoenix" => "Mountain",
            "America/Los_Angeles" => "Pacific",
            "America/Anchorage" | "America/Juneau" => "Alaska",
            "Pacific/Honolulu" => "Hawaii",
            "America/Puerto_Rico" | "America/St_Thomas" => "Atlantic",
            "Asia/Manila" => "Philippine",
            "Pacific/Guam" | "Pacific/Saipan" => "Chamorro",
            other => return Cow::Owned(other.to_string()),
        };
        Cow::Borrowed(name)
    }

    /// Short button form, e.g. `8:30 am`.
    pub fn format(time: &DateTime<Utc>, zone: Tz) -> String {
        time.with_timezone(&zone).format(SHORT_FORMAT).to_string()
    }

    /// Long form with explicit qualifiers, e.g. `2:00 PM Eastern / 12:00 PM Mountain`.
    /// Venues on Eastern time get the Eastern rendering alone.
    pub fn format_dual_zone(time: &DateTime<Utc>, venue_zone: Tz) -> String {
        let eastern = Self::qualified(time, EASTERN);
        if Self::zone_name(venue_zone) == Self::zone_name(EASTERN) {
            return eastern;
        }
        format!(
            "{eastern}{DUAL_ZONE_SEPARATOR}{}",
            Self::qualified(time, venue_zone)
        )
    }

    /// Recovers the instant from the part of a long label qualified with
    /// `zone`, for a slot at the venue (in `venue_zone`) on `date`.
    ///
    /// The wall-clock time is read on whichever civil date in `zone` lands
    /// nearest to midday at the venue, so an Eastern rendering of a Manila
    /// morning resolves to the previous Eastern evening.
    ///
    /// # Errors
    ///
    /// * `SchedulingError::InvalidTime` - No rendering for `zone`, or it does not parse
    pub fn parse_label(
        label: &str,
        zone: Tz,
        venue_zone: Tz,
        date: NaiveDate,
    ) -> SchedulingResult<DateTime<Utc>> {
        let qualifier = format!(" {}", Self::zone_name(zone));
        let wall_text = label
            .split(DUAL_ZONE_SEPARATOR)
            .find_map(|part| part.trim().strip_suffix(qualifier.as_str()))
            .ok_or_else(|| SchedulingError::InvalidTime(label.to_string()))?;
        let shown = NaiveTime::parse_from_str(wall_text, LONG_PARSE_FORMAT)
            .map_err(|_| SchedulingError::InvalidTime(label.to_string()))?;

        let venue_midday =
            TimeZoneConverter::localize(wall(12, 0), venue_zone, date)?.with_timezone(&Utc);
        TimeZoneConverter::localize_nearest(shown, zone, venue_midday)
            .ok_or_else(|| SchedulingError::InvalidTime(label.to_string()))
    }

    /// Summary for an occupied entry, e.g. `10:15 am · legacy · 2 issues · American Legion`.
    pub fn describe_occupied(slot: &HearingSlot, zone: Tz) -> String {
        let mut parts = vec![Self::format(&slot.time, zone)];
        if let Some(metadata) = &slot.occupant_metadata {
            parts.extend(metadata.label.clone());
            parts.extend(metadata.count.map(|count| match count {
                1 => "1 issue".to_string(),
                n => format!("{n} issues"),
            }));
            parts.extend(metadata.party.clone());
        }
        parts.join(" · ")
    }

    fn qualified(time: &DateTime<Utc>, zone: Tz) -> String {
        format!(
            "{} {}",
            time.with_timezone(&zone).format(LONG_FORMAT),
            Self::zone_name(zone)
        )
    }
}
