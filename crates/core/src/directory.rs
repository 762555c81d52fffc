use std::collections::BTreeMap;

use crate::errors::{SchedulingError, SchedulingResult};
use crate::models::RegionalOffice;

/// Code of the Washington DC headquarters venue, historically labeled "Central".
pub const CENTRAL_OFFICE_CODE: &str = "C";

const BUILTIN_OFFICES: &[(&str, &str, &str)] = &[
    (CENTRAL_OFFICE_CODE, "Central", "America/New_York"),
    ("RO01", "Boston regional office", "America/New_York"),
    ("RO06", "New York regional office", "America/New_York"),
    ("RO10", "Philadelphia regional office", "America/New_York"),
    ("RO17", "St. Petersburg regional office", "America/New_York"),
    ("RO20", "Nashville regional office", "America/Chicago"),
    ("RO28", "Chicago regional office", "America/Chicago"),
    ("RO39", "Denver regional office", "America/Denver"),
    ("RO43", "Oakland regional office", "America/Los_Angeles"),
    ("RO44", "Los Angeles regional office", "America/Los_Angeles"),
    ("RO45", "Phoenix regional office", "America/Phoenix"),
    ("RO46", "Seattle regional office", "America/Los_Angeles"),
    ("RO58", "Manila regional office", "Asia/Manila"),
    ("RO59", "Honolulu regional office", "Pacific/Honolulu"),
    ("RO62", "Houston regional office", "America/Chicago"),
    ("RO63", "Anchorage regional office", "America/Anchorage"),
    ("RO76", "St. Paul regional office", "America/Chicago"),
    ("RO55", "San Juan regional office", "America/Puerto_Rico"),
];

/// Known venues, keyed by code.
#[derive(Debug, Clone, Default)]
pub struct OfficeDirectory {
    offices: BTreeMap<String, RegionalOffice>,
}

impl OfficeDirectory {
    pub fn builtin() -> Self {
        Self::from_offices(
            BUILTIN_OFFICES
                .iter()
                .map(|(code, label, zone)| RegionalOffice::new(*code, *label, *zone)),
        )
    }

    pub fn from_offices(offices: impl IntoIterator<Item = RegionalOffice>) -> Self {
        Self {
            offices: offices
                .into_iter()
                .map(|office| (office.code.clone(), office))
                .collect(),
        }
    }

    /// Loads a JSON array of `{code, displayLabel, timezone}` objects.
    pub fn from_json(json: &str) -> SchedulingResult<Self> {
        let offices: Vec<RegionalOffice> = serde_json::from_str(json)?;
        if let Some(blank) = offices.iter().find(|office| office.code.trim().is_empty()) {
            return Err(SchedulingError::Configuration(format!(
                "office '{}' has an empty code",
                blank.display_label
            )));
        }
        Ok(Self::from_offices(offices))
    }

    pub fn get(&self, code: &str) -> SchedulingResult<&RegionalOffice> {
        self.offices
            .get(code)
            .ok_or_else(|| SchedulingError::Configuration(format!("unrecognized venue code '{code}'")))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.offices.contains_key(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionalOffice> {
        self.offices.values()
    }

    pub fn len(&self) -> usize {
        self.offices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offices.is_empty()
    }
}
