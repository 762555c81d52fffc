use serde::{Deserialize, Serialize};

/// A scheduling venue with its own local timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalOffice {
    pub code: String,
    pub display_label: String,
    /// IANA zone identifier, e.g. `America/Denver`
    pub timezone: String,
}

impl RegionalOffice {
    pub fn new(
        code: impl Into<String>,
        display_label: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            display_label: display_label.into(),
            timezone: timezone.into(),
        }
    }
}
