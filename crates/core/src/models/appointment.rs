use serde::{Deserialize, Serialize};

/// An already-booked appointment supplied by the data-fetch boundary.
///
/// `eastern_time_string` is the persisted `"HH:mm"` Eastern value. Older
/// payloads call it `hearingTime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingAppointment {
    #[serde(alias = "hearingTime")]
    pub eastern_time_string: String,
    pub external_id: String,
    #[serde(default, alias = "docketName")]
    pub label: Option<String>,
    #[serde(default, alias = "issueCount")]
    pub count: Option<u32>,
    #[serde(default, alias = "poaName")]
    pub party: Option<String>,
}

impl ExistingAppointment {
    pub fn new(eastern_time_string: impl Into<String>, external_id: impl Into<String>) -> Self {
        Self {
            eastern_time_string: eastern_time_string.into(),
            external_id: external_id.into(),
            label: None,
            count: None,
            party: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_party(mut self, party: impl Into<String>) -> Self {
        self.party = Some(party.into());
        self
    }

    pub fn occupant_metadata(&self) -> OccupantMetadata {
        OccupantMetadata {
            label: self.label.clone(),
            count: self.count,
            party: self.party.clone(),
        }
    }
}

/// What a booked slot shows about the appointment holding it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupantMetadata {
    /// Docket label, e.g. `legacy`
    pub label: Option<String>,
    /// Issue count
    pub count: Option<u32>,
    /// Representing party
    pub party: Option<String>,
}
