use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Local time {time} does not exist in {zone} on {date}")]
    NonexistentLocalTime {
        time: String,
        zone: String,
        date: String,
    },

    #[error("Slot unavailable: {0}")]
    SlotUnavailable(String),
}

impl SchedulingError {
    /// Configuration errors are fatal: no picker may be rendered for the venue.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SchedulingError::Configuration(_))
    }
}

impl From<serde_json::Error> for SchedulingError {
    fn from(err: serde_json::Error) -> Self {
        SchedulingError::Configuration(format!("malformed reference data: {err}"))
    }
}

pub type SchedulingResult<T> = Result<T, SchedulingError>;
