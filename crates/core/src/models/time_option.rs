use serde::{Deserialize, Serialize};

/// A 15-minute custom time choice. `value` is the Eastern `"HH:mm"` wire value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTimeOption {
    pub value: String,
    pub label: String,
}
