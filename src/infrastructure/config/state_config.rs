use serde::{Deserialize, Serialize};

/// Session state persisted between runs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Selected budget spreadsheet.
    #[serde(default)]
    pub spreadsheet_id: Option<String>,
}
