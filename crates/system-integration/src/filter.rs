use serde::{Deserialize, Serialize};

/// State of the dashboard's time range selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFilter {
    pub time_range: String,
}

impl Default for DashboardFilter {
    fn default() -> Self {
        Self {
            time_range: "24h".to_string(),
        }
    }
}
