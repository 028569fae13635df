use crate::utils::decimal::decimal_hours;
use serde::{Deserialize, Serialize};

/// Aggregated presence for one employee and one day, as computed by the ERP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceTotal {
    pub employee_id: String,
    pub date: String,
    #[serde(default, deserialize_with = "decimal_hours")]
    pub presence_hours: f64,
    #[serde(default, deserialize_with = "decimal_hours")]
    pub excess_hours: f64,
    #[serde(default, deserialize_with = "decimal_hours")]
    pub holiday_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceSource {
    Totals,
    #[default]
    Punches,
}

/// Presence of one employee over the audited period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PresenceSummary {
    pub employee_id: String,
    pub total_presence: f64,
    pub excess_hours: f64,
    pub holiday_hours: f64,
    pub source: PresenceSource,
}
