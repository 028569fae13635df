use crate::utils::decimal::lenient_decimal;
use serde::{Deserialize, Serialize};

/// Raw job-control row as listed by the ERP.
///
/// Date and time columns are kept exactly as exported; they are only
/// normalized when the row is turned into an interval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderRecord {
    pub employee_id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub article: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub qty_produced: Option<f64>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub qty_planned: Option<f64>,
}

impl WorkOrderRecord {
    /// Short label used in debug traces for skipped rows.
    pub fn label(&self) -> String {
        format!(
            "{} / order {} / article {}",
            self.employee_id, self.order_number, self.article
        )
    }
}
