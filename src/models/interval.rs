use chrono::NaiveDateTime;
use serde::Serialize;

/// Half-open time span `[start, end)`. Only constructed with `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    /// Returns `None` for inverted or zero-length spans.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        (end > start).then_some(Self { start, end })
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}

/// Time the employee was physically present (one punch pair).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresenceInterval {
    pub employee_id: String,
    pub span: Interval,
}

/// Time booked on one work-order operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOrderInterval {
    pub employee_id: String,
    pub article_id: String,
    pub span: Interval,
}
