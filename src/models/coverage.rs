use serde::Serialize;

/// Outcome of reconciling one employee's work orders against presence.
/// All times are hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageResult {
    pub employee_id: String,
    pub total_presence: f64,
    pub excess_hours: f64,
    pub holiday_hours: f64,
    /// Naive sum of interval durations, overlaps counted twice.
    pub total_job_time_produced: f64,
    pub improductive_time_produced: f64,
    pub productive_time_produced: f64,
    /// Union of the intervals, overlaps counted once.
    pub total_time_covered: f64,
    pub time_gap: f64,
    pub overlap_ratio: f64,
    pub valid_records: usize,
    pub discarded_records: usize,
    pub qty_produced: f64,
    pub qty_planned: f64,
}

impl CoverageResult {
    /// Work was logged in parallel (more booked time than wall-clock time).
    pub fn has_multitasking(&self) -> bool {
        self.overlap_ratio > 1.0
    }
}
