//! Coverage of presence time by work-order intervals.
//!
//! Everything here is total: empty or degenerate input yields zeros.

use crate::core::calculator::improductive::is_improductive;
use crate::models::coverage::CoverageResult;
use crate::models::interval::{Interval, WorkOrderInterval};

const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn seconds_to_hours(secs: i64) -> f64 {
    secs as f64 / SECONDS_PER_HOUR
}

/// Wall-clock seconds covered by at least one interval (union).
///
/// Intervals are merged after sorting by start; an interval starting exactly
/// where the current run ends is contiguous with it.
pub fn covered_seconds(spans: &[Interval]) -> i64 {
    let mut sorted: Vec<Interval> = spans
        .iter()
        .copied()
        .filter(|s| s.end > s.start)
        .collect();

    if sorted.is_empty() {
        return 0;
    }

    sorted.sort_by_key(|s| s.start);

    let mut covered = 0;
    let mut current = sorted[0];

    for next in &sorted[1..] {
        if next.start <= current.end {
            current.end = current.end.max(next.end);
        } else {
            covered += current.duration_seconds();
            current = *next;
        }
    }

    covered + current.duration_seconds()
}

/// Naive sum of durations; overlapping work is counted once per interval.
pub fn produced_seconds(spans: &[Interval]) -> i64 {
    spans
        .iter()
        .filter(|s| s.end > s.start)
        .map(Interval::duration_seconds)
        .sum()
}

/// Presence not covered by any work order, never negative.
pub fn time_gap(presence_hours: f64, covered_hours: f64) -> f64 {
    (presence_hours - covered_hours).max(0.0)
}

/// Produced / covered, 0 when nothing is covered.
pub fn overlap_ratio(produced_hours: f64, covered_hours: f64) -> f64 {
    if covered_hours > 0.0 {
        produced_hours / covered_hours
    } else {
        0.0
    }
}

/// Reconcile one employee's work-order intervals against presence hours.
pub fn reconcile(
    employee_id: &str,
    intervals: &[WorkOrderInterval],
    presence_hours: f64,
) -> CoverageResult {
    let spans: Vec<Interval> = intervals.iter().map(|iv| iv.span).collect();

    let covered = seconds_to_hours(covered_seconds(&spans));
    let produced = seconds_to_hours(produced_seconds(&spans));

    let improductive = seconds_to_hours(
        intervals
            .iter()
            .filter(|iv| is_improductive(&iv.article_id))
            .map(|iv| iv.span.duration_seconds())
            .sum(),
    );

    CoverageResult {
        employee_id: employee_id.to_string(),
        total_presence: presence_hours,
        total_job_time_produced: produced,
        improductive_time_produced: improductive,
        productive_time_produced: produced - improductive,
        total_time_covered: covered,
        time_gap: time_gap(presence_hours, covered),
        overlap_ratio: overlap_ratio(produced, covered),
        valid_records: intervals.len(),
        ..Default::default()
    }
}
