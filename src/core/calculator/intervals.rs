//! Turns raw ERP rows into typed intervals.

use crate::core::calculator::normalize::{TimestampError, normalize_timestamp};
use crate::models::interval::{Interval, PresenceInterval, WorkOrderInterval};
use crate::models::punch::{Punch, PunchKind};
use crate::models::work_order::WorkOrderRecord;
use chrono::{Duration, NaiveDateTime};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalOptions {
    /// Read an end time earlier than the start, on the same date, as
    /// belonging to the next day.
    pub midnight_rollover: bool,
}

/// Build the interval of one job-control row.
///
/// A missing end date means the operation ended on its start date.
pub fn work_order_interval(
    record: &WorkOrderRecord,
    opts: IntervalOptions,
) -> Result<WorkOrderInterval, TimestampError> {
    let start = normalize_timestamp(&record.start_date, &record.start_time)?;

    let end_date = if record.end_date.trim().is_empty() {
        record.start_date.as_str()
    } else {
        record.end_date.as_str()
    };
    let mut end = normalize_timestamp(end_date, &record.end_time)?;

    if opts.midnight_rollover && end < start && end.date() == start.date() {
        end += Duration::days(1);
    }

    let span = Interval::new(start, end).ok_or(TimestampError::NotAfterStart)?;

    Ok(WorkOrderInterval {
        employee_id: record.employee_id.clone(),
        article_id: record.article.clone(),
        span,
    })
}

/// Valid intervals paired with their source row, plus the number of rows
/// that had to be dropped.
pub fn collect_work_intervals(
    records: &[WorkOrderRecord],
    opts: IntervalOptions,
) -> (Vec<(WorkOrderInterval, &WorkOrderRecord)>, usize) {
    let mut valid = Vec::with_capacity(records.len());
    let mut discarded = 0;

    for rec in records {
        match work_order_interval(rec, opts) {
            Ok(iv) => valid.push((iv, rec)),
            Err(e) => {
                debug!(record = %rec.label(), reason = %e, "skipping work-order row");
                discarded += 1;
            }
        }
    }

    (valid, discarded)
}

/// Pair punches into presence intervals.
///
/// Punches are ordered by calendar date, keeping the ERP order within a day.
/// Each `in` is closed by the next `out`; an exit earlier than its entry on
/// the same date crossed midnight. Open entries and orphan exits add nothing.
pub fn presence_intervals(employee_id: &str, punches: &[Punch]) -> Vec<PresenceInterval> {
    let mut dated: Vec<(NaiveDateTime, PunchKind)> = Vec::with_capacity(punches.len());

    for p in punches {
        match normalize_timestamp(&p.date, &p.time) {
            Ok(ts) => dated.push((ts, p.kind)),
            Err(e) => debug!(employee = employee_id, date = %p.date, reason = %e, "skipping punch"),
        }
    }

    // stable: same-day punches keep ERP order
    dated.sort_by_key(|(ts, _)| ts.date());

    let mut out = Vec::new();
    let mut open: Option<NaiveDateTime> = None;

    for (i, &(ts, kind)) in dated.iter().enumerate() {
        match kind {
            PunchKind::In => {
                if let Some(prev) = open {
                    debug!(employee = employee_id, entry = %prev, "entry without exit");
                }
                open = Some(ts);
            }
            PunchKind::Out => {
                let Some(start) = open.take() else {
                    debug!(employee = employee_id, exit = %ts, "exit without entry");
                    continue;
                };

                let mut end = ts;
                if end < start && end.date() == start.date() {
                    // a later entry on the same date means this was no night shift
                    let entry_follows_same_day = dated[i + 1..]
                        .iter()
                        .take_while(|(next, _)| next.date() == ts.date())
                        .any(|(_, k)| *k == PunchKind::In);
                    if entry_follows_same_day {
                        debug!(
                            employee = employee_id,
                            entry = %start,
                            exit = %ts,
                            "exit before entry on the same day; punches out of clock order?"
                        );
                    }
                    end += Duration::days(1);
                }

                if let Some(span) = Interval::new(start, end) {
                    out.push(PresenceInterval {
                        employee_id: employee_id.to_string(),
                        span,
                    });
                }
            }
        }
    }

    if let Some(prev) = open {
        debug!(employee = employee_id, entry = %prev, "entry without exit");
    }

    out
}
