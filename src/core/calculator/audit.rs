//! Per-employee audit over an already loaded period.

use crate::core::calculator::coverage::reconcile;
use crate::core::calculator::intervals::{IntervalOptions, collect_work_intervals};
use crate::core::calculator::normalize::normalize_date;
use crate::core::calculator::presence::summarize_presence;
use crate::models::coverage::CoverageResult;
use crate::models::interval::WorkOrderInterval;
use crate::models::presence::{PresenceSummary, PresenceTotal};
use crate::models::punch::{Punch, PunchKind};
use crate::models::work_order::WorkOrderRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Raw rows of one period, as read from the store.
///
/// `punches` may extend one day past `bounds` on either side.
#[derive(Debug, Default, Clone)]
pub struct PeriodData {
    pub work_orders: Vec<WorkOrderRecord>,
    pub punches: Vec<Punch>,
    pub totals: Vec<PresenceTotal>,
    pub bounds: Option<(NaiveDate, NaiveDate)>,
}

#[derive(Default)]
struct EmployeeRows {
    work_orders: Vec<WorkOrderRecord>,
    punches: Vec<Punch>,
    totals: Vec<PresenceTotal>,
}

impl EmployeeRows {
    /// Something of this employee belongs to the period itself, not only
    /// to the extra punch days around it. Exits count with their entry.
    fn in_period(&self, bounds: Option<(NaiveDate, NaiveDate)>) -> bool {
        let Some((from, to)) = bounds else {
            return true;
        };
        !self.work_orders.is_empty()
            || !self.totals.is_empty()
            || self
                .punches
                .iter()
                .filter(|p| p.kind == PunchKind::In)
                .filter_map(|p| normalize_date(&p.date).ok())
                .any(|d| d >= from && d <= to)
    }
}

/// Audit a single employee.
pub fn audit_employee(
    employee_id: &str,
    records: &[WorkOrderRecord],
    presence: &PresenceSummary,
    opts: IntervalOptions,
) -> CoverageResult {
    let (valid, discarded) = collect_work_intervals(records, opts);

    let intervals: Vec<WorkOrderInterval> = valid.iter().map(|(iv, _)| iv.clone()).collect();

    let mut result = reconcile(employee_id, &intervals, presence.total_presence);
    result.excess_hours = presence.excess_hours;
    result.holiday_hours = presence.holiday_hours;
    result.discarded_records = discarded;
    result.qty_produced = valid.iter().filter_map(|(_, r)| r.qty_produced).sum();
    result.qty_planned = valid.iter().filter_map(|(_, r)| r.qty_planned).sum();

    debug!(
        employee = employee_id,
        valid = result.valid_records,
        discarded,
        covered = result.total_time_covered,
        "employee audited"
    );

    result
}

/// Audit every employee appearing in `data`, sorted by employee id.
/// Employees are independent of each other.
pub fn audit_employees(data: &PeriodData, opts: IntervalOptions) -> Vec<CoverageResult> {
    let mut by_employee: BTreeMap<&str, EmployeeRows> = BTreeMap::new();

    for w in &data.work_orders {
        by_employee
            .entry(w.employee_id.as_str())
            .or_default()
            .work_orders
            .push(w.clone());
    }
    for p in &data.punches {
        by_employee
            .entry(p.employee_id.as_str())
            .or_default()
            .punches
            .push(p.clone());
    }
    for t in &data.totals {
        by_employee
            .entry(t.employee_id.as_str())
            .or_default()
            .totals
            .push(t.clone());
    }

    by_employee
        .into_iter()
        .filter(|(_, rows)| rows.in_period(data.bounds))
        .map(|(id, rows)| {
            let presence = summarize_presence(id, &rows.punches, &rows.totals, data.bounds);
            audit_employee(id, &rows.work_orders, &presence, opts)
        })
        .collect()
}
