// src/export/model.rs

use crate::models::coverage::CoverageResult;
use crate::utils::formatting::hours_decimal;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat audit row shared by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AuditExport {
    pub employee_id: String,
    pub period_from: String,
    pub period_to: String,
    pub presence_hours: f64,
    pub excess_hours: f64,
    pub holiday_hours: f64,
    pub job_time_produced: f64,
    pub improductive_time: f64,
    pub productive_time: f64,
    pub time_covered: f64,
    pub time_gap: f64,
    pub overlap_ratio: f64,
    pub valid_records: usize,
    pub discarded_records: usize,
    pub qty_produced: f64,
    pub qty_planned: f64,
}

/// Share of presence above which a gap is flagged in XLSX and PDF output.
const GAP_ALERT_SHARE: f64 = 0.10;

fn round_to(v: f64, decimals: u8) -> f64 {
    let f = 10f64.powi(decimals as i32);
    (v * f).round() / f
}

impl AuditExport {
    pub fn from_result(
        r: &CoverageResult,
        bounds: Option<(NaiveDate, NaiveDate)>,
        decimals: u8,
    ) -> Self {
        let (from, to) = match bounds {
            Some((a, b)) => (a.format("%Y-%m-%d").to_string(), b.format("%Y-%m-%d").to_string()),
            None => (String::new(), String::new()),
        };
        let h = |v: f64| round_to(v, decimals);

        Self {
            employee_id: r.employee_id.clone(),
            period_from: from,
            period_to: to,
            presence_hours: h(r.total_presence),
            excess_hours: h(r.excess_hours),
            holiday_hours: h(r.holiday_hours),
            job_time_produced: h(r.total_job_time_produced),
            improductive_time: h(r.improductive_time_produced),
            productive_time: h(r.productive_time_produced),
            time_covered: h(r.total_time_covered),
            time_gap: h(r.time_gap),
            overlap_ratio: round_to(r.overlap_ratio, 3),
            valid_records: r.valid_records,
            discarded_records: r.discarded_records,
            qty_produced: r.qty_produced,
            qty_planned: r.qty_planned,
        }
    }

    pub(crate) fn gap_alert(&self) -> bool {
        self.presence_hours > 0.0 && self.time_gap / self.presence_hours > GAP_ALERT_SHARE
    }
}

/// Headers for the full-width formats (XLSX), in field order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "employee_id",
        "period_from",
        "period_to",
        "presence_hours",
        "excess_hours",
        "holiday_hours",
        "job_time_produced",
        "improductive_time",
        "productive_time",
        "time_covered",
        "time_gap",
        "overlap_ratio",
        "valid_records",
        "discarded_records",
        "qty_produced",
        "qty_planned",
    ]
}

pub(crate) fn audit_to_row(e: &AuditExport) -> Vec<String> {
    vec![
        e.employee_id.clone(),
        e.period_from.clone(),
        e.period_to.clone(),
        e.presence_hours.to_string(),
        e.excess_hours.to_string(),
        e.holiday_hours.to_string(),
        e.job_time_produced.to_string(),
        e.improductive_time.to_string(),
        e.productive_time.to_string(),
        e.time_covered.to_string(),
        e.time_gap.to_string(),
        e.overlap_ratio.to_string(),
        e.valid_records.to_string(),
        e.discarded_records.to_string(),
        e.qty_produced.to_string(),
        e.qty_planned.to_string(),
    ]
}

/// Narrower header set that fits a landscape PDF page.
pub(crate) fn get_pdf_headers() -> Vec<&'static str> {
    vec![
        "Employee",
        "Presence",
        "Produced",
        "Covered",
        "Improductive",
        "Gap",
        "Overlap",
        "Skipped",
    ]
}

pub(crate) fn audits_to_pdf_table(rows: &[AuditExport], decimals: u8) -> Vec<Vec<String>> {
    rows.iter()
        .map(|e| {
            vec![
                e.employee_id.clone(),
                hours_decimal(e.presence_hours, decimals),
                hours_decimal(e.job_time_produced, decimals),
                hours_decimal(e.time_covered, decimals),
                hours_decimal(e.improductive_time, decimals),
                hours_decimal(e.time_gap, decimals),
                format!("{:.2}", e.overlap_ratio),
                e.discarded_records.to_string(),
            ]
        })
        .collect()
}
