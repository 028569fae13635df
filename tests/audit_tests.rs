use chrono::NaiveDate;
use presencia::core::calculator::audit::{PeriodData, audit_employee, audit_employees};
use presencia::core::calculator::intervals::IntervalOptions;
use presencia::models::presence::{PresenceSummary, PresenceTotal};
use presencia::models::punch::{Punch, PunchKind};
use presencia::models::work_order::WorkOrderRecord;

fn job(employee: &str, article: &str, start: &str, end: &str, qty: Option<f64>) -> WorkOrderRecord {
    WorkOrderRecord {
        employee_id: employee.to_string(),
        article: article.to_string(),
        start_date: "2025-09-01".to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        qty_produced: qty,
        qty_planned: qty,
        ..Default::default()
    }
}

#[test]
fn test_audit_employee_fills_presence_and_quantities() {
    let records = vec![
        job("E001", "PIEZA-A", "08:00", "12:00", Some(30.0)),
        job("E001", "REUNION", "12:00", "13:00", None),
        job("E001", "PIEZA-B", "14:00", "13:00", Some(999.0)),
    ];
    let presence = PresenceSummary {
        employee_id: "E001".to_string(),
        total_presence: 8.0,
        excess_hours: 1.0,
        holiday_hours: 0.0,
        ..Default::default()
    };

    let r = audit_employee("E001", &records, &presence, IntervalOptions::default());

    assert_eq!(r.valid_records, 2);
    assert_eq!(r.discarded_records, 1);
    assert_eq!(r.total_time_covered, 5.0);
    assert_eq!(r.improductive_time_produced, 1.0);
    assert_eq!(r.time_gap, 3.0);
    assert_eq!(r.excess_hours, 1.0);
    // the discarded row's quantities are not counted
    assert_eq!(r.qty_produced, 30.0);
    assert_eq!(r.qty_planned, 30.0);
}

#[test]
fn test_audit_employees_groups_and_sorts() {
    let data = PeriodData {
        work_orders: vec![
            job("E002", "PIEZA-A", "08:00", "09:00", None),
            job("E001", "PIEZA-A", "08:00", "10:00", None),
            job("E002", "PIEZA-B", "09:00", "11:00", None),
        ],
        punches: vec![
            Punch::new("E001", "2025-09-01", "08:00", PunchKind::In),
            Punch::new("E001", "2025-09-01", "12:00", PunchKind::Out),
            Punch::new("E003", "2025-09-01", "08:00", PunchKind::In),
            Punch::new("E003", "2025-09-01", "09:00", PunchKind::Out),
        ],
        totals: vec![PresenceTotal {
            employee_id: "E002".to_string(),
            date: "2025-09-01".to_string(),
            presence_hours: 8.0,
            ..Default::default()
        }],
        bounds: None,
    };

    let results = audit_employees(&data, IntervalOptions::default());
    let ids: Vec<&str> = results.iter().map(|r| r.employee_id.as_str()).collect();
    assert_eq!(ids, ["E001", "E002", "E003"]);

    assert_eq!(results[0].total_presence, 4.0);
    assert_eq!(results[0].time_gap, 2.0);

    assert_eq!(results[1].total_presence, 8.0);
    assert_eq!(results[1].total_time_covered, 3.0);
    assert_eq!(results[1].time_gap, 5.0);

    // presence without any work order is entirely gap
    assert_eq!(results[2].total_presence, 1.0);
    assert_eq!(results[2].total_time_covered, 0.0);
    assert_eq!(results[2].time_gap, 1.0);
}

#[test]
fn test_work_orders_without_presence() {
    let data = PeriodData {
        work_orders: vec![job("E004", "PIEZA-A", "08:00", "10:00", None)],
        ..Default::default()
    };

    let results = audit_employees(&data, IntervalOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].total_presence, 0.0);
    assert_eq!(results[0].total_time_covered, 2.0);
    assert_eq!(results[0].time_gap, 0.0);
}

#[test]
fn test_empty_period_yields_nothing() {
    let results = audit_employees(&PeriodData::default(), IntervalOptions::default());
    assert!(results.is_empty());
}

#[test]
fn test_punches_outside_bounds_only_pair_across_them() {
    let sep30 = NaiveDate::from_ymd_opt(2025, 9, 30).expect("valid date");
    let data = PeriodData {
        punches: vec![
            Punch::new("E001", "2025-09-30", "22:00", PunchKind::In),
            Punch::new("E001", "2025-10-01", "06:00", PunchKind::Out),
            // only on the day after: not part of the period
            Punch::new("E002", "2025-10-01", "08:00", PunchKind::In),
            Punch::new("E002", "2025-10-01", "16:00", PunchKind::Out),
        ],
        bounds: Some((sep30, sep30)),
        ..Default::default()
    };

    let results = audit_employees(&data, IntervalOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].employee_id, "E001");
    assert_eq!(results[0].total_presence, 8.0);
}
