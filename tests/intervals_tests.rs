use chrono::{NaiveDate, NaiveDateTime};
use presencia::core::calculator::intervals::{
    IntervalOptions, collect_work_intervals, presence_intervals, work_order_interval,
};
use presencia::core::calculator::normalize::TimestampError;
use presencia::core::calculator::presence::summarize_presence;
use presencia::models::presence::{PresenceSource, PresenceTotal};
use presencia::models::punch::{Punch, PunchKind};
use presencia::models::work_order::WorkOrderRecord;

fn ts(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, day)
        .and_then(|d| d.and_hms_opt(h, m, 0))
        .expect("valid timestamp")
}

fn record(start_date: &str, start: &str, end_date: &str, end: &str) -> WorkOrderRecord {
    WorkOrderRecord {
        employee_id: "E001".to_string(),
        order_number: "OF-1".to_string(),
        article: "PIEZA-A".to_string(),
        start_date: start_date.to_string(),
        start_time: start.to_string(),
        end_date: end_date.to_string(),
        end_time: end.to_string(),
        ..Default::default()
    }
}

const ROLLOVER: IntervalOptions = IntervalOptions {
    midnight_rollover: true,
};

#[test]
fn test_work_order_interval_mixed_formats() {
    let rec = record(
        "2025-09-01T00:00:00",
        "1899-12-30T08:00:00",
        "01/09/2025",
        "12:30",
    );
    let iv = work_order_interval(&rec, IntervalOptions::default()).expect("valid row");

    assert_eq!(iv.span.start, ts(1, 8, 0));
    assert_eq!(iv.span.end, ts(1, 12, 30));
    assert_eq!(iv.article_id, "PIEZA-A");
}

#[test]
fn test_missing_end_date_uses_start_date() {
    let rec = record("01/09/2025", "14:00", "", "15:00");
    let iv = work_order_interval(&rec, IntervalOptions::default()).expect("valid row");
    assert_eq!(iv.span.end, ts(1, 15, 0));
}

#[test]
fn test_job_crossing_midnight_on_two_dates() {
    let rec = record("2025-09-01", "22:00", "2025-09-02", "02:00");
    let iv = work_order_interval(&rec, IntervalOptions::default()).expect("valid row");
    assert_eq!(iv.span.duration_seconds(), 4 * 3600);
}

#[test]
fn test_inverted_job_needs_rollover_flag() {
    let rec = record("2025-09-01", "22:00", "2025-09-01", "02:00");

    assert_eq!(
        work_order_interval(&rec, IntervalOptions::default()).map(|_| ()),
        Err(TimestampError::NotAfterStart)
    );

    let iv = work_order_interval(&rec, ROLLOVER).expect("rolled over");
    assert_eq!(iv.span.end, ts(2, 2, 0));
}

#[test]
fn test_zero_length_job_is_discarded_even_with_rollover() {
    let rec = record("2025-09-01", "10:00", "2025-09-01", "10:00");
    assert_eq!(
        work_order_interval(&rec, ROLLOVER).map(|_| ()),
        Err(TimestampError::NotAfterStart)
    );
}

#[test]
fn test_collect_counts_discarded_rows() {
    let rows = vec![
        record("2025-09-01", "08:00", "2025-09-01", "10:00"),
        record("", "08:00", "", "10:00"),
        record("2025-09-01", "xx", "2025-09-01", "10:00"),
        record("2025-09-01", "11:00", "2025-09-01", "10:00"),
    ];

    let (valid, discarded) = collect_work_intervals(&rows, IntervalOptions::default());
    assert_eq!(valid.len(), 1);
    assert_eq!(discarded, 3);
    assert_eq!(valid[0].1.start_time, "08:00");
}

#[test]
fn test_punch_pairs() {
    let punches = vec![
        Punch::new("E001", "01/09/2025", "08:00", PunchKind::In),
        Punch::new("E001", "01/09/2025", "12:00", PunchKind::Out),
        Punch::new("E001", "01/09/2025", "13:00", PunchKind::In),
        Punch::new("E001", "01/09/2025", "17:30", PunchKind::Out),
    ];

    let ivs = presence_intervals("E001", &punches);
    assert_eq!(ivs.len(), 2);
    assert_eq!(ivs[0].span.start, ts(1, 8, 0));
    assert_eq!(ivs[1].span.end, ts(1, 17, 30));
}

#[test]
fn test_night_shift_punch_crosses_midnight() {
    let punches = vec![
        Punch::new("E001", "2025-09-01", "22:00", PunchKind::In),
        Punch::new("E001", "2025-09-01", "06:00", PunchKind::Out),
    ];

    let ivs = presence_intervals("E001", &punches);
    assert_eq!(ivs.len(), 1);
    assert_eq!(ivs[0].span.end, ts(2, 6, 0));
    assert_eq!(ivs[0].span.duration_seconds(), 8 * 3600);
}

#[test]
fn test_night_shift_dated_on_two_days_counts_on_entry_day() {
    let punches = vec![
        Punch::new("E001", "2025-09-30", "22:00", PunchKind::In),
        Punch::new("E001", "2025-10-01", "06:00", PunchKind::Out),
    ];

    let sep30 = NaiveDate::from_ymd_opt(2025, 9, 30).expect("valid date");
    let oct01 = NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date");

    let on_entry_day = summarize_presence("E001", &punches, &[], Some((sep30, sep30)));
    assert_eq!(on_entry_day.total_presence, 8.0);

    let on_exit_day = summarize_presence("E001", &punches, &[], Some((oct01, oct01)));
    assert_eq!(on_exit_day.total_presence, 0.0);
}

#[test]
fn test_orphan_punches_add_nothing() {
    let punches = vec![
        Punch::new("E001", "2025-09-01", "07:00", PunchKind::Out),
        Punch::new("E001", "2025-09-01", "08:00", PunchKind::In),
        Punch::new("E001", "2025-09-01", "09:00", PunchKind::In),
        Punch::new("E001", "2025-09-01", "12:00", PunchKind::Out),
        Punch::new("E001", "2025-09-02", "08:00", PunchKind::In),
    ];

    let ivs = presence_intervals("E001", &punches);
    // the 08:00 entry is replaced by 09:00; the last entry never closes
    assert_eq!(ivs.len(), 1);
    assert_eq!(ivs[0].span.start, ts(1, 9, 0));
    assert_eq!(ivs[0].span.end, ts(1, 12, 0));
}

#[test]
fn test_punches_sorted_by_date_keep_day_order() {
    let punches = vec![
        Punch::new("E001", "2025-09-02", "08:00", PunchKind::In),
        Punch::new("E001", "2025-09-02", "16:00", PunchKind::Out),
        Punch::new("E001", "01/09/2025", "08:00", PunchKind::In),
        Punch::new("E001", "01/09/2025", "14:00", PunchKind::Out),
    ];

    let ivs = presence_intervals("E001", &punches);
    assert_eq!(ivs.len(), 2);
    assert_eq!(ivs[0].span.start, ts(1, 8, 0));
    assert_eq!(ivs[1].span.start, ts(2, 8, 0));
}

#[test]
fn test_presence_from_punches() {
    let punches = vec![
        Punch::new("E001", "2025-09-01", "08:00", PunchKind::In),
        Punch::new("E001", "2025-09-01", "15:30", PunchKind::Out),
    ];

    let summary = summarize_presence("E001", &punches, &[], None);
    assert_eq!(summary.total_presence, 7.5);
    assert_eq!(summary.source, PresenceSource::Punches);
}

#[test]
fn test_presence_totals_win_over_punches() {
    let punches = vec![
        Punch::new("E001", "2025-09-01", "08:00", PunchKind::In),
        Punch::new("E001", "2025-09-01", "10:00", PunchKind::Out),
    ];
    let totals = vec![
        PresenceTotal {
            employee_id: "E001".to_string(),
            date: "2025-09-01".to_string(),
            presence_hours: 8.0,
            excess_hours: 0.5,
            holiday_hours: 0.0,
        },
        PresenceTotal {
            employee_id: "E001".to_string(),
            date: "2025-09-02".to_string(),
            presence_hours: 0.0,
            excess_hours: 0.0,
            holiday_hours: 8.0,
        },
    ];

    let summary = summarize_presence("E001", &punches, &totals, None);
    assert_eq!(summary.total_presence, 8.0);
    assert_eq!(summary.excess_hours, 0.5);
    assert_eq!(summary.holiday_hours, 8.0);
    assert_eq!(summary.source, PresenceSource::Totals);
}
