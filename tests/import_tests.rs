use presencia::core::import::{detect_delimiter, parse_punches, read_rows};
use presencia::models::presence::PresenceTotal;
use presencia::models::punch::{PunchKind, PunchRow};
use presencia::models::work_order::WorkOrderRecord;
use presencia::utils::decimal::parse_decimal;

#[test]
fn test_detect_delimiter() {
    assert_eq!(detect_delimiter("a;b;c\n1;2;3"), b';');
    assert_eq!(detect_delimiter("a,b,c\n1,2,3"), b',');
    assert_eq!(detect_delimiter(""), b',');
}

#[test]
fn test_read_work_orders_with_missing_columns() {
    let csv = "employee_id ; article ; start_date ; start_time ; end_time ; qty_produced\n\
               E001 ; PIEZA-A ; 01/09/2025 ; 08:00 ; 10:00 ; 12.5\n\
               E001 ; LIMPIEZA ; 01/09/2025 ; 10:00 ; 10:30 ; n/a\n";

    let rows: Vec<WorkOrderRecord> = read_rows(csv).expect("parse work orders");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].employee_id, "E001");
    assert_eq!(rows[0].article, "PIEZA-A");
    assert_eq!(rows[0].end_date, "");
    assert_eq!(rows[0].qty_produced, Some(12.5));
    assert_eq!(rows[1].qty_produced, None);
    assert_eq!(rows[1].qty_planned, None);
}

#[test]
fn test_read_presence_totals() {
    let csv = "employee_id,date,presence_hours,excess_hours,holiday_hours\n\
               E001,2025-09-01,8,0.5,0\n";

    let rows: Vec<PresenceTotal> = read_rows(csv).expect("parse totals");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].presence_hours, 8.0);
    assert_eq!(rows[0].excess_hours, 0.5);
}

#[test]
fn test_parse_punch_codes() {
    let csv = "employee_id,date,time,kind\n\
               E001,2025-09-01,08:00,E\n\
               E001,2025-09-01,12:00,salida\n\
               E001,2025-09-01,13:00,IN\n";

    let rows: Vec<PunchRow> = read_rows(csv).expect("parse punches");
    let punches = parse_punches(rows).expect("known kinds");
    let kinds: Vec<PunchKind> = punches.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, [PunchKind::In, PunchKind::Out, PunchKind::In]);
}

#[test]
fn test_unknown_punch_code_is_an_error() {
    let rows = vec![PunchRow {
        employee_id: "E001".to_string(),
        date: "2025-09-01".to_string(),
        time: "08:00".to_string(),
        kind: "break".to_string(),
    }];

    let err = parse_punches(rows).expect_err("unknown kind");
    assert!(err.to_string().contains("break"));
}

#[test]
fn test_decimal_comma_quantities() {
    let csv = "employee_id;article;start_date;start_time;end_time;qty_produced;qty_planned\n\
               E001;PIEZA-A;01/09/2025;08:00;10:00;12,5;20,0\n\
               E001;PIEZA-B;01/09/2025;10:00;11:00;1.234,5;-\n";

    let rows: Vec<WorkOrderRecord> = read_rows(csv).expect("parse work orders");
    assert_eq!(rows[0].qty_produced, Some(12.5));
    assert_eq!(rows[0].qty_planned, Some(20.0));
    assert_eq!(rows[1].qty_produced, Some(1234.5));
    assert_eq!(rows[1].qty_planned, None);
}

#[test]
fn test_decimal_comma_presence_hours() {
    let csv = "employee_id;date;presence_hours;excess_hours;holiday_hours\n\
               E001;01/09/2025;7,5;0,25;\n";

    let rows: Vec<PresenceTotal> = read_rows(csv).expect("parse totals");
    assert_eq!(rows[0].presence_hours, 7.5);
    assert_eq!(rows[0].excess_hours, 0.25);
    assert_eq!(rows[0].holiday_hours, 0.0);
}

#[test]
fn test_unreadable_presence_hours_fail_the_import() {
    let csv = "employee_id;date;presence_hours\nE001;01/09/2025;seven\n";

    let err = read_rows::<PresenceTotal>(csv).expect_err("not a number");
    assert!(err.to_string().contains("seven"));
}

#[test]
fn test_parse_decimal_separators() {
    assert_eq!(parse_decimal("7.5"), Some(7.5));
    assert_eq!(parse_decimal(" 7,5 "), Some(7.5));
    assert_eq!(parse_decimal("1,234.5"), Some(1234.5));
    assert_eq!(parse_decimal("1.234,5"), Some(1234.5));
    assert_eq!(parse_decimal("8"), Some(8.0));
    assert_eq!(parse_decimal(""), None);
    assert_eq!(parse_decimal("n/a"), None);
}
