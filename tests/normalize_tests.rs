use chrono::{NaiveDate, NaiveTime};
use presencia::core::calculator::normalize::{
    TimestampError, date_key, normalize_date, normalize_time, normalize_timestamp,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn t(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).expect("valid time")
}

#[test]
fn test_date_formats() {
    assert_eq!(normalize_date("05/09/2025"), Ok(d(2025, 9, 5)));
    assert_eq!(normalize_date("2025-09-05"), Ok(d(2025, 9, 5)));
    assert_eq!(normalize_date("2025-09-05T00:00:00"), Ok(d(2025, 9, 5)));
    assert_eq!(normalize_date(" 2025-09-05T00:00:00.000Z "), Ok(d(2025, 9, 5)));
}

#[test]
fn test_invalid_dates() {
    assert_eq!(normalize_date(""), Err(TimestampError::MissingDate));
    assert_eq!(normalize_date("   "), Err(TimestampError::MissingDate));
    assert!(matches!(
        normalize_date("31/02/2025"),
        Err(TimestampError::InvalidDate(_))
    ));
    assert!(matches!(
        normalize_date("09-05-2025"),
        Err(TimestampError::InvalidDate(_))
    ));
    assert!(matches!(
        normalize_date("yesterday"),
        Err(TimestampError::InvalidDate(_))
    ));
}

#[test]
fn test_time_formats() {
    assert_eq!(normalize_time("08:30"), Ok(t(8, 30, 0)));
    assert_eq!(normalize_time("8:30"), Ok(t(8, 30, 0)));
    assert_eq!(normalize_time("08:30:15"), Ok(t(8, 30, 15)));
    assert_eq!(normalize_time("1899-12-30T08:30:00"), Ok(t(8, 30, 0)));
    assert_eq!(normalize_time("1970-01-01T17:45:10.000Z"), Ok(t(17, 45, 10)));
    assert_eq!(normalize_time("1970-01-01T06:00:00+02:00"), Ok(t(6, 0, 0)));
}

#[test]
fn test_invalid_times() {
    assert_eq!(normalize_time(""), Err(TimestampError::MissingTime));
    assert!(matches!(
        normalize_time("25:00"),
        Err(TimestampError::InvalidTime(_))
    ));
    assert!(matches!(
        normalize_time("08:61"),
        Err(TimestampError::InvalidTime(_))
    ));
    assert!(matches!(
        normalize_time("8h30"),
        Err(TimestampError::InvalidTime(_))
    ));
}

#[test]
fn test_timestamp_combines_date_and_time() {
    let ts = normalize_timestamp("01/09/2025", "1899-12-30T13:15:00").expect("valid");
    assert_eq!(ts, d(2025, 9, 1).and_time(t(13, 15, 0)));

    assert_eq!(
        normalize_timestamp("", "08:00"),
        Err(TimestampError::MissingDate)
    );
    assert_eq!(
        normalize_timestamp("2025-09-01", ""),
        Err(TimestampError::MissingTime)
    );
}

#[test]
fn test_date_key() {
    assert_eq!(date_key("01/09/2025").as_deref(), Some("2025-09-01"));
    assert_eq!(date_key("2025-09-01T00:00:00").as_deref(), Some("2025-09-01"));
    assert_eq!(date_key("n/a"), None);
}
