use chrono::NaiveDate;
use presencia::utils::date::parse_range;
use presencia::utils::formatting::{hours2readable, ratio2readable};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[test]
fn test_parse_range_tokens() {
    assert_eq!(parse_range("all").expect("all"), None);
    assert_eq!(
        parse_range("2025").expect("year"),
        Some((d(2025, 1, 1), d(2025, 12, 31)))
    );
    assert_eq!(
        parse_range("2024-02").expect("month"),
        Some((d(2024, 2, 1), d(2024, 2, 29)))
    );
    assert_eq!(
        parse_range("2025-09-15").expect("day"),
        Some((d(2025, 9, 15), d(2025, 9, 15)))
    );
    assert_eq!(
        parse_range("2025-11:2026-01").expect("month range"),
        Some((d(2025, 11, 1), d(2026, 1, 31)))
    );
}

#[test]
fn test_parse_range_errors() {
    assert!(parse_range("2025-13").is_err());
    assert!(parse_range("2025-09:2025").is_err());
    assert!(parse_range("2025-10:2025-09").is_err());
    assert!(parse_range("last week").is_err());
}

#[test]
fn test_readable_hours_and_ratio() {
    assert_eq!(hours2readable(7.5), "07h 30m");
    assert_eq!(hours2readable(0.0), "00h 00m");
    assert_eq!(ratio2readable(1.25), "1.25x");
    assert_eq!(ratio2readable(0.0), "--");
}
