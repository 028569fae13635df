use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// First and last day of the current month.
pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    let t = today();
    month_bounds(t.year(), t.month()).unwrap_or((t, t))
}

pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("{r}: {why}"))
}

/// Bounds of a single period token: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p, "invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(p, "invalid year"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(p, "invalid year"))?;
            Ok((d1, d2))
        }
        7 => {
            let (ys, ms) = p.split_once('-').ok_or_else(|| invalid(p, "expected YYYY-MM"))?;
            let y: i32 = ys.parse().map_err(|_| invalid(p, "invalid year"))?;
            let m: u32 = ms.parse().map_err(|_| invalid(p, "invalid month"))?;
            month_bounds(y, m).ok_or_else(|| invalid(p, "invalid month"))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(invalid(p, "unsupported format")),
    }
}

/// Parse a `--range` / `--period` expression.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
/// - all (no bounds → `None`)
pub fn parse_range(r: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let r = r.trim();

    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let bounds = match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let (start, end) = (start_raw.trim(), end_raw.trim());
            if start.len() != end.len() {
                return Err(invalid(r, "start and end must have same format"));
            }
            let (d1, _) = period_bounds(start)?;
            let (_, d2) = period_bounds(end)?;
            if d2 < d1 {
                return Err(invalid(r, "end before start"));
            }
            (d1, d2)
        }
        None => period_bounds(r)?,
    };

    Ok(Some(bounds))
}

pub fn month_name(mm: &str) -> &'static str {
    match mm {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "",
    }
}
