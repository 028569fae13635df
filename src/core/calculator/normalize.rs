//! Normalization of the ERP date/time strings.
//!
//! The ERP exports the same column in several shapes depending on the
//! endpoint that produced it:
//!
//! - date: `dd/mm/yyyy`, `yyyy-mm-dd`, or an ISO datetime `yyyy-mm-ddT...`
//! - time: `HH:mm:ss` / `HH:mm`, or an ISO datetime whose date part is a
//!   meaningless epoch (`1899-12-30T08:30:00`, `1970-01-01T08:30:00.000Z`)
//!
//! Every string is parsed exactly once into a chrono value or a
//! [`TimestampError`]; nothing downstream looks at the raw text again.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Clock part after an optional `T`: `H:MM`, `HH:MM:SS`, fractional
/// seconds, then an optional `Z` or numeric offset which is ignored
/// (the ERP stores wall-clock time).
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2})(?:[.,]\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?$")
        .expect("valid time pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("missing date")]
    MissingDate,
    #[error("missing time")]
    MissingTime,
    #[error("unparseable date '{0}'")]
    InvalidDate(String),
    #[error("unparseable time '{0}'")]
    InvalidTime(String),
    #[error("end is not after start")]
    NotAfterStart,
}

pub fn normalize_date(raw: &str) -> Result<NaiveDate, TimestampError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(TimestampError::MissingDate);
    }

    // ISO datetime or "date time": keep the calendar part only
    let date_part = s.split(['T', ' ']).next().unwrap_or(s);

    let parsed = if date_part.contains('/') {
        NaiveDate::parse_from_str(date_part, "%d/%m/%Y")
    } else {
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
    };

    parsed.map_err(|_| TimestampError::InvalidDate(raw.to_string()))
}

pub fn normalize_time(raw: &str) -> Result<NaiveTime, TimestampError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(TimestampError::MissingTime);
    }

    let clock = match s.split_once('T') {
        Some((_, after)) => after,
        None => s,
    };

    let invalid = || TimestampError::InvalidTime(raw.to_string());

    let caps = TIME_RE.captures(clock).ok_or_else(invalid)?;
    let field = |i: usize| -> u32 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    NaiveTime::from_hms_opt(field(1), field(2), field(3)).ok_or_else(invalid)
}

pub fn normalize_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, TimestampError> {
    let d = normalize_date(date)?;
    let t = normalize_time(time)?;
    Ok(d.and_time(t))
}

/// `yyyy-mm-dd` key used to file a raw row under a calendar day, or `None`
/// when the date cannot be read.
pub fn date_key(raw: &str) -> Option<String> {
    normalize_date(raw)
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}
