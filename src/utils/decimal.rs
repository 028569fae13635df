//! Numbers from ERP extracts, written with either `.` or `,` as decimal
//! separator (`7.5`, `7,5`, `1.234,5`, `1,234.5`).

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Parse a decimal written with either separator. The separator that comes
/// last is the decimal one; the other is a thousands separator.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let normalized = match (s.rfind('.'), s.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => s.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => s.replace(',', ""),
        (None, Some(_)) => s.replace(',', "."),
        _ => s.to_string(),
    };

    normalized.parse().ok()
}

/// Optional quantity: empty is `None`; unreadable text is `None` too, but traced.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(raw.as_deref().and_then(|s| {
        let value = parse_decimal(s);
        if value.is_none() && !s.trim().is_empty() {
            debug!(value = s, "unreadable quantity, ignored");
        }
        value
    }))
}

/// Required hours: empty is `0`; unreadable text fails the row.
pub fn decimal_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if raw.trim().is_empty() {
        return Ok(0.0);
    }

    parse_decimal(&raw).ok_or_else(|| D::Error::custom(format!("invalid number '{raw}'")))
}
