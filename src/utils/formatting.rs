//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours as `07h 30m`. Negative values keep their sign.
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let m = total_minutes.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

/// Hours as a plain decimal number with a fixed number of decimals.
pub fn hours_decimal(hours: f64, decimals: u8) -> String {
    format!("{:.*}", decimals as usize, hours)
}

/// Overlap ratio as `1.25x`, or `--` when nothing was covered.
pub fn ratio2readable(ratio: f64) -> String {
    if ratio > 0.0 {
        format!("{:.2}x", ratio)
    } else {
        "--".to_string()
    }
}

/// Cut a string to `max` visible characters, ending with `...` when cut.
pub fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
