/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Gap color relative to presence:
/// no gap → green
/// up to 10% of presence → yellow
/// more → red
pub fn color_for_gap(gap_hours: f64, presence_hours: f64) -> &'static str {
    if gap_hours <= 0.0 {
        GREEN
    } else if presence_hours > 0.0 && gap_hours / presence_hours <= 0.10 {
        YELLOW
    } else {
        RED
    }
}

/// Overlap ratio above 1 means parallel work was logged.
pub fn color_for_ratio(ratio: f64) -> &'static str {
    if ratio > 1.0 { MAGENTA } else { RESET }
}

pub fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}
