/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Completion-rate color:
/// \>=80 → green
/// \>=50 → yellow
/// otherwise → red
pub fn color_for_rate(rate: u32) -> &'static str {
    if rate >= 80 {
        GREEN
    } else if rate >= 50 {
        YELLOW
    } else {
        RED
    }
}

/// Grey out zero/empty values (e.g. "00h 00m", "0", "").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "0" || v == "00h 00m" || v == "0h 0m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn check_mark(checked: bool) -> String {
    if checked {
        format!("{GREEN}✔{RESET}")
    } else {
        format!("{GREY}·{RESET}")
    }
}
