//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Horizontal bar for the trend chart, one block per `unit` minutes.
pub fn bar(minutes: i64, unit: i64, max_width: usize) -> String {
    if minutes <= 0 || unit <= 0 {
        return String::new();
    }
    let blocks = ((minutes + unit - 1) / unit) as usize;
    "█".repeat(blocks.min(max_width))
}

pub fn percent(value: u32) -> String {
    format!("{value}%")
}
