//! User-facing terminal messages. Diagnostics go through `tracing` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const RULE_WIDTH: usize = 48;

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, "✅", msg));
}

/// Printed on stdout: warnings are part of the command's normal output.
pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, "❌", msg));
}

/// Section title followed by a rule.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}{msg}\n{}{RESET}\n", "─".repeat(RULE_WIDTH));
}
