use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::utils::table::visible_width;
use ansi_term::Colour;
use rusqlite::Connection;

const OP_MAX: usize = 48;

/// ANSI colour of an operation in the log listing
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "focus_log" => Colour::Cyan,
        "task_add" => Colour::Blue,
        "task_status" => Colour::Yellow,
        "user_add" => Colour::RGB(120, 200, 255),
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// "operation (target)", truncated to `OP_MAX` visible chars with only the
/// operation word coloured.
fn render_op_target(operation: &str, target: &str) -> String {
    let plain = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    let visible = if plain.chars().count() > OP_MAX {
        let mut s: String = plain.chars().take(OP_MAX - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(operation);
    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let rows = load_log(conn)?;

        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let entries: Vec<(i64, String, String, String)> = rows
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);
                (id, date, render_op_target(&operation, &target), message)
            })
            .collect();

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|(_, d, ..)| d.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, _)| visible_width(op))
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in entries {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&op_target)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

