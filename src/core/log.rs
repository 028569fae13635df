use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, GREEN, MAGENTA, RESET, WHITE, YELLOW};
use crate::utils::formatting::truncate_visible;

/// ANSI color for an operation name.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "import" => GREEN,
        "export" => BLUE,
        "migration_applied" => MAGENTA,
        "init" => YELLOW,
        _ => WHITE,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);

                let target = if e.target.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", e.target)
                };

                (e.id, date, e.operation, target, e.message)
            })
            .collect();

        let id_w = rows
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows.iter().map(|(_, d, ..)| d.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, _, op, t, _)| op.len() + t.len())
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for (id, date, op, target, message) in rows {
            let visible = truncate_visible(&format!("{op}{target}"), 60);
            let padding = " ".repeat(op_w.saturating_sub(visible.chars().count()));

            // only the operation word is colored
            let colored = match visible.strip_prefix(op.as_str()) {
                Some(rest) => format!("{}{}{}{}", color_for_operation(&op), op, RESET, rest),
                None => visible.clone(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
