use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

/// Row counts and covered days of the imported ERP data.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DbStats {
    pub work_orders: i64,
    pub punches: i64,
    pub presence_totals: i64,
    pub employees: i64,
    pub undated_rows: i64,
    pub first_day: Option<String>,
    pub last_day: Option<String>,
}

fn count(conn: &Connection, sql: &str) -> rusqlite::Result<i64> {
    conn.query_row(sql, [], |row| row.get(0))
}

pub fn collect_stats(conn: &Connection) -> rusqlite::Result<DbStats> {
    let days = "SELECT work_date FROM work_orders WHERE work_date IS NOT NULL
                UNION SELECT work_date FROM punches WHERE work_date IS NOT NULL
                UNION SELECT work_date FROM presence_totals WHERE work_date IS NOT NULL";

    let first_day: Option<String> = conn
        .query_row(
            &format!("SELECT MIN(work_date) FROM ({days})"),
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let last_day: Option<String> = conn
        .query_row(
            &format!("SELECT MAX(work_date) FROM ({days})"),
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    Ok(DbStats {
        work_orders: count(conn, "SELECT COUNT(*) FROM work_orders")?,
        punches: count(conn, "SELECT COUNT(*) FROM punches")?,
        presence_totals: count(conn, "SELECT COUNT(*) FROM presence_totals")?,
        employees: count(
            conn,
            "SELECT COUNT(*) FROM (
                SELECT employee_id FROM work_orders
                UNION SELECT employee_id FROM punches
                UNION SELECT employee_id FROM presence_totals)",
        )?,
        undated_rows: count(
            conn,
            "SELECT (SELECT COUNT(*) FROM work_orders WHERE work_date IS NULL)
                  + (SELECT COUNT(*) FROM punches WHERE work_date IS NULL)
                  + (SELECT COUNT(*) FROM presence_totals WHERE work_date IS NULL)",
        )?,
        first_day,
        last_day,
    })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let stats = collect_stats(&pool.conn)?;

    println!(
        "{}• Work orders:{} {}{}{}",
        CYAN, RESET, GREEN, stats.work_orders, RESET
    );
    println!("{}• Punches:{} {}{}{}", CYAN, RESET, GREEN, stats.punches, RESET);
    println!(
        "{}• Presence totals:{} {}{}{}",
        CYAN, RESET, GREEN, stats.presence_totals, RESET
    );
    println!(
        "{}• Employees:{} {}{}{}",
        CYAN, RESET, GREEN, stats.employees, RESET
    );

    if stats.undated_rows > 0 {
        println!(
            "{}• Rows with unreadable date:{} {}{}{}",
            CYAN, RESET, YELLOW, stats.undated_rows, RESET
        );
    }

    let fmt_first = stats
        .first_day
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = stats.last_day.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    Ok(())
}
