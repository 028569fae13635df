use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ordered schema migrations. Each one is applied once and recorded in the
/// `log` table as `migration_applied`.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20260301_0001_create_erp_tables",
        "Created work_orders, punches and presence_totals tables",
        r#"
        CREATE TABLE IF NOT EXISTS work_orders (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   TEXT NOT NULL,
            order_number  TEXT NOT NULL DEFAULT '',
            operation     TEXT NOT NULL DEFAULT '',
            article       TEXT NOT NULL DEFAULT '',
            start_date    TEXT NOT NULL DEFAULT '',
            start_time    TEXT NOT NULL DEFAULT '',
            end_date      TEXT NOT NULL DEFAULT '',
            end_time      TEXT NOT NULL DEFAULT '',
            qty_produced  REAL,
            qty_planned   REAL,
            work_date     TEXT,
            imported_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS punches (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   TEXT NOT NULL,
            date          TEXT NOT NULL,
            time          TEXT NOT NULL,
            kind          TEXT NOT NULL CHECK(kind IN ('in','out')),
            work_date     TEXT,
            imported_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS presence_totals (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id     TEXT NOT NULL,
            date            TEXT NOT NULL,
            presence_hours  REAL NOT NULL DEFAULT 0,
            excess_hours    REAL NOT NULL DEFAULT 0,
            holiday_hours   REAL NOT NULL DEFAULT 0,
            work_date       TEXT,
            imported_at     TEXT NOT NULL
        );
        "#,
    ),
    (
        "20260312_0002_add_period_indexes",
        "Added (work_date, employee_id) indexes",
        r#"
        CREATE INDEX IF NOT EXISTS idx_work_orders_period ON work_orders(work_date, employee_id);
        CREATE INDEX IF NOT EXISTS idx_punches_period ON punches(work_date, employee_id);
        CREATE INDEX IF NOT EXISTS idx_presence_totals_period ON presence_totals(work_date, employee_id);
        "#,
    ),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, message: &str, sql: &str) -> Result<()> {
    conn.execute_batch(sql)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    success(format!("Migration applied: {version}"));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Returns the number of migrations applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }
        apply(conn, version, message, sql)?;
        applied += 1;
    }

    Ok(applied)
}
