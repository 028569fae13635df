use crate::core::calculator::audit::PeriodData;
use crate::core::calculator::normalize::date_key;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::presence::PresenceTotal;
use crate::models::punch::{Punch, PunchKind};
use crate::models::work_order::WorkOrderRecord;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Row, params};

/// Optional filters shared by every period query.
#[derive(Debug, Clone, Default)]
pub struct PeriodFilter {
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    pub employee: Option<String>,
}

impl PeriodFilter {
    /// Same filter with one extra day on each side, so that shifts crossing
    /// a bound can still be paired.
    fn widened(&self) -> Self {
        Self {
            bounds: self.bounds.map(|(a, b)| {
                (a.pred_opt().unwrap_or(a), b.succ_opt().unwrap_or(b))
            }),
            employee: self.employee.clone(),
        }
    }

    fn sql_params(&self) -> (Option<String>, Option<String>, Option<String>) {
        let (from, to) = match self.bounds {
            Some((a, b)) => (
                Some(a.format("%Y-%m-%d").to_string()),
                Some(b.format("%Y-%m-%d").to_string()),
            ),
            None => (None, None),
        };
        (from, to, self.employee.clone())
    }
}

// Rows whose date could not be read have a NULL work_date: they only show
// up when no bounds are given.
const PERIOD_WHERE: &str = "(?1 IS NULL OR work_date BETWEEN ?1 AND ?2)
         AND (?3 IS NULL OR employee_id = ?3)";

pub fn insert_work_orders(conn: &Connection, rows: &[WorkOrderRecord]) -> AppResult<usize> {
    let now = Local::now().to_rfc3339();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO work_orders (employee_id, order_number, operation, article,
                                  start_date, start_time, end_date, end_time,
                                  qty_produced, qty_planned, work_date, imported_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
    )?;

    for r in rows {
        stmt.execute(params![
            r.employee_id.trim(),
            r.order_number,
            r.operation,
            r.article,
            r.start_date,
            r.start_time,
            r.end_date,
            r.end_time,
            r.qty_produced,
            r.qty_planned,
            date_key(&r.start_date),
            now,
        ])?;
    }

    Ok(rows.len())
}

pub fn insert_punches(conn: &Connection, rows: &[Punch]) -> AppResult<usize> {
    let now = Local::now().to_rfc3339();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO punches (employee_id, date, time, kind, work_date, imported_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    for p in rows {
        stmt.execute(params![
            p.employee_id.trim(),
            p.date,
            p.time,
            p.kind.to_db_str(),
            date_key(&p.date),
            now,
        ])?;
    }

    Ok(rows.len())
}

pub fn insert_presence_totals(conn: &Connection, rows: &[PresenceTotal]) -> AppResult<usize> {
    let now = Local::now().to_rfc3339();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO presence_totals (employee_id, date, presence_hours, excess_hours,
                                      holiday_hours, work_date, imported_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;

    for t in rows {
        stmt.execute(params![
            t.employee_id.trim(),
            t.date,
            t.presence_hours,
            t.excess_hours,
            t.holiday_hours,
            date_key(&t.date),
            now,
        ])?;
    }

    Ok(rows.len())
}

/// Load every raw row falling in the filter.
///
/// Punches are read one day beyond each bound; only the pairs whose entry
/// falls inside the bounds count as presence.
pub fn load_period(pool: &mut DbPool, filter: &PeriodFilter) -> AppResult<PeriodData> {
    let conn = &pool.conn;

    Ok(PeriodData {
        work_orders: load_work_orders(conn, filter)?,
        punches: load_punches(conn, &filter.widened())?,
        totals: load_presence_totals(conn, filter)?,
        bounds: filter.bounds,
    })
}

pub fn load_work_orders(conn: &Connection, filter: &PeriodFilter) -> AppResult<Vec<WorkOrderRecord>> {
    let sql = format!(
        "SELECT employee_id, order_number, operation, article, start_date, start_time,
                end_date, end_time, qty_produced, qty_planned
         FROM work_orders
         WHERE {PERIOD_WHERE}
         ORDER BY employee_id ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let (from, to, emp) = filter.sql_params();

    let rows = stmt.query_map(params![from, to, emp], map_work_order)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_punches(conn: &Connection, filter: &PeriodFilter) -> AppResult<Vec<Punch>> {
    let sql = format!(
        "SELECT employee_id, date, time, kind
         FROM punches
         WHERE {PERIOD_WHERE}
         ORDER BY employee_id ASC, work_date ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let (from, to, emp) = filter.sql_params();

    let rows = stmt.query_map(params![from, to, emp], map_punch)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_presence_totals(
    conn: &Connection,
    filter: &PeriodFilter,
) -> AppResult<Vec<PresenceTotal>> {
    let sql = format!(
        "SELECT employee_id, date, presence_hours, excess_hours, holiday_hours
         FROM presence_totals
         WHERE {PERIOD_WHERE}
         ORDER BY employee_id ASC, work_date ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let (from, to, emp) = filter.sql_params();

    let rows = stmt.query_map(params![from, to, emp], |row| {
        Ok(PresenceTotal {
            employee_id: row.get(0)?,
            date: row.get(1)?,
            presence_hours: row.get(2)?,
            excess_hours: row.get(3)?,
            holiday_hours: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_work_order(row: &Row) -> rusqlite::Result<WorkOrderRecord> {
    Ok(WorkOrderRecord {
        employee_id: row.get("employee_id")?,
        order_number: row.get("order_number")?,
        operation: row.get("operation")?,
        article: row.get("article")?,
        start_date: row.get("start_date")?,
        start_time: row.get("start_time")?,
        end_date: row.get("end_date")?,
        end_time: row.get("end_time")?,
        qty_produced: row.get("qty_produced")?,
        qty_planned: row.get("qty_planned")?,
    })
}

fn map_punch(row: &Row) -> rusqlite::Result<Punch> {
    let kind_str: String = row.get("kind")?;
    let kind = PunchKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidPunchKind(kind_str.clone())),
        )
    })?;

    Ok(Punch {
        employee_id: row.get("employee_id")?,
        date: row.get("date")?,
        time: row.get("time")?,
        kind,
    })
}
