//! Import of ERP CSV extracts into the local store.

use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_presence_totals, insert_punches, insert_work_orders};
use crate::errors::{AppError, AppResult};
use crate::models::presence::PresenceTotal;
use crate::models::punch::{Punch, PunchKind, PunchRow};
use crate::models::work_order::WorkOrderRecord;
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImportKind {
    WorkOrders,
    Punches,
    Presence,
}

impl ImportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportKind::WorkOrders => "work-orders",
            ImportKind::Punches => "punches",
            ImportKind::Presence => "presence",
        }
    }
}

/// ERP extracts come either comma or semicolon separated.
pub fn detect_delimiter(content: &str) -> u8 {
    let header = content.lines().next().unwrap_or("");
    if header.matches(';').count() > header.matches(',').count() {
        b';'
    } else {
        b','
    }
}

/// Parse a CSV extract into typed rows. Any row that does not deserialize
/// aborts the whole read.
pub fn read_rows<T: DeserializeOwned>(content: &str) -> AppResult<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(content))
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut out = Vec::new();
    for row in rdr.deserialize() {
        out.push(row?);
    }
    Ok(out)
}

pub fn parse_punches(rows: Vec<PunchRow>) -> AppResult<Vec<Punch>> {
    rows.into_iter()
        .map(|r| {
            let kind =
                PunchKind::from_code(&r.kind).ok_or_else(|| AppError::InvalidPunchKind(r.kind))?;
            Ok(Punch {
                employee_id: r.employee_id,
                date: r.date,
                time: r.time,
                kind,
            })
        })
        .collect()
}

pub struct ImportLogic;

impl ImportLogic {
    /// Import one extract; all rows land in a single transaction.
    /// Returns the number of stored rows.
    pub fn import(pool: &mut DbPool, kind: ImportKind, file: &Path) -> AppResult<usize> {
        let content = fs::read_to_string(file)?;
        debug!(kind = kind.as_str(), file = %file.display(), "reading extract");

        let tx = pool.conn.transaction()?;

        let stored = match kind {
            ImportKind::WorkOrders => {
                let rows: Vec<WorkOrderRecord> = read_rows(&content)?;
                insert_work_orders(&tx, &rows)?
            }
            ImportKind::Punches => {
                let rows = parse_punches(read_rows(&content)?)?;
                insert_punches(&tx, &rows)?
            }
            ImportKind::Presence => {
                let rows: Vec<PresenceTotal> = read_rows(&content)?;
                insert_presence_totals(&tx, &rows)?
            }
        };

        oplog(
            &tx,
            "import",
            kind.as_str(),
            &format!("Imported {stored} rows from {}", file.display()),
        )?;

        tx.commit()?;

        info!(kind = kind.as_str(), stored, "extract imported");
        Ok(stored)
    }
}
