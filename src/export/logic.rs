// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::Core;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::PeriodFilter;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::AuditExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::{month_name, parse_range};
use crate::utils::path::expand_tilde;
use std::path::Path;

/// High-level export of the audit results.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the audit of a period.
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    ///   `A:B` ranges of the same granularity
    /// - `employee`: restrict to one employee
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        employee: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            Some(r) => parse_range(r)?,
            None => None,
        };

        let filter = PeriodFilter {
            bounds,
            employee: employee.clone(),
        };

        let results = Core::audit_period(pool, &filter, cfg)?;

        if results.is_empty() {
            warning("No audit data found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<AuditExport> = results
            .iter()
            .map(|r| AuditExport::from_result(r, bounds, cfg.hours_decimals))
            .collect();

        write_format(format, &rows, &path, range, cfg.hours_decimals)?;

        oplog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} rows to {}", rows.len(), path.display()),
        )?;

        Ok(rows.len())
    }
}

fn write_format(
    format: ExportFormat,
    rows: &[AuditExport],
    path: &Path,
    range: &Option<String>,
    decimals: u8,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
        ExportFormat::Xlsx => export_xlsx(rows, path),
        ExportFormat::Pdf => export_pdf(rows, path, &build_pdf_title(range), decimals),
    }
}

/// PDF title for the selected period.
pub(crate) fn build_pdf_title(period: &Option<String>) -> String {
    let Some(p) = period else {
        return "Presence audit".to_string();
    };

    match p.len() {
        4 => format!("Presence audit for year {}", p),
        7 => match p.split_once('-') {
            Some((year, mm)) if !month_name(mm).is_empty() => {
                format!("Presence audit for {} {}", month_name(mm), year)
            }
            _ => "Presence audit".to_string(),
        },
        10 => format!("Presence audit for {}", p),
        _ => match p.split_once(':') {
            Some((a, b)) => format!("Presence audit from {} to {}", a, b),
            None => "Presence audit".to_string(),
        },
    }
}
