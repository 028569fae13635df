// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{audits_to_pdf_table, get_pdf_headers};
use crate::export::pdf::{PdfManager, PdfRow};
use crate::export::{AuditExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Export the audit table as a landscape PDF, highlighting large gaps.
pub(crate) fn export_pdf(
    rows: &[AuditExport],
    path: &Path,
    title: &str,
    decimals: u8,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_pdf_headers();
    let table: Vec<PdfRow> = audits_to_pdf_table(rows, decimals)
        .into_iter()
        .zip(rows)
        .map(|(cells, a)| PdfRow {
            cells,
            highlight: a.gap_alert(),
        })
        .collect();

    let presence: f64 = rows.iter().map(|r| r.presence_hours).sum();
    let covered: f64 = rows.iter().map(|r| r.time_covered).sum();
    let subtitle = format!(
        "{} employees | presence {:.*} h | covered {:.*} h | hours in decimal",
        rows.len(),
        decimals as usize,
        presence,
        decimals as usize,
        covered
    );

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &subtitle, &headers, &table);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
