//! Report export functions for spreadsheet, JSON and Markdown formats.
//!
//! The output format is picked from the report file's extension.

use super::sheet::ReportSheet;
use crate::error::{ConsolidateError, Result};
use crate::types::Aggregation;
use log::debug;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Xlsx,
    Json,
    Markdown,
}

impl ReportFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" => Some(ReportFormat::Xlsx),
            "json" => Some(ReportFormat::Json),
            "md" | "markdown" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

/// Write the report in `format` to `output_path`.
pub fn export_report(
    aggregation: &Aggregation,
    sheet: &ReportSheet,
    format: ReportFormat,
    output_path: &Path,
    results_root: &Path,
) -> Result<()> {
    debug!("Exporting {:?} report to {:?}", format, output_path);

    match format {
        ReportFormat::Xlsx => export_xlsx(sheet, output_path),
        ReportFormat::Json => export_json(aggregation, output_path, results_root),
        ReportFormat::Markdown => export_markdown(sheet, output_path, results_root),
    }
}

/// Export the sheet as a single-worksheet xlsx workbook with a bold header.
pub fn export_xlsx(sheet: &ReportSheet, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();

        for (col, title) in sheet.header.iter().enumerate() {
            worksheet.write_string_with_format(0, column_index(col)?, title, &bold)?;
        }

        for (r, row) in sheet.rows.iter().enumerate() {
            let row_index = u32::try_from(r + 1).map_err(|_| ConsolidateError::Report("too many rows".to_string()))?;
            for (col, cell) in row.iter().enumerate() {
                worksheet.write_string(row_index, column_index(col)?, cell)?;
            }
        }
    }

    workbook.save(output_path)?;
    Ok(())
}

fn column_index(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| ConsolidateError::Report(format!("column {} out of range", col)))
}

/// Export the nested table as JSON, preserving discovery order.
pub fn export_json(aggregation: &Aggregation, output_path: &Path, results_root: &Path) -> Result<()> {
    use serde_json::json;

    let report = json!({
        "generated": chrono::Local::now().to_rfc3339(),
        "results_root": results_root.display().to_string(),
        "tools": aggregation.tools,
        "files": aggregation.files,
        "applications": aggregation.table,
    });

    let file = File::create(output_path).map_err(|e| ConsolidateError::io(output_path, e))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &report)?;

    Ok(())
}

/// Export the sheet as a Markdown pipe table.
pub fn export_markdown(sheet: &ReportSheet, output_path: &Path, results_root: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| ConsolidateError::io(output_path, e))?;
    let mut out = BufWriter::new(file);

    write_markdown(&mut out, sheet, results_root).map_err(|e| ConsolidateError::io(output_path, e))
}

fn write_markdown<W: Write>(out: &mut W, sheet: &ReportSheet, results_root: &Path) -> std::io::Result<()> {
    writeln!(out, "# Consolidated Results\n")?;
    writeln!(out, "**Results**: {}", results_root.display())?;
    writeln!(out, "**Generated**: {}\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;

    writeln!(out, "| {} |", sheet.header.iter().map(|c| escape_cell(c)).collect::<Vec<_>>().join(" | "))?;
    writeln!(out, "|{}", "---|".repeat(sheet.column_count()))?;
    for row in &sheet.rows {
        writeln!(out, "| {} |", row.iter().map(|c| escape_cell(c)).collect::<Vec<_>>().join(" | "))?;
    }

    out.flush()
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}
