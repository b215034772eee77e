//! Console output for the consolidated report.

use super::sheet::ReportSheet;
use crate::console_format::{self, TableWriter};
use crate::types::Aggregation;
use std::io;

/// Print the sheet to stdout, fitted to the console width.
pub fn print_report_table(sheet: &ReportSheet) -> io::Result<()> {
    let stdout = io::stdout();
    let mut writer = TableWriter::new(stdout.lock(), true);
    writer.write_sheet(sheet, console_format::console_width())
}

/// One-line summary of an aggregation run.
pub fn format_summary(aggregation: &Aggregation) -> String {
    format!(
        "Consolidated {} result file{} from {} application{} and {} tool{}",
        aggregation.files,
        plural(aggregation.files),
        aggregation.table.len(),
        plural(aggregation.table.len()),
        aggregation.tools.len(),
        plural(aggregation.tools.len()),
    )
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
