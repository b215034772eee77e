//! Report generation module.
//!
//! This module handles:
//! - Laying out the aggregated table as header + rows
//! - Export to xlsx, JSON and Markdown
//! - Console table and run summary output
//!
//! # Module Organization
//!
//! - `sheet` - Header/row layout (`ReportSheet`)
//! - `export` - File exporters and format selection
//! - `table` - Console rendering and summary

mod export;
mod sheet;
mod table;

pub use sheet::{APPLICATION_HEADER, ReportSheet};

pub use export::{ReportFormat, export_json, export_markdown, export_report, export_xlsx};

pub use table::{format_summary, print_report_table};
