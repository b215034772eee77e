//! Consolidation of static-analysis experiment results.
//!
//! Walks a `<root>/<application>/<tool>/<result-file>` tree, classifies
//! each result file by name, resolves it to a display string, and lays
//! the results out as one report row per application.

pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod config;
pub mod console_format;
pub mod error;
pub mod manifest;
pub mod report;
pub mod resolve;
pub mod timing;
pub mod types;
pub mod ui;

pub use aggregate::aggregate;
pub use error::{ConsolidateError, Result};
pub use types::{AggregatedTable, Aggregation, ResolvedValue, ResultKind, ToolResultMap};
