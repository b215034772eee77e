//! Tabular report layout.
//!
//! Flattens an `Aggregation` into a header row plus one row per
//! application. Columns are grouped by result kind, then by tool.

use crate::types::{Aggregation, ResultKind};

/// First header cell.
pub const APPLICATION_HEADER: &str = "Application";

/// A fully rendered report: every cell is already a display string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportSheet {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportSheet {
    /// Lay out `aggregation` as header + rows.
    ///
    /// A tool or kind missing for an application leaves its cell empty.
    pub fn from_aggregation(aggregation: &Aggregation) -> Self {
        let mut header = vec![APPLICATION_HEADER.to_string()];
        for kind in ResultKind::ALL {
            for tool in &aggregation.tools {
                header.push(format!("{} - {}", kind.display_name(), tool));
            }
        }

        let rows = aggregation
            .table
            .keys()
            .map(|application| {
                let mut row = Vec::with_capacity(header.len());
                row.push(application.clone());
                for kind in ResultKind::ALL {
                    for tool in &aggregation.tools {
                        let cell = aggregation.get(application, tool, kind).map(|v| v.cell_text()).unwrap_or_default();
                        row.push(cell);
                    }
                }
                row
            })
            .collect();

        Self { header, rows }
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}
