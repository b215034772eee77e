/// Core data structures for consolidated results
///
/// This module defines the result kinds a tool can produce, the values
/// they resolve to, and the nested application → tool → kind table the
/// aggregator builds.
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Classification tag for a result file.
///
/// Variant order is the classification precedence and the column order of
/// the report: `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// Output of the `time` command wrapped around the tool (`*_time`)
    ExecutionTime,
    /// Captured stdout of the tool (`*_output`)
    Output,
    /// Any other file the tool left behind
    Artifact,
}

impl ResultKind {
    /// All kinds, in precedence order.
    pub const ALL: [ResultKind; 3] = [ResultKind::ExecutionTime, ResultKind::Output, ResultKind::Artifact];

    /// Column title used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            ResultKind::ExecutionTime => "Execution time (HH:MM:SS)",
            ResultKind::Output => "Tool output",
            ResultKind::Artifact => "Artifacts",
        }
    }

    /// Whether multiple files of this kind accumulate into a list.
    pub fn is_list(&self) -> bool {
        matches!(self, ResultKind::Artifact)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultKind::ExecutionTime => "execution_time",
            ResultKind::Output => "output",
            ResultKind::Artifact => "artifact",
        };
        f.write_str(s)
    }
}

/// A resolved result: a single display string, or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    Scalar(String),
    List(Vec<String>),
}

impl ResolvedValue {
    /// Render as a single spreadsheet cell.
    pub fn cell_text(&self) -> String {
        match self {
            ResolvedValue::Scalar(s) => s.clone(),
            ResolvedValue::List(items) => items.join(", "),
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ResolvedValue::Scalar(s) => Some(s),
            ResolvedValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ResolvedValue::Scalar(_) => None,
            ResolvedValue::List(items) => Some(items),
        }
    }
}

/// Results of one tool on one application, keyed by kind.
pub type ToolResultMap = BTreeMap<ResultKind, ResolvedValue>;

/// application → tool → results, in discovery order.
pub type AggregatedTable = IndexMap<String, IndexMap<String, ToolResultMap>>;

/// Output of one aggregation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Aggregation {
    /// The nested result table
    pub table: AggregatedTable,

    /// Every tool seen across all applications, first-seen order, no duplicates
    pub tools: Vec<String>,

    /// Number of result files classified and resolved
    pub files: usize,
}

impl Aggregation {
    /// Look up a single cell of the table.
    pub fn get(&self, application: &str, tool: &str, kind: ResultKind) -> Option<&ResolvedValue> {
        self.table.get(application)?.get(tool)?.get(&kind)
    }

    /// Record a tool identifier, keeping first-seen order.
    pub fn note_tool(&mut self, tool: &str) {
        if !self.tools.iter().any(|t| t == tool) {
            self.tools.push(tool.to_string());
        }
    }
}
