/// Result file classification
///
/// Maps a result filename to its `ResultKind` by walking an ordered rule
/// list; the first rule whose pattern matches wins. The artifact rule
/// matches everything and must stay last.
use crate::error::{ConsolidateError, Result};
use crate::types::ResultKind;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// A result kind paired with the filename pattern that selects it.
#[derive(Debug)]
pub struct ClassificationRule {
    pub kind: ResultKind,
    pub pattern: Regex,
}

impl ClassificationRule {
    fn new(kind: ResultKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    pub fn matches(&self, filename: &str) -> bool {
        self.pattern.is_match(filename)
    }
}

lazy_static! {
    static ref RULES: Vec<ClassificationRule> = vec![
        ClassificationRule::new(ResultKind::ExecutionTime, r"^.*_time$"),
        ClassificationRule::new(ResultKind::Output, r"^.*_output$"),
        ClassificationRule::new(ResultKind::Artifact, r"(?s).*"),
    ];
}

/// The classification rules, in evaluation order.
pub fn rules() -> &'static [ClassificationRule] {
    &RULES
}

/// Classify a filename, or `None` if no rule matches.
pub fn classify(filename: &str) -> Option<ResultKind> {
    rules().iter().find(|rule| rule.matches(filename)).map(|rule| rule.kind)
}

/// Classify the file at `path` by its base name.
///
/// Names that are not valid UTF-8 are matched in their lossy form.
pub fn classify_file(path: &Path) -> Result<ResultKind> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .ok_or_else(|| ConsolidateError::UnclassifiableFile { path: path.to_path_buf() })?;

    classify(&filename).ok_or_else(|| ConsolidateError::UnclassifiableFile { path: path.to_path_buf() })
}
