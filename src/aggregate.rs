/// Result tree aggregation
///
/// This module handles:
/// - Walking `<root>/<application>/<tool>/<result-file>`
/// - Classifying and resolving every result file
/// - Merging resolved values into the application → tool → kind table
///
/// Entries are visited in ascending name order so the report layout does
/// not depend on the filesystem's listing order.
use crate::classify;
use crate::error::{ConsolidateError, Result};
use crate::resolve::{self, ResultFile};
use crate::types::{Aggregation, ResolvedValue, ResultKind, ToolResultMap};
use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Aggregate every result file below `root`.
///
/// Stops at the first file that cannot be classified, resolved, or merged.
pub fn aggregate(root: &Path) -> Result<Aggregation> {
    debug!("Aggregating results under {:?}", root);

    let mut aggregation = Aggregation::default();

    for application in list_only_dirs(root)? {
        debug!("Analysing folder '{}'", application.name);

        let mut app_map = IndexMap::new();

        for tool in list_only_dirs(&application.path)? {
            debug!("Analysing the results of tool '{}'", tool.name);

            let tool_map = aggregate_tool(&tool.path, &tool.name)?;
            let files = tool_map.files;

            aggregation.files += files;
            aggregation.note_tool(&tool.name);
            app_map.insert(tool.name, tool_map.results);
        }

        aggregation.table.insert(application.name, app_map);
    }

    debug!(
        "Aggregated {} files from {} applications and {} tools",
        aggregation.files,
        aggregation.table.len(),
        aggregation.tools.len()
    );

    Ok(aggregation)
}

/// Results gathered from one tool directory.
#[derive(Debug, Default)]
pub struct ToolResults {
    pub results: ToolResultMap,
    pub files: usize,
    sources: HashMap<ResultKind, PathBuf>,
}

impl ToolResults {
    /// Merge one resolved file into the map.
    ///
    /// List kinds append. A second file for a scalar kind is an error
    /// naming both files.
    pub fn merge(&mut self, kind: ResultKind, path: &Path, value: String) -> Result<()> {
        if kind.is_list() {
            let slot = self.results.entry(kind).or_insert_with(|| ResolvedValue::List(Vec::new()));
            if let ResolvedValue::List(items) = slot {
                items.push(value);
            }
        } else {
            if let Some(previous) = self.sources.get(&kind) {
                return Err(ConsolidateError::DuplicateScalar {
                    kind,
                    path: path.to_path_buf(),
                    previous: previous.clone(),
                });
            }
            self.sources.insert(kind, path.to_path_buf());
            self.results.insert(kind, ResolvedValue::Scalar(value));
        }

        self.files += 1;
        Ok(())
    }
}

/// Classify, resolve, and merge every regular file in one tool directory.
pub fn aggregate_tool(tool_dir: &Path, tool: &str) -> Result<ToolResults> {
    let mut results = ToolResults::default();

    for entry in list_only_files(tool_dir)? {
        let kind = classify::classify_file(&entry.path)?;

        debug!("{}/{} -> {}", tool, entry.name, kind);

        let file = ResultFile::new(tool, &entry.path);
        let value = resolve::resolve(kind, &file)?;
        results.merge(kind, &entry.path, value)?;
    }

    Ok(results)
}

/// A directory entry found while walking the results tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Display name, lossily converted when not valid UTF-8
    pub name: String,
    /// Real path of the entry, used for all further filesystem access
    pub path: PathBuf,
}

/// Child directories of `dir`, in ascending name order.
pub fn list_only_dirs(dir: &Path) -> Result<Vec<DirEntry>> {
    list_children(dir, |p| p.is_dir())
}

/// Child regular files of `dir`, in ascending name order.
pub fn list_only_files(dir: &Path) -> Result<Vec<DirEntry>> {
    list_children(dir, |p| p.is_file())
}

fn list_children(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<DirEntry>> {
    if !dir.is_dir() {
        return Err(ConsolidateError::NotFound { path: dir.to_path_buf() });
    }

    let entries = fs::read_dir(dir).map_err(|e| ConsolidateError::io(dir, e))?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConsolidateError::io(dir, e))?;
        let path = entry.path();
        if keep(&path) {
            children.push((entry.file_name(), path));
        }
    }

    // sort on the raw OS name so order does not depend on lossy conversion
    children.sort();
    Ok(children
        .into_iter()
        .map(|(name, path)| DirEntry {
            name: name.to_string_lossy().into_owned(),
            path,
        })
        .collect())
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
