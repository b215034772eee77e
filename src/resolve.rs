/// Result resolvers
///
/// Each result kind has one resolver turning a classified file into the
/// string shown in the report. Output and artifact files are reported by
/// path and name only; their content is not inspected.
use crate::error::{ConsolidateError, Result};
use crate::timing::{self, ExecutionTimes};
use crate::types::ResultKind;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A result file found under `<root>/<application>/<tool>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFile {
    /// Base name of the file
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
    /// Tool whose directory holds the file
    pub tool: String,
}

impl ResultFile {
    pub fn new(tool: &str, path: &Path) -> Self {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        Self {
            name,
            path: path.to_path_buf(),
            tool: tool.to_string(),
        }
    }
}

/// Resolve `file` with the resolver for `kind`.
pub fn resolve(kind: ResultKind, file: &ResultFile) -> Result<String> {
    match kind {
        ResultKind::ExecutionTime => resolve_execution_time(file),
        ResultKind::Output => Ok(resolve_output(file)),
        ResultKind::Artifact => Ok(resolve_artifact(file)),
    }
}

/// Sum of `user` and `sys` time, formatted `H:MM:SS[.ffffff]`.
pub fn resolve_execution_time(file: &ResultFile) -> Result<String> {
    let content = fs::read_to_string(&file.path).map_err(|e| ConsolidateError::io(&file.path, e))?;

    let times = ExecutionTimes::parse(&content).map_err(|e| ConsolidateError::Parse {
        path: file.path.clone(),
        fragment: e.fragment,
        reason: e.reason,
    })?;

    debug!("{}: user {:?} + sys {:?}", file.tool, times.user, times.sys);
    Ok(timing::format_duration(times.cpu()))
}

/// The output capture is reported by its path.
pub fn resolve_output(file: &ResultFile) -> String {
    file.path.display().to_string()
}

/// Artifacts are reported by their base name.
pub fn resolve_artifact(file: &ResultFile) -> String {
    file.name.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> ResultFile {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        ResultFile::new("flowdroid", &path)
    }

    #[test]
    fn test_execution_time_sums_user_and_sys() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "flowdroid_time", "real\t0m1.500s\nuser\t0m1.000s\nsys\t0m0.500s\n");

        assert_eq!(resolve(ResultKind::ExecutionTime, &file).unwrap(), "0:00:01.500000");
    }

    #[test]
    fn test_execution_time_ignores_real() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "flowdroid_time", "real\t1h2m3s\nuser\t0m10s\nsys\t0m5s\n");

        assert_eq!(resolve(ResultKind::ExecutionTime, &file).unwrap(), "0:00:15");
    }

    #[test]
    fn test_execution_time_missing_user_names_file() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "flowdroid_time", "real\t0m1s\nsys\t0m1s\n");

        match resolve(ResultKind::ExecutionTime, &file) {
            Err(ConsolidateError::Parse { path, fragment, .. }) => {
                assert_eq!(path, file.path);
                assert!(fragment.contains("sys\t0m1s"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_execution_time_overflow_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "flowdroid_time", "user\t5124095576030431h0m0s\nsys\t5124095576030431h0m0s\n");

        match resolve(ResultKind::ExecutionTime, &file) {
            Err(ConsolidateError::Parse { path, reason, .. }) => {
                assert_eq!(path, file.path);
                assert!(reason.contains("overflow"), "{}", reason);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_execution_time_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let file = ResultFile::new("flowdroid", &dir.path().join("missing_time"));

        let err = resolve(ResultKind::ExecutionTime, &file).unwrap_err();
        assert!(matches!(err, ConsolidateError::Io { .. }));
    }

    #[test]
    fn test_output_resolves_to_path() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "flowdroid_output", "anything at all");

        assert_eq!(resolve(ResultKind::Output, &file).unwrap(), file.path.display().to_string());
    }

    #[test]
    fn test_artifact_resolves_to_name() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "links.xml", "<links/>");

        assert_eq!(resolve(ResultKind::Artifact, &file).unwrap(), "links.xml");
        assert_eq!(file.tool, "flowdroid");
    }
}
