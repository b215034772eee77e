/// Tests for aggregate module
#[cfg(test)]
mod tests {
    use crate::aggregate::*;
    use crate::error::ConsolidateError;
    use crate::types::{ResolvedValue, ResultKind};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const TIME: &str = "real\t0m1.500s\nuser\t0m1.000s\nsys\t0m0.500s\n";

    /// Write `<root>/<app>/<tool>/<name>`
    fn write_result(root: &Path, app: &str, tool: &str, name: &str, content: &str) {
        let dir = root.join(app).join(tool);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_artifacts_accumulate_in_order() {
        let root = TempDir::new().unwrap();
        for name in ["c.txt", "a.xml", "b.json"] {
            write_result(root.path(), "app", "tool", name, "x");
        }

        let agg = aggregate(root.path()).unwrap();
        let tool = &agg.table["app"]["tool"];

        assert_eq!(tool.len(), 1, "Only the artifact kind should be populated");
        assert_eq!(
            tool[&ResultKind::Artifact],
            ResolvedValue::List(vec!["a.xml".to_string(), "b.json".to_string(), "c.txt".to_string()])
        );
    }

    #[test]
    fn test_two_applications_same_tool() {
        let root = TempDir::new().unwrap();
        for app in ["A", "B"] {
            write_result(root.path(), app, "T", "T_time", TIME);
            write_result(root.path(), app, "T", "links.xml", "x");
            write_result(root.path(), app, "T", "graph.dot", "x");
        }

        let agg = aggregate(root.path()).unwrap();

        assert_eq!(agg.table.len(), 2);
        assert_eq!(agg.tools, vec!["T".to_string()]);
        assert_eq!(agg.files, 6);

        for app in ["A", "B"] {
            let time = agg.get(app, "T", ResultKind::ExecutionTime).unwrap();
            assert_eq!(time.as_scalar(), Some("0:00:01.500000"));

            let artifacts = agg.get(app, "T", ResultKind::Artifact).unwrap();
            assert_eq!(artifacts.as_list().map(|l| l.len()), Some(2));

            assert!(agg.get(app, "T", ResultKind::Output).is_none());
        }
    }

    #[test]
    fn test_all_kinds_resolved() {
        let root = TempDir::new().unwrap();
        write_result(root.path(), "app", "epicc", "epicc_time", "user\t0m10s\nsys\t0m5s\n");
        write_result(root.path(), "app", "epicc", "epicc_output", "stdout");
        write_result(root.path(), "app", "epicc", "app.epicc", "links");

        let agg = aggregate(root.path()).unwrap();
        let output_path = root.path().join("app").join("epicc").join("epicc_output");

        assert_eq!(agg.get("app", "epicc", ResultKind::ExecutionTime).unwrap().as_scalar(), Some("0:00:15"));
        assert_eq!(
            agg.get("app", "epicc", ResultKind::Output).unwrap().as_scalar(),
            Some(output_path.display().to_string().as_str())
        );
        assert_eq!(
            agg.get("app", "epicc", ResultKind::Artifact).unwrap(),
            &ResolvedValue::List(vec!["app.epicc".to_string()])
        );
    }

    #[test]
    fn test_tools_listed_once_in_discovery_order() {
        let root = TempDir::new().unwrap();
        write_result(root.path(), "a1", "iccta", "x", "x");
        write_result(root.path(), "a1", "epicc", "x", "x");
        write_result(root.path(), "a2", "amandroid", "x", "x");
        write_result(root.path(), "a2", "iccta", "x", "x");

        let agg = aggregate(root.path()).unwrap();

        assert_eq!(agg.tools, vec!["epicc", "iccta", "amandroid"]);
        let apps: Vec<&String> = agg.table.keys().collect();
        assert_eq!(apps, vec!["a1", "a2"]);
    }

    #[test]
    fn test_non_directories_and_nested_dirs_ignored() {
        let root = TempDir::new().unwrap();
        write_result(root.path(), "app", "tool", "artifact", "x");
        fs::write(root.path().join("README"), "stray file").unwrap();
        fs::write(root.path().join("app").join("notes.txt"), "stray file").unwrap();
        fs::create_dir_all(root.path().join("app").join("tool").join("nested")).unwrap();
        fs::write(root.path().join("app").join("tool").join("nested").join("deep"), "x").unwrap();

        let agg = aggregate(root.path()).unwrap();

        assert_eq!(agg.table.len(), 1);
        assert_eq!(agg.table["app"].len(), 1);
        assert_eq!(agg.files, 1);
    }

    #[test]
    fn test_empty_tool_directory_is_kept() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("app").join("tool")).unwrap();

        let agg = aggregate(root.path()).unwrap();

        assert!(agg.table["app"]["tool"].is_empty());
        assert_eq!(agg.tools, vec!["tool"]);
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");

        match aggregate(&missing) {
            Err(ConsolidateError::NotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_time_file_aborts_run() {
        let root = TempDir::new().unwrap();
        write_result(root.path(), "app", "tool", "tool_time", "real\t0m1s\nuser\t0m1s\n");

        let err = aggregate(root.path()).unwrap_err();
        match err {
            ConsolidateError::Parse { path, .. } => assert!(path.ends_with("tool_time")),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_scalar_is_an_error() {
        let root = TempDir::new().unwrap();
        write_result(root.path(), "app", "tool", "first_time", TIME);
        write_result(root.path(), "app", "tool", "second_time", TIME);

        match aggregate(root.path()) {
            Err(ConsolidateError::DuplicateScalar { kind, path, previous }) => {
                assert_eq!(kind, ResultKind::ExecutionTime);
                assert!(previous.ends_with("first_time"));
                assert!(path.ends_with("second_time"));
            }
            other => panic!("expected DuplicateScalar, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_counts_files() {
        let mut results = ToolResults::default();
        results.merge(ResultKind::Artifact, Path::new("a"), "a".to_string()).unwrap();
        results.merge(ResultKind::Artifact, Path::new("b"), "b".to_string()).unwrap();
        results.merge(ResultKind::Output, Path::new("c_output"), "c_output".to_string()).unwrap();

        assert_eq!(results.files, 3);
        assert_eq!(results.results.len(), 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_traversed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = TempDir::new().unwrap();
        let tool_dir = root.path().join("app").join(OsStr::from_bytes(b"to\xffol"));
        fs::create_dir_all(&tool_dir).unwrap();
        fs::write(tool_dir.join("links.xml"), "x").unwrap();
        fs::write(tool_dir.join(OsStr::from_bytes(b"run\xff_time")), TIME).unwrap();

        let agg = aggregate(root.path()).unwrap();

        let tool = "to\u{FFFD}ol";
        assert_eq!(agg.tools, vec![tool]);
        assert_eq!(agg.files, 2);
        assert_eq!(agg.get("app", tool, ResultKind::ExecutionTime).unwrap().as_scalar(), Some("0:00:01.500000"));
        assert_eq!(
            agg.get("app", tool, ResultKind::Artifact).unwrap(),
            &ResolvedValue::List(vec!["links.xml".to_string()])
        );
    }

    #[test]
    fn test_listing_keeps_real_paths() {
        let root = TempDir::new().unwrap();
        write_result(root.path(), "b", "tool", "x", "x");
        write_result(root.path(), "a", "tool", "x", "x");

        let dirs = list_only_dirs(root.path()).unwrap();

        let names: Vec<&str> = dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(dirs[0].path, root.path().join("a"));
    }
}
