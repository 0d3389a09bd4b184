use ninja_build_profiler::analysis::FilterConfig;
use ninja_build_profiler::commands::analyze_trace;
use ninja_build_profiler::trace::load_trace;
use ninja_build_profiler::utils::error::ParseError;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::{Path, PathBuf};

const SAMPLE_TRACE: &str = r#"[
    {"name": "src/a.cpp.o", "dur": 100000, "ph": "X", "ts": 0},
    {"name": "src/b.cpp.o", "dur": 300000, "ph": "X", "ts": 100000},
    {"name": "src/c.cpp.o", "dur": 200000, "ph": "X", "ts": 400000},
    {"name": "link/app", "dur": 50000, "ph": "X", "ts": 600000}
]"#;

fn write_trace(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("trace.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn object_file_filter() -> FilterConfig {
    FilterConfig::new(&[r".*\.o$"], &[] as &[&str]).unwrap()
}

#[test]
fn test_full_pipeline_report_contents() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), SAMPLE_TRACE);

    let report = analyze_trace(&trace_path, &object_file_filter(), 3).unwrap();

    assert!(report.contains("Min:            0.100s  `src/a.cpp.o`"));
    assert!(report.contains("Max:            0.300s  `src/b.cpp.o`"));
    assert!(report.contains("Median:         0.200s  `src/c.cpp.o`"));
    assert!(report.contains("Mean:           0.200s"));
    assert!(report.contains("TU Count:       3"));
    assert!(report.contains('|'));
}

#[test]
fn test_pipeline_is_deterministic_on_unchanged_input() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), SAMPLE_TRACE);
    let filter = object_file_filter();

    let first = analyze_trace(&trace_path, &filter, 3).unwrap();
    let second = analyze_trace(&trace_path, &filter, 3).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_pipeline_fails_when_filters_remove_everything() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), SAMPLE_TRACE);
    let filter = FilterConfig::new(&["no-such-prefix"], &[] as &[&str]).unwrap();

    let result = analyze_trace(&trace_path, &filter, 3);

    assert!(result.is_err());
}

#[test]
fn test_load_trace_from_disk_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), SAMPLE_TRACE);

    let events = load_trace(&trace_path).unwrap();
    let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["src/a.cpp.o", "src/b.cpp.o", "src/c.cpp.o", "link/app"]
    );
}

#[test]
fn test_load_trace_missing_file() {
    let result = load_trace(Path::new("/definitely/not/here/trace.json"));
    assert!(matches!(result, Err(ParseError::FileUnreadable { .. })));
}

#[test]
fn test_load_trace_oversized_dur_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), r#"[{"name": "a.o", "dur": 1e30}]"#);

    let result = load_trace(&trace_path);
    assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
}

#[test]
fn test_load_trace_malformed_record() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = write_trace(dir.path(), r#"[{"name": "a.o"}]"#);

    let result = load_trace(&trace_path);
    assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
}
