//! Integration tests for document loading and fail-fast merging.

use std::path::{Path, PathBuf};

use serde_json::json;
use strata_config::{LoadError, load_and_merge, load_document};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn loads_and_merges_across_formats() {
    let dir = tempfile::tempdir().expect("tempdir");
    let yaml = write(&dir, "base.yaml", "name: demo\nport: 8080\n");
    let json_path = write(&dir, "override.json", "{\"port\": 9090, \"debug\": true}");
    let toml_path = write(&dir, "extra.toml", "retries = 3\n");

    let merged = load_and_merge(&[yaml, json_path, toml_path]).expect("load");
    assert_eq!(
        serde_json::Value::Object(merged),
        json!({"name": "demo", "port": 9090, "debug": true, "retries": 3})
    );
}

#[test]
fn properties_files_become_nested_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(
        &dir,
        "service.properties",
        "[server]\nhost = localhost\nport = 8080\n",
    );
    let document = load_document(&path).expect("load");
    assert_eq!(
        serde_json::Value::Object(document.values),
        json!({"server": {"host": "localhost", "port": "8080"}})
    );
}

#[test]
fn unsupported_extension_is_identified() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(&dir, "legacy.xml", "<config/>");
    let err = load_document(&path).expect_err("must fail");
    match err {
        LoadError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "xml"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn missing_path_is_identified() {
    let missing = Path::new("definitely/not/here.yaml");
    let err = load_and_merge(&[missing]).expect_err("must fail");
    match err {
        LoadError::NotFound { path } => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn first_load_error_aborts_without_partial_merge() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write(&dir, "good.yaml", "a: 1\n");
    let bad = write(&dir, "bad.yaml", "a: [unclosed\n");
    let also_good = write(&dir, "also-good.yaml", "b: 2\n");

    let err = load_and_merge(&[good, bad.clone(), also_good]).expect_err("must fail");
    match err {
        LoadError::Parse { path, .. } => assert_eq!(path, bad),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn malformed_document_reports_its_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(&dir, "broken.json", "{\"a\": ");
    let err = load_document(&path).expect_err("must fail");
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}
