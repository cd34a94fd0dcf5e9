//! Unit tests for format dispatch and the properties decoder.

use std::path::Path;

use rstest::rstest;
use serde_json::json;

use super::parser::decode_by_extension;
use crate::LoadError;

#[rstest]
#[case::yaml("settings.yaml", "name: demo\nport: 8080\n")]
#[case::yml("settings.yml", "name: demo\nport: 8080\n")]
#[case::upper_case_extension("SETTINGS.YAML", "name: demo\nport: 8080\n")]
#[case::json("settings.json", "{\"name\": \"demo\", \"port\": 8080}")]
#[case::toml("settings.toml", "name = \"demo\"\nport = 8080\n")]
fn decodes_supported_formats(#[case] file_name: &str, #[case] data: &str) {
    let decoded = decode_by_extension(Path::new(file_name), data).expect("decode");
    assert_eq!(
        serde_json::Value::Object(decoded),
        json!({"name": "demo", "port": 8080})
    );
}

#[test]
fn decodes_properties_sections_into_nested_maps() {
    let data = "\
# server settings
[server]
host = localhost
port: 8080

[client]
retries = 3
";
    let decoded =
        decode_by_extension(Path::new("settings.properties"), data).expect("decode");
    assert_eq!(
        serde_json::Value::Object(decoded),
        json!({
            "server": {"host": "localhost", "port": "8080"},
            "client": {"retries": "3"},
        })
    );
}

#[rstest]
#[case::pair_without_section("host = localhost\n")]
#[case::line_without_delimiter("[server]\nnonsense\n")]
fn rejects_malformed_properties(#[case] data: &str) {
    let err = decode_by_extension(Path::new("settings.properties"), data)
        .expect_err("must fail");
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn rejects_unknown_extension_with_its_name() {
    let err = decode_by_extension(Path::new("settings.xml"), "<a/>").expect_err("must fail");
    match err {
        LoadError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "xml"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn rejects_extensionless_paths() {
    let err = decode_by_extension(Path::new("settings"), "x = 1").expect_err("must fail");
    assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
}

#[rstest]
#[case::scalar_top_level("settings.yaml", "just a string")]
#[case::sequence_top_level("settings.json", "[1, 2, 3]")]
fn rejects_non_mapping_top_level(#[case] file_name: &str, #[case] data: &str) {
    let err = decode_by_extension(Path::new(file_name), data).expect_err("must fail");
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn surfaces_decoder_errors_as_parse() {
    let err = decode_by_extension(Path::new("broken.json"), "{not json").expect_err("must fail");
    assert!(matches!(err, LoadError::Parse { .. }));
}
