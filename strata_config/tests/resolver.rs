//! End-to-end pipeline tests: load, merge, substitute, expand, validate.

use std::path::PathBuf;

use serde_json::json;
use serial_test::serial;
use strata_config::schema::{self, FieldViolation, SchemaModel};
use strata_config::{ConfigMap, Resolver, StrataError, ValidationOutcome};
use tempfile::TempDir;
use test_helpers::env;

#[derive(Debug)]
struct ServiceModel {
    name: String,
    version: String,
    debug: bool,
    age: i64,
}

impl SchemaModel for ServiceModel {
    fn construct(config: &ConfigMap) -> Result<Self, Vec<FieldViolation>> {
        let mut violations = Vec::new();
        let name = schema::required(config, "name")
            .map_err(|v| violations.push(v))
            .ok();
        let version = schema::required(config, "version")
            .map_err(|v| violations.push(v))
            .ok();
        let debug = schema::required(config, "debug")
            .map_err(|v| violations.push(v))
            .ok();
        let age: Option<i64> = schema::required(config, "age")
            .map_err(|v| violations.push(v))
            .ok();
        if let Some(value) = age {
            if !(0..=150).contains(&value) {
                violations.push(FieldViolation::new(
                    "age",
                    format!("{value} is outside the valid range [0, 150]"),
                ));
            }
        }
        match (name, version, debug, age) {
            (Some(name), Some(version), Some(debug), Some(age)) if violations.is_empty() => {
                Ok(Self {
                    name,
                    version,
                    debug,
                    age,
                })
            }
            _ => Err(violations),
        }
    }
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

fn fixture_set(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let config_a = write(
        dir,
        "config-a.yaml",
        "name: \"{{ x | shout }}\"\nversion: \"0.0.1\"\ndebug: false\nage: 200\ngreeting: \"${STRATA_E2E_GREETING:hello}\"\n",
    );
    let config_b = write(
        dir,
        "config-b.yaml",
        "x: demo\nage: 14\nsummary: \"{{ name }} v{{ version }}\"\n",
    );
    let filters_dir = dir.path().join("filters");
    std::fs::create_dir(&filters_dir).expect("create filters dir");
    std::fs::write(filters_dir.join("strings.toml"), "shout = \"uppercase\"\n")
        .expect("write manifest");
    (config_a, config_b, filters_dir)
}

#[test]
#[serial]
fn resolves_and_validates_a_layered_configuration() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (config_a, config_b, filters_dir) = fixture_set(&dir);
    let _guard = env::remove_var("STRATA_E2E_GREETING");

    let resolved = Resolver::builder()
        .add_path(config_a)
        .add_path(config_b)
        .filters_dir(filters_dir)
        .build()
        .resolve()
        .expect("resolve");

    assert_eq!(
        serde_json::Value::Object(resolved.clone()),
        json!({
            "name": "DEMO",
            "version": "0.0.1",
            "debug": false,
            "age": 14,
            "greeting": "hello",
            "x": "demo",
            "summary": "DEMO v0.0.1",
        })
    );
    assert!(schema::validate::<ServiceModel>(&resolved).is_success());
}

#[test]
#[serial]
fn environment_overrides_beat_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (config_a, config_b, filters_dir) = fixture_set(&dir);
    let _guard = env::set_var("STRATA_E2E_GREETING", "overridden");

    let resolved = Resolver::builder()
        .add_path(config_a)
        .add_path(config_b)
        .filters_dir(filters_dir)
        .build()
        .resolve()
        .expect("resolve");

    assert_eq!(resolved.get("greeting"), Some(&json!("overridden")));
}

#[test]
#[serial]
fn out_of_range_values_fail_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (config_a, config_b, filters_dir) = fixture_set(&dir);
    let _guard = env::remove_var("STRATA_E2E_GREETING");
    // A later layer pushes `age` back out of range.
    let config_c = write(&dir, "config-c.yaml", "age: 200\n");

    let resolved = Resolver::builder()
        .paths([config_a, config_b, config_c])
        .filters_dir(filters_dir)
        .build()
        .resolve()
        .expect("resolve");

    match schema::validate::<ServiceModel>(&resolved) {
        ValidationOutcome::Failure { violations } => {
            assert!(violations.iter().any(|v| v.field == "age"));
        }
        ValidationOutcome::Success { message } => panic!("unexpected success: {message}"),
    }
}

#[test]
fn load_errors_surface_through_the_pipeline() {
    let err = Resolver::builder()
        .add_path("definitely/not/here.yaml")
        .build()
        .resolve()
        .expect_err("must fail");
    assert!(matches!(err.as_ref(), StrataError::Load(_)));
}

#[test]
fn render_errors_surface_through_the_pipeline() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(&dir, "config.yaml", "a: \"{{ missing | shout }}\"\n");

    let err = Resolver::builder()
        .add_path(path)
        .build()
        .resolve()
        .expect_err("must fail");
    assert!(matches!(err.as_ref(), StrataError::Render(_)));
}
