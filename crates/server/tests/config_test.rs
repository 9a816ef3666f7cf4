//! # Configuration Tests
//!
//! This file contains tests for the configuration loading logic: file
//! resolution, `${VAR}` substitution, and empty-value normalization.

use std::env;
use std::io::Write;
use std::sync::Mutex;
use tempfile::tempdir;
use textsmith_server::config::{get_config, ConfigError};

// A mutex to ensure that tests modifying the environment run sequentially.
// Environment variables are a shared, global resource, and the default
// parallel test runner would otherwise let them interfere.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_config(dir: &std::path::Path, content: &str) -> String {
    let path = dir.join("config.yml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn missing_config_file_is_a_not_found_error() {
    let _guard = ENV_LOCK.lock().unwrap();

    let result = get_config(Some("/nonexistent/config.yml"));
    match result {
        Err(ConfigError::NotFound(msg)) => assert!(msg.contains("/nonexistent/config.yml")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn env_vars_are_substituted_into_the_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("TEST_RUNTIME_URL", "http://runtime.test");

    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
provider:
  kind: "bedrock"
  api_url: "${TEST_RUNTIME_URL}"
default_model: "anthropic.claude-3-haiku-20240307-v1"
"#,
    );

    let config = get_config(Some(&path)).expect("config should load");
    assert_eq!(config.provider.api_url, "http://runtime.test");
    assert_eq!(config.port, 8080, "port should use its default");

    env::remove_var("TEST_RUNTIME_URL");
}

#[test]
fn unset_env_vars_normalize_to_unconfigured() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("TEST_UNSET_KEY");

    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
provider:
  kind: "bedrock"
  api_url: "http://runtime.test"
  api_key: "${TEST_UNSET_KEY}"
default_model: "anthropic.claude-3-haiku-20240307-v1"
catalog:
  api_url: "${TEST_UNSET_KEY}"
"#,
    );

    let config = get_config(Some(&path)).expect("config should load");
    assert_eq!(config.provider.api_key, None);
    assert_eq!(config.catalog.unwrap().api_url, None);
}

#[test]
fn storage_region_defaults_to_us_east_1() {
    let _guard = ENV_LOCK.lock().unwrap();

    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
provider:
  kind: "bedrock"
  api_url: "http://runtime.test"
default_model: "anthropic.claude-3-haiku-20240307-v1"
storage:
  api_url: "http://storage.test"
  bucket: "artifacts"
"#,
    );

    let config = get_config(Some(&path)).expect("config should load");
    let storage = config.storage.expect("storage should be configured");
    assert_eq!(storage.region, "us-east-1");
    assert_eq!(storage.bucket, "artifacts");
}
