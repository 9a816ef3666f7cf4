//! # Application Configuration
//!
//! This module defines the configuration structure for the
//! `textsmith-server` and provides the logic for loading it from a
//! `config.yml` file and environment variables.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The inference provider behind every generate action.
    pub provider: ProviderConfig,
    /// The model used when a request does not name one.
    pub default_model: String,
    /// Optional model discovery endpoint; absent means the static fallback
    /// list is served.
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,
    /// Optional artifact bucket probing.
    #[serde(default)]
    pub storage: Option<StorageConfig>,
}

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    8080
}

/// Configuration for the inference provider.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// The type of provider ("bedrock" or "local").
    pub kind: String,
    /// The runtime endpoint URL.
    pub api_url: String,
    /// The API key, which can be null for local providers.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Configuration for model discovery.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Configuration for the artifact bucket.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub api_url: String,
    pub bucket: String,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").unwrap();
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|_| "".to_string())
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// The configuration file may reference environment variables as `${VAR}`,
/// which are substituted before parsing. Top-level keys like `port` are
/// overridden by plain environment variables (`PORT`), and nested keys by
/// `TEXTSMITH_`-prefixed ones (e.g. `TEXTSMITH_PROVIDER__API_URL`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let base_path = env!("CARGO_MANIFEST_DIR");
    let config_path = if let Some(override_path) = config_path_override {
        override_path.to_string()
    } else {
        format!("{base_path}/config.yml")
    };

    let content = read_and_substitute(&config_path)?.ok_or_else(|| {
        ConfigError::NotFound(format!(
            "Config file not found at '{config_path}'. Please create a 'config.yml' \
             next to the server crate."
        ))
    })?;

    let settings = ConfigBuilder::builder()
        .add_source(File::from_str(&content, FileFormat::Yaml))
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("TEXTSMITH")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut app_config: AppConfig = settings.try_deserialize()?;

    // Env-var substitution leaves empty strings behind for unset variables;
    // normalize those to "not configured".
    if let Some(key) = &app_config.provider.api_key {
        if key.is_empty() {
            app_config.provider.api_key = None;
        }
    }
    if let Some(catalog) = &mut app_config.catalog {
        if matches!(&catalog.api_url, Some(url) if url.is_empty()) {
            catalog.api_url = None;
        }
    }

    Ok(app_config)
}
