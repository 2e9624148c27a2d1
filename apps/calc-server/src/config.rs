//! Layered configuration for calc-server
//!
//! Precedence: built-in defaults -> YAML file (if provided) -> `CALC__*`
//! environment variables -> CLI overrides.

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use calculator::CalculatorConfig;

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_owned()
}

/// HTTP server section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Serve the OpenAPI document at /openapi.json.
    #[serde(default)]
    pub enable_docs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            enable_docs: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

/// Logging section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON log lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_wildcard() -> Vec<String> {
    vec!["*".to_owned()]
}

fn default_true() -> bool {
    true
}

/// CORS section. Permissive by default; `enabled: false` removes the
/// layer entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_wildcard")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_wildcard")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "default_wildcard")]
    pub allowed_headers: Vec<String>,
    #[serde(default)]
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: default_wildcard(),
            allowed_methods: default_wildcard(),
            allowed_headers: default_wildcard(),
            max_age_seconds: 0,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub calculator: CalculatorConfig,
}

impl AppConfig {
    /// Layered load: defaults -> YAML (if provided) -> env (`CALC__*`).
    ///
    /// # Errors
    /// Fails when the YAML file is unreadable or any layer produces an
    /// invalid value for the target type.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment = figment.merge(Env::prefixed("CALC__").split("__"));
        figment.extract().context("invalid configuration")
    }

    /// Apply command-line overrides on top of the layered config.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) {
        if let Some(port) = port {
            let host = self
                .server
                .bind_addr
                .rsplit_once(':')
                .map_or("127.0.0.1", |(host, _)| host);
            self.server.bind_addr = format!("{host}:{port}");
        }
        match verbose {
            0 => {}
            1 => self.logging.level = "info".to_owned(),
            2 => self.logging.level = "debug".to_owned(),
            _ => self.logging.level = "trace".to_owned(),
        }
    }

    /// Effective configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Fails only if serialization fails, which would indicate a bug.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}
