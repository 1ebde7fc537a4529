//! CLI configuration

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::CliError;

/// Prefix of the environment variables read by [`CliConfig::from_env`]
pub const ENV_PREFIX: &str = "SHARED_EXPENSES";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Log level or `EnvFilter` directive, overridden by `RUST_LOG`
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `SHARED_EXPENSES_*` environment variables
    pub fn from_env() -> Result<Self, CliError> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit set of variables instead of the
    /// process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, CliError> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(environment: config::Environment) -> Result<Self, CliError> {
        let defaults = Self::default();

        let config = config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "text")?
            .set_default("pretty", defaults.pretty)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}
