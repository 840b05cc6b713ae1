//! # fb-config
//!
//! Layered configuration for the fedi-board front end: built-in defaults,
//! then an optional `fedi-board.toml`, then `FB__`-prefixed environment
//! variables (`FB__LOG__FILTER=debug`). A `.env` file, when present, is
//! loaded into the environment first.

use std::path::Path;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "fedi-board.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON written to stdout
    pub pretty: bool,
}

impl AppConfig {
    /// Loads from `.env`, `fedi-board.toml` in the working directory, and
    /// the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(file: &Path) -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let settings = defaults()?
            .add_source(File::from(file).required(false))
            .add_source(
                Environment::with_prefix("FB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("log.filter", "info")?
        .set_default("log.format", "pretty")?
        .set_default("output.pretty", true)
}
