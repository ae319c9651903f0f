//! Loading [`EngineConfig`] from the environment or a JSON document.
//!
//! # Design
//! - Unset variables and missing keys keep their defaults.
//! - Invalid values fail loudly instead of falling back.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::defaults::{ENV_DIAGNOSTICS, ENV_LOG_FORMAT, ENV_LOG_LEVEL};
use crate::error::{ConfigError, ConfigResult};
use crate::model::EngineConfig;
use crate::validate::{parse_diagnostics, parse_log_format, parse_log_level};

impl EngineConfig {
    /// Read `STRATA_DIAGNOSTICS`, `STRATA_LOG_LEVEL` and `STRATA_LOG_FORMAT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when a variable is set to an
    /// unrecognised value.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with a caller-supplied variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when a variable is set to an
    /// unrecognised value.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_DIAGNOSTICS) {
            config.diagnostics = parse_diagnostics(ENV_DIAGNOSTICS, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            config.log_level = parse_log_level(ENV_LOG_LEVEL, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            config.log_format = parse_log_format(ENV_LOG_FORMAT, &value)?;
        }
        debug!(
            diagnostics = config.diagnostics.as_str(),
            log_format = config.log_format.as_str(),
            "engine configuration loaded from environment"
        );
        Ok(config)
    }

    /// Parse a JSON document such as `{"diagnostics": "production"}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, unknown keys or
    /// unrecognised enum values, and [`ConfigError::InvalidField`] for an
    /// unusable log level.
    pub fn from_json_str(document: &str) -> ConfigResult<Self> {
        let mut config: Self =
            serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })?;
        config.log_level = parse_log_level("log_level", &config.log_level)?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`EngineConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&document)?;
        debug!(path = %path.display(), "engine configuration loaded from file");
        Ok(config)
    }
}
