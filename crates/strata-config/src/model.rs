//! Typed engine configuration.
//!
//! # Design
//! - Pure data carrier; loading lives in `loader.rs`.
//! - Every field has a default so partial documents and empty environments
//!   produce a usable configuration.

use serde::{Deserialize, Serialize};
use strata_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha};
use strata_variants::{DiagnosticsMode, Resolver};

/// Settings shared by every resolver and the logging subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Whether resolve-time diagnostics reach the sink.
    pub diagnostics: DiagnosticsMode,
    /// Fallback log level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Output format for the tracing subscriber.
    pub log_format: LogFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            diagnostics: DiagnosticsMode::infer(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::infer(),
        }
    }
}

impl EngineConfig {
    /// Logging settings for [`strata_telemetry::init_logging`].
    #[must_use]
    pub fn logging_config(&self) -> LoggingConfig<'_> {
        LoggingConfig {
            level: &self.log_level,
            format: self.log_format,
            build_sha: build_sha(),
        }
    }

    /// Resolver reporting through `tracing` under the configured mode.
    #[must_use]
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_build_profile() {
        let config = EngineConfig::default();
        assert_eq!(config.diagnostics, DiagnosticsMode::infer());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::infer());
    }

    #[test]
    fn bridges_into_logging_and_resolver() {
        let config = EngineConfig {
            diagnostics: DiagnosticsMode::Production,
            log_level: "strata=debug".to_string(),
            log_format: LogFormat::Json,
        };
        let logging = config.logging_config();
        assert_eq!(logging.level, "strata=debug");
        assert_eq!(logging.format, LogFormat::Json);
        assert_eq!(config.resolver().mode(), DiagnosticsMode::Production);
    }
}
