use std::error::Error;
use std::fs;

use serial_test::serial;
use strata_config::{ConfigError, ENV_DIAGNOSTICS, ENV_LOG_FORMAT, ENV_LOG_LEVEL, EngineConfig};
use strata_telemetry::LogFormat;
use strata_variants::DiagnosticsMode;

const VARS: [&str; 3] = [ENV_DIAGNOSTICS, ENV_LOG_LEVEL, ENV_LOG_FORMAT];

struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn clear() -> Self {
        let saved = VARS
            .iter()
            .map(|key| (*key, std::env::var(key).ok()))
            .collect();
        // SAFETY: every env-mutating test is marked #[serial].
        unsafe {
            for key in VARS {
                std::env::remove_var(key);
            }
        }
        Self { saved }
    }

    fn set(&self, key: &str, value: &str) {
        // SAFETY: every env-mutating test is marked #[serial].
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: every env-mutating test is marked #[serial].
        unsafe {
            for (key, value) in &self.saved {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

#[test]
#[serial]
fn from_env_reads_process_environment() -> Result<(), Box<dyn Error>> {
    let env = EnvGuard::clear();
    assert_eq!(EngineConfig::from_env()?, EngineConfig::default());

    env.set(ENV_DIAGNOSTICS, "prod");
    env.set(ENV_LOG_FORMAT, "pretty");
    let config = EngineConfig::from_env()?;
    assert_eq!(config.diagnostics, DiagnosticsMode::Production);
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.resolver().mode(), DiagnosticsMode::Production);
    Ok(())
}

#[test]
#[serial]
fn from_env_rejects_unknown_mode() {
    let env = EnvGuard::clear();
    env.set(ENV_DIAGNOSTICS, "verbose");
    assert!(matches!(
        EngineConfig::from_env(),
        Err(ConfigError::InvalidField { .. })
    ));
}

#[test]
fn from_path_loads_json_file() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("strata.json");
    fs::write(
        &path,
        r#"{"diagnostics": "development", "log_level": "strata=trace", "log_format": "json"}"#,
    )?;
    let config = EngineConfig::from_path(&path)?;
    assert_eq!(config.diagnostics, DiagnosticsMode::Development);
    assert_eq!(config.logging_config().level, "strata=trace");
    assert_eq!(config.logging_config().format, LogFormat::Json);
    Ok(())
}

#[test]
fn from_path_reports_missing_file() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        EngineConfig::from_path(&missing),
        Err(ConfigError::Read { ref path, .. }) if *path == missing
    ));
    Ok(())
}
