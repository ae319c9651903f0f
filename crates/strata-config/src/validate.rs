//! Parsing helpers for individual configuration values.

use strata_telemetry::LogFormat;
use strata_variants::DiagnosticsMode;

use crate::error::{ConfigError, ConfigResult};

fn invalid(field: &str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    }
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_diagnostics(field: &str, value: &str) -> ConfigResult<DiagnosticsMode> {
    DiagnosticsMode::parse(value)
        .ok_or_else(|| invalid(field, value, "expected development or production"))
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_log_format(field: &str, value: &str) -> ConfigResult<LogFormat> {
    value
        .parse()
        .map_err(|_| invalid(field, value, "expected pretty or json"))
}

#[allow(clippy::redundant_pub_crate)]
pub(crate) fn parse_log_level(field: &str, value: &str) -> ConfigResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, value, "must not be empty"));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(invalid(field, value, "must not contain whitespace"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn diagnostics_accepts_aliases() -> Result<(), Box<dyn Error>> {
        assert_eq!(parse_diagnostics("f", "prod")?, DiagnosticsMode::Production);
        assert_eq!(
            parse_diagnostics("f", "Development")?,
            DiagnosticsMode::Development
        );
        assert!(matches!(
            parse_diagnostics("f", "loud"),
            Err(ConfigError::InvalidField { .. })
        ));
        Ok(())
    }

    #[test]
    fn log_format_is_case_insensitive() -> Result<(), Box<dyn Error>> {
        assert_eq!(parse_log_format("f", "JSON")?, LogFormat::Json);
        assert!(parse_log_format("f", "xml").is_err());
        Ok(())
    }

    #[test]
    fn log_level_is_trimmed_and_checked() -> Result<(), Box<dyn Error>> {
        assert_eq!(parse_log_level("f", " strata=debug ")?, "strata=debug");
        assert!(parse_log_level("f", "   ").is_err());
        assert!(parse_log_level("f", "info debug").is_err());
        Ok(())
    }
}
