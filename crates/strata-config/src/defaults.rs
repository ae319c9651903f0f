//! Environment variable names and fallback values.
//!
//! # Design
//! - Centralize variable names so the loader and its tests agree.

/// Diagnostics mode (`development` / `production`).
pub const ENV_DIAGNOSTICS: &str = "STRATA_DIAGNOSTICS";
/// Fallback log level when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "STRATA_LOG_LEVEL";
/// Log output format (`pretty` / `json`).
pub const ENV_LOG_FORMAT: &str = "STRATA_LOG_FORMAT";
