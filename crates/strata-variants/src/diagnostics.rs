//! Non-fatal resolution diagnostics and the sinks that receive them.
//!
//! # Design
//! - Diagnostics are values, not errors; resolution always continues after one.
//! - The resolver decides whether to report based on [`DiagnosticsMode`].
//! - [`TracingSink`] is the default sink; tests inject their own.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::schema::AxisValue;

/// Whether diagnostics are reported or silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsMode {
    /// Report every diagnostic to the sink.
    Development,
    /// Skip diagnostics entirely.
    Production,
}

impl DiagnosticsMode {
    /// Development for debug builds, production otherwise.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Parse the lowercase mode name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Whether diagnostics should reach the sink.
    #[must_use]
    pub const fn reports(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl Default for DiagnosticsMode {
    fn default() -> Self {
        Self::infer()
    }
}

/// A recoverable oddity noticed while resolving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Resolved value is not declared on the axis; the axis contributes no classes.
    UnknownAxisValue {
        /// Schema being resolved.
        schema: String,
        /// Axis carrying the value.
        axis: String,
        /// Undeclared value.
        value: AxisValue,
    },
    /// Selection names an axis the schema does not declare; it is ignored.
    UnknownAxis {
        /// Schema being resolved.
        schema: String,
        /// Undeclared axis.
        axis: String,
    },
}

impl Diagnostic {
    /// Schema the diagnostic was raised for.
    #[must_use]
    pub fn schema(&self) -> &str {
        match self {
            Self::UnknownAxisValue { schema, .. } | Self::UnknownAxis { schema, .. } => schema,
        }
    }

    /// Axis the diagnostic concerns.
    #[must_use]
    pub fn axis(&self) -> &str {
        match self {
            Self::UnknownAxisValue { axis, .. } | Self::UnknownAxis { axis, .. } => axis,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAxisValue {
                schema,
                axis,
                value,
            } => write!(
                formatter,
                "[{schema}] unknown value '{value}' for axis '{axis}'; no classes applied"
            ),
            Self::UnknownAxis { schema, axis } => {
                write!(formatter, "[{schema}] selection names unknown axis '{axis}'")
            }
        }
    }
}

/// Receiver for resolution diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Handle one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Sink that forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnknownAxisValue {
                schema,
                axis,
                value,
            } => warn!(
                schema = %schema,
                axis = %axis,
                value = %value,
                "unknown axis value; no classes applied"
            ),
            Diagnostic::UnknownAxis { schema, axis } => warn!(
                schema = %schema,
                axis = %axis,
                "selection names unknown axis"
            ),
        }
    }
}

/// Sink that drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}
