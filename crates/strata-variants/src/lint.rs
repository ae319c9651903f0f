//! One-shot schema linter run outside the render path.
//!
//! Builder validation rejects schemas that cannot work at all; the linter flags
//! schemas that work but are likely mistakes, or that push a requirement onto
//! every caller.

use std::fmt::{self, Display, Formatter};

use tracing::warn;

use crate::schema::{AxisValue, CompoundRule, VariantSchema};

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintFinding {
    /// Axis has no default, so every resolve must select it.
    RequiredAxis {
        /// Axis without a default.
        axis: String,
    },
    /// Two compound rules have identical conditions.
    DuplicateCompound {
        /// Earlier rule index.
        first: usize,
        /// Later rule index.
        second: usize,
    },
    /// Compound rule contributes no classes.
    EmptyCompound {
        /// Rule index.
        rule: usize,
    },
}

impl Display for LintFinding {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredAxis { axis } => {
                write!(formatter, "axis '{axis}' has no default and must always be selected")
            }
            Self::DuplicateCompound { first, second } => write!(
                formatter,
                "compound rule #{second} repeats the conditions of rule #{first}"
            ),
            Self::EmptyCompound { rule } => {
                write!(formatter, "compound rule #{rule} contributes no classes")
            }
        }
    }
}

/// Findings for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    /// Schema name.
    pub schema: String,
    /// Findings in discovery order.
    pub findings: Vec<LintFinding>,
}

impl LintReport {
    /// Whether the schema produced no findings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Lint a built schema and log every finding at warn level.
#[must_use]
pub fn lint(schema: &VariantSchema) -> LintReport {
    let mut findings = Vec::new();

    for axis in schema.axes() {
        if axis.default_value().is_none() {
            findings.push(LintFinding::RequiredAxis {
                axis: axis.name().to_string(),
            });
        }
    }

    let keys: Vec<_> = schema.compounds().iter().map(condition_key).collect();
    for (index, rule) in schema.compounds().iter().enumerate() {
        if rule.classes().is_empty() {
            findings.push(LintFinding::EmptyCompound { rule: index });
        }
        if let Some(first) = keys[..index].iter().position(|key| *key == keys[index]) {
            findings.push(LintFinding::DuplicateCompound {
                first,
                second: index,
            });
        }
    }

    for finding in &findings {
        warn!(schema = schema.name(), finding = %finding, "variant schema lint");
    }

    LintReport {
        schema: schema.name().to_string(),
        findings,
    }
}

fn condition_key(rule: &CompoundRule) -> Vec<(&str, Vec<&str>)> {
    let mut key: Vec<(&str, Vec<&str>)> = rule
        .conditions()
        .map(|(axis, condition)| {
            let mut values: Vec<&str> =
                condition.values().iter().map(AxisValue::as_str).collect();
            values.sort_unstable();
            values.dedup();
            (axis, values)
        })
        .collect();
    key.sort_unstable();
    key
}
