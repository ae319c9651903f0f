//! Error types for schema construction and variant resolution.

use thiserror::Error;

/// Structural faults detected while building a [`crate::VariantSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Schema was built without a name.
    #[error("schema name must not be empty")]
    EmptySchemaName,
    /// Two axes share a name.
    #[error("duplicate axis '{axis}' in schema '{schema}'")]
    DuplicateAxis {
        /// Schema being built.
        schema: String,
        /// Repeated axis name.
        axis: String,
    },
    /// Axis declares no values.
    #[error("axis '{axis}' in schema '{schema}' declares no values")]
    EmptyAxis {
        /// Schema being built.
        schema: String,
        /// Axis without values.
        axis: String,
    },
    /// Axis declares the same value twice.
    #[error("duplicate value '{value}' on axis '{axis}' in schema '{schema}'")]
    DuplicateAxisValue {
        /// Schema being built.
        schema: String,
        /// Axis holding the duplicate.
        axis: String,
        /// Repeated value.
        value: String,
    },
    /// Axis default is not one of its declared values.
    #[error("default '{value}' is not a value of axis '{axis}' in schema '{schema}'")]
    UnknownDefaultValue {
        /// Schema being built.
        schema: String,
        /// Axis with the bad default.
        axis: String,
        /// Offending default.
        value: String,
    },
    /// Compound rule has no conditions, or a condition with an empty value set.
    #[error("compound rule #{rule} in schema '{schema}' has an empty match")]
    EmptyCompoundMatch {
        /// Schema being built.
        schema: String,
        /// Zero-based rule index in declaration order.
        rule: usize,
    },
    /// Compound rule names the same axis twice.
    #[error("compound rule #{rule} in schema '{schema}' repeats axis '{axis}'")]
    DuplicateCompoundAxis {
        /// Schema being built.
        schema: String,
        /// Zero-based rule index in declaration order.
        rule: usize,
        /// Repeated axis.
        axis: String,
    },
    /// Compound rule references an axis the schema does not declare.
    #[error("compound rule #{rule} in schema '{schema}' references unknown axis '{axis}'")]
    CompoundUnknownAxis {
        /// Schema being built.
        schema: String,
        /// Zero-based rule index in declaration order.
        rule: usize,
        /// Unknown axis.
        axis: String,
    },
    /// Compound rule matches a value the axis does not declare.
    #[error(
        "compound rule #{rule} in schema '{schema}' matches unknown value '{value}' on axis '{axis}'"
    )]
    CompoundUnknownValue {
        /// Schema being built.
        schema: String,
        /// Zero-based rule index in declaration order.
        rule: usize,
        /// Axis being matched.
        axis: String,
        /// Undeclared value.
        value: String,
    },
}

/// Faults raised while resolving a selection against a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Axis has neither a selected value nor a schema default.
    #[error("axis '{axis}' in schema '{schema}' has no selected value and no default")]
    MissingDefault {
        /// Schema being resolved.
        schema: String,
        /// Axis left unresolved.
        axis: String,
    },
}

/// Convenience alias for schema construction results.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Convenience alias for resolution results.
pub type ResolveResult<T> = Result<T, ResolveError>;
