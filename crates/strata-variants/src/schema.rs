//! Variant schema model and builder.
//!
//! # Design
//! - Axes and compound rules are stored as ordered lists; declaration order is
//!   the precedence order and never depends on map iteration.
//! - Each axis carries its own optional default.
//! - Schemas are validated once by [`SchemaBuilder::build`] and are immutable afterwards.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use tracing::debug;

use crate::classes::ClassList;
use crate::error::{SchemaError, SchemaResult};

/// A single value on an axis, compared by exact string identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisValue(Cow<'static, str>);

impl AxisValue {
    /// Build a value from any string-like input.
    #[must_use]
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AxisValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&'static str> for AxisValue {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for AxisValue {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<bool> for AxisValue {
    fn from(value: bool) -> Self {
        Self(Cow::Borrowed(bool_token(value)))
    }
}

const fn bool_token(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// One named style dimension and its value → classes table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    name: Cow<'static, str>,
    values: Vec<(AxisValue, ClassList)>,
    default: Option<AxisValue>,
}

impl Axis {
    /// Start an axis with no values and no default.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            default: None,
        }
    }

    /// Two-valued boolean axis (`"true"` / `"false"`) for flags such as `disabled`.
    #[must_use]
    pub fn flag(
        name: impl Into<Cow<'static, str>>,
        on: impl Into<ClassList>,
        off: impl Into<ClassList>,
    ) -> Self {
        Self::new(name).value(true, on).value(false, off)
    }

    /// Declare a value and the classes it contributes.
    #[must_use]
    pub fn value(mut self, value: impl Into<AxisValue>, classes: impl Into<ClassList>) -> Self {
        self.values.push((value.into(), classes.into()));
        self
    }

    /// Set the value used when a selection leaves this axis unset.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<AxisValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Axis name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default value, if the axis has one.
    #[must_use]
    pub const fn default_value(&self) -> Option<&AxisValue> {
        self.default.as_ref()
    }

    /// Classes mapped to `value`, or `None` when the value is not declared.
    #[must_use]
    pub fn classes_for(&self, value: &AxisValue) -> Option<&ClassList> {
        self.values
            .iter()
            .find(|(candidate, _)| candidate == value)
            .map(|(_, classes)| classes)
    }

    /// Whether `value` is declared on this axis.
    #[must_use]
    pub fn declares(&self, value: &AxisValue) -> bool {
        self.classes_for(value).is_some()
    }

    /// Declared values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &AxisValue> {
        self.values.iter().map(|(value, _)| value)
    }

    fn validate(&self, schema: &str) -> SchemaResult<()> {
        if self.values.is_empty() {
            return Err(SchemaError::EmptyAxis {
                schema: schema.to_string(),
                axis: self.name.to_string(),
            });
        }
        let mut seen = HashSet::new();
        for (value, _) in &self.values {
            if !seen.insert(value) {
                return Err(SchemaError::DuplicateAxisValue {
                    schema: schema.to_string(),
                    axis: self.name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        if let Some(default) = &self.default
            && !self.declares(default)
        {
            return Err(SchemaError::UnknownDefaultValue {
                schema: schema.to_string(),
                axis: self.name.to_string(),
                value: default.to_string(),
            });
        }
        Ok(())
    }
}

/// Condition a compound rule places on one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchValue {
    /// Resolved value must equal this value.
    One(AxisValue),
    /// Resolved value must be a member of this set.
    AnyOf(Vec<AxisValue>),
}

impl MatchValue {
    /// Whether `value` satisfies the condition.
    #[must_use]
    pub fn accepts(&self, value: &AxisValue) -> bool {
        match self {
            Self::One(expected) => expected == value,
            Self::AnyOf(members) => members.contains(value),
        }
    }

    /// Values named by the condition.
    #[must_use]
    pub fn values(&self) -> &[AxisValue] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::AnyOf(members) => members,
        }
    }
}

/// Cross-axis override adding classes when every condition matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundRule {
    conditions: Vec<(Cow<'static, str>, MatchValue)>,
    classes: ClassList,
}

impl CompoundRule {
    /// Start a rule contributing `classes`; add conditions with [`Self::when`].
    #[must_use]
    pub fn new(classes: impl Into<ClassList>) -> Self {
        Self {
            conditions: Vec::new(),
            classes: classes.into(),
        }
    }

    /// Require `axis` to resolve to exactly `value`.
    #[must_use]
    pub fn when(mut self, axis: impl Into<Cow<'static, str>>, value: impl Into<AxisValue>) -> Self {
        self.conditions.push((axis.into(), MatchValue::One(value.into())));
        self
    }

    /// Require `axis` to resolve to any of `values`.
    #[must_use]
    pub fn when_any<I, V>(mut self, axis: impl Into<Cow<'static, str>>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AxisValue>,
    {
        let members = values.into_iter().map(Into::into).collect();
        self.conditions.push((axis.into(), MatchValue::AnyOf(members)));
        self
    }

    /// Conditions in declaration order.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &MatchValue)> {
        self.conditions
            .iter()
            .map(|(axis, condition)| (&**axis, condition))
    }

    /// Classes appended when the rule fires.
    #[must_use]
    pub const fn classes(&self) -> &ClassList {
        &self.classes
    }

    fn validate(&self, schema: &str, rule: usize, axes: &[Axis]) -> SchemaResult<()> {
        if self.conditions.is_empty()
            || self
                .conditions
                .iter()
                .any(|(_, condition)| condition.values().is_empty())
        {
            return Err(SchemaError::EmptyCompoundMatch {
                schema: schema.to_string(),
                rule,
            });
        }

        let mut seen = HashSet::new();
        for (axis_name, condition) in &self.conditions {
            if !seen.insert(&**axis_name) {
                return Err(SchemaError::DuplicateCompoundAxis {
                    schema: schema.to_string(),
                    rule,
                    axis: axis_name.to_string(),
                });
            }
            let axis = axes
                .iter()
                .find(|axis| axis.name() == &**axis_name)
                .ok_or_else(|| SchemaError::CompoundUnknownAxis {
                    schema: schema.to_string(),
                    rule,
                    axis: axis_name.to_string(),
                })?;
            if let Some(value) = condition.values().iter().find(|value| !axis.declares(value)) {
                return Err(SchemaError::CompoundUnknownValue {
                    schema: schema.to_string(),
                    rule,
                    axis: axis_name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Immutable description of one component kind's styling surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantSchema {
    name: Cow<'static, str>,
    base: ClassList,
    axes: Vec<Axis>,
    compounds: Vec<CompoundRule>,
}

impl VariantSchema {
    /// Start building a schema.
    #[must_use]
    pub fn builder(name: impl Into<Cow<'static, str>>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            base: ClassList::new(),
            axes: Vec::new(),
            compounds: Vec::new(),
        }
    }

    /// Schema name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classes emitted for every selection.
    #[must_use]
    pub const fn base(&self) -> &ClassList {
        &self.base
    }

    /// Axes in declaration order.
    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Look up an axis by name.
    #[must_use]
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.name() == name)
    }

    /// Compound rules in declaration order.
    #[must_use]
    pub fn compounds(&self) -> &[CompoundRule] {
        &self.compounds
    }
}

/// Builder returned by [`VariantSchema::builder`].
#[derive(Clone, Debug)]
#[must_use]
pub struct SchemaBuilder {
    name: Cow<'static, str>,
    base: ClassList,
    axes: Vec<Axis>,
    compounds: Vec<CompoundRule>,
}

impl SchemaBuilder {
    /// Append classes emitted for every selection.
    pub fn base(mut self, classes: impl Into<ClassList>) -> Self {
        self.base.extend_from(&classes.into());
        self
    }

    /// Declare the next axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    /// Declare the next compound rule.
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.compounds.push(rule);
        self
    }

    /// Validate and freeze the schema.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] describing the first structural fault found:
    /// empty name, duplicate or empty axes, duplicate values, unknown defaults,
    /// or compound rules that reference undeclared axes or values.
    pub fn build(self) -> SchemaResult<VariantSchema> {
        let schema = &*self.name;
        if schema.trim().is_empty() {
            return Err(SchemaError::EmptySchemaName);
        }

        let mut seen = HashSet::new();
        for axis in &self.axes {
            if !seen.insert(axis.name()) {
                return Err(SchemaError::DuplicateAxis {
                    schema: schema.to_string(),
                    axis: axis.name().to_string(),
                });
            }
            axis.validate(schema)?;
        }

        for (index, rule) in self.compounds.iter().enumerate() {
            rule.validate(schema, index, &self.axes)?;
        }

        debug!(
            schema,
            axes = self.axes.len(),
            compounds = self.compounds.len(),
            "variant schema built"
        );

        Ok(VariantSchema {
            name: self.name,
            base: self.base,
            axes: self.axes,
            compounds: self.compounds,
        })
    }
}
