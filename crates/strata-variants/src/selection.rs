//! Caller-supplied selections and their fully defaulted form.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::schema::AxisValue;

/// Partial axis → value map supplied for a single resolve call.
///
/// An axis may be absent, or present with `None` (explicitly undefined); both
/// fall back to the schema default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Selection {
    values: BTreeMap<Cow<'static, str>, Option<AxisValue>>,
    class: Option<String>,
}

impl Selection {
    /// Empty selection; every axis falls back to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` for `axis`.
    pub fn with(mut self, axis: impl Into<Cow<'static, str>>, value: impl Into<AxisValue>) -> Self {
        self.set(axis, Some(value.into()));
        self
    }

    /// Select an optional value; `None` leaves the axis on its default.
    pub fn with_opt<V>(mut self, axis: impl Into<Cow<'static, str>>, value: Option<V>) -> Self
    where
        V: Into<AxisValue>,
    {
        self.set(axis, value.map(Into::into));
        self
    }

    /// Caller classes appended after every schema-derived class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set or clear the value for `axis` in place.
    pub fn set(&mut self, axis: impl Into<Cow<'static, str>>, value: Option<AxisValue>) {
        self.values.insert(axis.into(), value);
    }

    /// Explicitly selected value for `axis`, if any.
    #[must_use]
    pub fn get(&self, axis: &str) -> Option<&AxisValue> {
        self.values.get(axis).and_then(Option::as_ref)
    }

    /// Every axis name the caller mentioned, defined or not.
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|axis| &**axis)
    }

    /// Caller classes, if supplied.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

/// Fully defaulted axis → value map, in schema axis order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedSelection {
    values: Vec<(String, AxisValue)>,
}

impl ResolvedSelection {
    pub(crate) const fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub(crate) fn push(&mut self, axis: &str, value: AxisValue) {
        self.values.push((axis.to_string(), value));
    }

    /// Resolved value for `axis`.
    #[must_use]
    pub fn get(&self, axis: &str) -> Option<&AxisValue> {
        self.values
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, value)| value)
    }

    /// Axis/value pairs in schema axis order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AxisValue)> {
        self.values
            .iter()
            .map(|(axis, value)| (axis.as_str(), value))
    }

    /// Number of resolved axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no axes were resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_values_read_as_absent() {
        let selection = Selection::new()
            .with("size", "lg")
            .with_opt::<&'static str>("variant", None);
        assert_eq!(selection.get("size"), Some(&AxisValue::from("lg")));
        assert_eq!(selection.get("variant"), None);
        assert_eq!(selection.axes().collect::<Vec<_>>(), vec!["size", "variant"]);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut selection = Selection::new().with("hoverable", true);
        selection.set("hoverable", None);
        assert_eq!(selection.get("hoverable"), None);
    }

    #[test]
    fn resolved_selection_keeps_push_order() {
        let mut resolved = ResolvedSelection::new();
        resolved.push("variant", "glass".into());
        resolved.push("hoverable", true.into());
        let pairs: Vec<_> = resolved.iter().map(|(axis, value)| (axis, value.as_str())).collect();
        assert_eq!(pairs, vec![("variant", "glass"), ("hoverable", "true")]);
        assert_eq!(resolved.len(), 2);
    }
}
