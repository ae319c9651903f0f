//! Compound rule matching.
//!
//! Every rule whose conditions all hold contributes its classes, in declaration
//! order. No rule suppresses another; later rules simply land later in the list
//! and win placement in the merger.

use crate::classes::ClassList;
use crate::schema::{CompoundRule, VariantSchema};
use crate::selection::ResolvedSelection;

impl CompoundRule {
    /// Whether every condition holds for `resolved`.
    ///
    /// Conditions are a conjunction across axes; a set-valued condition is a
    /// disjunction within its axis. Axes the rule does not name are wildcards.
    #[must_use]
    pub fn matches(&self, resolved: &ResolvedSelection) -> bool {
        self.conditions().all(|(axis, condition)| {
            resolved
                .get(axis)
                .is_some_and(|value| condition.accepts(value))
        })
    }
}

/// Classes contributed by every firing compound rule, in declaration order.
#[must_use]
pub fn apply_compounds(schema: &VariantSchema, resolved: &ResolvedSelection) -> ClassList {
    let mut classes = ClassList::new();
    for rule in schema.compounds() {
        if rule.matches(resolved) {
            classes.extend_from(rule.classes());
        }
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Axis;
    use std::error::Error;

    fn card() -> Result<VariantSchema, Box<dyn Error>> {
        Ok(VariantSchema::builder("card")
            .axis(
                Axis::new("variant")
                    .value("default", "bg-card")
                    .value("glass", "bg-white/10")
                    .value("bordered", "border-2")
                    .with_default("default"),
            )
            .axis(Axis::flag("hoverable", "hover:scale", "").with_default(false))
            .compound(
                CompoundRule::new("glow")
                    .when("variant", "glass")
                    .when("hoverable", true),
            )
            .compound(
                CompoundRule::new("ring")
                    .when_any("variant", ["glass", "bordered"])
                    .when("hoverable", true),
            )
            .build()?)
    }

    fn resolved(variant: &'static str, hoverable: bool) -> ResolvedSelection {
        let mut resolved = ResolvedSelection::new();
        resolved.push("variant", variant.into());
        resolved.push("hoverable", hoverable.into());
        resolved
    }

    #[test]
    fn all_firing_rules_contribute_in_order() -> Result<(), Box<dyn Error>> {
        let schema = card()?;
        let classes = apply_compounds(&schema, &resolved("glass", true));
        assert_eq!(classes.to_string(), "glow ring");
        Ok(())
    }

    #[test]
    fn set_condition_matches_any_member() -> Result<(), Box<dyn Error>> {
        let schema = card()?;
        assert_eq!(
            apply_compounds(&schema, &resolved("bordered", true)).to_string(),
            "ring"
        );
        assert!(apply_compounds(&schema, &resolved("default", true)).is_empty());
        Ok(())
    }

    #[test]
    fn one_failing_condition_stops_the_rule() -> Result<(), Box<dyn Error>> {
        let schema = card()?;
        assert!(apply_compounds(&schema, &resolved("glass", false)).is_empty());
        Ok(())
    }

    #[test]
    fn missing_axis_never_matches() {
        let rule = CompoundRule::new("glow").when("variant", "glass");
        assert!(!rule.matches(&ResolvedSelection::new()));
    }
}
