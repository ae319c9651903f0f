use proptest::prelude::*;
use strata_test_support::card_schema;
use strata_variants::{DiagnosticsMode, Resolver, Selection, merge};

const VARIANTS: [&str; 4] = ["default", "glass", "glass-strong", "bordered"];
const PADDINGS: [&str; 4] = ["none", "sm", "md", "lg"];

fn class_string() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]), 0..8)
        .prop_map(|tokens| tokens.join(" "))
}

fn card_selection() -> impl Strategy<Value = Selection> {
    (
        prop::option::of(prop::sample::select(VARIANTS.to_vec())),
        prop::option::of(prop::sample::select(PADDINGS.to_vec())),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(variant, padding, hoverable)| {
            Selection::new()
                .with_opt("variant", variant)
                .with_opt("padding", padding)
                .with_opt("hoverable", hoverable)
        })
}

proptest! {
    #[test]
    fn resolution_is_deterministic(selection in card_selection()) {
        let schema = card_schema()?;
        let resolver = Resolver::new(DiagnosticsMode::Production);
        prop_assert_eq!(
            resolver.resolve(&schema, &selection)?,
            resolver.resolve(&schema, &selection)?
        );
    }

    #[test]
    fn omitted_axis_matches_explicit_default(
        variant in prop::sample::select(VARIANTS.to_vec()),
        hoverable in any::<bool>(),
    ) {
        let schema = card_schema()?;
        let resolver = Resolver::new(DiagnosticsMode::Production);
        let implicit = Selection::new().with("variant", variant).with("hoverable", hoverable);
        let explicit = implicit.clone().with("padding", "md").with("rounded", "lg");
        prop_assert_eq!(
            resolver.resolve(&schema, &implicit)?,
            resolver.resolve(&schema, &explicit)?
        );
    }

    #[test]
    fn glass_glow_requires_both_conditions(
        variant in prop::sample::select(VARIANTS.to_vec()),
        hoverable in any::<bool>(),
    ) {
        let schema = card_schema()?;
        let selection = Selection::new().with("variant", variant).with("hoverable", hoverable);
        let resolved = Resolver::new(DiagnosticsMode::Production).resolve(&schema, &selection)?;
        let glows = resolved.split(' ').any(|token| token == "hover:shadow-primary/30");
        prop_assert_eq!(glows, variant == "glass" && hoverable);
    }

    #[test]
    fn merge_is_associative(a in class_string(), b in class_string(), c in class_string()) {
        let left = merge([merge([a.as_str(), b.as_str()]), c.clone()]);
        let right = merge([a.clone(), merge([b.as_str(), c.as_str()])]);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn merge_output_has_unique_tokens(a in class_string(), b in class_string()) {
        let merged = merge([a, b]);
        let mut tokens: Vec<&str> = merged.split_whitespace().collect();
        let total = tokens.len();
        tokens.sort_unstable();
        tokens.dedup();
        prop_assert_eq!(tokens.len(), total);
    }
}
