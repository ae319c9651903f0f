use proptest::prelude::*;
use serde_json::Value;
use strata_slot::{PropBag, merge_props};

fn attr_map() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-d]", "[a-z]{1,4}"), 0..6)
}

fn bag(pairs: &[(String, String)]) -> PropBag {
    pairs
        .iter()
        .fold(PropBag::new(), |bag, (name, value)| bag.attr(name.clone(), value.clone()))
}

proptest! {
    #[test]
    fn host_value_wins_every_overlapping_prop(child in attr_map(), host in attr_map()) {
        let merged = merge_props(bag(&child), bag(&host));
        let expected_host = bag(&host);
        for (name, value) in expected_host.attrs() {
            prop_assert_eq!(merged.get_attr(name), Some(value));
        }
        for (name, value) in bag(&child).attrs() {
            if expected_host.get_attr(name).is_none() {
                prop_assert_eq!(merged.get_attr(name), Some(value));
            }
        }
    }

    #[test]
    fn host_class_tokens_always_survive(child in "[a-e ]{0,12}", host in "[a-e ]{0,12}") {
        let merged = merge_props(
            PropBag::new().class_name(child),
            PropBag::new().class_name(host.clone()),
        );
        let merged_class = merged.get_class_name().unwrap_or_default().to_string();
        let tokens: Vec<&str> = merged_class.split_whitespace().collect();
        for token in host.split_whitespace() {
            prop_assert!(tokens.contains(&token));
        }
        prop_assert_eq!(merged.get_attr("className"), None::<&Value>);
    }
}
