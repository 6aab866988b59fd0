//! Property-based tests for field error conversion
//!
//! These tests verify that conversion behaves consistently across randomly
//! shaped error trees.

use fielderr_core::{
    classify_message, convert, convert_ignoring_prefix, flatten_tree, resolve_and_classify,
    ErrorCategory, FieldPath, NestedFieldError,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// Strategy for messages, biased towards the classified phrases
fn message_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("missing field(s)".to_string()),
        "[a-z0-9]{0,8}".prop_map(|v| format!("invalid value: {}", v)),
        Just("expected exactly one, got neither".to_string()),
        Just("expected exactly one, got both".to_string()),
        Just("must not update deprecated field(s)".to_string()),
        Just("must not set the field(s)".to_string()),
        "[a-z]{1,8}".prop_map(|k| format!("invalid key name {}", k)),
        Just("Internal Error".to_string()),
        "[a-zA-Z ]{0,30}",
    ]
}

/// Strategy for leaf errors
fn leaf_strategy() -> impl Strategy<Value = NestedFieldError> {
    (
        message_strategy(),
        proptest::collection::vec("[a-z]{1,6}", 0..4),
        "[a-z ]{0,10}",
    )
        .prop_map(|(message, paths, details)| {
            NestedFieldError::new(message)
                .with_paths(paths)
                .with_details(details)
        })
}

/// Strategy for trees of bounded depth
fn tree_strategy() -> impl Strategy<Value = NestedFieldError> {
    leaf_strategy().prop_recursive(
        3,  // max depth
        24, // max size
        5,  // items per collection
        |inner| proptest::collection::vec(inner, 1..5).prop_map(NestedFieldError::aggregate),
    )
}

fn base_path_strategy() -> impl Strategy<Value = FieldPath> {
    prop_oneof![
        Just(FieldPath::empty()),
        Just(FieldPath::new("")),
        "[a-z]{1,6}".prop_map(FieldPath::new),
    ]
}

proptest! {
    #[test]
    fn conversion_is_idempotent(tree in tree_strategy(), base in base_path_strategy()) {
        prop_assert_eq!(convert(Some(&tree), &base), convert(Some(&tree), &base));
    }

    #[test]
    fn converted_errors_render_uniquely(tree in tree_strategy(), base in base_path_strategy()) {
        let errors = convert(Some(&tree), &base);
        let rendered: HashSet<String> = errors.iter().map(|e| e.to_string()).collect();
        prop_assert_eq!(rendered.len(), errors.len());
    }

    #[test]
    fn conversion_preserves_first_occurrence_order(tree in tree_strategy()) {
        let base = FieldPath::new("base");
        let prefix = FieldPath::empty();
        let all: Vec<_> = flatten_tree(Some(&tree))
            .into_iter()
            .filter_map(|leaf| resolve_and_classify(leaf, &base, &prefix))
            .collect();

        let mut seen = HashSet::new();
        let expected: Vec<_> = all
            .into_iter()
            .filter(|e| seen.insert(e.to_string()))
            .collect();

        prop_assert_eq!(convert(Some(&tree), &base).errors, expected);
    }

    #[test]
    fn every_leaf_classifies_without_prefix(tree in tree_strategy(), base in base_path_strategy()) {
        let leaves = flatten_tree(Some(&tree));
        for leaf in &leaves {
            prop_assert!(resolve_and_classify(leaf, &base, &FieldPath::empty()).is_some());
        }
        prop_assert!(convert(Some(&tree), &base).len() <= leaves.len());
    }

    #[test]
    fn prefix_filter_never_adds_errors(tree in tree_strategy(), prefix in "[a-z]{1,3}") {
        let base = FieldPath::new("base");
        let filtered = convert_ignoring_prefix(Some(&tree), &base, &FieldPath::new(prefix));
        prop_assert!(filtered.len() <= flatten_tree(Some(&tree)).len());
        for error in filtered.iter() {
            prop_assert!(error.field.starts_with("base"));
        }
    }

    #[test]
    fn missing_field_always_classifies_required(prefix in "[a-zA-Z ]{0,10}", suffix in "[a-zA-Z ]{0,10}") {
        let message = format!("{}missing field(s){}", prefix, suffix);
        prop_assert_eq!(classify_message(&message), ErrorCategory::Required);
    }
}
