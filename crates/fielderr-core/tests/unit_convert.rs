//! Unit tests for converting nested field errors into error lists
//!
//! Covers classification of every message kind, path composition against
//! empty and non-empty base paths, prefix filtering, and deduplication.

use fielderr_core::{
    convert, convert_ignoring_prefix, ErrorList, ErrorType, FieldError, FieldPath,
    NestedFieldError, OpaqueError,
};
use serde_json::json;

fn leaf(message: &str, paths: &[&str]) -> NestedFieldError {
    NestedFieldError::new(message).with_paths(paths.iter().copied())
}

fn convert_one(error: &NestedFieldError) -> ErrorList {
    convert(Some(error), &FieldPath::empty())
}

#[cfg(test)]
mod conflict_messages {
    use super::*;

    #[test]
    fn test_paths_are_folded_into_message() {
        let errors = convert_one(&leaf("expected exactly one, got neither", &["field1", "field2"]));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.errors[0].detail,
            "expected exactly one, got neither: field1, field2"
        );
    }

    #[test]
    fn test_paths_are_cleared() {
        let errors = convert(
            Some(&leaf("must not set the field(s)", &["field1", "field2"])),
            &FieldPath::new("parent"),
        );

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].field, "parent");
    }

    #[test]
    fn test_caller_tree_is_not_modified() {
        let tree = leaf("expected exactly one, got both", &["a", "b"]);
        let before = tree.clone();
        let _ = convert_one(&tree);
        assert_eq!(tree, before);
    }
}

#[cfg(test)]
mod classification {
    use super::*;

    #[test]
    fn test_missing_field_is_required() {
        let errors = convert_one(&leaf("missing field(s)", &[]));
        assert_eq!(
            errors.errors,
            vec![FieldError::required(&FieldPath::empty(), "missing field(s)")]
        );
    }

    #[test]
    fn test_invalid_value_carries_value() {
        let errors = convert_one(&leaf("invalid value: abc", &[]));
        assert_eq!(
            errors.errors,
            vec![FieldError::invalid(&FieldPath::empty(), "abc", "invalid value: abc")]
        );
    }

    #[test]
    fn test_forbidden_messages() {
        for message in [
            "expected exactly one, got neither",
            "expected exactly one, got both",
            "must not update deprecated field(s)",
            "must not set the field(s)",
            "invalid key name abc",
        ] {
            let errors = convert_one(&leaf(message, &[]));
            assert_eq!(
                errors.errors,
                vec![FieldError::forbidden(&FieldPath::empty(), message)],
                "message: {}",
                message
            );
        }
    }

    #[test]
    fn test_internal_error() {
        let errors = convert_one(&leaf("Internal Error", &[]));
        assert_eq!(
            errors.errors,
            vec![FieldError::internal_error(
                &FieldPath::empty(),
                &OpaqueError::new("Internal Error")
            )]
        );
    }

    #[test]
    fn test_unknown_message_falls_back_to_invalid_with_details() {
        let error = leaf("unknown error", &[]).with_details("the details");
        let errors = convert_one(&error);
        assert_eq!(
            errors.errors,
            vec![FieldError::invalid(&FieldPath::empty(), "the details", "unknown error")]
        );
    }

    #[test]
    fn test_required_wins_over_internal() {
        let errors = convert_one(&leaf("Internal Error: missing field(s)", &[]));
        assert_eq!(errors.errors[0].error_type, ErrorType::Required);
    }

    #[test]
    fn test_empty_message_is_invalid() {
        let errors = convert_one(&leaf("", &["spec"]));
        assert_eq!(errors.errors[0].error_type, ErrorType::Invalid);
        assert_eq!(errors.errors[0].field, "spec");
    }
}

#[cfg(test)]
mod path_composition {
    use super::*;

    #[test]
    fn test_empty_base_path_starts_fresh() {
        let errors = convert(
            Some(&leaf("missing field(s)", &["field1", "field2"])),
            &FieldPath::new(""),
        );
        assert_eq!(errors.errors[0].field, "field1.field2");
    }

    #[test]
    fn test_non_empty_base_path_gets_children() {
        let errors = convert(
            Some(&leaf("missing field(s)", &["field1", "field2"])),
            &FieldPath::new("parent"),
        );
        assert_eq!(errors.errors[0].field, "parent.field1.field2");
    }

    #[test]
    fn test_pathless_leaf_uses_base_path() {
        let errors = convert(
            Some(&leaf("missing field(s)", &[])),
            &FieldPath::new("spec").index(3),
        );
        assert_eq!(errors.errors[0].field, "spec[3]");
    }
}

#[cfg(test)]
mod prefix_filtering {
    use super::*;

    #[test]
    fn test_mismatched_prefix_drops_error() {
        let errors = convert_ignoring_prefix(
            Some(&leaf("missing field(s)", &["prefix", "field1", "field2"])),
            &FieldPath::empty(),
            &FieldPath::new("path"),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_matched_prefix_is_stripped() {
        let errors = convert_ignoring_prefix(
            Some(&leaf("missing field(s)", &["prefix", "field1", "field2"])),
            &FieldPath::empty(),
            &FieldPath::new("prefix"),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].field, "field1.field2");
    }

    #[test]
    fn test_matched_prefix_under_base_path() {
        let tree = NestedFieldError::aggregate([leaf("invalid value: ", &["path1", "path2"])]);
        let errors = convert_ignoring_prefix(
            Some(&tree),
            &FieldPath::new("path"),
            &FieldPath::new("path1"),
        );

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!([{
                "Type": "FieldValueInvalid",
                "Field": "path.path2",
                "BadValue": "",
                "Detail": "invalid value: "
            }])
        );
    }

    #[test]
    fn test_unmatched_prefix_in_aggregate() {
        let tree = NestedFieldError::aggregate([leaf("invalid value: ", &["path1", "path2"])]);
        let errors = convert_ignoring_prefix(
            Some(&tree),
            &FieldPath::new("path"),
            &FieldPath::new("prefix"),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_prefix_changes_nothing() {
        let tree = leaf("missing field(s)", &["a", "b"]);
        let base = FieldPath::new("spec");
        assert_eq!(
            convert_ignoring_prefix(Some(&tree), &base, &FieldPath::new("")),
            convert(Some(&tree), &base)
        );
    }
}

#[cfg(test)]
mod deduplication {
    use super::*;

    #[test]
    fn test_duplicate_errors_collapse() {
        let tree = NestedFieldError::aggregate([
            leaf("expected exactly one, got neither", &["field1", "field2"]),
            leaf("expected exactly one, got neither", &["field1", "field2"]),
            leaf("invalid value: ", &["path1", "path2"]),
        ]);

        let errors = convert_ignoring_prefix(
            Some(&tree),
            &FieldPath::new("path"),
            &FieldPath::new(""),
        );

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!([
                {
                    "Type": "FieldValueForbidden",
                    "Field": "path",
                    "BadValue": "",
                    "Detail": "expected exactly one, got neither: field1, field2"
                },
                {
                    "Type": "FieldValueInvalid",
                    "Field": "path.path1.path2",
                    "BadValue": "",
                    "Detail": "invalid value: "
                }
            ])
        );
    }

    #[test]
    fn test_duplicates_across_nesting_levels() {
        let tree = NestedFieldError::aggregate([
            leaf("missing field(s)", &["name"]),
            NestedFieldError::aggregate([
                leaf("missing field(s)", &["name"]),
                leaf("missing field(s)", &["image"]),
            ]),
        ]);

        let fields: Vec<_> = convert(Some(&tree), &FieldPath::new("spec"))
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["spec.name", "spec.image"]);
    }
}

#[cfg(test)]
mod input_formats {
    use super::*;

    #[test]
    fn test_yaml_tree() {
        let yaml = r#"
errors:
  - message: "missing field(s)"
    paths: ["spec", "name"]
  - errors:
      - message: "invalid value: -1"
        paths: ["spec", "replicas"]
      - message: "something odd"
        details: "extra"
"#;
        let tree: NestedFieldError = serde_yaml::from_str(yaml).unwrap();
        let errors = convert(Some(&tree), &FieldPath::empty());

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.errors[0].field, "spec.name");
        assert_eq!(errors.errors[1].bad_value, json!("-1"));
        assert_eq!(errors.errors[2].bad_value, json!("extra"));
        assert_eq!(errors.errors[2].field, "");
    }
}
