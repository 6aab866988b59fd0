//! Depth-first flattening of nested field errors
//!
//! Copyright (c) 2025 Fielderr Team
//! Licensed under the Apache-2.0 license

use crate::source::NestedFieldError;

/// Collect the leaves of an error tree in depth-first order
///
/// An absent or empty tree has no leaves. A tree without children is its own
/// single leaf.
pub fn flatten_tree(tree: Option<&NestedFieldError>) -> Vec<&NestedFieldError> {
    let mut leaves = Vec::new();
    if let Some(root) = tree.filter(|root| !root.is_empty()) {
        collect_leaves(root, &mut leaves);
    }
    leaves
}

fn collect_leaves<'a>(node: &'a NestedFieldError, leaves: &mut Vec<&'a NestedFieldError>) {
    if node.is_leaf() {
        leaves.push(node);
        return;
    }
    for child in &node.errors {
        collect_leaves(child, leaves);
    }
}
