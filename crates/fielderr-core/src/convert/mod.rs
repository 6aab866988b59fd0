//! Conversion of nested field errors into flat error lists
//!
//! Conversion runs in three stages:
//!
//! - **Flatten**: collect the leaves of the tree depth-first
//! - **Resolve and classify**: compose each leaf's field path, optionally
//!   filtering on a path prefix, and map its message to an error kind
//! - **Dedupe**: drop errors that render identically to an earlier one
//!
//! Copyright (c) 2025 Fielderr Team
//! Licensed under the Apache-2.0 license

pub mod classify;
pub mod dedupe;
pub mod flatten;

pub use classify::{classify_message, resolve_and_classify, ErrorCategory};
pub use dedupe::dedupe;
pub use flatten::flatten_tree;

use crate::error::ErrorList;
use crate::path::FieldPath;
use crate::source::NestedFieldError;
use tracing::debug;

/// Base path and prefix filter applied to a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionContext {
    /// Path every converted error is rooted at
    pub base_path: FieldPath,
    /// Only errors under this prefix are kept, with the prefix removed
    pub ignore_prefix: FieldPath,
}

impl ConversionContext {
    /// Create a context rooted at `base_path` with no prefix filter
    pub fn new(base_path: FieldPath) -> Self {
        Self {
            base_path,
            ignore_prefix: FieldPath::empty(),
        }
    }

    /// Set the prefix filter
    pub fn with_ignore_prefix(mut self, ignore_prefix: FieldPath) -> Self {
        self.ignore_prefix = ignore_prefix;
        self
    }

    /// Create a child context with a named segment added to the base path
    pub fn child<S: Into<String>>(&self, name: S) -> Self {
        Self {
            base_path: self.base_path.child(name),
            ignore_prefix: self.ignore_prefix.clone(),
        }
    }

    /// Create a child context for a list index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            base_path: self.base_path.index(index),
            ignore_prefix: self.ignore_prefix.clone(),
        }
    }

    /// Convert a tree using this context
    pub fn convert(&self, tree: Option<&NestedFieldError>) -> ErrorList {
        convert_with(tree, &self.base_path, &self.ignore_prefix)
    }
}

/// Convert a nested error tree into a flat, deduplicated error list
///
/// # Examples
///
/// ```rust
/// use fielderr_core::{convert, FieldPath, NestedFieldError};
///
/// let tree = NestedFieldError::aggregate([
///     NestedFieldError::new("missing field(s)").with_paths(["name"]),
///     NestedFieldError::new("invalid value: -1").with_paths(["replicas"]),
/// ]);
///
/// let errors = convert(Some(&tree), &FieldPath::new("spec"));
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.errors[0].field, "spec.name");
/// assert_eq!(errors.errors[1].bad_value, "-1");
/// ```
pub fn convert(tree: Option<&NestedFieldError>, base_path: &FieldPath) -> ErrorList {
    convert_with(tree, base_path, &FieldPath::empty())
}

/// Like [`convert`], keeping only errors whose path starts with `ignore_prefix`
///
/// The prefix is removed from the kept paths before they are joined to
/// `base_path`. An empty prefix keeps everything.
pub fn convert_ignoring_prefix(
    tree: Option<&NestedFieldError>,
    base_path: &FieldPath,
    ignore_prefix: &FieldPath,
) -> ErrorList {
    convert_with(tree, base_path, ignore_prefix)
}

fn convert_with(
    tree: Option<&NestedFieldError>,
    base_path: &FieldPath,
    ignore_prefix: &FieldPath,
) -> ErrorList {
    let leaves = flatten_tree(tree);
    let leaf_count = leaves.len();

    let classified: ErrorList = leaves
        .into_iter()
        .filter_map(|leaf| resolve_and_classify(leaf, base_path, ignore_prefix))
        .collect();
    let kept = classified.len();

    let errors = dedupe(classified);
    debug!(
        base_path = %base_path,
        ignore_prefix = %ignore_prefix,
        leaves = leaf_count,
        filtered = leaf_count - kept,
        duplicates = kept - errors.len(),
        "Converted nested field error"
    );
    errors
}
