//! Nested field errors as produced by validation code
//!
//! Copyright (c) 2025 Fielderr Team
//! Licensed under the Apache-2.0 license

use crate::convert::convert;
use crate::error::ErrorList;
use crate::path::FieldPath;
use serde::{Deserialize, Serialize};

/// A tree of validation errors
///
/// A node with children is only a container; its own message and paths carry
/// no meaning. A node without children is a leaf describing one problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedFieldError {
    /// Human-readable message
    pub message: String,
    /// Path segments the message refers to
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
    /// Auxiliary information, reported as the bad value of unclassified errors
    #[serde(skip_serializing_if = "String::is_empty")]
    pub details: String,
    /// Nested errors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<NestedFieldError>,
}

impl NestedFieldError {
    /// Create a leaf error with a message
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Create a container holding the given errors
    pub fn aggregate<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = NestedFieldError>,
    {
        Self {
            errors: errors.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the path segments of this error
    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Set the details of this error
    pub fn with_details<D: Into<String>>(mut self, details: D) -> Self {
        self.details = details.into();
        self
    }

    /// Combine two errors into one container
    ///
    /// Containers contribute their children, leaves contribute themselves.
    /// Empty errors are dropped.
    pub fn also(self, other: NestedFieldError) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }

        let mut errors = self.into_children();
        errors.extend(other.into_children());
        Self::aggregate(errors)
    }

    /// True when this node has no children
    pub fn is_leaf(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when this node carries no information at all
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
            && self.paths.is_empty()
            && self.details.is_empty()
            && self.errors.is_empty()
    }

    /// Convert this tree into a flat error list rooted at `base_path`
    pub fn to_error_list(&self, base_path: &FieldPath) -> ErrorList {
        convert(Some(self), base_path)
    }

    fn into_children(self) -> Vec<NestedFieldError> {
        if self.errors.is_empty() {
            vec![self]
        } else {
            self.errors
        }
    }
}
