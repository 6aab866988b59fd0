//! Path resolution and message classification for single leaves
//!
//! Copyright (c) 2025 Fielderr Team
//! Licensed under the Apache-2.0 license

use crate::error::{ErrorType, FieldError, OpaqueError};
use crate::path::{FieldPath, EMPTY_PATH};
use crate::source::NestedFieldError;
use serde_json::Value;
use std::fmt;
use tracing::trace;

const MISSING_FIELD: &str = "missing field(s)";
const INVALID_VALUE: &str = "invalid value: ";
const INVALID_KEY_NAME: &str = "invalid key name ";
const INTERNAL_ERROR: &str = "Internal Error";

/// Messages whose paths name the conflicting fields rather than a location
const FIELD_CONFLICTS: [&str; 4] = [
    "expected exactly one, got neither",
    "expected exactly one, got both",
    "must not update deprecated field(s)",
    "must not set the field(s)",
];

/// Category a leaf message falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Mentions a missing field
    Required,
    /// Carries the offending value after an `invalid value: ` marker
    InvalidValue,
    /// Conflicting, deprecated, or disallowed fields and bad key names
    Forbidden,
    /// Internal failure
    Internal,
    /// Anything else; reported as invalid with the leaf details as value
    Unclassified,
}

impl ErrorCategory {
    /// The error type produced for this category
    pub fn error_type(&self) -> ErrorType {
        match self {
            ErrorCategory::Required => ErrorType::Required,
            ErrorCategory::InvalidValue | ErrorCategory::Unclassified => ErrorType::Invalid,
            ErrorCategory::Forbidden => ErrorType::Forbidden,
            ErrorCategory::Internal => ErrorType::Internal,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Required => "required",
            ErrorCategory::InvalidValue => "invalid-value",
            ErrorCategory::Forbidden => "forbidden",
            ErrorCategory::Internal => "internal",
            ErrorCategory::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}

/// Classify a message by substring, first match wins
pub fn classify_message(message: &str) -> ErrorCategory {
    if message.contains(MISSING_FIELD) {
        ErrorCategory::Required
    } else if message.contains(INVALID_VALUE) {
        ErrorCategory::InvalidValue
    } else if names_conflicting_fields(message) || message.contains(INVALID_KEY_NAME) {
        ErrorCategory::Forbidden
    } else if message.contains(INTERNAL_ERROR) {
        ErrorCategory::Internal
    } else {
        ErrorCategory::Unclassified
    }
}

fn names_conflicting_fields(message: &str) -> bool {
    FIELD_CONFLICTS.iter().any(|phrase| message.contains(phrase))
}

/// Turn one leaf into a structured field error
///
/// Returns `None` when `ignore_prefix` is set and the leaf path lies outside it.
pub fn resolve_and_classify(
    leaf: &NestedFieldError,
    base_path: &FieldPath,
    ignore_prefix: &FieldPath,
) -> Option<FieldError> {
    let mut message = leaf.message.clone();
    let mut paths = leaf.paths.clone();

    if names_conflicting_fields(&message) {
        if !paths.is_empty() {
            message.push_str(": ");
            message.push_str(&paths.join(", "));
        }
        paths.clear();
    }

    let prefix = ignore_prefix.to_string();
    if prefix != EMPTY_PATH {
        let rendered = render_segments(&paths);
        let Some(rest) = rendered.strip_prefix(prefix.as_str()) else {
            trace!(path = %rendered, prefix = %prefix, "Dropping error outside ignored prefix");
            return None;
        };
        let rest = rest.strip_prefix('.').unwrap_or(rest);
        paths = if rest.is_empty() {
            Vec::new()
        } else {
            vec![rest.to_string()]
        };
    }

    let field_path = compose_path(base_path, &paths);
    let category = classify_message(&message);
    trace!(field = %field_path, %category, "Classified field error");

    Some(match category {
        ErrorCategory::Required => FieldError::required(&field_path, message),
        ErrorCategory::InvalidValue => {
            let value = message.strip_prefix(INVALID_VALUE).unwrap_or(&message).to_string();
            FieldError::invalid(&field_path, value, message)
        }
        ErrorCategory::Forbidden => FieldError::forbidden(&field_path, message),
        ErrorCategory::Internal => {
            FieldError::internal_error(&field_path, &OpaqueError::new(message))
        }
        ErrorCategory::Unclassified => {
            FieldError::invalid(&field_path, Value::String(leaf.details.clone()), message)
        }
    })
}

/// Join path segments into one dotted string
///
/// Empty pieces are skipped and bracketed pieces stick to the one before them,
/// so `["spec", "items", "[0]"]` renders as `spec.items[0]`.
fn render_segments(paths: &[String]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for piece in paths.iter().flat_map(|path| path.split('.')) {
        if piece.is_empty() {
            continue;
        }
        match parts.last_mut() {
            Some(last) if is_subscript(piece) => last.push_str(piece),
            _ => parts.push(piece.to_string()),
        }
    }
    parts.join(".")
}

fn is_subscript(piece: &str) -> bool {
    piece.starts_with('[') && piece.ends_with(']')
}

fn compose_path(base_path: &FieldPath, paths: &[String]) -> FieldPath {
    if paths.is_empty() {
        base_path.clone()
    } else if base_path.is_empty() {
        FieldPath::from_names(paths)
    } else {
        base_path.children(paths)
    }
}
