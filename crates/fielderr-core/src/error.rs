//! Structured field error types
//!
//! These mirror the validation-error protocol consumed downstream: four error
//! kinds, each carrying the rendered field path, a detail message, and a bad
//! value. The serialized shape and rendering are fixed by that protocol.
//!
//! Copyright (c) 2025 Fielderr Team
//! Licensed under the Apache-2.0 license

use crate::path::FieldPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Kind of a structured field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    /// A required field was not provided
    #[serde(rename = "FieldValueRequired")]
    Required,
    /// A field holds a malformed or out-of-range value
    #[serde(rename = "FieldValueInvalid")]
    Invalid,
    /// A field may not be set, or conflicts with another field
    #[serde(rename = "FieldValueForbidden")]
    Forbidden,
    /// Something went wrong that is not the caller's fault
    #[serde(rename = "InternalError")]
    Internal,
}

impl ErrorType {
    /// The protocol discriminator string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Required => "FieldValueRequired",
            ErrorType::Invalid => "FieldValueInvalid",
            ErrorType::Forbidden => "FieldValueForbidden",
            ErrorType::Internal => "InternalError",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorType::Required => "Required value",
            ErrorType::Invalid => "Invalid value",
            ErrorType::Forbidden => "Forbidden",
            ErrorType::Internal => "Internal error",
        };
        f.write_str(text)
    }
}

/// Error carried as the cause of an internal field error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct OpaqueError(String);

impl OpaqueError {
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self(message.into())
    }
}

/// A single structured field error
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldError {
    /// Kind of error
    #[serde(rename = "Type")]
    pub error_type: ErrorType,
    /// Rendered path of the offending field
    pub field: String,
    /// The offending value, if any
    pub bad_value: Value,
    /// Human-readable detail
    pub detail: String,
}

impl FieldError {
    /// A required field is missing
    pub fn required<D: Into<String>>(path: &FieldPath, detail: D) -> Self {
        Self {
            error_type: ErrorType::Required,
            field: path.to_string(),
            bad_value: Value::String(String::new()),
            detail: detail.into(),
        }
    }

    /// A field holds an invalid value
    pub fn invalid<V, D>(path: &FieldPath, value: V, detail: D) -> Self
    where
        V: Into<Value>,
        D: Into<String>,
    {
        Self {
            error_type: ErrorType::Invalid,
            field: path.to_string(),
            bad_value: value.into(),
            detail: detail.into(),
        }
    }

    /// A field may not be set in this context
    pub fn forbidden<D: Into<String>>(path: &FieldPath, detail: D) -> Self {
        Self {
            error_type: ErrorType::Forbidden,
            field: path.to_string(),
            bad_value: Value::String(String::new()),
            detail: detail.into(),
        }
    }

    /// An internal error occurred while handling the field
    pub fn internal_error(path: &FieldPath, cause: &dyn std::error::Error) -> Self {
        Self {
            error_type: ErrorType::Internal,
            field: path.to_string(),
            bad_value: Value::Null,
            detail: cause.to_string(),
        }
    }

    /// Rendering of the error without the field path
    pub fn error_body(&self) -> String {
        let mut body = match self.error_type {
            ErrorType::Invalid => format!("{}: {}", self.error_type, self.bad_value),
            _ => self.error_type.to_string(),
        };
        if !self.detail.is_empty() {
            body.push_str(": ");
            body.push_str(&self.detail);
        }
        body
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error_body())
    }
}

/// Ordered list of structured field errors
#[derive(Debug, Clone, Default, PartialEq, Error, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorList {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => Ok(()),
            [only] => write!(f, "{}", only),
            errors => {
                f.write_str("[")?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", error)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl ErrorList {
    /// Create an empty error list
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Append an error
    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<FieldError>> for ErrorList {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<FieldError> for ErrorList {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ErrorList {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
