//! Fielderr Core - flattening of nested field errors
//!
//! Validation code often reports problems as a tree: one error value that
//! aggregates nested errors, each leaf carrying a message and the path
//! segments it concerns. Protocols that report validation failures expect a
//! flat list of typed field errors instead. This crate converts the former
//! into the latter.
//!
//! ## Features
//!
//! - **Flattening**: depth-first, order-preserving collection of leaf errors
//! - **Classification**: messages map to `Required`, `Invalid`, `Forbidden`, or
//!   `InternalError` field errors
//! - **Path Composition**: leaf paths are joined to a caller-supplied base path
//! - **Prefix Filtering**: keep only errors under a path prefix, with the prefix removed
//! - **Deduplication**: identical errors reported twice appear once
//!
//! ## Quick Start
//!
//! ```rust
//! use fielderr_core::{convert, ErrorType, FieldPath, NestedFieldError};
//!
//! let tree = NestedFieldError::aggregate([
//!     NestedFieldError::new("expected exactly one, got neither").with_paths(["a", "b"]),
//!     NestedFieldError::new("missing field(s)").with_paths(["name"]),
//! ]);
//!
//! let errors = convert(Some(&tree), &FieldPath::new("spec"));
//!
//! assert_eq!(errors.errors[0].error_type, ErrorType::Forbidden);
//! assert_eq!(errors.errors[0].field, "spec");
//! assert_eq!(errors.errors[0].detail, "expected exactly one, got neither: a, b");
//! assert_eq!(errors.errors[1].error_type, ErrorType::Required);
//! assert_eq!(errors.errors[1].field, "spec.name");
//! ```
//!
//! ## Classification Rules
//!
//! Checked in order, first match wins:
//!
//! 1. `missing field(s)` - required value
//! 2. `invalid value: ` - invalid value, the text after the marker is the bad value
//! 3. `expected exactly one, got neither|both`, `must not update deprecated field(s)`,
//!    `must not set the field(s)`, `invalid key name ` - forbidden
//! 4. `Internal Error` - internal error
//! 5. anything else - invalid value, the leaf details are the bad value
//!
//! For the four conflict messages the leaf paths list the fields involved, so
//! they are appended to the message and the error is reported at the base path.
//!
//! Copyright (c) 2025 Fielderr Team
//! Licensed under the Apache-2.0 license

pub mod convert;
pub mod error;
pub mod path;
pub mod source;

// Re-export commonly used types for convenience
pub use convert::{
    classify_message, convert, convert_ignoring_prefix, dedupe, flatten_tree,
    resolve_and_classify, ConversionContext, ErrorCategory,
};
pub use error::{ErrorList, ErrorType, FieldError, OpaqueError};
pub use path::{FieldPath, Segment, EMPTY_PATH};
pub use source::NestedFieldError;
