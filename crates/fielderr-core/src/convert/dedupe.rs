//! Removal of repeated field errors
//!
//! Upstream aggregation can report the same error more than once. Two errors
//! count as the same when their rendered strings match.
//!
//! Copyright (c) 2025 Fielderr Team
//! Licensed under the Apache-2.0 license

use crate::error::ErrorList;
use std::collections::HashSet;

/// Keep the first occurrence of every distinct rendered error, in order
pub fn dedupe(list: ErrorList) -> ErrorList {
    let mut seen = HashSet::new();
    list.into_iter()
        .filter(|error| seen.insert(error.to_string()))
        .collect()
}
