// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by the matcher, snippet extractor and renderer.

use crate::types::Query;
use crate::util::normalize::normalize;

/// Parse raw input into a [`Query`]: trimmed, lowercased, whitespace-split.
///
/// # Example
///
/// ```ignore
/// let query = parse_query("  Apple  PIE ");
/// assert_eq!(query.text, "apple  pie");
/// assert_eq!(query.tokens, vec!["apple", "pie"]);
/// ```
pub fn parse_query(raw: &str) -> Query {
    let text = normalize(raw);
    let tokens = text.split_whitespace().map(str::to_string).collect();
    Query { text, tokens }
}
