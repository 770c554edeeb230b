// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for case-insensitive substring matching.
//!
//! Deliberately minimal: lowercase and trim. No diacritic folding, no
//! whitespace collapsing inside a query. "café" does not match "cafe".

/// Lowercase and trim surrounding whitespace.
///
/// ```
/// use pagesift::normalize;
/// assert_eq!(normalize("  Apple Pie "), "apple pie");
/// ```
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Split a comma-separated keyword string into trimmed, lowercase entries.
///
/// Trailing commas and stray whitespace are tolerated, never rejected.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_lowercase)
        .collect()
}
