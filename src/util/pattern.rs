// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Literal, case-insensitive term patterns.
//!
//! Query terms are user input, so every one goes through `regex::escape`
//! before it becomes part of a pattern: `a.b` matches the three characters
//! `a.b` and nothing else. Several terms compile to one alternation, longest
//! first, so when two terms overlap the longer one wins.

use log::warn;
use regex::{Regex, RegexBuilder};

/// Compile `terms` into one case-insensitive literal alternation.
///
/// Returns `None` when there is nothing to match (no non-empty terms), or if
/// the pattern exceeds the regex size limit.
pub fn literal_pattern<S: AsRef<str>>(terms: &[S]) -> Option<Regex> {
    let mut literals: Vec<&str> = terms
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| !t.is_empty())
        .collect();
    if literals.is_empty() {
        return None;
    }
    literals.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    literals.dedup();

    let alternation = literals
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&alternation).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("could not compile highlight pattern: {}", e);
            None
        }
    }
}

/// Byte offset of `char_idx` in `text`, clamped to `text.len()`.
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
