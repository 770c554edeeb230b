// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction: a short excerpt of page content around a match.
//!
//! Find the first case-insensitive occurrence of the term, take `before`
//! characters to its left and `after` characters from its start, and mark any
//! side that was cut with an ellipsis. No match means the opening
//! `fallback_length` characters instead.
//!
//! All positions are counted in characters, not bytes, so an excerpt never
//! splits a multi-byte character.
//!
//! Multi-keyword queries position the excerpt on their first token only. The
//! other tokens still get highlighted, they just don't move the window.

use crate::types::{MatchPolicy, Query};
use crate::util::pattern::{byte_offset, literal_pattern};
use serde::{Deserialize, Serialize};

/// Marker for a side of the excerpt that was cut off.
pub const ELLIPSIS: &str = "...";

/// Window around the match, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnippetOptions {
    /// Characters kept before the match start.
    pub before: usize,
    /// Characters kept from the match start onward.
    pub after: usize,
    /// Leading characters shown when the term does not occur.
    pub fallback_length: usize,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            before: 50,
            after: 100,
            fallback_length: 150,
        }
    }
}

/// Excerpt `content` around the first occurrence of `term`.
pub fn snippet(content: &str, term: &str, options: &SnippetOptions) -> String {
    let position = literal_pattern(&[term])
        .and_then(|re| re.find(content))
        .map(|m| content[..m.start()].chars().count());

    match position {
        Some(p) => window_around(content, p, options),
        None => leading(content, options.fallback_length),
    }
}

/// Excerpt positioned by the query's snippet term (first token for
/// multi-keyword queries, the whole text for single-term).
pub fn snippet_for_query(
    content: &str,
    query: &Query,
    policy: MatchPolicy,
    options: &SnippetOptions,
) -> String {
    snippet(content, query.snippet_term(policy), options)
}

fn window_around(content: &str, p: usize, options: &SnippetOptions) -> String {
    let len = content.chars().count();
    let start = p.saturating_sub(options.before);
    let end = p.saturating_add(options.after).min(len);

    let body = &content[byte_offset(content, start)..byte_offset(content, end)];

    let mut out = String::with_capacity(body.len() + 2 * ELLIPSIS.len());
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(body);
    if end < len {
        out.push_str(ELLIPSIS);
    }
    out
}

fn leading(content: &str, length: usize) -> String {
    let cut = byte_offset(content, length);
    if cut >= content.len() {
        return content.to_string();
    }
    format!("{}{}", &content[..cut], ELLIPSIS)
}
