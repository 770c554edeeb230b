// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Escape-then-emphasize highlighting.
//!
//! Matches are found on the raw text, then every segment (matched or not)
//! is HTML-escaped on its way out and matched segments get wrapped in
//! `<mark>`. The result is the same as escaping first and highlighting
//! second, minus the two classic bugs of doing it on the escaped string:
//! a term like `amp` splitting `&amp;`, and a term like `mark` matching the
//! tags a previous term inserted.

use crate::util::html::push_escaped;
use crate::util::pattern::literal_pattern;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Escape `text` and wrap every case-insensitive occurrence of any term.
///
/// With no usable terms this is plain [`escape_html`](crate::util::html::escape_html).
pub fn highlight<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let Some(pattern) = literal_pattern(terms) else {
        push_escaped(&mut out, text);
        return out;
    };

    let mut last = 0;
    for m in pattern.find_iter(text) {
        push_escaped(&mut out, &text[last..m.start()]);
        out.push_str(MARK_OPEN);
        push_escaped(&mut out, m.as_str());
        out.push_str(MARK_CLOSE);
        last = m.end();
    }
    push_escaped(&mut out, &text[last..]);
    out
}
