//! Shared test utilities and fixtures.

#![allow(dead_code)]

use pagesift::{build_index, PageIndex, PageRecord};

// Re-export canonical test utilities from pagesift::testing
pub use pagesift::testing::{apple_pie, make_page, sample_site};

/// Index over [`sample_site`].
pub fn sample_index() -> PageIndex {
    build_index(sample_site())
}

/// URLs of a result list, for compact assertions.
pub fn urls(results: &[&PageRecord]) -> Vec<String> {
    results.iter().map(|r| r.url.clone()).collect()
}

/// Reference matcher: the obviously-correct definition of "p matches token t".
///
/// No index, no precomputation: lowercase every field on the spot.
pub fn oracle_contains(page: &PageRecord, token: &str) -> bool {
    let token = token.to_lowercase();
    page.title.to_lowercase().contains(&token)
        || page.content.to_lowercase().contains(&token)
        || page.url.to_lowercase().contains(&token)
        || page
            .keywords
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .any(|k| k.contains(&token))
}

/// Remove every `<mark>`/`</mark>` the highlighter inserted.
pub fn strip_marks(html: &str) -> String {
    html.replace("<mark>", "").replace("</mark>", "")
}

/// Undo [`pagesift::escape_html`].
pub fn unescape_html(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}
