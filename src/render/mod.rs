// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Results rendering.
//!
//! Turns a result list into the results container's HTML, then swaps it into
//! the host surface. Everything that came from a page or from the user is
//! escaped; the only raw markup in the output is ours.
//!
//! ```text
//! <p>Found 2 results:</p>
//! <div class="search-result">
//!   <h4><a href="/a"><mark>Apple</mark> Pie</a></h4>
//!   <p class="search-snippet">A pie made of <mark>apple</mark>s</p>
//!   <p class="search-keywords">Keywords: fruit, dessert</p>
//! </div>
//! ...
//! ```

pub mod highlight;

use crate::snippet::{snippet_for_query, SnippetOptions};
use crate::surface::HostSurface;
use crate::types::{MatchPolicy, PageRecord, Query};
use crate::util::html::escape_html;
use log::debug;

pub use highlight::highlight;

/// Everything the renderer needs besides the results themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub policy: MatchPolicy,
    pub snippet: SnippetOptions,
}

/// Inner HTML of the results container.
pub fn render_results(results: &[&PageRecord], query: &Query, options: &RenderOptions) -> String {
    if results.is_empty() {
        return format!(
            r#"<p>No results found for "<strong>{}</strong>"</p>"#,
            escape_html(&query.display(options.policy))
        );
    }

    let terms = query.terms(options.policy);
    let mut html = format!("<p>Found {} results:</p>", results.len());
    for page in results {
        html.push_str(&render_result(page, query, &terms, options));
    }
    html
}

fn render_result(page: &PageRecord, query: &Query, terms: &[&str], options: &RenderOptions) -> String {
    let excerpt = snippet_for_query(&page.content, query, options.policy, &options.snippet);

    let mut html = String::from(r#"<div class="search-result">"#);
    html.push_str(&format!(
        r#"<h4><a href="{}">{}</a></h4>"#,
        escape_html(&page.url),
        highlight(&page.title, terms)
    ));
    html.push_str(&format!(
        r#"<p class="search-snippet">{}</p>"#,
        highlight(&excerpt, terms)
    ));

    let keywords = page.keyword_list();
    if !keywords.is_empty() {
        html.push_str(&format!(
            r#"<p class="search-keywords">Keywords: {}</p>"#,
            highlight(&keywords.join(", "), terms)
        ));
    }
    html.push_str("</div>");
    html
}

/// Owns the results container on a host surface.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Replace whatever results are showing with these.
    pub fn render<S: HostSurface + ?Sized>(
        &self,
        surface: &mut S,
        results: &[&PageRecord],
        query: &Query,
    ) {
        surface.remove_results();
        let html = render_results(results, query, &self.options);
        debug!("rendering {} results ({} bytes)", results.len(), html.len());
        surface.insert_results(&html);
    }

    /// Remove the results container, if any.
    pub fn clear<S: HostSurface + ?Sized>(&self, surface: &mut S) {
        surface.remove_results();
    }
}
