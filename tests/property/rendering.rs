//! Rendering properties: escaping, highlighting, idempotent replacement.

use crate::common::{strip_marks, unescape_html};
use pagesift::{
    build_index, highlight, parse_query, render_results, search, MemorySurface, PageRecord,
    RenderOptions, Renderer,
};
use proptest::prelude::*;

fn nasty_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C<>&\"' mark/]{0,40}").unwrap()
}

fn nasty_term() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c<>&\"'mark]{1,4}").unwrap()
}

/// Every `&` must open one of the entities the escaper produces.
fn only_known_entities(s: &str) -> bool {
    s.match_indices('&').all(|(i, _)| {
        let rest = &s[i..];
        ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"]
            .iter()
            .any(|e| rest.starts_with(e))
    })
}

proptest! {
    #[test]
    fn prop_highlight_escapes_everything_outside_marks(
        text in nasty_text(),
        terms in prop::collection::vec(nasty_term(), 0..3),
    ) {
        let html = highlight(&text, &terms);
        let bare = strip_marks(&html);
        prop_assert!(!bare.contains('<'));
        prop_assert!(!bare.contains('>'));
        prop_assert!(!bare.contains('"'));
        prop_assert!(!bare.contains('\''));
        prop_assert!(only_known_entities(&bare));
        prop_assert_eq!(unescape_html(&bare), text);
    }

    #[test]
    fn prop_marks_are_balanced(
        text in nasty_text(),
        terms in prop::collection::vec(nasty_term(), 0..3),
    ) {
        let html = highlight(&text, &terms);
        prop_assert_eq!(html.matches("<mark>").count(), html.matches("</mark>").count());
    }

    #[test]
    fn prop_no_results_message_never_echoes_raw_input(query in nasty_text()) {
        let html = render_results(&[], &parse_query(&query), &RenderOptions::default());
        let inner = html
            .trim_start_matches("<p>No results found for \"<strong>")
            .trim_end_matches("</strong>\"</p>");
        prop_assert!(!inner.contains('<'));
        prop_assert!(only_known_entities(inner));
    }

    #[test]
    fn prop_render_twice_is_idempotent(
        title in nasty_text(),
        content in nasty_text(),
        query in nasty_term(),
    ) {
        let index = build_index(vec![PageRecord::new("/p", &title, &content)]);
        let results = search(&index, &query);
        let parsed = parse_query(&query);
        let renderer = Renderer::default();
        let mut surface = MemorySurface::default();

        renderer.render(&mut surface, &results, &parsed);
        let first = surface.to_html();
        renderer.render(&mut surface, &results, &parsed);

        prop_assert_eq!(surface.results_count(), 1);
        prop_assert_eq!(surface.to_html(), first);
    }
}
