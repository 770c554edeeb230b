//! Snippet extraction on realistic content.

use crate::common::sample_site;
use pagesift::{parse_query, snippet, snippet_for_query, MatchPolicy, SnippetOptions, ELLIPSIS};

fn long_content() -> String {
    let filler = "lorem ipsum dolor sit amet ".repeat(10);
    format!("{}the needle sits here{}", filler, filler)
}

#[test]
fn test_long_content_gets_both_markers() {
    let content = long_content();
    let out = snippet(&content, "NEEDLE", &SnippetOptions::default());
    assert!(out.starts_with(ELLIPSIS));
    assert!(out.ends_with(ELLIPSIS));
    assert!(out.contains("needle sits here"));
    // 50 before + 100 from the match, plus two markers
    assert_eq!(out.chars().count(), 150 + 2 * ELLIPSIS.len());
}

#[test]
fn test_long_content_without_match_uses_fallback() {
    let content = long_content();
    let out = snippet(&content, "absent", &SnippetOptions::default());
    assert_eq!(out.chars().count(), 150 + ELLIPSIS.len());
    assert!(content.starts_with(out.trim_end_matches(ELLIPSIS)));
}

#[test]
fn test_site_snippets_are_whole_when_window_covers_page() {
    let wide = SnippetOptions {
        before: 200,
        after: 200,
        fallback_length: 200,
    };
    let query = parse_query("the pies");
    for page in sample_site() {
        let out = snippet_for_query(&page.content, &query, MatchPolicy::AllKeywords, &wide);
        assert_eq!(out, page.content);
    }
}
