//! Matcher behavior over a realistic little site.

use crate::common::{sample_index, urls};
use pagesift::{search, search_with_policy, MatchPolicy};

#[test]
fn test_title_match() {
    let index = sample_index();
    assert_eq!(urls(&search(&index, "ownership")), vec!["/posts/rust-ownership"]);
}

#[test]
fn test_keyword_only_match() {
    let index = sample_index();
    // "memory" appears only in the keyword list, after a blank entry
    assert_eq!(urls(&search(&index, "memory")), vec!["/posts/rust-ownership"]);
}

#[test]
fn test_shared_keyword_keeps_page_order() {
    let index = sample_index();
    assert_eq!(
        urls(&search(&index, "dessert")),
        vec!["/a", "/recipes/banana-bread"]
    );
}

#[test]
fn test_url_match() {
    let index = sample_index();
    assert_eq!(urls(&search(&index, "recipes/")), vec!["/recipes/banana-bread"]);
}

#[test]
fn test_tokens_across_fields() {
    let index = sample_index();
    // "banana" in the title, "baking" in keywords, "patience" in content
    assert_eq!(
        urls(&search(&index, "Banana baking PATIENCE")),
        vec!["/recipes/banana-bread"]
    );
}

#[test]
fn test_one_missing_token_excludes_page() {
    let index = sample_index();
    assert!(search(&index, "banana ownership").is_empty());
}

#[test]
fn test_special_characters_match_literally() {
    let index = sample_index();
    assert_eq!(urls(&search(&index, "<this>")), vec!["/about"]);
    assert_eq!(urls(&search(&index, "bananas &")), vec!["/recipes/banana-bread"]);
    assert!(search(&index, ".*").is_empty());
}

#[test]
fn test_single_term_versus_all_keywords() {
    let index = sample_index();
    let query = "pie made";
    assert_eq!(
        urls(&search_with_policy(&index, query, MatchPolicy::SingleTerm)),
        vec!["/a"]
    );

    let query = "made pie";
    assert!(search_with_policy(&index, query, MatchPolicy::SingleTerm).is_empty());
    assert_eq!(
        urls(&search_with_policy(&index, query, MatchPolicy::AllKeywords)),
        vec!["/a"]
    );
}

#[test]
fn test_blank_queries() {
    let index = sample_index();
    for query in ["", " ", "\t\n"] {
        assert!(search(&index, query).is_empty());
        assert!(search_with_policy(&index, query, MatchPolicy::SingleTerm).is_empty());
    }
}
