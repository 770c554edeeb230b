//! Matcher properties: index shape, oracle agreement, policy equivalence.

use crate::common::oracle_contains;
use pagesift::{build_index, search_with_policy, MatchPolicy, PageRecord};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so random tokens actually hit.
fn text_strategy(max: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[abcABCéÉ .]{{0,{}}}", max)).unwrap()
}

fn record_strategy() -> impl Strategy<Value = PageRecord> {
    (
        text_strategy(6),
        text_strategy(10),
        text_strategy(30),
        prop::option::of(prop::string::string_regex("[abcAB ,]{0,12}").unwrap()),
    )
        .prop_map(|(url, title, content, keywords)| PageRecord {
            url,
            title,
            content,
            keywords,
        })
}

fn site_strategy() -> impl Strategy<Value = Vec<PageRecord>> {
    prop::collection::vec(record_strategy(), 0..10)
}

fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcABé.]{1,3}").unwrap()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_index_is_an_order_preserving_map(site in site_strategy()) {
        let index = build_index(site.clone());
        prop_assert_eq!(index.len(), site.len());
        prop_assert!(index.records().eq(site.iter()));
    }

    #[test]
    fn prop_single_term_agrees_with_oracle(site in site_strategy(), term in token_strategy()) {
        let index = build_index(site.clone());
        let results = search_with_policy(&index, &term, MatchPolicy::SingleTerm);
        let expected: Vec<&PageRecord> = site.iter().filter(|p| oracle_contains(p, &term)).collect();
        prop_assert_eq!(results, expected);
    }

    #[test]
    fn prop_all_keywords_agrees_with_oracle(
        site in site_strategy(),
        tokens in prop::collection::vec(token_strategy(), 1..4),
    ) {
        let index = build_index(site.clone());
        let query = tokens.join("  ");
        let results = search_with_policy(&index, &query, MatchPolicy::AllKeywords);
        let expected: Vec<&PageRecord> = site
            .iter()
            .filter(|p| tokens.iter().all(|t| oracle_contains(p, t)))
            .collect();
        prop_assert_eq!(results, expected);
    }

    #[test]
    fn prop_one_token_policies_agree(site in site_strategy(), term in token_strategy()) {
        let index = build_index(site);
        let single = search_with_policy(&index, &term, MatchPolicy::SingleTerm);
        let all = search_with_policy(&index, &term, MatchPolicy::AllKeywords);
        prop_assert_eq!(single, all);
    }

    #[test]
    fn prop_adding_a_token_never_adds_results(
        site in site_strategy(),
        first in token_strategy(),
        second in token_strategy(),
    ) {
        let index = build_index(site);
        let narrow = search_with_policy(&index, &format!("{} {}", first, second), MatchPolicy::AllKeywords);
        let broad = search_with_policy(&index, &first, MatchPolicy::AllKeywords);
        prop_assert!(narrow.iter().all(|p| broad.iter().any(|b| std::ptr::eq(*b, *p))));
    }
}
