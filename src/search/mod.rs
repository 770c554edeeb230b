// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The matcher: a linear scan with substring containment.
//!
//! Two policies. `SingleTerm` treats the whole query as one needle.
//! `AllKeywords` splits it on whitespace and wants every token somewhere in
//! the page, though not necessarily in the same field. Either way results come
//! back in index order; there is no ranking.

pub mod utils;

use crate::types::{MatchPolicy, PageIndex, PageRecord, Query};
use log::debug;

pub use utils::parse_query;

/// Search with the default policy ([`MatchPolicy::AllKeywords`]).
///
/// An empty or whitespace-only query returns nothing; it never means "everything".
pub fn search<'a>(index: &'a PageIndex, query: &str) -> Vec<&'a PageRecord> {
    search_with_policy(index, query, MatchPolicy::default())
}

/// Search with an explicit policy.
pub fn search_with_policy<'a>(
    index: &'a PageIndex,
    query: &str,
    policy: MatchPolicy,
) -> Vec<&'a PageRecord> {
    search_query(index, &parse_query(query), policy)
}

/// Search with an already-parsed query.
pub fn search_query<'a>(
    index: &'a PageIndex,
    query: &Query,
    policy: MatchPolicy,
) -> Vec<&'a PageRecord> {
    if query.is_empty() {
        return Vec::new();
    }

    let results: Vec<&PageRecord> = index
        .pages()
        .iter()
        .filter(|page| match policy {
            MatchPolicy::SingleTerm => page.contains(&query.text),
            MatchPolicy::AllKeywords => query.tokens.iter().all(|t| page.contains(t)),
        })
        .map(|page| page.original.as_ref())
        .collect();

    debug!(
        "query {:?} ({:?}) matched {} of {} pages",
        query.text,
        policy,
        results.len(),
        index.len()
    );
    results
}
