// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page index construction.
//!
//! The whole "index" is a flat array: each record's searchable fields,
//! lowercased once, next to a shared handle on the original. Searching is a
//! linear scan over it, which is plenty for a static site's worth of pages.
//!
//! # Invariants
//!
//! 1. **COUNT_PRESERVED**: `build_index(p).len() == p.len()`
//! 2. **ORDER_PRESERVED**: `index.pages()[i].original == p[i]`
//! 3. **LOWERCASE**: every indexed field equals its source lowercased

use crate::types::{IndexedPage, PageIndex, PageRecord};
use crate::util::normalize::parse_keywords;
use std::sync::Arc;

/// Build the index for a collection of pages.
///
/// Pure and total: no input is rejected and an empty collection gives an
/// empty index.
pub fn build_index(records: impl IntoIterator<Item = PageRecord>) -> PageIndex {
    let pages = records.into_iter().map(index_page).collect();
    PageIndex { pages }
}

fn index_page(record: PageRecord) -> IndexedPage {
    let keywords = record
        .keywords
        .as_deref()
        .map(parse_keywords)
        .unwrap_or_default();

    IndexedPage {
        url: record.url.to_lowercase(),
        title: record.title.to_lowercase(),
        content: record.content.to_lowercase(),
        keywords,
        original: Arc::new(record),
    }
}
