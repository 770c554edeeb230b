// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Always compiled but hidden from documentation, so `tests/` can use the
//! same fixtures as the unit tests.

#![doc(hidden)]

use crate::types::PageRecord;

/// A page with no keywords.
pub fn make_page(url: &str, title: &str, content: &str) -> PageRecord {
    PageRecord::new(url, title, content)
}

/// The canonical single-page fixture.
pub fn apple_pie() -> PageRecord {
    PageRecord::new("/a", "Apple Pie", "A pie made of apples").with_keywords("fruit,dessert")
}

/// A small, varied site: mixed case, keywords with junk, a URL-only match,
/// and characters that need escaping.
pub fn sample_site() -> Vec<PageRecord> {
    vec![
        apple_pie(),
        make_page(
            "/posts/rust-ownership",
            "Understanding Rust Ownership",
            "Ownership is Rust's most unique feature. Borrowing lets you reference data \
             without taking ownership, and lifetimes make sure references stay valid.",
        )
        .with_keywords("rust, programming, , memory "),
        make_page(
            "/recipes/banana-bread",
            "Banana Bread",
            "Ripe bananas & a little patience make the best bread.",
        )
        .with_keywords("baking,dessert,"),
        make_page(
            "/about",
            "About <this> site",
            "Written by \"someone\" who likes pies and 'quotes'.",
        ),
    ]
}
