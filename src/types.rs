// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the page index.
//!
//! A site hands us `PageRecord`s. We keep them untouched and build one
//! `IndexedPage` per record with every searchable field lowercased up front,
//! so the matcher never normalizes anything per keystroke.
//!
//! # Invariants
//!
//! - **PageIndex**: `pages.len() == records.len()`, same order. Building is a
//!   pure map, nothing is filtered or reordered.
//! - **IndexedPage**: every string is already lowercase; `keywords` holds only
//!   trimmed, non-empty entries.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One searchable page, as supplied by the hosting site.
///
/// `keywords` is the raw comma-separated string. Missing and `null` both mean
/// "no keywords"; unknown JSON fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl PageRecord {
    pub fn new(url: &str, title: &str, content: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            keywords: None,
        }
    }

    /// Builder-style keyword setter.
    pub fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Keywords as the user typed them: trimmed, empties dropped, case kept.
    ///
    /// Used for display. Matching goes through [`IndexedPage::keywords`].
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Lowercased copy of a [`PageRecord`] plus a handle back to the original.
#[derive(Debug, Clone)]
pub struct IndexedPage {
    pub url: String,
    pub title: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub original: Arc<PageRecord>,
}

impl IndexedPage {
    /// Does any searchable field contain `needle`?
    ///
    /// `needle` must already be lowercase.
    #[inline]
    pub fn contains(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self.content.contains(needle)
            || self.url.contains(needle)
            || self.keywords.iter().any(|k| k.contains(needle))
    }
}

/// The flat index: one [`IndexedPage`] per record, in input order.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    pub(crate) pages: Vec<IndexedPage>,
}

impl PageIndex {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[IndexedPage] {
        &self.pages
    }

    /// Original records, in index order.
    pub fn records(&self) -> impl Iterator<Item = &PageRecord> {
        self.pages.iter().map(|p| p.original.as_ref())
    }
}

/// How a query decides whether a page matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchPolicy {
    /// The whole query is one substring that must appear in some field.
    SingleTerm,
    /// Every whitespace-separated token must appear in some field.
    #[default]
    AllKeywords,
}

/// A normalized query: trimmed, lowercased, and split into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub text: String,
    pub tokens: Vec<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Terms to highlight and to report in messages, per policy.
    pub fn terms(&self, policy: MatchPolicy) -> Vec<&str> {
        match policy {
            MatchPolicy::SingleTerm if !self.text.is_empty() => vec![self.text.as_str()],
            MatchPolicy::SingleTerm => Vec::new(),
            MatchPolicy::AllKeywords => self.tokens.iter().map(String::as_str).collect(),
        }
    }

    /// What the "no results" message echoes back.
    pub fn display(&self, policy: MatchPolicy) -> String {
        match policy {
            MatchPolicy::SingleTerm => self.text.clone(),
            MatchPolicy::AllKeywords => self.tokens.join(" "),
        }
    }

    /// Term that positions the snippet. Only the first token is used.
    pub fn snippet_term(&self, policy: MatchPolicy) -> &str {
        match policy {
            MatchPolicy::SingleTerm => &self.text,
            MatchPolicy::AllKeywords => self.tokens.first().map(String::as_str).unwrap_or(""),
        }
    }
}
