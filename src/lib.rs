// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword search for static sites: a flat index, substring matching,
//! snippets and highlighted results.
//!
//! The site supplies its pages up front. We lowercase every searchable field
//! once, then each query is a linear scan: every whitespace-separated token
//! must appear somewhere in a page (title, content, url or keywords). Results
//! keep page order, there is no ranking.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  pages.rs   │────▶│   index.rs   │────▶│  search/    │────▶│  render/    │
//! │ (JSON load, │     │ (build_index)│     │ (policies,  │     │ (highlight, │
//! │ validation) │     │              │     │  AND match) │     │  snippet)   │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                                                 ▲                   │
//!                                                 │                   ▼
//!                                          ┌─────────────┐     ┌─────────────┐
//!                                          │  widget/    │────▶│ surface.rs  │
//!                                          │ (submit,    │     │ (DOM or     │
//!                                          │  debounce)  │     │  in-memory) │
//!                                          └─────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use pagesift::{build_index, search, PageRecord};
//!
//! let pages = vec![
//!     PageRecord::new("/a", "Apple Pie", "A pie made of apples").with_keywords("fruit,dessert"),
//! ];
//! let index = build_index(pages);
//!
//! assert_eq!(search(&index, "apple dessert").len(), 1);
//! assert!(search(&index, "apple banana").is_empty());
//! ```

pub mod config;
pub mod index;
pub mod pages;
pub mod render;
pub mod search;
pub mod snippet;
pub mod surface;
pub mod testing;
pub mod types;
pub mod util;
pub mod widget;

#[cfg(feature = "wasm")]
pub mod runtime;

// Re-exports for public API
pub use config::{ConfigError, WidgetConfig};
pub use index::build_index;
pub use pages::{load_pages, load_pages_from_path, pages_from_value, PageDataError};
pub use render::{highlight, render_results, RenderOptions, Renderer};
pub use search::{parse_query, search, search_query, search_with_policy};
pub use snippet::{snippet, snippet_for_query, SnippetOptions, ELLIPSIS};
pub use surface::{ElementIds, HostSurface, MemorySurface};
pub use types::{IndexedPage, MatchPolicy, PageIndex, PageRecord, Query};
pub use util::html::escape_html;
pub use util::normalize::{normalize, parse_keywords};
pub use widget::{Debouncer, SearchOutcome, SearchWidget};
