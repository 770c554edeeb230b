// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The input controller: turns form submits and keystrokes into searches.
//!
//! Page data comes in through the constructor and is indexed exactly once.
//! After that every event runs synchronously: read the input, match, render.
//! The only thing that waits is live search, which goes through a
//! [`Debouncer`] so a burst of typing costs one search.
//!
//! ```ignore
//! let mut widget = SearchWidget::new(pages, WidgetConfig::default());
//! if widget.attach(&surface) {
//!     widget.submit(&mut surface);              // on form submit
//!     widget.input_changed(Instant::now());      // on every keystroke
//!     widget.poll(&mut surface, Instant::now()); // from the host's timer
//! }
//! ```

pub mod debounce;

use crate::config::WidgetConfig;
use crate::index::build_index;
use crate::render::Renderer;
use crate::search::{parse_query, search_query};
use crate::surface::HostSurface;
use crate::types::{PageIndex, PageRecord};
use log::{debug, info};
use std::time::Instant;

pub use debounce::Debouncer;

/// What an event ended up doing to the results container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing ran: widget not attached, or no search was due.
    Idle,
    /// The query was blank, so results were removed.
    Cleared,
    /// A search ran and its results (possibly none) were rendered.
    Rendered { matches: usize },
}

pub struct SearchWidget {
    index: PageIndex,
    config: WidgetConfig,
    renderer: Renderer,
    debouncer: Debouncer,
    attached: bool,
}

impl SearchWidget {
    pub fn new(pages: Vec<PageRecord>, config: WidgetConfig) -> Self {
        let index = build_index(pages);
        info!("search ready with {} pages", index.len());
        Self {
            renderer: Renderer::new(config.render_options()),
            debouncer: Debouncer::new(config.debounce()),
            index,
            config,
            attached: false,
        }
    }

    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Check that the surface has a form and an input to drive the widget.
    ///
    /// Missing elements are not an error: the widget stays detached and every
    /// event handler becomes a no-op.
    pub fn attach<S: HostSurface + ?Sized>(&mut self, surface: &S) -> bool {
        self.attached = surface.has_form() && surface.has_input();
        if !self.attached {
            debug!(
                "#{} or #{} missing, search not wired",
                self.config.ids.form, self.config.ids.input
            );
        }
        self.attached
    }

    /// Match without rendering.
    pub fn search(&self, raw_query: &str) -> Vec<&PageRecord> {
        search_query(&self.index, &parse_query(raw_query), self.config.policy)
    }

    /// Run `raw_query` and render the outcome. Blank queries clear results.
    pub fn run_query<S: HostSurface + ?Sized>(
        &self,
        surface: &mut S,
        raw_query: &str,
    ) -> SearchOutcome {
        let query = parse_query(raw_query);
        if query.is_empty() {
            self.renderer.clear(surface);
            return SearchOutcome::Cleared;
        }

        let results = search_query(&self.index, &query, self.config.policy);
        self.renderer.render(surface, &results, &query);
        SearchOutcome::Rendered {
            matches: results.len(),
        }
    }

    /// Form submit: search immediately with the input's current value.
    ///
    /// Also drops any pending live search, which would only repeat this one.
    pub fn submit<S: HostSurface + ?Sized>(&mut self, surface: &mut S) -> SearchOutcome {
        if !self.attached {
            return SearchOutcome::Idle;
        }
        self.debouncer.cancel();
        self.run_current(surface)
    }

    /// Keystroke: (re)schedule a live search `debounce_ms` after `now`.
    pub fn input_changed(&mut self, now: Instant) {
        if self.attached && self.config.live_search {
            self.debouncer.schedule(now);
        }
    }

    /// Timer tick: run the pending live search if its quiet period is over.
    pub fn poll<S: HostSurface + ?Sized>(&mut self, surface: &mut S, now: Instant) -> SearchOutcome {
        if !self.attached || !self.debouncer.fire_if_due(now) {
            return SearchOutcome::Idle;
        }
        self.run_current(surface)
    }

    /// When the pending live search is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Search with whatever is in the input right now.
    pub fn run_current<S: HostSurface + ?Sized>(&self, surface: &mut S) -> SearchOutcome {
        let raw = surface.query_value().unwrap_or_default();
        self.run_query(surface, &raw)
    }
}
