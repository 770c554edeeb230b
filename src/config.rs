// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Every field has a default, so `{}` (or no config at all) gives the stock
//! widget: `#search-form`, `#search-input`, results in `#search-results`,
//! multi-keyword matching, live search with a 300 ms quiet period.
//!
//! ```json
//! {
//!   "formId": "search-form",
//!   "inputId": "search-input",
//!   "resultsId": "search-results",
//!   "policy": "allKeywords",
//!   "liveSearch": true,
//!   "debounceMs": 300,
//!   "snippet": { "before": 50, "after": 100, "fallbackLength": 150 }
//! }
//! ```

use crate::render::RenderOptions;
use crate::snippet::SnippetOptions;
use crate::surface::ElementIds;
use crate::types::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default quiet period before a live search fires.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    #[serde(flatten)]
    pub ids: ElementIds,
    pub policy: MatchPolicy,
    /// Search while typing, not only on submit.
    pub live_search: bool,
    pub debounce_ms: u64,
    pub snippet: SnippetOptions,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            policy: MatchPolicy::default(),
            live_search: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            snippet: SnippetOptions::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            policy: self.policy,
            snippet: self.snippet,
        }
    }
}
