// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The host surface: the little piece of a document the widget talks to.
//!
//! Three things matter: a search form, a query input, and a results
//! container that always sits directly after the form. The browser build
//! implements this on the real DOM (`runtime::wasm`); [`MemorySurface`] is a
//! plain-Rust document used by tests and the CLI's HTML preview.

use serde::{Deserialize, Serialize};

/// Class carried by every results container.
pub const RESULTS_CLASS: &str = "search-results";

/// Element ids the widget looks up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    #[serde(rename = "formId")]
    pub form: String,
    #[serde(rename = "inputId")]
    pub input: String,
    #[serde(rename = "resultsId")]
    pub results: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "search-form".to_string(),
            input: "search-input".to_string(),
            results: "search-results".to_string(),
        }
    }
}

/// What the widget needs from a document.
pub trait HostSurface {
    /// Is the search form present?
    fn has_form(&self) -> bool;

    /// Is the query input present?
    fn has_input(&self) -> bool;

    /// Current text of the query input, if there is one.
    fn query_value(&self) -> Option<String>;

    /// Remove the results container. No-op when there is none.
    fn remove_results(&mut self);

    /// Insert a results container holding `inner_html` right after the form.
    ///
    /// Callers remove the previous container first.
    fn insert_results(&mut self, inner_html: &str);
}

/// One top-level element of a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub class: String,
    pub inner_html: String,
}

impl Node {
    fn to_html(&self) -> String {
        let mut attrs = format!(r#" id="{}""#, self.id);
        if !self.class.is_empty() {
            attrs.push_str(&format!(r#" class="{}""#, self.class));
        }
        format!("<div{}>{}</div>", attrs, self.inner_html)
    }
}

/// An in-memory document: an ordered list of top-level elements plus the
/// query input's value.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    ids: ElementIds,
    input: Option<String>,
    nodes: Vec<Node>,
}

impl MemorySurface {
    /// A document holding the form (with its input) and nothing else.
    pub fn new(ids: ElementIds) -> Self {
        let form = Node {
            id: ids.form.clone(),
            class: String::new(),
            inner_html: String::new(),
        };
        Self {
            ids,
            input: Some(String::new()),
            nodes: vec![form],
        }
    }

    /// A document with neither form nor input.
    pub fn empty(ids: ElementIds) -> Self {
        Self {
            ids,
            input: None,
            nodes: Vec::new(),
        }
    }

    /// Type into the query input. Creates the input if it was missing.
    pub fn set_query(&mut self, value: &str) {
        self.input = Some(value.to_string());
    }

    /// Append a sibling element after everything else.
    pub fn push_node(&mut self, id: &str) {
        self.nodes.push(Node {
            id: id.to_string(),
            class: String::new(),
            inner_html: String::new(),
        });
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of results containers currently in the document.
    pub fn results_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.id == self.ids.results)
            .count()
    }

    /// Inner HTML of the results container, if present.
    pub fn results_html(&self) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.id == self.ids.results)
            .map(|n| n.inner_html.as_str())
    }

    /// Serialize the document, one element per line.
    pub fn to_html(&self) -> String {
        self.nodes
            .iter()
            .map(Node::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new(ElementIds::default())
    }
}

impl HostSurface for MemorySurface {
    fn has_form(&self) -> bool {
        self.nodes.iter().any(|n| n.id == self.ids.form)
    }

    fn has_input(&self) -> bool {
        self.input.is_some()
    }

    fn query_value(&self) -> Option<String> {
        self.input.clone()
    }

    fn remove_results(&mut self) {
        let results_id = &self.ids.results;
        self.nodes.retain(|n| &n.id != results_id);
    }

    fn insert_results(&mut self, inner_html: &str) {
        let Some(form_at) = self.nodes.iter().position(|n| n.id == self.ids.form) else {
            return;
        };
        self.nodes.insert(
            form_at + 1,
            Node {
                id: self.ids.results.clone(),
                class: RESULTS_CLASS.to_string(),
                inner_html: inner_html.to_string(),
            },
        );
    }
}
