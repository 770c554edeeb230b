// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings: the widget on a real page.
//!
//! The host page hands over its page data explicitly; nothing is read from
//! globals. If the form or input is missing, mounting quietly does nothing.
//!
//! ```js
//! import init, { mountSearch } from "./pagesift.js";
//!
//! await init();
//! const search = mountSearch(window.simpleSearchData, { debounceMs: 250 });
//! ```
//!
//! Live search uses one `setTimeout` handle per widget. Each `input` event
//! clears it and sets a fresh one, so the search runs once per quiet period.
//! A submit clears it too.

use crate::config::WidgetConfig;
use crate::pages::pages_from_value;
use crate::runtime::console;
use crate::surface::{ElementIds, HostSurface, RESULTS_CLASS};
use crate::widget::{SearchOutcome, SearchWidget};
use log::{warn, LevelFilter};
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, Window};

fn js_err(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// The live DOM as a [`HostSurface`].
struct DomSurface {
    document: Document,
    ids: ElementIds,
}

impl DomSurface {
    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn form(&self) -> Option<Element> {
        self.element(&self.ids.form)
    }

    fn input(&self) -> Option<Element> {
        self.element(&self.ids.input)
    }
}

impl HostSurface for DomSurface {
    fn has_form(&self) -> bool {
        self.form().is_some()
    }

    fn has_input(&self) -> bool {
        self.input().is_some()
    }

    fn query_value(&self) -> Option<String> {
        self.input()?
            .dyn_into::<HtmlInputElement>()
            .ok()
            .map(|input| input.value())
    }

    fn remove_results(&mut self) {
        while let Some(stale) = self.element(&self.ids.results) {
            stale.remove();
        }
    }

    fn insert_results(&mut self, inner_html: &str) {
        let Some(form) = self.form() else {
            return;
        };
        let Some(parent) = form.parent_node() else {
            return;
        };
        let container = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                warn!("could not create results container: {:?}", e);
                return;
            }
        };
        container.set_id(&self.ids.results);
        container.set_class_name(RESULTS_CLASS);
        container.set_inner_html(inner_html);
        if let Err(e) = parent.insert_before(&container, form.next_sibling().as_ref()) {
            warn!("could not insert results container: {:?}", e);
        }
    }
}

/// A pending `setTimeout` that is cancelled and re-armed on every input.
struct TimeoutTask {
    window: Window,
    callback: Closure<dyn FnMut()>,
    delay_ms: i32,
    handle: Option<i32>,
}

impl TimeoutTask {
    fn reschedule(&mut self) -> Result<(), JsValue> {
        self.cancel();
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                self.delay_ms,
            )?;
        self.handle = Some(handle);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

/// A mounted widget, for programmatic searches from JavaScript.
#[wasm_bindgen]
pub struct SearchHandle {
    widget: Rc<RefCell<SearchWidget>>,
    surface: Rc<RefCell<DomSurface>>,
}

#[wasm_bindgen]
impl SearchHandle {
    /// Number of indexed pages.
    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.widget.borrow().index().len()
    }

    /// Search and render `query`. Returns the match count (0 for a blank query,
    /// which clears the results instead).
    pub fn search(&self, query: &str) -> usize {
        let outcome = self
            .widget
            .borrow()
            .run_query(&mut *self.surface.borrow_mut(), query);
        match outcome {
            SearchOutcome::Rendered { matches } => matches,
            SearchOutcome::Idle | SearchOutcome::Cleared => 0,
        }
    }

    /// Remove the results container.
    pub fn clear(&self) {
        self.surface.borrow_mut().remove_results();
    }
}

/// Build the index from `pages` and wire the search form.
///
/// `pages` is an array of `{url, title, content, keywords?}`; `undefined` or
/// `null` means no pages. `config` is an optional [`WidgetConfig`] object.
/// Returns `undefined` when the form or input is not on the page.
#[wasm_bindgen(js_name = mountSearch)]
pub fn mount_search(pages: JsValue, config: JsValue) -> Result<Option<SearchHandle>, JsValue> {
    console::init(LevelFilter::Info);

    let raw: serde_json::Value = serde_wasm_bindgen::from_value(pages).map_err(js_err)?;
    let pages = pages_from_value(raw).map_err(js_err)?;
    let config: WidgetConfig = if config.is_undefined() || config.is_null() {
        WidgetConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(js_err)?
    };

    let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
    let document = window.document().ok_or_else(|| js_err("no document"))?;
    let surface = DomSurface {
        document,
        ids: config.ids.clone(),
    };
    let live_search = config.live_search;
    let delay_ms = i32::try_from(config.debounce_ms).unwrap_or(i32::MAX);

    let mut widget = SearchWidget::new(pages, config);
    if !widget.attach(&surface) {
        return Ok(None);
    }

    let widget = Rc::new(RefCell::new(widget));
    let surface = Rc::new(RefCell::new(surface));

    let task = if live_search {
        let callback = {
            let widget = Rc::clone(&widget);
            let surface = Rc::clone(&surface);
            Closure::<dyn FnMut()>::new(move || {
                widget.borrow().run_current(&mut *surface.borrow_mut());
            })
        };
        let task = Rc::new(RefCell::new(TimeoutTask {
            window,
            callback,
            delay_ms,
            handle: None,
        }));
        wire_live_search(&surface, &task)?;
        Some(task)
    } else {
        None
    };

    wire_submit(&widget, &surface, task)?;

    Ok(Some(SearchHandle { widget, surface }))
}

fn wire_submit(
    widget: &Rc<RefCell<SearchWidget>>,
    surface: &Rc<RefCell<DomSurface>>,
    task: Option<Rc<RefCell<TimeoutTask>>>,
) -> Result<(), JsValue> {
    let Some(form) = surface.borrow().form() else {
        return Ok(());
    };

    let widget = Rc::clone(widget);
    let surface = Rc::clone(surface);
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        if let Some(task) = &task {
            task.borrow_mut().cancel();
        }
        widget.borrow_mut().submit(&mut *surface.borrow_mut());
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    on_submit.forget();
    Ok(())
}

fn wire_live_search(
    surface: &Rc<RefCell<DomSurface>>,
    task: &Rc<RefCell<TimeoutTask>>,
) -> Result<(), JsValue> {
    let Some(input) = surface.borrow().input() else {
        return Ok(());
    };

    let task = Rc::clone(task);
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(e) = task.borrow_mut().reschedule() {
            warn!("could not schedule live search: {:?}", e);
        }
    });
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();
    Ok(())
}
