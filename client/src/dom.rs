//! Browser implementation of the controller host traits.
//!
//! Elements are looked up by id on every call so a page that lacks one
//! simply skips that step. Listener closures live as long as the page and
//! are leaked with `Closure::forget`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, DocumentReadyState, Element, HtmlImageElement, Storage, Window};

use crate::image_reveal::{RevealHost, RevealStyle};
use crate::search_status::SearchHost;
use crate::theme::ThemeHost;

const SEARCH_FORM_ID: &str = "searchForm";
const STATUS_ID: &str = "status";
const SPINNER_ID: &str = "spinner";
const SEARCH_BUTTON_ID: &str = "searchBtn";
const SEARCH_INPUT_ID: &str = "word";
const DARK_TOGGLE_ID: &str = "darkToggle";
const IMAGES_SELECTOR: &str = ".images img";

/// The live `window` and `document`.
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    /// `None` outside a browser window (e.g. inside a worker).
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn storage(&self) -> Option<Storage> {
        match self.window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                None
            }
        }
    }

    fn listen(&self, id: &str, event: &str, handler: Box<dyn Fn()>) {
        let Some(target) = self.element(id) else {
            return;
        };
        let callback = Closure::<dyn Fn()>::wrap(handler);
        log_failure(
            "add event listener",
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()),
        );
        callback.forget();
    }
}

fn log_failure<T>(action: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::debug!("{action} failed: {err:?}");
    }
}

impl SearchHost for BrowserPage {
    fn set_status_text(&self, text: &str) {
        if let Some(status) = self.element(STATUS_ID) {
            status.set_text_content(Some(text));
        }
    }

    fn set_spinner_hidden(&self, hidden: bool) {
        if let Some(spinner) = self.element(SPINNER_ID) {
            log_failure(
                "set spinner aria-hidden",
                spinner.set_attribute("aria-hidden", if hidden { "true" } else { "false" }),
            );
        }
    }

    fn set_submit_disabled(&self, disabled: bool) {
        if let Some(button) = self.element(SEARCH_BUTTON_ID) {
            log_failure("toggle submit disabled", button.toggle_attribute_with_force("disabled", disabled));
        }
    }

    fn on_search_submit(&self, handler: Box<dyn Fn()>) {
        self.listen(SEARCH_FORM_ID, "submit", handler);
    }

    fn on_search_input(&self, handler: Box<dyn Fn()>) {
        self.listen(SEARCH_INPUT_ID, "input", handler);
    }
}

impl ThemeHost for BrowserPage {
    fn root_has_class(&self, class: &str) -> bool {
        self.document
            .document_element()
            .is_some_and(|root| root.class_list().contains(class))
    }

    fn set_root_class(&self, class: &str, present: bool) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        let class_list = root.class_list();
        if present {
            log_failure("add root class", class_list.add_1(class));
        } else {
            log_failure("remove root class", class_list.remove_1(class));
        }
    }

    fn load_preference(&self, key: &str) -> Option<String> {
        match self.storage()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("read {key} failed: {err:?}");
                None
            }
        }
    }

    fn store_preference(&self, key: &str, value: &str) -> bool {
        let Some(storage) = self.storage() else {
            return false;
        };
        match storage.set_item(key, value) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("write {key} failed: {err:?}");
                false
            }
        }
    }

    fn on_theme_toggle(&self, handler: Box<dyn Fn()>) {
        self.listen(DARK_TOGGLE_ID, "click", handler);
    }
}

impl RevealHost for BrowserPage {
    type Image = HtmlImageElement;

    fn reveal_images(&self) -> Vec<HtmlImageElement> {
        let nodes = match self.document.query_selector_all(IMAGES_SELECTOR) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::debug!("query {IMAGES_SELECTOR} failed: {err:?}");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_ref::<HtmlImageElement>().cloned())
            .collect()
    }

    fn set_image_style(&self, image: &HtmlImageElement, style: &RevealStyle) {
        let css = image.style();
        if let Some(transition) = style.transition {
            log_failure("set transition", css.set_property("transition", transition));
        }
        log_failure("set opacity", css.set_property("opacity", style.opacity));
        log_failure("set transform", css.set_property("transform", style.transform));
    }

    fn image_complete(&self, image: &HtmlImageElement) -> bool {
        image.complete()
    }

    fn on_image_load(&self, image: &HtmlImageElement, handler: Rc<dyn Fn()>) {
        let callback = Closure::<dyn Fn()>::wrap(Box::new(move || handler()));
        image.set_onload(Some(callback.as_ref().unchecked_ref()));
        callback.forget();
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }

    fn request_frame(&self, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || task());
        log_failure(
            "request animation frame",
            self.window
                .request_animation_frame(callback.unchecked_ref::<js_sys::Function>()),
        );
    }

    fn add_body_class(&self, class: &str) {
        if let Some(body) = self.document.body() {
            log_failure("add body class", body.class_list().add_1(class));
        }
    }

    fn on_content_ready(&self, task: Box<dyn FnOnce()>) {
        // The module loads asynchronously, so parsing may already be done.
        if self.document.ready_state() != DocumentReadyState::Loading {
            task();
            return;
        }
        let callback = Closure::once_into_js(move || task());
        log_failure(
            "listen for DOMContentLoaded",
            self.document
                .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()),
        );
    }
}
