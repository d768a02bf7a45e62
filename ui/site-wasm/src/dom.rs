//! DOM helpers and element bindings.
//!
//! The site markup is shared between pages, so most slots are optional and
//! looked up when needed. `HomeElements` / `FilmElements` hold the few nodes
//! each controller cannot work without.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn body() -> HtmlElement {
    gloo_utils::body()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

/// `<tag class="cls">`
pub fn create_with_class(tag: &str, cls: &str) -> Result<Element, JsValue> {
    let el = create_element(tag)?;
    el.set_class_name(cls);
    Ok(el)
}

pub fn set_style(el: &Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(prop, value);
    }
}

pub fn show(el: &Element, visible: bool) {
    set_style(el, "display", if visible { "block" } else { "none" });
}

pub fn remove(el: &Element) {
    el.remove();
}

pub fn append(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn body_class(cls: &str, on: bool) {
    toggle_class(&body(), cls, on);
}

pub fn body_has_class(cls: &str) -> bool {
    has_class(&body(), cls)
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1200.0)
}

/// Resolve once the document has finished parsing.
pub async fn ready() {
    if document().ready_state() != "loading" {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_once(true);
        let _ = document().add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

pub fn navigate(url: &str) {
    let _ = window().location().set_href(url);
}

// ── Element bindings ──

macro_rules! get_sel {
    ($sel:expr) => {
        query($sel).ok_or_else(|| JsValue::from_str(&format!("missing element {}", $sel)))?
    };
}

/// Nodes the homepage controller needs.
#[derive(Clone)]
pub struct HomeElements {
    pub hero: Element,
    pub navbar: Option<Element>,
    pub brand: Option<Element>,
    pub loading_screen: Option<Element>,
    pub welcome: Option<Element>,
}

impl HomeElements {
    /// Resolve references. Call once after the document has parsed.
    pub fn bind() -> Result<HomeElements, JsValue> {
        Ok(HomeElements {
            hero: get_sel!(".hero-section"),
            navbar: query(".navbar"),
            brand: query(".navbar-brand"),
            loading_screen: by_id("loading-screen"),
            welcome: by_id("welcome-message"),
        })
    }
}

/// Nodes the film detail controller needs.
#[derive(Clone)]
pub struct FilmElements {
    pub header: Element,
    pub navbar: Option<Element>,
    pub brand: Option<Element>,
    pub details: Option<Element>,
}

impl FilmElements {
    pub fn bind() -> Result<FilmElements, JsValue> {
        Ok(FilmElements {
            header: get_sel!("#film-header"),
            navbar: query(".navbar"),
            brand: query(".navbar-brand"),
            details: by_id("film-details"),
        })
    }
}
