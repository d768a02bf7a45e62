//! Event binding helpers and the page chrome both pages share.
//!
//! Listeners live for the whole page, so closures are leaked with `forget`.

use crate::dom;
use crate::navigation;
use crate::state;
use bruut_core::transition::Timeline;
use bruut_core::{SiteConfig, welcome};
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget};

/// Attach `f` to `event` on `target` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, f: F)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        gloo_console::error!(format!("failed to bind {}", event), e);
    }
    cb.forget();
}

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        $crate::events::listen::<web_sys::MouseEvent, _>($el.as_ref(), "click", $cb);
    }};
}

// ── Shared chrome ──

/// Footer year.
pub fn set_current_year() {
    if let Some(el) = dom::by_id("current-year") {
        let year = js_sys::Date::new_0().get_full_year();
        dom::set_text(&el, &year.to_string());
    }
}

/// Frosted navbar once the page scrolls past 50px.
pub fn bind_navbar_scroll(navbar: Option<&Element>) {
    let Some(navbar) = navbar.cloned() else {
        return;
    };
    listen(dom::window().as_ref(), "scroll", move |_: web_sys::Event| {
        let scrolled = dom::window().scroll_y().unwrap_or(0.0) > 50.0;
        dom::toggle_class(&navbar, "scrolled", scrolled);
    });
}

/// Homepage logo: plain reload of the homepage.
pub fn bind_home_logo(brand: Option<&Element>, config: &SiteConfig) {
    let Some(brand) = brand else {
        return;
    };
    let home = config.home_page.clone();
    on_click!(brand, move |_: web_sys::MouseEvent| {
        dom::navigate(&home);
    });
}

/// Film page logo: glass fade, then back to the homepage.
pub fn bind_film_logo(brand: Option<&Element>, config: &SiteConfig) {
    let Some(brand) = brand else {
        return;
    };
    let target = config.home_link_internal();
    on_click!(brand, move |e: web_sys::MouseEvent| {
        e.prevent_default();
        if dom::body_has_class(crate::transition::PAGE_TRANSITIONING) {
            return;
        }
        navigation::mark_internal_navigation();
        crate::transition::spawn(Timeline::leave_to_home(target.clone()));
    });
}

/// Render `?welcome=` into `slot` when the value is acceptable.
pub fn render_welcome(slot: Option<&Element>) {
    let (Some(slot), Some(raw)) = (slot, state::query_param("welcome")) else {
        return;
    };
    match welcome::parse(&raw) {
        Some(html) => {
            dom::set_inner_html(slot, &html);
            dom::add_class(slot, "visible");
        }
        None => gloo_console::log!("Ignoring invalid welcome parameter"),
    }
}
