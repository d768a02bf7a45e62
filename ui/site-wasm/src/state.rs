//! Browser-held page state: site config, query parameters and the session
//! flags used for navigation hints.

use crate::dom;
use bruut_core::SiteConfig;
use gloo_storage::{SessionStorage, Storage};
use std::cell::RefCell;

thread_local! {
    static CONFIG: RefCell<Option<SiteConfig>> = const { RefCell::new(None) };
}

/// Site config, read once from `<script type="application/json" id="site-config">`.
pub fn config() -> SiteConfig {
    CONFIG.with(|c| c.borrow_mut().get_or_insert_with(read_config).clone())
}

fn read_config() -> SiteConfig {
    let Some(raw) = dom::by_id("site-config").and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(c) => c,
        Err(e) => {
            gloo_console::error!(format!("Ignoring site config: {}", e));
            SiteConfig::default()
        }
    }
}

// ── Query string ──

pub fn query_param(name: &str) -> Option<String> {
    let search = dom::window().location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Replace the current URL without reloading.
pub fn replace_url(url: &str) {
    let title = dom::document().title();
    if let Ok(history) = dom::window().history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, &title, Some(url));
    }
}

pub fn pathname() -> String {
    dom::window().location().pathname().unwrap_or_default()
}

// ── Session flags ──

pub fn set_flag(key: &str) {
    if let Err(e) = SessionStorage::set(key, true) {
        gloo_console::error!(format!("session storage unavailable: {}", e));
    }
}

/// Read a flag and clear it.
pub fn take_flag(key: &str) -> bool {
    let set = SessionStorage::get::<bool>(key).unwrap_or(false);
    SessionStorage::delete(key);
    set
}
