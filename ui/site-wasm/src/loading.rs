//! Splash loading screen for cold loads.

use crate::dom;
use bruut_core::splash::{self, SplashStage};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Build the splash overlay used by pages without one in their markup.
pub fn create_splash(logo_src: &str, brand: &str) -> Result<Element, JsValue> {
    let screen = dom::create_element("div")?;
    screen.set_id("loading-screen");
    for (prop, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", "50000"),
    ] {
        dom::set_style(&screen, prop, value);
    }
    dom::set_inner_html(
        &screen,
        &format!(
            r#"<div class="loading-yellow-bg"></div>
<div class="loading-glass-layer"></div>
<div class="loading-logo"><img src="{}" alt="{}"></div>"#,
            bruut_core::html::escape(logo_src),
            bruut_core::html::escape(brand),
        ),
    );
    let body = dom::body();
    body.insert_before(&screen, body.first_child().as_ref())?;
    Ok(screen)
}

/// Walk the splash schedule. `on_interactive` runs at the final cue.
pub async fn run_splash<F: FnOnce()>(screen: Option<Element>, on_interactive: F) {
    let mut on_interactive = Some(on_interactive);
    for (wait, stage) in splash::delays() {
        if wait > 0 {
            TimeoutFuture::new(wait).await;
        }
        match stage {
            SplashStage::Showing => {
                dom::body_class("loaded", false);
                dom::body_class("loading", true);
            }
            SplashStage::Revealed => {
                dom::body_class("loading", false);
                dom::body_class("loaded", true);
                gloo_console::log!("Page content revealed");
            }
            SplashStage::Dismissed => {
                if let Some(el) = screen.as_ref().filter(|el| el.is_connected()) {
                    dom::add_class(el, "loaded");
                }
                gloo_console::log!("Loading screen hidden");
            }
            SplashStage::Interactive => {
                if let Some(f) = on_interactive.take() {
                    f();
                }
            }
        }
    }
}

/// Show content straight away, no splash.
pub fn reveal_now() {
    dom::body_class("loading", false);
    dom::body_class("loaded", true);
}
