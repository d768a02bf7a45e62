//! BRUUT studio site – WASM frontend.
//!
//! Drives the homepage carousel, the film detail page, page transitions and
//! loading screens. Page logic lives in `bruut-core`; this crate binds it to
//! the DOM.

pub mod api;
pub mod dom;
pub mod events;
pub mod film;
pub mod home;
pub mod loading;
pub mod meta;
pub mod navigation;
pub mod state;
pub mod trailer;
pub mod transition;

use bruut_core::navigation::Page;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// `<body data-page="home|film">`, falling back to which header is present.
fn current_page() -> Option<Page> {
    match dom::body().dataset().get("page").as_deref() {
        Some("home") => return Some(Page::Home),
        Some("film") => return Some(Page::Film),
        _ => {}
    }
    if dom::by_id("film-header").is_some() {
        Some(Page::Film)
    } else if dom::query(".hero-section").is_some() {
        Some(Page::Home)
    } else {
        None
    }
}

async fn init() -> Result<(), JsValue> {
    dom::ready().await;
    let config = state::config();
    match current_page() {
        Some(Page::Home) => home::run(dom::HomeElements::bind()?, config).await,
        Some(Page::Film) => film::run(dom::FilmElements::bind()?, config).await,
        None => gloo_console::log!("No page controller for this document"),
    }
    Ok(())
}
