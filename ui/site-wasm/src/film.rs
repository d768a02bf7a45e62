//! Film detail page controller.

use crate::api;
use crate::dom::{self, FilmElements};
use crate::events;
use crate::loading;
use crate::meta;
use crate::navigation;
use crate::state;
use crate::trailer;
use crate::transition;
use bruut_core::film_page::{self, Resolution};
use bruut_core::navigation::{Page, Presentation};
use bruut_core::{SiteConfig, showtimes};
use bruut_types::Film;
use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;

const INIT_DELAY_MS: u32 = 100;

/// Film page entry point.
pub async fn run(els: FilmElements, config: SiteConfig) {
    let mode = navigation::detect(Page::Film, &config);

    match mode.presentation(Page::Film) {
        Presentation::Splash => {
            gloo_console::log!("External navigation or reload - showing loading animation");
            match loading::create_splash(&config.logo_src, &config.brand) {
                Ok(screen) => {
                    wasm_bindgen_futures::spawn_local(loading::run_splash(Some(screen), || {}))
                }
                Err(e) => {
                    gloo_console::error!("failed to create loading screen", e);
                    loading::reveal_now();
                }
            }
        }
        Presentation::CrossFade | Presentation::Immediate => {
            gloo_console::log!("Internal navigation - loading normally");
            loading::reveal_now();
        }
    }

    TimeoutFuture::new(INIT_DELAY_MS).await;
    events::set_current_year();
    events::bind_navbar_scroll(els.navbar.as_ref());
    events::bind_film_logo(els.brand.as_ref(), &config);
    navigation::on_cache_restore(transition::clear_stale);

    let catalog = api::load_films(&config).await;
    let slug = state::query_param("film");
    match film_page::resolve(&catalog, slug.as_deref()) {
        Resolution::Found(film) => {
            display_film(&els, &config, film);
            render_showtimes(&els, &config).await;
        }
        Resolution::Redirect => {
            gloo_console::error!(format!("Film not found: {:?}", slug));
            dom::navigate(&config.home_page);
        }
    }
}

fn display_film(els: &FilmElements, config: &SiteConfig, film: &Film) {
    let location = dom::window().location();
    let origin = location.origin().unwrap_or_default();
    let href = location.href().unwrap_or_default();
    meta::apply(&film_page::page_meta(film, config, &origin, &href));

    if let Some(hero) = dom::query(".hero-image-static") {
        dom::set_style(
            &hero,
            "background-image",
            &format!("url('{}')", config.image_url(&film.image)),
        );
    }

    if let Err(e) = create_title(&film.title) {
        gloo_console::error!("failed to create film title", e);
    }

    if let Some(desc) = dom::by_id("film-desc") {
        dom::set_inner_html(&desc, &film_page::description_html(film));
    }

    if let Some(url) = film_page::trailer(film) {
        if let Err(e) = trailer::create_play_button(&els.header, url, &config.play_button_svg) {
            gloo_console::error!("failed to create trailer button", e);
        }
    }

    for item in film_page::info_items(film) {
        let Some(wrapper) = dom::by_id(item.item_id) else {
            continue;
        };
        match dom::by_id(item.value_id) {
            Some(value) if item.visible() => {
                dom::set_text(&value, item.value);
                dom::show(&wrapper, true);
            }
            _ => dom::show(&wrapper, false),
        }
    }
    gloo_console::log!(format!("Film display completed: {}", film.title));
}

/// `<h1 class="film-title">` in the header column, replacing any previous one.
fn create_title(title: &str) -> Result<(), JsValue> {
    let column = dom::query("#film-header .hero-content .col-12")
        .ok_or_else(|| JsValue::from_str("hero content container not found"))?;
    if let Some(old) = dom::query_within(&column, ".film-title") {
        dom::remove(&old);
    }
    let h1 = dom::create_with_class("h1", "film-title")?;
    dom::set_text(&h1, title);
    dom::append(&column, &h1)
}

fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

async fn render_showtimes(els: &FilmElements, config: &SiteConfig) {
    let all = api::load_showtimes(config).await;
    let Some(today) = today() else {
        return;
    };
    let upcoming = showtimes::upcoming(&all, today);
    let Some(markup) = showtimes::render_html(&upcoming) else {
        return;
    };
    let Some(details) = els.details.as_ref() else {
        gloo_console::error!("Film details section not found");
        return;
    };
    match details.insert_adjacent_html("beforeend", &markup) {
        Ok(()) => gloo_console::log!("Showtimes section added"),
        Err(e) => gloo_console::error!("failed to add showtimes", e),
    }
}
