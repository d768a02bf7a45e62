//! Browser tests: `wasm-pack test --headless --firefox ui/site-wasm`.
#![cfg(target_arch = "wasm32")]

use bruut_core::transition::Timeline;
use bruut_core::{FilmCatalog, SiteConfig};
use bruut_types::Film;
use gloo_timers::future::TimeoutFuture;
use site_wasm::home::{self, HomeController, Shared};
use site_wasm::{dom, navigation, trailer, transition};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn create_with_class_sets_class_name() {
    let el = dom::create_with_class("div", "hero-slide clone").unwrap();
    assert!(dom::has_class(&el, "hero-slide"));
    assert!(dom::has_class(&el, "clone"));
}

#[wasm_bindgen_test]
async fn crossfade_removes_its_overlays() {
    transition::play(Timeline::return_crossfade()).await;
    assert!(dom::by_id("transition-black").is_none());
    assert!(dom::by_id("navigation-glass").is_none());
}

#[wasm_bindgen_test]
async fn leave_to_film_marks_the_body() {
    let timeline = Timeline::new(
        Timeline::leave_to_film("#film")
            .cues()
            .iter()
            .take(2)
            .cloned()
            .collect(),
    );
    transition::play(timeline).await;
    assert!(dom::body_has_class(transition::PAGE_TRANSITIONING));
    let glass = dom::by_id("navigation-glass").expect("glass overlay mounted");
    assert!(dom::has_class(&glass, "fade-in"));
    dom::remove(&glass);
    dom::body_class(transition::PAGE_TRANSITIONING, false);
}

fn films(n: usize) -> FilmCatalog {
    FilmCatalog::new(
        (0..n)
            .map(|i| Film {
                title: format!("Film {i}"),
                url: format!("film-{i}"),
                image: format!("film-{i}.webp"),
                ..Default::default()
            })
            .collect(),
    )
}

fn hero() -> web_sys::Element {
    let hero = dom::create_with_class("section", "hero-section test-hero").unwrap();
    dom::append(&dom::body(), &hero).unwrap();
    hero
}

fn count(root: &web_sys::Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test]
fn homepage_tracks_hold_clone_framed_slides_and_title_copies() {
    let hero = hero();
    let config = SiteConfig {
        title_copies: 2,
        ..Default::default()
    };
    let controller = HomeController::build(&hero, films(3), &config)
        .unwrap()
        .expect("three films build a carousel");

    assert_eq!(count(&hero, ".hero-slide"), 6);
    assert_eq!(count(&hero, ".hero-slide.clone"), 3);
    assert_eq!(count(&hero, ".title-item"), 6);

    controller.highlight(1);
    assert_eq!(count(&hero, ".title-item.current"), 2);
    assert_eq!(count(&hero, ".title-item.inactive"), 4);
    assert_eq!(count(&hero, r#".title-item.current[data-film-index="1"]"#), 2);
    dom::remove(&hero);
}

#[wasm_bindgen_test]
fn empty_catalog_builds_nothing() {
    let hero = hero();
    let controller = HomeController::build(&hero, films(0), &SiteConfig::default()).unwrap();
    assert!(controller.is_none());
    assert_eq!(count(&hero, ".hero-slide"), 0);
    dom::remove(&hero);
}

#[wasm_bindgen_test]
fn ticker_stays_off_after_a_title_click_until_restored() {
    let hero = hero();
    let controller = HomeController::build(&hero, films(2), &SiteConfig::default())
        .unwrap()
        .unwrap();
    let shared: Shared = Rc::new(RefCell::new(controller));

    shared.borrow_mut().begin_exit();
    home::start_ticker(&shared);
    assert!(!shared.borrow().is_ticking());

    home::resume(&shared);
    assert!(shared.borrow().is_ticking());
    shared.borrow_mut().stop_ticker();
    dom::remove(&hero);
}

#[wasm_bindgen_test]
async fn logo_exit_is_guarded_and_cleared_on_restore() {
    let first_cue = Timeline::new(
        Timeline::leave_to_home("#home")
            .cues()
            .iter()
            .take(1)
            .cloned()
            .collect(),
    );
    transition::play(first_cue).await;
    assert!(dom::body_has_class(transition::PAGE_TRANSITIONING));
    assert!(dom::by_id("navigation-glass").is_some());

    transition::clear_stale();
    assert!(!dom::body_has_class(transition::PAGE_TRANSITIONING));
    assert!(dom::by_id("navigation-glass").is_none());
}

#[wasm_bindgen_test]
async fn closing_the_trailer_detaches_its_listeners() {
    assert!(trailer::open_modal("https://vimeo.com/12345").unwrap().is_none());

    let modal = trailer::open_modal("https://youtu.be/dQw4w9WgXcQ")
        .unwrap()
        .expect("youtube link embeds");
    assert!(modal.is_open());
    assert!(modal.has_listeners());
    assert!(dom::body_has_class("trailer-modal-open"));

    modal.close();
    modal.close();
    assert!(!modal.is_open());
    assert!(!dom::body_has_class("trailer-modal-open"));

    TimeoutFuture::new(trailer::CLOSE_FADE_MS + 50).await;
    assert!(!modal.has_listeners());
    assert!(dom::query(".trailer-modal").is_none());
}

#[wasm_bindgen_test]
fn a_fresh_test_page_is_not_a_reload() {
    assert!(!navigation::is_reload());
}
