//! Homepage controller: image/title carousel plus page entry and exit.
//!
//! One `HomeController` per page view, shared between the ticker, the resize
//! handler and the title click handler through `Rc<RefCell<_>>`.

use crate::api;
use crate::dom::{self, HomeElements};
use crate::events::{self, listen};
use crate::loading;
use crate::navigation;
use crate::transition::{self, PAGE_TRANSITIONING};
use bruut_core::carousel::{self, Carousel, Frame, TitleLayout};
use bruut_core::navigation::{Page, Presentation};
use bruut_core::transition::Timeline;
use bruut_core::{FilmCatalog, SiteConfig, html};
use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Delay before measuring freshly inserted titles.
const LAYOUT_SETTLE_MS: u32 = 100;

pub struct HomeController {
    config: SiteConfig,
    catalog: FilmCatalog,
    carousel: Carousel,
    image_track: Element,
    title_container: Element,
    title_track: Element,
    /// (film index, copy, element) for every title on the track.
    titles: Vec<(usize, usize, Element)>,
    ticker: Option<Interval>,
    /// Set by a title click; keeps the ticker off until the page is restored.
    leaving: bool,
}

pub type Shared = Rc<RefCell<HomeController>>;

// ── Page entry ──

/// Homepage entry point.
pub async fn run(els: HomeElements, config: SiteConfig) {
    let mode = navigation::detect(Page::Home, &config);
    events::set_current_year();
    events::bind_navbar_scroll(els.navbar.as_ref());
    events::render_welcome(els.welcome.as_ref());

    let controller: Rc<RefCell<Option<Shared>>> = Rc::default();
    let restored = controller.clone();
    navigation::watch_history(&config, move || {
        transition::clear_stale();
        if let Some(home) = restored.borrow().as_ref() {
            resume(home);
        }
        transition::show_return_crossfade();
    });

    let shared = match mode.presentation(Page::Home) {
        Presentation::Splash => {
            gloo_console::log!("First visit detected - showing loading animation");
            let brand = els.brand.clone();
            let logo_config = config.clone();
            wasm_bindgen_futures::spawn_local(loading::run_splash(
                els.loading_screen.clone(),
                move || events::bind_home_logo(brand.as_ref(), &logo_config),
            ));
            let shared = load_site_content(&els, &config).await;
            gloo_console::log!("Content loading complete");
            shared
        }
        Presentation::CrossFade | Presentation::Immediate => {
            gloo_console::log!("Returning visitor - skipping loading animation");
            transition::show_return_crossfade();
            let brand = els.brand.clone();
            let logo_config = config.clone();
            Timeout::new(LAYOUT_SETTLE_MS, move || {
                events::bind_home_logo(brand.as_ref(), &logo_config)
            })
            .forget();
            init_carousel(&els, &config).await
        }
    };
    *controller.borrow_mut() = shared;
}

/// Films, carousel and the first few slide images.
async fn load_site_content(els: &HomeElements, config: &SiteConfig) -> Option<Shared> {
    let shared = init_carousel(els, config).await?;
    let srcs: Vec<String> = {
        let home = shared.borrow();
        home.catalog
            .iter()
            .take(config.preload_images)
            .map(|f| config.image_url(&f.image))
            .collect()
    };
    api::preload_images(srcs).await;
    Some(shared)
}

// ── Carousel ──

/// Build and start the carousel. `None` when no films could be loaded.
async fn init_carousel(els: &HomeElements, config: &SiteConfig) -> Option<Shared> {
    let catalog = api::load_films(config).await;
    let home = match HomeController::build(&els.hero, catalog, config) {
        Ok(home) => home?,
        Err(e) => {
            gloo_console::error!("failed to build carousel", e);
            return None;
        }
    };
    let shared: Shared = Rc::new(RefCell::new(home));

    bind_title_clicks(&shared);
    bind_resize(&shared);

    let starter = shared.clone();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(LAYOUT_SETTLE_MS).await;
        {
            let mut home = starter.borrow_mut();
            let frame = home.carousel.start();
            home.apply(&frame);
            home.relayout();
        }
        start_ticker(&starter);
    });

    Some(shared)
}

fn build_image_track(
    hero: &Element,
    catalog: &FilmCatalog,
    config: &SiteConfig,
) -> Result<Element, JsValue> {
    for sel in [".hero-carousel", ".hero-overlay", ".title-overlay"] {
        if let Some(old) = dom::query_within(hero, sel) {
            dom::remove(&old);
        }
    }

    let track = dom::create_with_class("div", "hero-carousel")?;
    for slide in carousel::build_slides(catalog.len()) {
        let Some(film) = catalog.get(slide.film) else {
            continue;
        };
        let cls = if slide.clone { "hero-slide clone" } else { "hero-slide" };
        let el = dom::create_with_class("div", cls)?;
        dom::set_inner_html(
            &el,
            &format!(
                r#"<div class="hero-image" style="background-image: url('{}')"></div>"#,
                html::escape(&config.image_url(&film.image))
            ),
        );
        dom::append(&track, &el)?;
    }
    dom::append(hero, &track)?;
    dom::append(hero, &dom::create_with_class("div", "hero-overlay")?)?;
    dom::append(hero, &dom::create_with_class("div", "title-overlay")?)?;
    Ok(track)
}

fn build_title_track(
    hero: &Element,
    catalog: &FilmCatalog,
    copies: usize,
) -> Result<(Element, Element, Vec<(usize, usize, Element)>), JsValue> {
    if let Some(old) = dom::query_within(hero, ".hero-titles-container") {
        dom::remove(&old);
    }
    let container = dom::create_with_class("div", "hero-titles-container")?;
    let track = dom::create_with_class("div", "hero-titles-track")?;
    let mut titles = Vec::new();

    for slot in carousel::title_track(catalog.len(), copies) {
        let Some(film) = catalog.get(slot.film) else {
            continue;
        };
        let item = dom::create_with_class("div", "title-item")?;
        item.set_attribute("data-film-index", &slot.film.to_string())?;
        item.set_attribute("data-copy", &slot.copy.to_string())?;

        let tooltip = dom::create_with_class("div", "title-tooltip")?;
        dom::set_text(&tooltip, "More information");

        let text = dom::create_with_class("span", "title-text")?;
        dom::set_text(&text, &film.title);
        text.set_attribute("data-url", &film.url)?;
        text.set_attribute("data-index", &slot.film.to_string())?;

        dom::append(&item, &tooltip)?;
        dom::append(&item, &text)?;
        dom::append(&track, &item)?;
        titles.push((slot.film, slot.copy, item));
    }

    dom::append(&container, &track)?;
    dom::append(hero, &container)?;
    gloo_console::log!(format!("Title track created with {} elements", titles.len()));
    Ok((container, track, titles))
}

impl HomeController {
    /// Build both tracks inside `hero`. `None` when there are no films.
    pub fn build(
        hero: &Element,
        catalog: FilmCatalog,
        config: &SiteConfig,
    ) -> Result<Option<Self>, JsValue> {
        let Some(carousel) = Carousel::new(catalog.len(), dom::viewport_width()) else {
            return Ok(None);
        };
        let image_track = build_image_track(hero, &catalog, config)?;
        let (title_container, title_track, titles) =
            build_title_track(hero, &catalog, config.title_copies)?;
        Ok(Some(Self {
            config: config.clone(),
            catalog,
            carousel,
            image_track,
            title_container,
            title_track,
            titles,
            ticker: None,
            leaving: false,
        }))
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Widths of the first copy of each title, in film order.
    fn measure_titles(&self) -> Vec<f64> {
        self.titles
            .iter()
            .filter(|(_, copy, _)| *copy == 0)
            .map(|(_, _, el)| el.get_bounding_client_rect().width())
            .collect()
    }

    fn apply(&self, frame: &Frame) {
        let transition = frame.transition_css(self.config.slide_transition_ms);
        dom::set_style(&self.image_track, "transition", &transition);
        dom::set_style(&self.image_track, "transform", &frame.image_transform());
        dom::set_style(&self.title_track, "transition", &transition);
        dom::set_style(&self.title_track, "transform", &frame.title_transform());
        self.highlight(frame.active_film);
    }

    /// Re-measure titles for the current viewport. Only the title track moves.
    fn relayout(&mut self) {
        let widths = self.measure_titles();
        let layout = self.carousel.relayout(widths, dom::viewport_width());
        self.apply_layout(&layout);
    }

    fn apply_layout(&self, layout: &TitleLayout) {
        dom::set_style(&self.title_container, "padding", &layout.padding_css());
        dom::set_style(&self.title_track, "transition", "none");
        dom::set_style(&self.title_track, "transform", &layout.transform());
        self.highlight(layout.active_film);
    }

    /// Mark every copy of `active` as current and the rest inactive.
    pub fn highlight(&self, active: usize) {
        for (film, _, el) in &self.titles {
            let current = *film == active;
            dom::toggle_class(el, "current", current);
            dom::toggle_class(el, "inactive", !current);
        }
    }

    pub fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// A title was clicked: freeze the carousel for the exit transition.
    pub fn begin_exit(&mut self) {
        self.leaving = true;
        self.stop_ticker();
    }
}

/// Start auto-advancing, unless the page is on its way out.
pub fn start_ticker(shared: &Shared) {
    let interval_ms = {
        let home = shared.borrow();
        if home.leaving {
            return;
        }
        home.config.advance_interval_ms
    };
    let target = shared.clone();
    let ticker = Interval::new(interval_ms, move || advance(&target));
    let mut home = shared.borrow_mut();
    home.stop_ticker();
    home.ticker = Some(ticker);
}

/// The page came back from the back/forward cache after a title click.
pub fn resume(shared: &Shared) {
    shared.borrow_mut().leaving = false;
    start_ticker(shared);
}

fn advance(shared: &Shared) {
    let settle_ms = {
        let mut home = shared.borrow_mut();
        let Some(frame) = home.carousel.advance() else {
            return;
        };
        home.apply(&frame);
        home.config.slide_transition_ms
    };
    let target = shared.clone();
    Timeout::new(settle_ms, move || {
        let mut home = target.borrow_mut();
        if let Some(snap) = home.carousel.settle() {
            home.apply(&snap);
        }
    })
    .forget();
}

fn bind_title_clicks(shared: &Shared) {
    let target = shared.clone();
    listen(dom::document().as_ref(), "click", move |e: web_sys::MouseEvent| {
        let Some(el) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if !dom::has_class(&el, "title-text") {
            return;
        }
        let Some(slug) = el.get_attribute("data-url").filter(|u| !u.is_empty()) else {
            return;
        };
        if dom::body_has_class(PAGE_TRANSITIONING) {
            return;
        }
        e.prevent_default();

        let link = {
            let mut home = target.borrow_mut();
            home.begin_exit();
            home.config.film_link(&slug)
        };
        navigation::mark_internal_navigation();
        transition::spawn(Timeline::leave_to_film(link));
    });
}

fn bind_resize(shared: &Shared) {
    let target = shared.clone();
    listen(dom::window().as_ref(), "resize", move |_: web_sys::Event| {
        let (delay, home) = (target.borrow().config.resize_debounce_ms, target.clone());
        Timeout::new(delay, move || home.borrow_mut().relayout()).forget();
    });
}
