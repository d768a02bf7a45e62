//! Collects the browser signals the arrival classifier works from, and keeps
//! the session flags current as the visitor moves around.

use crate::dom;
use crate::events::listen;
use crate::state;
use bruut_core::SiteConfig;
use bruut_core::navigation::{
    self, ArrivalMode, BROWSER_BACK_KEY, INTERNAL_NAV_KEY, NavigationSignals, Page,
};
use wasm_bindgen::prelude::*;

/// True when the Navigation Timing API reports a reload.
pub fn is_reload() -> bool {
    let Some(perf) = dom::window().performance() else {
        return false;
    };
    let modern = perf
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<web_sys::PerformanceNavigationTiming>()
        .map(|t| t.type_() == web_sys::NavigationType::Reload)
        .unwrap_or(false);
    // legacy `performance.navigation.type === 1`
    modern || perf.navigation().type_() == 1
}

fn referrer() -> Option<String> {
    let r = dom::document().referrer();
    (!r.is_empty()).then_some(r)
}

/// Read and consume all arrival hints for `page`, then strip the hint
/// parameters from the address bar.
pub fn detect(page: Page, config: &SiteConfig) -> ArrivalMode {
    let signals = NavigationSignals {
        from_internal: state::query_param("from").as_deref() == Some("internal"),
        return_param: state::query_param("return").as_deref() == Some("true"),
        persisted: false,
        referrer: referrer(),
        browser_back_flag: state::take_flag(BROWSER_BACK_KEY),
        internal_nav_flag: state::take_flag(INTERNAL_NAV_KEY),
        reload: is_reload(),
    };
    gloo_console::log!(format!("{:?} page - arrival signals: {:?}", page, signals));

    if signals.from_internal || signals.return_param {
        let film = state::query_param("film");
        let clean = format!(
            "{}{}",
            state::pathname(),
            navigation::cleaned_query(film.as_deref())
        );
        state::replace_url(&clean);
    }

    let mode = navigation::classify(page, &signals, &config.film_page);
    gloo_console::log!(format!("{:?} page - arrival mode: {:?}", page, mode));
    mode
}

/// Mark that the next page load is a same-site forward navigation.
pub fn mark_internal_navigation() {
    state::set_flag(INTERNAL_NAV_KEY);
}

/// Run `f` whenever the page is shown again from the back/forward cache.
/// The page comes back exactly as it was left, exit overlays included.
pub fn on_cache_restore<F>(f: F)
where
    F: Fn() + 'static,
{
    listen(dom::window().as_ref(), "pageshow", move |e: web_sys::PageTransitionEvent| {
        if e.persisted() {
            f();
        }
    });
}

/// Watch `pageshow` and `popstate` for back/forward arrivals on the homepage.
/// `on_restored` runs on every restore from the page cache; the referrer of
/// a restored page is the one it was first loaded with, so it cannot gate it.
pub fn watch_history<F>(config: &SiteConfig, on_restored: F)
where
    F: Fn() + 'static,
{
    let film_page = config.film_page.clone();
    on_cache_restore(move || {
        if navigation::is_back_from_film(true, referrer().as_deref(), &film_page) {
            gloo_console::log!("Browser back from film page detected");
            state::set_flag(BROWSER_BACK_KEY);
        }
        gloo_console::log!("Page restored from cache");
        on_restored();
    });

    let film_page = config.film_page.clone();
    listen(dom::window().as_ref(), "popstate", move |_: web_sys::Event| {
        if referrer().is_some_and(|r| r.contains(&film_page)) {
            state::set_flag(BROWSER_BACK_KEY);
        }
    });
}
