//! Plays a transition [`Timeline`] against the DOM.
//!
//! One async task per transition: apply the cue's effects, sleep for its
//! hold, repeat. Overlays are full-screen `div`s styled by the site CSS
//! (`.black-overlay`, `#navigation-glass`, `fade-in` / `fade-out`).

use crate::dom;
use bruut_core::transition::{Effect, GlassStyle, Sequencer, Timeline};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub const PAGE_TRANSITIONING: &str = "page-transitioning";

#[derive(Default)]
struct Overlays {
    blackout: Option<Element>,
    glass: Option<Element>,
}

impl Overlays {
    fn apply(&mut self, effect: &Effect) -> Result<(), JsValue> {
        match effect {
            Effect::MountBlackout => {
                let el = dom::create_with_class("div", "black-overlay")?;
                el.set_id("transition-black");
                dom::append(&dom::body(), &el)?;
                self.blackout = Some(el);
            }
            Effect::MountGlass(style) => {
                let el = dom::create_element("div")?;
                el.set_id("navigation-glass");
                match style {
                    GlassStyle::Hidden => {
                        dom::set_style(&el, "opacity", "0");
                        dom::set_style(&el, "visibility", "hidden");
                    }
                    GlassStyle::Dark => {
                        dom::set_style(&el, "background", "rgba(0, 0, 0, 0.9)");
                        dom::set_style(&el, "backdrop-filter", "blur(10px)");
                        dom::set_style(&el, "-webkit-backdrop-filter", "blur(10px)");
                    }
                }
                dom::append(&dom::body(), &el)?;
                self.glass = Some(el);
            }
            Effect::FadeOutBlackout => {
                if let Some(el) = &self.blackout {
                    dom::add_class(el, "fade-out");
                }
            }
            Effect::FadeInGlass => {
                if let Some(el) = &self.glass {
                    dom::add_class(el, "fade-in");
                }
            }
            Effect::FadeOutGlass => {
                if let Some(el) = &self.glass {
                    dom::remove_class(el, "fade-in");
                    dom::add_class(el, "fade-out");
                }
            }
            Effect::RemoveOverlays => {
                if let Some(el) = self.blackout.take() {
                    dom::remove(&el);
                }
                if let Some(el) = self.glass.take() {
                    dom::remove(&el);
                }
            }
            Effect::MarkPageTransitioning => dom::body_class(PAGE_TRANSITIONING, true),
            Effect::Navigate(url) => dom::navigate(url),
        }
        Ok(())
    }
}

/// Run `timeline` to completion.
pub async fn play(timeline: Timeline) {
    let mut seq = Sequencer::new(timeline);
    let mut overlays = Overlays::default();
    while let Some(cue) = seq.step() {
        gloo_console::log!(format!("Transition phase: {:?}", cue.phase));
        for effect in &cue.effects {
            if let Err(e) = overlays.apply(effect) {
                gloo_console::error!("transition effect failed", e);
            }
        }
        if cue.hold_ms > 0 {
            TimeoutFuture::new(cue.hold_ms).await;
        }
    }
}

/// Fire-and-forget [`play`].
pub fn spawn(timeline: Timeline) {
    wasm_bindgen_futures::spawn_local(play(timeline));
}

/// Undo an exit transition the page was frozen in: overlays from any
/// timeline and the re-entrancy class.
pub fn clear_stale() {
    for id in ["navigation-glass", "transition-black"] {
        while let Some(el) = dom::by_id(id) {
            dom::remove(&el);
        }
    }
    dom::body_class(PAGE_TRANSITIONING, false);
}

/// Warm-return cross-fade on the homepage. Removes any splash first.
pub fn show_return_crossfade() {
    if let Some(splash) = dom::by_id("loading-screen") {
        dom::set_style(&splash, "display", "none");
        dom::remove(&splash);
    }
    dom::body_class("loading", false);
    dom::body_class("loaded", true);
    spawn(Timeline::return_crossfade());
}
