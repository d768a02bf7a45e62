//! Trailer play button and embed modal on the film page.

use crate::api;
use crate::dom;
use crate::events::listen;
use bruut_core::film_page::youtube_embed_url;
use bruut_core::html::escape;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub const CLOSE_FADE_MS: u32 = 300;

const PLAY_FALLBACK: &str = r#"<div style="width: 0; height: 0; border-left: 20px solid white; border-top: 12px solid transparent; border-bottom: 12px solid transparent; margin-left: 4px;"></div>"#;

/// Append the play button to `header`; its icon loads in the background.
pub fn create_play_button(header: &Element, trailer_url: &str, svg_url: &str) -> Result<(), JsValue> {
    let button = dom::create_with_class("div", "trailer-play-button")?;
    button.set_attribute("data-trailer-url", trailer_url)?;

    let icon_target = button.clone();
    let svg_url = svg_url.to_owned();
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_text(&svg_url).await {
            Ok(svg) => dom::set_inner_html(&icon_target, &svg),
            Err(e) => {
                gloo_console::error!(format!("Error loading play button SVG: {}", e));
                dom::set_inner_html(&icon_target, PLAY_FALLBACK);
            }
        }
    });

    let url = trailer_url.to_owned();
    listen(button.as_ref(), "click", move |_: web_sys::MouseEvent| {
        if let Err(e) = open_modal(&url) {
            gloo_console::error!("failed to open trailer", e);
        }
    });

    dom::append(header, &button)
}

/// Handle on an open trailer modal.
///
/// The backdrop and Escape listeners live inside the shared slot and are
/// dropped, which detaches them, once the modal has been removed.
pub struct TrailerModal {
    slot: Rc<RefCell<Option<OpenModal>>>,
}

struct OpenModal {
    modal: Element,
    _listeners: [EventListener; 2],
}

impl TrailerModal {
    pub fn is_open(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Whether the modal's document and backdrop listeners are still attached.
    pub fn has_listeners(&self) -> bool {
        Rc::strong_count(&self.slot) > 1
    }

    pub fn close(&self) {
        close(&self.slot);
    }
}

/// Open the embed for `trailer_url`. `None` when the link is not embeddable.
pub fn open_modal(trailer_url: &str) -> Result<Option<TrailerModal>, JsValue> {
    let Some(embed) = youtube_embed_url(trailer_url) else {
        gloo_console::log!("Trailer URL is not embeddable");
        return Ok(None);
    };

    let modal = dom::create_with_class("div", "trailer-modal")?;
    dom::set_inner_html(
        &modal,
        &format!(
            r#"<div class="trailer-modal-content">
  <div class="trailer-iframe-container">
    <iframe src="{}" frameborder="0" allowfullscreen allow="autoplay; encrypted-media"></iframe>
  </div>
</div>"#,
            escape(&embed)
        ),
    );
    dom::append(&dom::body(), &modal)?;
    dom::body_class("trailer-modal-open", true);

    let shown = modal.clone();
    Timeout::new(10, move || dom::add_class(&shown, "active")).forget();

    // whichever of backdrop / Escape fires first closes it once
    let slot: Rc<RefCell<Option<OpenModal>>> = Rc::new(RefCell::new(None));

    let on_backdrop = {
        let slot = slot.clone();
        let backdrop = modal.clone();
        EventListener::new(&modal, "click", move |e| {
            let hit_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t == backdrop);
            if hit_backdrop {
                close(&slot);
            }
        })
    };

    let on_escape = {
        let slot = slot.clone();
        EventListener::new(&dom::document(), "keydown", move |e| {
            let escape = e
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|k| k.key() == "Escape");
            if escape {
                close(&slot);
            }
        })
    };

    *slot.borrow_mut() = Some(OpenModal {
        modal,
        _listeners: [on_backdrop, on_escape],
    });
    Ok(Some(TrailerModal { slot }))
}

fn close(slot: &Rc<RefCell<Option<OpenModal>>>) {
    let Some(open) = slot.borrow_mut().take() else {
        return;
    };
    dom::remove_class(&open.modal, "active");
    dom::body_class("trailer-modal-open", false);
    // listeners go with `open`, after the handler that closed it has returned
    Timeout::new(CLOSE_FADE_MS, move || {
        dom::remove(&open.modal);
        drop(open);
    })
    .forget();
}
