//! Content loading.
//!
//! Wraps `gloo-net` GETs for the JSON documents the pages are built from.
//! Failures are logged and turned into empty content; nothing is retried.

use bruut_core::{FilmCatalog, LoadError, SiteConfig};
use bruut_types::{FilmsDocument, Showtime, ShowtimesDocument};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

async fn get(url: &str) -> Result<gloo_net::http::Response, LoadError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network {
            url: url.to_owned(),
            message: e.to_string(),
        })?;
    if !resp.ok() {
        return Err(LoadError::Status {
            url: url.to_owned(),
            status: resp.status(),
        });
    }
    Ok(resp)
}

/// GET `url` and decode the body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
    let text = fetch_text(url).await?;
    Ok(serde_json::from_str(&text)?)
}

/// GET `url` and return the body as a plain string.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    get(url)
        .await?
        .text()
        .await
        .map_err(|e| LoadError::Network {
            url: url.to_owned(),
            message: e.to_string(),
        })
}

/// Film list in declaration order, empty on any failure.
pub async fn load_films(config: &SiteConfig) -> FilmCatalog {
    match fetch_json::<FilmsDocument>(&config.films_url).await {
        Ok(doc) => {
            gloo_console::log!(format!("Films data loaded: {} films", doc.films.len()));
            FilmCatalog::new(doc.films)
        }
        Err(e) => {
            gloo_console::error!(format!("Error loading films data: {}", e));
            FilmCatalog::default()
        }
    }
}

pub async fn load_showtimes(config: &SiteConfig) -> Vec<Showtime> {
    match fetch_json::<ShowtimesDocument>(&config.showtimes_url).await {
        Ok(doc) => doc.showtimes,
        Err(e) => {
            gloo_console::error!(format!("Error loading calendar data: {}", e));
            Vec::new()
        }
    }
}

/// Resolve once the image has loaded or failed; failures are not errors here.
pub async fn preload_image(src: &str) {
    let Ok(img) = web_sys::HtmlImageElement::new() else {
        return;
    };
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&resolve));
    });
    img.set_src(src);
    let _ = JsFuture::from(promise).await;
    img.set_onload(None);
    img.set_onerror(None);
}

/// Preload several images concurrently.
pub async fn preload_images(srcs: Vec<String>) {
    let promises = js_sys::Array::new();
    for src in srcs {
        let promise = wasm_bindgen_futures::future_to_promise(async move {
            preload_image(&src).await;
            Ok(JsValue::UNDEFINED)
        });
        promises.push(&promise);
    }
    let _ = JsFuture::from(js_sys::Promise::all(&promises)).await;
}
