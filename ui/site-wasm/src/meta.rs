//! Document metadata for shared links.

use crate::dom;
use bruut_core::film_page::{MetaKey, PageMeta};
use wasm_bindgen::prelude::*;

/// Write the title and every tag, creating `<meta>` elements as needed.
pub fn apply(meta: &PageMeta) {
    let doc = dom::document();
    doc.set_title(&meta.title);
    if let Some(el) = dom::by_id("page-title") {
        dom::set_text(&el, &meta.title);
    }
    for tag in &meta.tags {
        if let Err(e) = upsert(tag.key, &tag.content) {
            gloo_console::error!(format!("Error updating meta tag {:?}", tag.key), e);
        }
    }
}

fn upsert(key: MetaKey, content: &str) -> Result<(), JsValue> {
    let (attr, value) = match key {
        MetaKey::Name(v) => ("name", v),
        MetaKey::Property(v) => ("property", v),
    };
    let el = match dom::query(&format!(r#"meta[{}="{}"]"#, attr, value)) {
        Some(el) => el,
        None => {
            let el = dom::create_element("meta")?;
            el.set_attribute(attr, value)?;
            let head = dom::document()
                .head()
                .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
            head.append_child(&el)?;
            el
        }
    };
    el.set_attribute("content", content)
}
