//! Film detail page content rules.

use crate::catalog::FilmCatalog;
use crate::config::SiteConfig;
use crate::html;
use bruut_types::Film;
use regex::Regex;
use std::sync::LazyLock;

const SUMMARY_CHARS: usize = 160;

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("static pattern compiles")
});

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a Film),
    Redirect,
}

/// Look up the film named by the `film` query parameter.
pub fn resolve<'a>(catalog: &'a FilmCatalog, slug: Option<&str>) -> Resolution<'a> {
    match slug.filter(|s| !s.is_empty()).and_then(|s| catalog.find(s)) {
        Some(film) => Resolution::Found(film),
        None => Resolution::Redirect,
    }
}

/// Blank and "to be announced" placeholders count as missing.
pub fn has_content(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    let lower = trimmed.to_lowercase();
    lower != "tba" && lower != "to be announced"
}

/// One labelled detail row: wrapper id, value id, text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoItem<'a> {
    pub item_id: &'static str,
    pub value_id: &'static str,
    pub value: &'a str,
}

impl InfoItem<'_> {
    pub fn visible(&self) -> bool {
        has_content(self.value)
    }
}

pub fn info_items(film: &Film) -> [InfoItem<'_>; 7] {
    fn item<'a>(item_id: &'static str, value_id: &'static str, value: &'a str) -> InfoItem<'a> {
        InfoItem {
            item_id,
            value_id,
            value,
        }
    }
    [
        item("duration-item", "film-duration", &film.duration),
        item("release-item", "film-release", &film.release_date),
        item("director-item", "film-director", &film.director),
        item("writer-item", "film-writer", &film.writer),
        item("production-item", "film-production", &film.production),
        item("cinematography-item", "film-cinematography", &film.cinematography),
        item("cast-item", "film-cast", &film.starring),
    ]
}

pub fn description_html(film: &Film) -> String {
    html::multiline(&film.description)
}

/// Trailer URL if the film has a usable one.
pub fn trailer(film: &Film) -> Option<&str> {
    film.trailer.as_deref().filter(|t| has_content(t))
}

/// Autoplaying embed URL for the common YouTube link shapes.
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let caps = YOUTUBE_ID.captures(url)?;
    let id = caps.get(2)?.as_str();
    (id.len() == 11).then(|| format!("https://www.youtube.com/embed/{}?autoplay=1&rel=0", id))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub tags: Vec<MetaTag>,
}

/// Single-line description trimmed for share cards.
pub fn summary(description: &str) -> String {
    description
        .replace('\n', " ")
        .chars()
        .take(SUMMARY_CHARS)
        .collect()
}

/// Document title plus description, Open Graph and Twitter Card tags.
pub fn page_meta(film: &Film, config: &SiteConfig, origin: &str, href: &str) -> PageMeta {
    let title = config.page_title(&film.title);
    let summary = summary(&film.description);
    let image = format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        config.image_url(&film.image)
    );
    let name = |key, content: String| MetaTag {
        key: MetaKey::Name(key),
        content,
    };
    let property = |key, content: String| MetaTag {
        key: MetaKey::Property(key),
        content,
    };
    let tags = vec![
        name("description", summary.clone()),
        name(
            "keywords",
            format!(
                "{}, {}, film, cinema, {}",
                film.title, config.brand, film.director
            ),
        ),
        property("og:title", title.clone()),
        property("og:description", summary.clone()),
        property("og:image", image.clone()),
        property("og:url", href.to_owned()),
        property("og:type", "video.movie".to_owned()),
        name("twitter:card", "summary_large_image".to_owned()),
        name("twitter:title", title.clone()),
        name("twitter:description", summary),
        name("twitter:image", image),
    ];
    PageMeta { title, tags }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film() -> Film {
        Film {
            title: "Zand".into(),
            url: "zand".into(),
            image: "zand.webp".into(),
            description: "Line one\nLine <two>".into(),
            director: "A. Visser".into(),
            duration: "92 min".into(),
            release_date: "TBA".into(),
            writer: "  ".into(),
            starring: "To Be Announced".into(),
            trailer: Some("https://youtu.be/dQw4w9WgXcQ".into()),
            ..Default::default()
        }
    }

    #[test]
    fn unknown_or_missing_slug_redirects() {
        let catalog = FilmCatalog::new(vec![film()]);
        assert_eq!(resolve(&catalog, Some("regen")), Resolution::Redirect);
        assert_eq!(resolve(&catalog, None), Resolution::Redirect);
        assert_eq!(resolve(&catalog, Some("")), Resolution::Redirect);
        assert!(matches!(resolve(&catalog, Some("zand")), Resolution::Found(f) if f.title == "Zand"));
    }

    #[test]
    fn placeholders_are_not_content() {
        assert!(has_content("92 min"));
        assert!(!has_content(""));
        assert!(!has_content("   "));
        assert!(!has_content("tba"));
        assert!(!has_content("To be announced"));
    }

    #[test]
    fn info_items_hide_placeholders() {
        let f = film();
        let visible: Vec<_> = info_items(&f)
            .iter()
            .filter(|i| i.visible())
            .map(|i| i.item_id)
            .collect();
        assert_eq!(visible, ["duration-item", "director-item"]);
    }

    #[test]
    fn description_is_escaped_with_breaks() {
        assert_eq!(description_html(&film()), "Line one<br>Line &lt;two&gt;");
    }

    #[test]
    fn embed_url_from_known_shapes() {
        let want = Some("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0".to_owned());
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ?version=3",
        ] {
            assert_eq!(youtube_embed_url(url), want, "{url}");
        }
        assert_eq!(youtube_embed_url("https://vimeo.com/12345"), None);
        assert_eq!(youtube_embed_url("https://youtu.be/short"), None);
    }

    #[test]
    fn trailer_placeholder_is_ignored() {
        let mut f = film();
        assert!(trailer(&f).is_some());
        f.trailer = Some("TBA".into());
        assert!(trailer(&f).is_none());
        f.trailer = None;
        assert!(trailer(&f).is_none());
    }

    #[test]
    fn meta_tags_for_sharing() {
        let meta = page_meta(
            &film(),
            &SiteConfig::default(),
            "https://bruut.nl",
            "https://bruut.nl/film.html?film=zand",
        );
        assert_eq!(meta.title, "Zand - BRUUT INC.");
        let og_image = meta
            .tags
            .iter()
            .find(|t| t.key == MetaKey::Property("og:image"))
            .unwrap();
        assert_eq!(og_image.content, "https://bruut.nl/assets/images/zand.webp");
        let desc = meta
            .tags
            .iter()
            .find(|t| t.key == MetaKey::Name("description"))
            .unwrap();
        assert_eq!(desc.content, "Line one Line <two>");
    }

    #[test]
    fn summary_truncates_on_chars() {
        let long = "é".repeat(200);
        assert_eq!(summary(&long).chars().count(), 160);
    }
}
