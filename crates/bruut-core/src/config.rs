//! Site configuration.
//!
//! Every field has a default matching the production site, so an empty or
//! partial JSON object is a valid config.

use crate::carousel;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub films_url: String,
    pub showtimes_url: String,
    pub image_dir: String,
    pub home_page: String,
    pub film_page: String,
    pub brand: String,
    pub logo_src: String,
    pub play_button_svg: String,
    /// Number of repeated title lists on the homepage track.
    pub title_copies: usize,
    pub advance_interval_ms: u32,
    pub slide_transition_ms: u32,
    pub resize_debounce_ms: u32,
    pub preload_images: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            films_url: "films.json".to_owned(),
            showtimes_url: "calendar.json".to_owned(),
            image_dir: "assets/images/".to_owned(),
            home_page: "index.html".to_owned(),
            film_page: "film.html".to_owned(),
            brand: "BRUUT INC.".to_owned(),
            logo_src: "assets/images/bruut-logo.webp".to_owned(),
            play_button_svg: "assets/images/play-button.svg".to_owned(),
            title_copies: carousel::TITLE_COPIES,
            advance_interval_ms: 5_000,
            slide_transition_ms: 1_000,
            resize_debounce_ms: 100,
            preload_images: 3,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title_copies == 0 {
            return Err(ConfigError::Zero {
                field: "titleCopies",
            });
        }
        if self.advance_interval_ms == 0 {
            return Err(ConfigError::Zero {
                field: "advanceIntervalMs",
            });
        }
        Ok(())
    }

    pub fn image_url(&self, file: &str) -> String {
        format!("{}{}", self.image_dir, file)
    }

    /// Detail page link used by carousel titles.
    pub fn film_link(&self, slug: &str) -> String {
        format!(
            "{}?film={}&from=internal",
            self.film_page,
            urlencoding::encode(slug)
        )
    }

    pub fn home_link_internal(&self) -> String {
        format!("{}?from=internal", self.home_page)
    }

    pub fn page_title(&self, film_title: &str) -> String {
        format!("{} - {}", film_title, self.brand)
    }
}
