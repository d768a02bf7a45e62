//! Page logic for the BRUUT studio site.
//!
//! Everything here is target-independent: the wasm frontend feeds browser
//! signals in and applies the returned frames, effects and markup to the DOM.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod film_page;
pub mod html;
pub mod navigation;
pub mod showtimes;
pub mod splash;
pub mod transition;
pub mod welcome;

pub use catalog::FilmCatalog;
pub use config::SiteConfig;
pub use error::{ConfigError, LoadError};
