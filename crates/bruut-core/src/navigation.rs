//! Arrival classification.
//!
//! Browsers disagree about which signals they expose on back/forward, so the
//! classifier combines several and applies a fixed precedence:
//!
//! 1. a hard reload
//! 2. back/forward: restored from the page cache, the browser-back flag, or
//!    (homepage only) a referrer pointing at the film page
//! 3. same-site forward: `from=internal`, `return=true`, or the internal
//!    navigation flag
//! 4. anything else is an external visit
//!
//! The result is a hint for choosing a loading presentation, nothing more.

use tracing::debug;

pub const INTERNAL_NAV_KEY: &str = "bruut-internal-nav";
pub const BROWSER_BACK_KEY: &str = "bruut-browser-back";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Film,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationSignals {
    pub from_internal: bool,
    pub return_param: bool,
    pub persisted: bool,
    pub referrer: Option<String>,
    pub browser_back_flag: bool,
    pub internal_nav_flag: bool,
    pub reload: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrivalMode {
    External,
    Internal,
    BackForward,
    Reload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Full splash sequence.
    Splash,
    /// Skip the splash, play the short glass cross-fade.
    CrossFade,
    /// Skip the splash and show content straight away.
    Immediate,
}

impl NavigationSignals {
    pub fn referrer_is(&self, page_name: &str) -> bool {
        self.referrer
            .as_deref()
            .is_some_and(|r| !r.is_empty() && r.contains(page_name))
    }
}

pub fn classify(page: Page, signals: &NavigationSignals, film_page: &str) -> ArrivalMode {
    let mode = if signals.reload {
        ArrivalMode::Reload
    } else if signals.persisted
        || signals.browser_back_flag
        || (page == Page::Home && signals.referrer_is(film_page))
    {
        ArrivalMode::BackForward
    } else if signals.from_internal || signals.return_param || signals.internal_nav_flag {
        ArrivalMode::Internal
    } else {
        ArrivalMode::External
    };
    debug!(?page, ?mode, "classified arrival");
    mode
}

impl ArrivalMode {
    pub fn presentation(self, page: Page) -> Presentation {
        match (self, page) {
            (ArrivalMode::External | ArrivalMode::Reload, _) => Presentation::Splash,
            (ArrivalMode::Internal | ArrivalMode::BackForward, Page::Home) => {
                Presentation::CrossFade
            }
            (ArrivalMode::Internal | ArrivalMode::BackForward, Page::Film) => {
                Presentation::Immediate
            }
        }
    }
}

/// Decide whether a cache-restored homepage came back from the film page.
pub fn is_back_from_film(persisted: bool, referrer: Option<&str>, film_page: &str) -> bool {
    persisted && referrer.is_some_and(|r| r.contains(film_page))
}

/// Query string with the navigation hints removed, keeping only `film`.
pub fn cleaned_query(film: Option<&str>) -> String {
    match film {
        Some(slug) if !slug.is_empty() => format!("?film={}", urlencoding::encode(slug)),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILM: &str = "film.html";

    #[test]
    fn fresh_visit_is_external() {
        let s = NavigationSignals::default();
        assert_eq!(classify(Page::Home, &s, FILM), ArrivalMode::External);
        assert_eq!(
            ArrivalMode::External.presentation(Page::Home),
            Presentation::Splash
        );
    }

    #[test]
    fn reload_wins_over_everything() {
        let s = NavigationSignals {
            reload: true,
            from_internal: true,
            persisted: true,
            referrer: Some("https://bruut.nl/film.html?film=x".into()),
            ..Default::default()
        };
        assert_eq!(classify(Page::Film, &s, FILM), ArrivalMode::Reload);
        assert_eq!(
            ArrivalMode::Reload.presentation(Page::Film),
            Presentation::Splash
        );
    }

    #[test]
    fn film_referrer_counts_as_back_only_on_home() {
        let s = NavigationSignals {
            referrer: Some("https://bruut.nl/film.html?film=x".into()),
            ..Default::default()
        };
        assert_eq!(classify(Page::Home, &s, FILM), ArrivalMode::BackForward);
        assert_eq!(classify(Page::Film, &s, FILM), ArrivalMode::External);
    }

    #[test]
    fn internal_hints() {
        for s in [
            NavigationSignals {
                from_internal: true,
                ..Default::default()
            },
            NavigationSignals {
                return_param: true,
                ..Default::default()
            },
            NavigationSignals {
                internal_nav_flag: true,
                ..Default::default()
            },
        ] {
            assert_eq!(classify(Page::Film, &s, FILM), ArrivalMode::Internal);
        }
        assert_eq!(
            ArrivalMode::Internal.presentation(Page::Film),
            Presentation::Immediate
        );
        assert_eq!(
            ArrivalMode::Internal.presentation(Page::Home),
            Presentation::CrossFade
        );
    }

    #[test]
    fn empty_referrer_is_ignored() {
        let s = NavigationSignals {
            referrer: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(classify(Page::Home, &s, FILM), ArrivalMode::External);
    }

    #[test]
    fn back_from_film_needs_cache_restore() {
        assert!(is_back_from_film(true, Some("https://x/film.html"), FILM));
        assert!(!is_back_from_film(false, Some("https://x/film.html"), FILM));
        assert!(!is_back_from_film(true, None, FILM));
    }

    #[test]
    fn cleaned_query_keeps_film_only() {
        assert_eq!(cleaned_query(Some("stilte")), "?film=stilte");
        assert_eq!(cleaned_query(None), "");
        assert_eq!(cleaned_query(Some("salt&pepper")), "?film=salt%26pepper");
        assert_eq!(cleaned_query(Some("100%")), "?film=100%25");
    }
}
