use serde::{Deserialize, Serialize};

/// A film as listed in `films.json`. `url` is the slug used by the detail page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub starring: String,
    #[serde(default)]
    pub production: String,
    #[serde(default)]
    pub cinematography: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub trailer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilmsDocument {
    pub films: Vec<Film>,
}

/// A screening as listed in `calendar.json`. `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    pub film_title: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ticket_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowtimesDocument {
    #[serde(default)]
    pub showtimes: Vec<Showtime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_uses_camel_case_keys_and_defaults() {
        let raw = r#"{
            "title": "Stilte",
            "url": "stilte",
            "image": "stilte.webp",
            "releaseDate": "TBA",
            "trailer": "https://youtu.be/dQw4w9WgXcQ"
        }"#;
        let film: Film = serde_json::from_str(raw).unwrap();
        assert_eq!(film.url, "stilte");
        assert_eq!(film.release_date, "TBA");
        assert_eq!(film.director, "");
        assert_eq!(film.trailer.as_deref(), Some("https://youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn showtimes_document_tolerates_missing_list() {
        let doc: ShowtimesDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.showtimes.is_empty());

        let doc: ShowtimesDocument = serde_json::from_str(
            r#"{"showtimes":[{"filmTitle":"Stilte","date":"2025-03-05","ticketUrl":"https://t"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.showtimes[0].film_title, "Stilte");
        assert_eq!(doc.showtimes[0].ticket_url, "https://t");
    }
}
