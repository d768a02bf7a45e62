//! Ordered, read-only film list.

use crate::error::LoadError;
use bruut_types::{Film, FilmsDocument};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilmCatalog {
    films: Vec<Film>,
}

impl FilmCatalog {
    pub fn new(films: Vec<Film>) -> Self {
        Self { films }
    }

    /// Decode a `{ "films": [...] }` document, keeping declaration order.
    pub fn from_json(raw: &str) -> Result<Self, LoadError> {
        let doc: FilmsDocument = serde_json::from_str(raw)?;
        Ok(Self::new(doc.films))
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Film> {
        self.films.get(index)
    }

    pub fn find(&self, slug: &str) -> Option<&Film> {
        self.films.iter().find(|f| f.url == slug)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Film> {
        self.films.iter()
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }
}

impl<'a> IntoIterator for &'a FilmCatalog {
    type Item = &'a Film;
    type IntoIter = std::slice::Iter<'a, Film>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"films":[
        {"title":"Zand","url":"zand"},
        {"title":"Asfalt","url":"asfalt"},
        {"title":"Mist","url":"mist"}
    ]}"#;

    #[test]
    fn keeps_declaration_order() {
        let catalog = FilmCatalog::from_json(DOC).unwrap();
        let titles: Vec<_> = catalog.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["Zand", "Asfalt", "Mist"]);
    }

    #[test]
    fn find_by_slug() {
        let catalog = FilmCatalog::from_json(DOC).unwrap();
        assert_eq!(catalog.find("mist").map(|f| f.title.as_str()), Some("Mist"));
        assert!(catalog.find("regen").is_none());
    }

    #[test]
    fn malformed_document_is_a_decode_error() {
        let err = FilmCatalog::from_json(r#"{"movies":[]}"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}
