//! Filter selecting movies available in a given language.
//!
//! Matching is done against the already-tokenized language list of each
//! movie: exact and case-sensitive, never a substring match.

use crate::traits::MovieFilter;
use data_loader::Movie;

pub struct LanguageFilter {
    language: String,
}

impl LanguageFilter {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl MovieFilter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.speaks(&self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::parse_languages;

    fn movie(title: &str, languages: &str) -> Movie {
        Movie::new(title, 2000, parse_languages(languages), 7.0)
    }

    #[test]
    fn test_language_filter() {
        let movies = vec![
            movie("Amélie", "[French]"),
            movie("Toy Story", "[English]"),
            movie("The Intouchables", "[French;English]"),
        ];

        let filtered = LanguageFilter::new("French").apply(&movies);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "Amélie");
        assert_eq!(filtered[1].title, "The Intouchables");
    }

    #[test]
    fn test_language_filter_requires_exact_token() {
        let movies = vec![movie("Toy Story", "[English]")];

        assert!(LanguageFilter::new("En").apply(&movies).is_empty());
        assert!(LanguageFilter::new("english").apply(&movies).is_empty());
        assert!(LanguageFilter::new("[English]").apply(&movies).is_empty());
    }
}
