//! The QueryEngine answers the three interactive queries.
//!
//! Every query is a single linear scan over the borrowed collection and
//! never mutates it, so the same engine can be queried any number of times.

use crate::filters::{LanguageFilter, ReleaseYearFilter};
use crate::highest_rated::{self, YearlyBest};
use crate::traits::MovieFilter;
use data_loader::{Movie, MovieCollection, Year};
use serde::Serialize;
use std::fmt;

/// One movie matching a language query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LanguageMatch<'a> {
    pub title: &'a str,
    pub year: Year,
    pub rating: f32,
}

impl fmt::Display for LanguageMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {:.1}", self.title, self.year, self.rating)
    }
}

impl<'a> From<&'a Movie> for LanguageMatch<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            title: &movie.title,
            year: movie.year,
            rating: movie.rating,
        }
    }
}

/// Read-only query front-end over a `MovieCollection`.
///
/// ## Usage
/// ```ignore
/// let engine = QueryEngine::new(&report.collection);
///
/// let titles = engine.by_year(1995);
/// let best = engine.highest_rated_per_year();
/// let french = engine.by_language("French");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    collection: &'a MovieCollection,
}

impl<'a> QueryEngine<'a> {
    pub fn new(collection: &'a MovieCollection) -> Self {
        Self { collection }
    }

    /// Apply any filter to the collection, keeping collection order.
    pub fn filter(&self, filter: &dyn MovieFilter) -> Vec<&'a Movie> {
        tracing::debug!(
            "Applying filter: {} (input count: {})",
            filter.name(),
            self.collection.len()
        );
        let matched = filter.apply(self.collection.as_slice());
        tracing::debug!(
            "Filter applied: {} (output count: {})",
            filter.name(),
            matched.len()
        );
        matched
    }

    /// Titles of all movies released in `year`, in collection order.
    ///
    /// An empty result means no movie was released that year.
    pub fn by_year(&self, year: Year) -> Vec<&'a str> {
        self.filter(&ReleaseYearFilter::new(year))
            .into_iter()
            .map(|movie| movie.title.as_str())
            .collect()
    }

    /// The best-rated movie of every year present, ascending by year.
    pub fn highest_rated_per_year(&self) -> Vec<YearlyBest<'a>> {
        highest_rated::highest_rated_per_year(self.collection.as_slice())
    }

    /// All movies available in `language` (exact, case-sensitive), in
    /// collection order.
    pub fn by_language(&self, language: &str) -> Vec<LanguageMatch<'a>> {
        self.filter(&LanguageFilter::new(language))
            .into_iter()
            .map(LanguageMatch::from)
            .collect()
    }
}
