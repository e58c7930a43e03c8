//! Core domain types for the movie file.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `Movie`: one record of the input file
//! - `MovieCollection`: every record, in file order
//! - `LoadReport`: the collection plus the lines that were rejected

use crate::error::DataLoadError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Release year of a movie
pub type Year = u16;

// =============================================================================
// Movie
// =============================================================================

/// Represents a movie in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: Year,
    /// Languages the movie is available in, in the order they were listed
    pub languages: Vec<String>,
    pub rating: f32,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: Year, languages: Vec<String>, rating: f32) -> Self {
        Self {
            title: title.into(),
            year,
            languages,
            rating,
        }
    }

    /// Exact, case-sensitive membership test over the language tokens.
    ///
    /// `"En"` does not match a movie listed only in `"English"`.
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} [{}], {}",
            self.title,
            self.year,
            self.languages.join(";"),
            self.rating
        )
    }
}

// =============================================================================
// MovieCollection - the in-memory, insertion-ordered store
// =============================================================================

/// All movies loaded from the input file, in file order.
///
/// The collection is built once and never mutated afterwards; queries only
/// borrow it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieCollection {
    movies: Vec<Movie>,
}

impl MovieCollection {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub(crate) fn push(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn as_slice(&self) -> &[Movie] {
        &self.movies
    }

    /// Distinct release years present in the collection, ascending
    pub fn years(&self) -> Vec<Year> {
        self.movies
            .iter()
            .map(|m| m.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromIterator<Movie> for MovieCollection {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        Self {
            movies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

// =============================================================================
// LoadReport
// =============================================================================

/// Outcome of loading a movie file.
///
/// `skipped` holds one line-level error per rejected line, in file order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub collection: MovieCollection,
    pub skipped: Vec<DataLoadError>,
}

impl LoadReport {
    pub fn has_skipped_lines(&self) -> bool {
        !self.skipped.is_empty()
    }
}
