//! Core traits for the query engine.
//!
//! This module defines the MovieFilter trait that lets membership queries
//! be expressed as small, composable predicates over a single movie.

use data_loader::Movie;

/// A predicate selecting movies out of a collection.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters only borrow the movies they inspect; results point back into
///   the collection instead of cloning records
pub trait MovieFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `movie` passes this filter
    fn matches(&self, movie: &Movie) -> bool;

    /// Apply this filter to a slice of movies, keeping their order.
    fn apply<'a>(&self, movies: &'a [Movie]) -> Vec<&'a Movie> {
        movies.iter().filter(|movie| self.matches(movie)).collect()
    }
}
