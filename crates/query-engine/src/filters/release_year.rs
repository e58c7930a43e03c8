//! Filter selecting movies released in one specific year.

use crate::traits::MovieFilter;
use data_loader::{Movie, Year};

/// Keeps only movies whose release year equals `year`.
pub struct ReleaseYearFilter {
    year: Year,
}

impl ReleaseYearFilter {
    pub fn new(year: Year) -> Self {
        Self { year }
    }
}

impl MovieFilter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.year == self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: Year) -> Movie {
        Movie::new(title, year, vec!["English".to_string()], 7.0)
    }

    #[test]
    fn test_release_year_filter() {
        let movies = vec![
            movie("Toy Story", 1995),
            movie("Amélie", 2001),
            movie("Heat", 1995),
        ];

        let filter = ReleaseYearFilter::new(1995);
        let filtered = filter.apply(&movies);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "Toy Story");
        assert_eq!(filtered[1].title, "Heat");
    }

    #[test]
    fn test_release_year_filter_no_match() {
        let movies = vec![movie("Toy Story", 1995)];

        let filter = ReleaseYearFilter::new(1896);
        assert!(filter.apply(&movies).is_empty());
    }
}
