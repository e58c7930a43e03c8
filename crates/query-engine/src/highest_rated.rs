//! Per-year aggregation: the best-rated movie of every year.

use data_loader::{Movie, Year};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The highest-rated movie of one release year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyBest<'a> {
    pub year: Year,
    pub rating: f32,
    pub title: &'a str,
}

impl fmt::Display for YearlyBest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.1} {}", self.year, self.rating, self.title)
    }
}

/// Find the highest-rated movie for every year present in `movies`.
///
/// ## Algorithm
/// 1. Walk the movies once, keeping the best movie seen per year in a
///    `BTreeMap` keyed by year (only years that actually occur get a slot)
/// 2. A later movie replaces the current best only if its rating is
///    strictly greater, so ties keep the first movie encountered
/// 3. Emit one entry per year, ascending by year
pub fn highest_rated_per_year(movies: &[Movie]) -> Vec<YearlyBest<'_>> {
    let mut best: BTreeMap<Year, &Movie> = BTreeMap::new();

    for movie in movies {
        best.entry(movie.year)
            .and_modify(|current| {
                if movie.rating > current.rating {
                    *current = movie;
                }
            })
            .or_insert(movie);
    }

    best.into_values()
        .map(|movie| YearlyBest {
            year: movie.year,
            rating: movie.rating,
            title: &movie.title,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: Year, rating: f32) -> Movie {
        Movie::new(title, year, vec![], rating)
    }

    #[test]
    fn test_one_entry_per_year_in_ascending_order() {
        let movies = vec![
            movie("Amélie", 2001, 4.6),
            movie("Toy Story", 1995, 4.3),
            movie("Heat", 1995, 8.3),
            movie("Shrek", 2001, 7.9),
        ];

        let best = highest_rated_per_year(&movies);

        assert_eq!(best.len(), 2);
        assert_eq!(best[0], YearlyBest {
            year: 1995,
            rating: 8.3,
            title: "Heat",
        });
        assert_eq!(best[1], YearlyBest {
            year: 2001,
            rating: 7.9,
            title: "Shrek",
        });
    }

    #[test]
    fn test_ties_keep_first_encountered() {
        let movies = vec![movie("First", 1999, 7.5), movie("Second", 1999, 7.5)];

        let best = highest_rated_per_year(&movies);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].title, "First");
    }

    #[test]
    fn test_years_outside_historical_range() {
        let movies = vec![
            movie("Roundhay Garden Scene", 1888, 6.1),
            movie("Future", 2031, 9.0),
        ];

        let years: Vec<Year> = highest_rated_per_year(&movies)
            .iter()
            .map(|b| b.year)
            .collect();
        assert_eq!(years, vec![1888, 2031]);
    }

    #[test]
    fn test_empty_input() {
        assert!(highest_rated_per_year(&[]).is_empty());
    }

    #[test]
    fn test_display_rounds_to_one_decimal() {
        let best = YearlyBest {
            year: 2008,
            rating: 8.26,
            title: "The Dark Knight",
        };
        assert_eq!(best.to_string(), "2008 8.3 The Dark Knight");

        let best = YearlyBest {
            year: 1994,
            rating: 9.0,
            title: "The Shawshank Redemption",
        };
        assert_eq!(best.to_string(), "1994 9.0 The Shawshank Redemption");
    }
}
