//! Parser for the movie file format.
//!
//! One record per line, four comma-separated fields:
//!
//! ```text
//! title,year,language_list,rating
//! Toy Story,1995,[English],4.3
//! The Intouchables,2011,[French;English],8.5
//! ```
//!
//! The language list is itself a sub-field delimited by `[`, `]` and `;`.

use crate::error::{DataLoadError, Result};
use crate::types::{Movie, Year};

/// Separator between the top-level fields of a line
pub const FIELD_DELIMITER: char = ',';

/// Number of fields every record line must have
pub const EXPECTED_FIELDS: usize = 4;

/// Punctuation that delimits the entries of the language sub-field
pub const LANGUAGE_DELIMITERS: [char; 3] = ['[', ']', ';'];

/// Parse one line of the movie file into a `Movie`.
///
/// `line_no` is the 1-based line number, used only for error reporting.
pub fn parse_movie_line(line: &str, line_no: usize) -> Result<Movie> {
    let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).map(str::trim).collect();

    if fields.len() != EXPECTED_FIELDS {
        return Err(DataLoadError::FieldCountMismatch {
            expected: EXPECTED_FIELDS,
            found: fields.len(),
            line: line_no,
        });
    }

    let title = fields[0];
    if title.is_empty() {
        return Err(DataLoadError::ParseError {
            line: line_no,
            reason: "Missing title".to_string(),
        });
    }

    Ok(Movie {
        title: title.to_string(),
        year: parse_year(fields[1], line_no)?,
        languages: parse_languages(fields[2]),
        rating: parse_rating(fields[3], line_no)?,
    })
}

/// Split a language sub-field into its individual languages.
///
/// Example: "[English;French]" -> vec!["English", "French"]
///          "English"          -> vec!["English"]
///          "[]"               -> vec![]
pub fn parse_languages(field: &str) -> Vec<String> {
    field
        .split(LANGUAGE_DELIMITERS)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_year(s: &str, line_no: usize) -> Result<Year> {
    s.parse().map_err(|e| DataLoadError::ParseError {
        line: line_no,
        reason: format!("Invalid year {:?}: {}", s, e),
    })
}

fn parse_rating(s: &str, line_no: usize) -> Result<f32> {
    let rating: f32 = s.parse().map_err(|e| DataLoadError::ParseError {
        line: line_no,
        reason: format!("Invalid rating {:?}: {}", s, e),
    })?;

    if !rating.is_finite() {
        return Err(DataLoadError::ParseError {
            line: line_no,
            reason: format!("Invalid rating {:?}: not a finite number", s),
        });
    }
    Ok(rating)
}
