//! # Data Loader Crate
//!
//! This crate handles loading a comma-delimited movie file into memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieCollection, LoadReport)
//! - **parser**: Parse one line of the file into a Movie
//! - **loader**: Read a whole file into a MovieCollection
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieCollection;
//! use std::path::Path;
//!
//! let report = MovieCollection::load_from_file(Path::new("movies.csv"))?;
//! for err in &report.skipped {
//!     eprintln!("skipped: {err}");
//! }
//!
//! println!("Loaded {} movies", report.collection.len());
//! ```

// Public modules
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{parse_languages, parse_movie_line};
pub use types::{LoadReport, Movie, MovieCollection, Year};
