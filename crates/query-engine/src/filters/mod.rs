//! Filter implementations for the query engine.
//!
//! This module contains the concrete filters behind the membership
//! queries of the QueryEngine.

pub mod language;
pub mod release_year;

// Re-export for convenience
pub use language::LanguageFilter;
pub use release_year::ReleaseYearFilter;
