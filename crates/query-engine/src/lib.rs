//! Read-only queries over a loaded movie collection.
//!
//! This crate provides:
//! - MovieFilter trait and implementations for membership queries
//! - Per-year aggregation of the highest-rated movie
//! - QueryEngine, the single entry point used by the CLI
//!
//! ## Example Usage
//! ```ignore
//! use query_engine::QueryEngine;
//!
//! let engine = QueryEngine::new(&report.collection);
//!
//! for title in engine.by_year(1995) {
//!     println!("{title}");
//! }
//! for best in engine.highest_rated_per_year() {
//!     println!("{best}");
//! }
//! for hit in engine.by_language("French") {
//!     println!("{hit}");
//! }
//! ```

pub mod engine;
pub mod filters;
pub mod highest_rated;
pub mod traits;

// Re-export main types
pub use engine::{LanguageMatch, QueryEngine};
pub use highest_rated::{YearlyBest, highest_rated_per_year};
pub use traits::MovieFilter;
