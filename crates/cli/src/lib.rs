//! Interactive front-end for querying a movie file.
//!
//! The binary (`movies`) loads the file named on the command line and hands
//! a [`QueryEngine`](query_engine::QueryEngine) to the [`menu::Menu`] loop.

pub mod menu;

pub use menu::{InputError, Menu, MenuState};
