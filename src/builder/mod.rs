//! Builder API for ergonomic transition table construction.
//!
//! This module provides a fluent builder and macros for declaring the
//! edges a machine may follow.

pub mod macros;
pub mod table;

pub use table::TransitionTableBuilder;
