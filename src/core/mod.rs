//! Core state machine types.
//!
//! - States via the `State` trait, with `Label` as a string-backed state
//! - Immutable transition tables
//! - The lock-guarded `StateMachine`
//! - `TransitionError`, the only failure the machine reports

mod error;
mod machine;
mod state;
mod table;

pub use error::TransitionError;
pub use machine::StateMachine;
pub use state::{Label, State};
pub use table::TransitionTable;
