//! fsm-table: a table-driven, thread-safe finite state machine
//!
//! A [`StateMachine`] tracks one current state and only moves along the
//! edges of an immutable [`TransitionTable`] supplied at construction. It
//! carries no domain logic of its own: job lifecycles, connection states
//! or severity levels are expressed entirely through the table.
//!
//! # Core Concepts
//!
//! - **State**: any comparable label implementing the `State` trait;
//!   `Label` is the string-backed default
//! - **Transition table**: each source state mapped to the set of states it
//!   may move to; a state with no entry is terminal
//! - **Transition**: the check-and-set performed under the machine's write
//!   lock, failing with `TransitionError` when no edge exists
//!
//! # Example
//!
//! ```rust
//! use fsm_table::{Label, StateMachine, TransitionError};
//! use fsm_table::transitions;
//! use std::collections::HashSet;
//!
//! let green = Label::from("green");
//! let yellow = Label::from("yellow");
//! let red = Label::from("red");
//!
//! let table = transitions! {
//!     green.clone() => [yellow.clone()],
//!     yellow.clone() => [green.clone(), red.clone()],
//!     red.clone() => [yellow.clone(), green.clone()],
//! };
//! let machine = StateMachine::new(green.clone(), table);
//!
//! assert_eq!(machine.transition(yellow.clone()), Ok(yellow.clone()));
//! assert_eq!(machine.possible(), HashSet::from([green.clone(), red.clone()]));
//!
//! machine.transition(green.clone()).unwrap();
//! assert_eq!(machine.transition(red.clone()), Err(TransitionError::new(green.clone())));
//! assert_eq!(machine.current(), green);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::TransitionTableBuilder;
pub use core::{Label, State, StateMachine, TransitionError, TransitionTable};
