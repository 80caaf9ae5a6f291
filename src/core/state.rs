//! State trait and the string-backed `Label` state.
//!
//! A state is an opaque, comparable label. Any type satisfying [`State`]
//! can drive a [`StateMachine`](crate::core::StateMachine); `Label` covers
//! the common case of states named at runtime.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied out of the machine on every read
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: machines are shared across threads
///
/// # Example
///
/// ```rust
/// use fsm_table::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum JobState {
///     Queued,
///     Running,
///     Done,
/// }
///
/// impl State for JobState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Queued => "Queued",
///             Self::Running => "Running",
///             Self::Done => "Done",
///         }
///     }
/// }
///
/// assert_eq!(JobState::Running.name(), "Running");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// A state identified by a string.
///
/// The empty label is reserved: [`Label::INVALID`] stands for "no valid
/// state" and must never be placed in a table or used as an initial state.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// The reserved "no valid state" label.
    pub const INVALID: Label = Label(String::new());

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns `true` for the reserved empty label.
    pub fn is_invalid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl State for Label {
    fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({:?})", self.0)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
