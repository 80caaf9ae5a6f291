//! Thread-safe state machine driven by a transition table.

use super::error::TransitionError;
use super::state::State;
use super::table::TransitionTable;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Tracks a current state and only moves along edges of its table.
///
/// The table is immutable and may be shared read-only between machines.
/// The current state sits behind a reader/writer lock: queries share the
/// lock, [`transition`](Self::transition) holds it exclusively for the
/// whole check-and-set.
///
/// Queries are snapshots. To act on a state, call `transition` directly
/// rather than pre-checking with `can_transition`.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::{Label, StateMachine, TransitionError};
/// use fsm_table::transitions;
///
/// let table = transitions! {
///     Label::from("green") => [Label::from("yellow")],
///     Label::from("yellow") => [Label::from("green"), Label::from("red")],
///     Label::from("red") => [Label::from("yellow"), Label::from("green")],
/// };
/// let machine = StateMachine::new(Label::from("green"), table);
///
/// assert_eq!(machine.transition(Label::from("yellow")), Ok(Label::from("yellow")));
/// assert_eq!(machine.transition(Label::from("yellow")),
///     Err(TransitionError::new(Label::from("yellow"))));
/// assert_eq!(machine.to_string(), "StateMachine:yellow");
/// ```
#[derive(Debug)]
pub struct StateMachine<S: State> {
    table: Arc<TransitionTable<S>>,
    current: RwLock<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in `initial` that owns `table`.
    ///
    /// `initial` is not required to appear in the table; a machine started
    /// in an unknown state is simply terminal.
    pub fn new(initial: S, table: TransitionTable<S>) -> Self {
        Self::with_shared_table(initial, Arc::new(table))
    }

    /// Create a machine over a table shared with other machines.
    pub fn with_shared_table(initial: S, table: Arc<TransitionTable<S>>) -> Self {
        tracing::trace!(
            initial = initial.name(),
            edges = table.edge_count(),
            "state machine created"
        );
        Self {
            table,
            current: RwLock::new(initial),
        }
    }

    /// Get current state.
    pub fn current(&self) -> S {
        self.current.read().clone()
    }

    /// The table this machine enforces.
    pub fn table(&self) -> &Arc<TransitionTable<S>> {
        &self.table
    }

    /// States reachable in one step from the current state.
    ///
    /// Empty when the current state is terminal or absent from the table.
    pub fn possible(&self) -> HashSet<S> {
        let current = self.current.read();
        self.table
            .destinations(&current)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns `true` if `dst` is reachable in one step from the current state.
    pub fn can_transition(&self, dst: &S) -> bool {
        let current = self.current.read();
        self.table.permits(&current, dst)
    }

    /// Returns `true` if no transition can ever leave the current state.
    pub fn is_terminal(&self) -> bool {
        let current = self.current.read();
        self.table.is_terminal(&current)
    }

    /// Move to `dst` if the table declares an edge from the current state.
    ///
    /// Legality is checked and the new state committed under one exclusive
    /// lock, so concurrent callers are serialized. On failure the state is
    /// unchanged and the error carries the state observed under the lock.
    pub fn transition(&self, dst: S) -> Result<S, TransitionError<S>> {
        let mut current = self.current.write();
        if !self.table.permits(&current, &dst) {
            tracing::debug!(
                from = current.name(),
                to = dst.name(),
                "transition rejected"
            );
            return Err(TransitionError::new(current.clone()));
        }

        tracing::debug!(from = current.name(), to = dst.name(), "transition");
        *current = dst.clone();
        Ok(dst)
    }
}

impl<S: State> fmt::Display for StateMachine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateMachine:{}", self.current.read().name())
    }
}
