//! Immutable transition tables.

use super::state::State;
use crate::builder::TransitionTableBuilder;
use std::collections::{HashMap, HashSet};

/// Mapping from each source state to the set of states it may move to.
///
/// A table is immutable once built. A state that never appears as a key has
/// no outgoing transitions (it is terminal). No consistency checks are made:
/// destinations that are never sources, or states that are unreachable, are
/// accepted as-is.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::{Label, TransitionTable};
///
/// let table = TransitionTable::<Label>::builder()
///     .allow("green".into(), "yellow".into())
///     .allow_many("yellow".into(), [Label::from("green"), Label::from("red")])
///     .build();
///
/// assert!(table.permits(&"green".into(), &"yellow".into()));
/// assert!(!table.permits(&"green".into(), &"red".into()));
/// assert!(table.is_terminal(&"red".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable<S: State> {
    edges: HashMap<S, HashSet<S>>,
}

impl<S: State> TransitionTable<S> {
    /// Start a fluent builder.
    pub fn builder() -> TransitionTableBuilder<S> {
        TransitionTableBuilder::new()
    }

    /// A table with no edges: every state is terminal.
    pub fn empty() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Destinations declared for `from`, or `None` if `from` is not a source.
    pub fn destinations(&self, from: &S) -> Option<&HashSet<S>> {
        self.edges.get(from)
    }

    /// Returns `true` if the edge `from -> to` is declared.
    pub fn permits(&self, from: &S, to: &S) -> bool {
        self.edges.get(from).is_some_and(|dsts| dsts.contains(to))
    }

    /// Returns `true` if `state` has no outgoing edges.
    pub fn is_terminal(&self, state: &S) -> bool {
        self.edges.get(state).is_none_or(HashSet::is_empty)
    }

    /// Iterate over the states that appear as keys.
    pub fn sources(&self) -> impl Iterator<Item = &S> {
        self.edges.keys()
    }

    /// Total number of declared edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(HashSet::len).sum()
    }
}

impl<S: State> Default for TransitionTable<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: State> From<HashMap<S, HashSet<S>>> for TransitionTable<S> {
    fn from(edges: HashMap<S, HashSet<S>>) -> Self {
        Self { edges }
    }
}

impl<S: State> FromIterator<(S, S)> for TransitionTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, S)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TransitionTableBuilder::new(), |builder, (from, to)| {
                builder.allow(from, to)
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Label;

    fn traffic_light() -> TransitionTable<Label> {
        [
            ("green", "yellow"),
            ("yellow", "green"),
            ("yellow", "red"),
            ("red", "yellow"),
            ("red", "green"),
        ]
        .into_iter()
        .map(|(from, to)| (Label::from(from), Label::from(to)))
        .collect()
    }

    #[test]
    fn permits_only_declared_edges() {
        let table = traffic_light();

        assert!(table.permits(&"green".into(), &"yellow".into()));
        assert!(table.permits(&"red".into(), &"green".into()));
        assert!(!table.permits(&"green".into(), &"red".into()));
        assert!(!table.permits(&"blue".into(), &"green".into()));
    }

    #[test]
    fn destinations_of_unknown_state_is_none() {
        let table = traffic_light();

        assert_eq!(table.destinations(&"yellow".into()).map(HashSet::len), Some(2));
        assert!(table.destinations(&"blue".into()).is_none());
    }

    #[test]
    fn terminal_covers_absent_and_empty_sources() {
        let table = TransitionTable::<Label>::builder()
            .allow("running".into(), "done".into())
            .terminal("failed".into())
            .build();

        assert!(!table.is_terminal(&"running".into()));
        assert!(table.is_terminal(&"done".into()));
        assert!(table.is_terminal(&"failed".into()));
    }

    #[test]
    fn edge_count_ignores_duplicates() {
        let table: TransitionTable<Label> = [("a", "b"), ("a", "b"), ("b", "a")]
            .into_iter()
            .map(|(from, to)| (Label::from(from), Label::from(to)))
            .collect();

        assert_eq!(table.edge_count(), 2);
        assert_eq!(table.sources().count(), 2);
    }

    #[test]
    fn from_hash_map_keeps_edges() {
        let mut edges = HashMap::new();
        edges.insert(Label::from("a"), HashSet::from([Label::from("b")]));
        let table = TransitionTable::from(edges);

        assert!(table.permits(&"a".into(), &"b".into()));
        assert_eq!(table, table.clone());
    }

    #[test]
    fn empty_table_has_no_edges() {
        let table: TransitionTable<Label> = TransitionTable::default();
        assert_eq!(table.edge_count(), 0);
        assert!(table.is_terminal(&"anything".into()));
    }
}
