//! Builder for constructing transition tables.

use crate::core::{State, TransitionTable};
use std::collections::{HashMap, HashSet};

/// Builder for constructing transition tables with a fluent API.
///
/// Building never fails: edges are accepted without any consistency check.
pub struct TransitionTableBuilder<S: State> {
    edges: HashMap<S, HashSet<S>>,
}

impl<S: State> TransitionTableBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Declare the edge `from -> to`.
    pub fn allow(mut self, from: S, to: S) -> Self {
        self.edges.entry(from).or_default().insert(to);
        self
    }

    /// Declare edges from `from` to every state in `to`.
    ///
    /// An empty `to` still records `from` as a source with no destinations.
    pub fn allow_many<I>(mut self, from: S, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.edges.entry(from).or_default().extend(to);
        self
    }

    /// Declare `state` as explicitly terminal.
    pub fn terminal(mut self, state: S) -> Self {
        self.edges.entry(state).or_default();
        self
    }

    /// Build the table.
    pub fn build(self) -> TransitionTable<S> {
        TransitionTable::from(self.edges)
    }
}

impl<S: State> Default for TransitionTableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Label;

    #[test]
    fn fluent_api_builds_table() {
        let table = TransitionTableBuilder::new()
            .allow(Label::from("normal"), Label::from("warning"))
            .allow_many(
                Label::from("warning"),
                [Label::from("normal"), Label::from("critical")],
            )
            .allow(Label::from("critical"), Label::from("warning"))
            .build();

        assert_eq!(table.edge_count(), 4);
        assert!(table.permits(&"warning".into(), &"critical".into()));
        assert!(!table.permits(&"normal".into(), &"critical".into()));
    }

    #[test]
    fn repeated_sources_merge_destinations() {
        let table = TransitionTableBuilder::new()
            .allow(Label::from("a"), Label::from("b"))
            .allow(Label::from("a"), Label::from("c"))
            .allow_many(Label::from("a"), [Label::from("b")])
            .build();

        assert_eq!(table.destinations(&"a".into()).map(HashSet::len), Some(2));
    }

    #[test]
    fn terminal_records_empty_source() {
        let table = TransitionTableBuilder::new()
            .terminal(Label::from("done"))
            .allow_many(Label::from("failed"), Vec::new())
            .build();

        assert_eq!(table.sources().count(), 2);
        assert!(table.destinations(&"done".into()).is_some_and(HashSet::is_empty));
        assert!(table.is_terminal(&"failed".into()));
    }

    #[test]
    fn dangling_states_are_accepted() {
        // "orphan" is only ever a destination; nothing validates that
        let table = TransitionTableBuilder::new()
            .allow(Label::from("start"), Label::from("orphan"))
            .build();

        assert!(table.is_terminal(&"orphan".into()));
    }
}
