//! Macros for ergonomic table and state construction.

/// Generate a `State` implementation for a plain enum.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and `Debug`;
/// each state's name is its variant name.
///
/// # Example
///
/// ```
/// use fsm_table::core::State;
/// use fsm_table::state_enum;
///
/// state_enum! {
///     pub enum Severity {
///         Normal,
///         Warning,
///         Critical,
///     }
/// }
///
/// assert_eq!(Severity::Warning.name(), "Warning");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Build a `TransitionTable` from `source => [destinations]` entries.
///
/// A source with an empty list is recorded as explicitly terminal.
///
/// # Example
///
/// ```
/// use fsm_table::core::Label;
/// use fsm_table::transitions;
///
/// let table = transitions! {
///     Label::from("queued") => [Label::from("running")],
///     Label::from("running") => [Label::from("done"), Label::from("failed")],
///     Label::from("done") => [],
/// };
///
/// assert_eq!(table.edge_count(), 3);
/// assert!(table.is_terminal(&Label::from("failed")));
/// ```
#[macro_export]
macro_rules! transitions {
    ( $( $from:expr => [ $( $to:expr ),* $(,)? ] ),* $(,)? ) => {{
        let builder = $crate::builder::TransitionTableBuilder::new();
        $(
            let builder = builder.allow_many($from, [$($to),*]);
        )*
        builder.build()
    }};
}
