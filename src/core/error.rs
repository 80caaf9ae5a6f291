//! Transition errors.

use super::state::State;
use thiserror::Error;

/// Returned by [`StateMachine::transition`](crate::core::StateMachine::transition)
/// when the requested destination is not reachable from the current state.
///
/// Carries the state the attempt originated from, as observed under the
/// machine's write lock.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot switch from current state {}", .from.name())]
pub struct TransitionError<S: State> {
    pub from: S,
}

impl<S: State> TransitionError<S> {
    pub fn new(from: S) -> Self {
        Self { from }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Label;

    #[test]
    fn error_message_names_source_state() {
        let err = TransitionError::new(Label::new("green"));
        assert_eq!(err.to_string(), "cannot switch from current state green");
    }

    #[test]
    fn error_is_comparable() {
        let err1 = TransitionError::new(Label::new("green"));
        let err2 = TransitionError { from: Label::new("green") };

        assert_eq!(err1, err2);
        assert_ne!(err1, TransitionError::new(Label::new("red")));
    }
}
