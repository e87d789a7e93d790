//! Operation dispatch.

use super::snapshot::State;
use crate::types::{Count, Key, Value, NULL};
use std::fmt;

/// An operation against a [`State`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Get { key: Key },
    Set { key: Key, value: Value },
    Delete { key: Key },
    Count { value: Value },
    Begin,
    Commit,
    Rollback,
}

impl Operation {
    /// Whether this operation can produce a different state.
    pub fn is_write(&self) -> bool {
        !matches!(self, Operation::Get { .. } | Operation::Count { .. })
    }
}

/// What an operation reports back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Result of a lookup; `None` renders as `NULL`.
    Value(Option<Value>),
    /// Result of a count.
    Count(Count),
    /// The operation has nothing to report.
    None,
}

impl Output {
    pub fn is_empty(&self) -> bool {
        matches!(self, Output::None)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Value(Some(value)) => f.write_str(value),
            Output::Value(None) => f.write_str(NULL),
            Output::Count(count) => write!(f, "{}", count),
            Output::None => Ok(()),
        }
    }
}

/// Apply an operation to a state.
///
/// Returns the operation's output together with the next state. Reads hand
/// back a clone of the input state.
pub fn apply_operation(state: &State, operation: Operation) -> (Output, State) {
    match operation {
        Operation::Get { key } => (
            Output::Value(state.get(&key).map(str::to_string)),
            state.clone(),
        ),

        Operation::Count { value } => (Output::Count(state.count(&value)), state.clone()),

        Operation::Set { key, value } => (Output::None, state.set(key, value)),

        Operation::Delete { key } => (Output::None, state.delete(key)),

        Operation::Begin => (Output::None, state.begin()),

        Operation::Commit => (Output::None, state.commit()),

        Operation::Rollback => (Output::None, state.rollback()),
    }
}
