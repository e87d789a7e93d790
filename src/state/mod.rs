//! Transactional state: a data store and its value index, layered in
//! lockstep.
//!
//! A [`State`] is an immutable snapshot. Every operation takes the current
//! snapshot and returns the next one, so callers own the single live value
//! and older snapshots stay readable.

mod index;
mod operations;
mod snapshot;

pub use index::IndexStore;
pub use operations::{apply_operation, Operation, Output};
pub use snapshot::{DataStore, State, StateStats};
