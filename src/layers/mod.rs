//! Copy-on-write layer chains.
//!
//! A chain is a stack of immutable override maps. Reads walk from the
//! innermost layer out to the root; writes only ever replace the innermost
//! layer. Opening a transaction pushes an empty layer, rolling back drops
//! one, and committing flattens the whole chain into a single root layer.

mod chain;

pub use chain::LayeredStore;
