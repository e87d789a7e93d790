//! # littledb
//!
//! An in-memory key/value store with nested transactions.
//!
//! ## Core Concepts
//!
//! - **Layers**: Immutable override maps chained to a parent; writes copy only
//!   the innermost layer
//! - **State**: A data store (key → value) and an index store (value → count)
//!   kept at the same transaction depth
//! - **Transactions**: `begin` pushes a layer, `rollback` drops one, `commit`
//!   flattens the whole chain
//! - **Shell**: A line-oriented interpreter with completion
//!
//! ## Example
//!
//! ```
//! use littledb::State;
//!
//! let state = State::new().set("a", "10").begin().set("a", "20");
//! assert_eq!(state.get("a"), Some("20"));
//! assert_eq!(state.rollback().get("a"), Some("10"));
//!
//! let committed = state.begin().set("b", "20").commit();
//! assert_eq!(committed.count("20"), 2);
//! assert!(committed.depth().is_root());
//! ```

pub mod config;
pub mod error;
pub mod layers;
pub mod seed;
pub mod shell;
pub mod state;
pub mod types;

// Re-exports
pub use config::ShellConfig;
pub use error::{Result, StoreError};
pub use layers::LayeredStore;
pub use seed::{load_seed, parse_seed};
pub use shell::{complete, parse_command, Command, CommandName, Reply, Session};
pub use state::{apply_operation, DataStore, IndexStore, Operation, Output, State, StateStats};
pub use types::*;
