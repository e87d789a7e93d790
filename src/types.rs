//! Core types for the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keys of the data store.
pub type Key = String;

/// Opaque values held by the data store (and keys of the index store).
pub type Value = String;

/// Number of data keys currently resolving to a value.
pub type Count = u64;

/// Text shown for a key that resolves to nothing.
pub const NULL: &str = "NULL";

/// Transaction nesting depth (0 = root, no open transaction).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Depth(pub usize);

impl Depth {
    /// The root depth.
    pub const ROOT: Depth = Depth(0);

    pub fn next(self) -> Self {
        Depth(self.0 + 1)
    }

    pub fn prev(self) -> Option<Self> {
        if self.0 > 0 {
            Some(Depth(self.0 - 1))
        } else {
            None
        }
    }

    pub fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Depth({})", self.0)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An override in the data store.
///
/// A tombstone is written on delete so that values held by outer layers for
/// the same key stay shadowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry<V> {
    Value(V),
    Tombstone,
}

impl<V> Entry<V> {
    /// The live value, if this entry is not a tombstone.
    pub fn value(&self) -> Option<&V> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Tombstone => None,
        }
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Entry::Tombstone)
    }
}

impl<V> From<V> for Entry<V> {
    fn from(value: V) -> Self {
        Entry::Value(value)
    }
}
