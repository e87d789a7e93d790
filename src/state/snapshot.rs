//! State snapshots and the transaction manager operations on them.

use super::index::{self, IndexStore};
use crate::layers::LayeredStore;
use crate::types::{Count, Depth, Entry, Key, Value};
use std::collections::BTreeMap;

/// Layered map from key to value or tombstone.
pub type DataStore = LayeredStore<Key, Entry<Value>>;

/// Summary of a state's layer chains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateStats {
    /// Open transactions.
    pub depth: usize,
    /// Keys currently resolving to a value.
    pub live_keys: usize,
    /// Values held by at least one key.
    pub distinct_values: usize,
    /// Overrides per data layer, innermost first.
    pub data_layers: Vec<usize>,
    /// Overrides per index layer, innermost first.
    pub index_layers: Vec<usize>,
}

/// An immutable snapshot of the store.
///
/// `data` and `index` always have the same depth. Cloning is O(1).
#[derive(Clone, Debug, Default)]
pub struct State {
    data: DataStore,
    index: IndexStore,
}

impl State {
    /// An empty state with no open transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a root state from initial bindings, deriving the index from the
    /// values. Later duplicates of a key win.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        let data: BTreeMap<Key, Value> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut counts: BTreeMap<Value, Count> = BTreeMap::new();
        for value in data.values() {
            *counts.entry(value.clone()).or_default() += 1;
        }

        Self {
            data: LayeredStore::from_root(
                data.into_iter().map(|(k, v)| (k, Entry::Value(v))).collect(),
            ),
            index: LayeredStore::from_root(counts),
        }
    }

    /// The data store chain.
    pub fn data(&self) -> &DataStore {
        &self.data
    }

    /// The index store chain.
    pub fn index(&self) -> &IndexStore {
        &self.index
    }

    /// Number of open transactions.
    pub fn depth(&self) -> Depth {
        debug_assert_eq!(self.data.depth(), self.index.depth());
        self.data.depth()
    }

    /// Value bound to `key`, or `None` if it was never set or was deleted.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .resolve(key)
            .and_then(Entry::value)
            .map(String::as_str)
    }

    /// Number of keys currently bound to `value`.
    pub fn count(&self, value: &str) -> Count {
        index::count_of(&self.index, value)
    }

    /// Bind `key` to `value`.
    ///
    /// Setting a key to the value it already holds returns `self` unchanged:
    /// no new layer entry and no index movement.
    pub fn set(&self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        let old = self.get(&key);

        if old == Some(value.as_str()) {
            return self.clone();
        }

        let index = index::reassign(&self.index, old, &value);
        Self {
            data: self.data.write(key, Entry::Value(value)),
            index,
        }
    }

    /// Remove `key` by writing a tombstone over it.
    pub fn delete(&self, key: impl Into<Key>) -> Self {
        let key = key.into();
        let index = index::release(&self.index, self.get(&key));
        Self {
            data: self.data.write(key, Entry::Tombstone),
            index,
        }
    }

    /// Open a nested transaction.
    pub fn begin(&self) -> Self {
        Self {
            data: self.data.begin_layer(),
            index: self.index.begin_layer(),
        }
    }

    /// Discard the innermost transaction. No-op when none is open.
    pub fn rollback(&self) -> Self {
        Self {
            data: self.data.rollback_layer(),
            index: self.index.rollback_layer(),
        }
    }

    /// Commit every open transaction at once, flattening both chains down to
    /// a single root layer.
    pub fn commit(&self) -> Self {
        Self {
            data: self.data.commit_all(),
            index: self.index.commit_all(),
        }
    }

    /// All keys currently bound to a value, in key order.
    pub fn keys(&self) -> Vec<&str> {
        self.data
            .resolved()
            .into_iter()
            .filter(|(_, entry)| !entry.is_tombstone())
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Whether both snapshots share the same innermost layers.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.data.ptr_eq(&other.data) && self.index.ptr_eq(&other.index)
    }

    /// Summarize the layer chains.
    pub fn stats(&self) -> StateStats {
        StateStats {
            depth: self.depth().0,
            live_keys: self.keys().len(),
            distinct_values: self
                .index
                .resolved()
                .values()
                .filter(|count| ***count > 0)
                .count(),
            data_layers: self.data.layer_sizes(),
            index_layers: self.index.layer_sizes(),
        }
    }
}
