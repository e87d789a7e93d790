//! Layered store implementation.

use crate::types::Depth;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// One level of overrides plus a link to the level below it.
struct Layer<K, V> {
    overrides: BTreeMap<K, V>,
    parent: Option<Arc<Layer<K, V>>>,
}

impl<K, V> Layer<K, V> {
    fn root(overrides: BTreeMap<K, V>) -> Self {
        Self {
            overrides,
            parent: None,
        }
    }
}

// Unlink parents one at a time so a long chain is not dropped recursively.
impl<K, V> Drop for Layer<K, V> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(layer) = parent {
            match Arc::try_unwrap(layer) {
                Ok(mut layer) => parent = layer.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// A persistent chain of override layers.
///
/// Every mutating method returns a new store and leaves `self` untouched, so
/// older handles remain valid snapshots. Cloning is O(1).
pub struct LayeredStore<K, V> {
    /// Innermost (current) layer.
    head: Arc<Layer<K, V>>,

    /// Number of layers above the root.
    depth: Depth,
}

impl<K, V> Clone for LayeredStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            head: Arc::clone(&self.head),
            depth: self.depth,
        }
    }
}

impl<K: Ord, V> Default for LayeredStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> LayeredStore<K, V> {
    /// Create a store with a single, empty root layer.
    pub fn new() -> Self {
        Self::from_root(BTreeMap::new())
    }

    /// Create a store whose root layer holds `overrides`.
    pub fn from_root(overrides: BTreeMap<K, V>) -> Self {
        Self {
            head: Arc::new(Layer::root(overrides)),
            depth: Depth::ROOT,
        }
    }

    /// Number of layers above the root.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Push a new, empty layer on top of the chain.
    pub fn begin_layer(&self) -> Self {
        Self {
            head: Arc::new(Layer {
                overrides: BTreeMap::new(),
                parent: Some(Arc::clone(&self.head)),
            }),
            depth: self.depth.next(),
        }
    }

    /// Look up `key`, returning the override from the innermost layer that
    /// has one.
    pub fn resolve<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut layer = Some(&*self.head);
        while let Some(current) = layer {
            if let Some(value) = current.overrides.get(key) {
                return Some(value);
            }
            layer = current.parent.as_deref();
        }
        None
    }

    /// Drop the innermost layer. At the root this is a no-op.
    pub fn rollback_layer(&self) -> Self {
        match (&self.head.parent, self.depth.prev()) {
            (Some(parent), Some(depth)) => Self {
                head: Arc::clone(parent),
                depth,
            },
            _ => self.clone(),
        }
    }

    /// Number of overrides held by each layer, innermost first.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.depth.0 + 1);
        let mut layer = Some(&*self.head);
        while let Some(current) = layer {
            sizes.push(current.overrides.len());
            layer = current.parent.as_deref();
        }
        sizes
    }

    /// The fully resolved view: every key visible from the innermost layer
    /// paired with its winning override, ordered by key.
    pub fn resolved(&self) -> BTreeMap<&K, &V> {
        let mut view = BTreeMap::new();
        let mut layer = Some(&*self.head);
        while let Some(current) = layer {
            for (key, value) in &current.overrides {
                view.entry(key).or_insert(value);
            }
            layer = current.parent.as_deref();
        }
        view
    }

    /// Whether both stores share the same innermost layer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.head, &other.head)
    }
}

impl<K: Ord + Clone, V: Clone> LayeredStore<K, V> {
    /// Install `key -> value` in the innermost layer.
    ///
    /// The innermost layer's map is copied, so a write costs O(n) in the
    /// number of overrides that layer holds. At the root that is every key
    /// committed so far; nested layers only hold their own writes.
    pub fn write(&self, key: K, value: V) -> Self {
        self.write_all(std::iter::once((key, value)))
    }

    /// Install several overrides in the innermost layer at once. Later
    /// entries win over earlier ones for the same key.
    pub fn write_all(&self, entries: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut overrides = self.head.overrides.clone();
        overrides.extend(entries);

        Self {
            head: Arc::new(Layer {
                overrides,
                parent: self.head.parent.clone(),
            }),
            depth: self.depth,
        }
    }

    /// Flatten the entire chain into one parentless layer.
    ///
    /// The innermost layer is folded onto its parent (innermost entries win)
    /// and the result becomes the new innermost layer, until only the root
    /// is left. This commits every open level, not just the innermost one.
    pub fn commit_all(&self) -> Self {
        if self.depth.is_root() {
            return self.clone();
        }

        let mut merged = self.head.overrides.clone();
        let mut parent = self.head.parent.as_deref();
        let mut folded = 0usize;

        while let Some(layer) = parent {
            let mut base = layer.overrides.clone();
            base.extend(merged);
            merged = base;
            parent = layer.parent.as_deref();
            folded += 1;
        }

        trace!(layers = folded, entries = merged.len(), "flattened layer chain");

        Self::from_root(merged)
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for LayeredStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayeredStore")
            .field("depth", &self.depth)
            .field("resolved", &self.resolved())
            .finish()
    }
}
