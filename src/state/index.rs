//! Value occurrence index.

use crate::layers::LayeredStore;
use crate::types::{Count, Value};

/// Layered map from value to the number of data keys holding it.
pub type IndexStore = LayeredStore<Value, Count>;

/// Current count for `value`, treating a missing entry as zero.
pub(crate) fn count_of(index: &IndexStore, value: &str) -> Count {
    index.resolve(value).copied().unwrap_or(0)
}

/// Record that one key moved from `old` to `new`.
///
/// `old` is decremented (never below zero) when present, `new` is
/// incremented. Both updates land in a single new innermost layer. Callers
/// never pass `old == new`.
pub(crate) fn reassign(index: &IndexStore, old: Option<&str>, new: &str) -> IndexStore {
    debug_assert_ne!(old, Some(new));

    let mut updates = Vec::with_capacity(2);
    if let Some(old) = old {
        updates.push((old.to_string(), count_of(index, old).saturating_sub(1)));
    }
    updates.push((new.to_string(), count_of(index, new) + 1));
    index.write_all(updates)
}

/// Record that one key holding `old` was deleted.
///
/// Decrementing a missing or zero count leaves it at zero.
pub(crate) fn release(index: &IndexStore, old: Option<&str>) -> IndexStore {
    match old {
        Some(old) => index.write(old.to_string(), count_of(index, old).saturating_sub(1)),
        None => index.clone(),
    }
}
