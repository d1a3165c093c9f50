//! Bookkeeping for "at most one default" sibling collections.
//!
//! Setting a new default clears every sibling first. Whether removing the
//! default promotes another sibling is up to the caller: tier pricing options
//! promote, facet options do not.

/// An item in a collection where at most one member is the default.
pub trait Defaultable {
    fn is_default(&self) -> bool;
    fn set_default(&mut self, is_default: bool);
}

/// Clear the default flag on every item.
pub fn clear_defaults<T: Defaultable>(items: &mut [T]) {
    for item in items.iter_mut() {
        item.set_default(false);
    }
}

/// Make the first item the default when none is.
pub fn promote_first<T: Defaultable>(items: &mut [T]) {
    if items.iter().any(Defaultable::is_default) {
        return;
    }
    if let Some(first) = items.first_mut() {
        first.set_default(true);
    }
}

pub fn default_count<T: Defaultable>(items: &[T]) -> usize {
    items.iter().filter(|item| item.is_default()).count()
}
