//! Explicit reordering of display-ordered collections.

use std::collections::HashSet;

use super::collections::{Entity, EntityVec};
use super::id::Oid;

/// An entity with a `displayOrder` position.
pub trait Ordered: Entity {
    fn set_display_order(&mut self, display_order: u32);
}

/// Why a requested order was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError<T> {
    /// `order` names an id the collection does not contain.
    UnknownId(Oid<T>),
    /// `order` names the same id twice.
    DuplicateId(Oid<T>),
}

/// Rearrange `items` to follow `order` and rewrite `displayOrder` to `0..n`.
///
/// Every id is validated before anything moves, so on `Err` the collection is
/// untouched. Items missing from `order` keep their relative order and go
/// after the listed ones.
pub fn reorder<T: Ordered>(items: &mut Vec<T>, order: &[Oid<T>]) -> Result<(), ReorderError<T>> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(order.len());
    for id in order {
        if !items.contains_id(id) {
            return Err(ReorderError::UnknownId(id.clone()));
        }
        if !seen.insert(id.as_str()) {
            return Err(ReorderError::DuplicateId(id.clone()));
        }
    }

    let mut remaining = std::mem::take(items);
    let mut sorted = Vec::with_capacity(remaining.len());
    for id in order {
        if let Some(item) = remaining.remove_by_id(id) {
            sorted.push(item);
        }
    }
    sorted.append(&mut remaining);

    for (position, item) in sorted.iter_mut().enumerate() {
        item.set_display_order(position as u32);
    }
    *items = sorted;
    Ok(())
}
