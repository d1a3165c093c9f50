//! Id lookups over insertion-ordered entity collections.
//!
//! Collections in document state are plain `Vec`s: order matters and
//! uniqueness of ids is a reducer-enforced invariant, not a type-level one.

use super::id::Oid;

/// An entity identified by a caller-supplied id.
pub trait Entity: Sized {
    fn id(&self) -> &Oid<Self>;
}

/// Lookup helpers for `Vec<T: Entity>`.
pub trait EntityVec<T: Entity> {
    fn contains_id(&self, id: &Oid<T>) -> bool;
    fn position_of(&self, id: &Oid<T>) -> Option<usize>;
    fn find_by_id(&self, id: &Oid<T>) -> Option<&T>;
    fn find_by_id_mut(&mut self, id: &Oid<T>) -> Option<&mut T>;
    /// Remove the entity with `id`, keeping the order of the rest.
    fn remove_by_id(&mut self, id: &Oid<T>) -> Option<T>;
}

impl<T: Entity> EntityVec<T> for Vec<T> {
    fn contains_id(&self, id: &Oid<T>) -> bool {
        self.iter().any(|item| item.id() == id)
    }

    fn position_of(&self, id: &Oid<T>) -> Option<usize> {
        self.iter().position(|item| item.id() == id)
    }

    fn find_by_id(&self, id: &Oid<T>) -> Option<&T> {
        self.iter().find(|item| item.id() == id)
    }

    fn find_by_id_mut(&mut self, id: &Oid<T>) -> Option<&mut T> {
        self.iter_mut().find(|item| item.id() == id)
    }

    fn remove_by_id(&mut self, id: &Oid<T>) -> Option<T> {
        self.position_of(id).map(|index| self.remove(index))
    }
}

/// Implement [`Entity`] for structs with an `id: Oid<Self>` field.
#[macro_export]
macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::common::Entity for $ty {
                fn id(&self) -> &$crate::common::Oid<Self> {
                    &self.id
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: Oid<Row>,
        label: &'static str,
    }

    crate::impl_entity!(Row);

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "a".into(), label: "first" },
            Row { id: "b".into(), label: "second" },
            Row { id: "c".into(), label: "third" },
        ]
    }

    #[test]
    fn finds_by_id() {
        let rows = rows();
        assert!(rows.contains_id(&"b".into()));
        assert_eq!(rows.position_of(&"c".into()), Some(2));
        assert_eq!(rows.find_by_id(&"a".into()).map(|r| r.label), Some("first"));
        assert!(rows.find_by_id(&"z".into()).is_none());
    }

    #[test]
    fn remove_keeps_order_of_remaining() {
        let mut rows = rows();
        let removed = rows.remove_by_id(&"b".into()).unwrap();
        assert_eq!(removed.label, "second");

        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["first", "third"]);
        assert!(rows.remove_by_id(&"b".into()).is_none());
    }
}
