//! Mappings: the sparse relation matrix a match produces.
//!
//! A [ContextMapping] is scoped at construction to one source context and one target context and
//! stores at most one [Relation] per (source node, target node) key.
//! Storage is sparse: pairs with no derived relation are simply absent, and [get](ContextMapping::get)
//! answers [Relation::Idk] for them. Setting a key to `Idk` removes it.
//! Iteration follows insertion order, which for a mapping produced by the
//! [tree matcher](crate::matchers::tree) is the deterministic pair enumeration order.
//!
//! ```rust
//! # use sematch::mapping::ContextMapping;
//! # use sematch::structures::relation::Relation;
//! # use sematch::structures::tree::Context;
//! let mut source = Context::new();
//! let s = source.create_root("1", "a");
//! let mut target = Context::new();
//! let t = target.create_root("2", "b");
//!
//! let mut mapping = ContextMapping::new(&source, &target);
//! mapping.set_relation(s, t, Relation::LessGeneral);
//!
//! assert_eq!(mapping.size(), 1);
//! assert_eq!(mapping.get(s, t), Relation::LessGeneral);
//!
//! mapping.set_relation(s, t, Relation::Idk);
//! assert_eq!(mapping.size(), 0);
//! assert_eq!(mapping.get(s, t), Relation::Idk);
//! ```

pub mod filters;
pub mod plain;

use std::collections::HashMap;

use crate::structures::{
    relation::Relation,
    tree::{Context, NodeId},
};

/// One stored relation: an ordered (source node, target node, relation) triple.
///
/// Immutable from outside the owning mapping; changes go through
/// [set_relation](ContextMapping::set_relation).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MappingElement {
    pub source: NodeId,
    pub target: NodeId,
    pub relation: Relation,
}

/// A sparse mapping between the nodes of a fixed source context and a fixed target context.
///
/// Single-writer: matching writes each key exactly once and nothing reads concurrently.
#[derive(Clone, Debug, Default)]
pub struct ContextMapping {
    elements: Vec<MappingElement>,
    index: HashMap<(NodeId, NodeId), usize>,
}

impl ContextMapping {
    /// An empty mapping scoped to the given contexts.
    pub fn new(_source: &Context, _target: &Context) -> Self {
        ContextMapping::default()
    }

    pub(crate) fn empty_like(&self) -> Self {
        ContextMapping::default()
    }

    /// Records `relation` for the (`source`, `target`) key, replacing any previous relation.
    /// Recording [Relation::Idk] removes the key.
    pub fn set_relation(&mut self, source: NodeId, target: NodeId, relation: Relation) {
        let key = (source, target);

        if relation == Relation::Idk {
            if let Some(at) = self.index.remove(&key) {
                self.elements.remove(at);
                self.reindex(at);
            }
            return;
        }

        match self.index.get(&key) {
            Some(&at) => self.elements[at].relation = relation,
            None => {
                self.index.insert(key, self.elements.len());
                self.elements.push(MappingElement { source, target, relation });
            }
        }
    }

    /// The stored relation of a key, or [Relation::Idk] when none is stored.
    pub fn get(&self, source: NodeId, target: NodeId) -> Relation {
        match self.index.get(&(source, target)) {
            Some(&at) => self.elements[at].relation,
            None => Relation::Idk,
        }
    }

    /// Whether some relation is stored for the key.
    pub fn contains(&self, source: NodeId, target: NodeId) -> bool {
        self.index.contains_key(&(source, target))
    }

    /// The number of stored elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The stored elements, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MappingElement> {
        self.elements.iter()
    }

    /// Keeps only the elements whose key is also present in `other`, with any relation.
    pub fn retain_all(&mut self, other: &ContextMapping) {
        self.elements.retain(|e| other.contains(e.source, e.target));
        self.index.clear();
        self.reindex(0);
    }

    fn reindex(&mut self, from: usize) {
        for (at, element) in self.elements.iter().enumerate().skip(from) {
            self.index.insert((element.source, element.target), at);
        }
    }
}

impl<'m> IntoIterator for &'m ContextMapping {
    type Item = &'m MappingElement;
    type IntoIter = std::slice::Iter<'m, MappingElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contexts() -> (Context, Context, Vec<NodeId>, Vec<NodeId>) {
        let mut source = Context::new();
        let sr = source.create_root("1", "sr");
        let sa = source.create_child(sr, "2", "sa");
        let mut target = Context::new();
        let tr = target.create_root("1", "tr");
        let ta = target.create_child(tr, "2", "ta");
        (source, target, vec![sr, sa], vec![tr, ta])
    }

    #[test]
    fn one_relation_per_key() {
        let (source, target, s, t) = contexts();
        let mut mapping = ContextMapping::new(&source, &target);

        mapping.set_relation(s[0], t[0], Relation::LessGeneral);
        mapping.set_relation(s[0], t[0], Relation::Equivalence);

        assert_eq!(mapping.size(), 1);
        assert_eq!(mapping.get(s[0], t[0]), Relation::Equivalence);
    }

    #[test]
    fn insertion_order_iteration() {
        let (source, target, s, t) = contexts();
        let mut mapping = ContextMapping::new(&source, &target);

        mapping.set_relation(s[1], t[0], Relation::Disjoint);
        mapping.set_relation(s[0], t[1], Relation::MoreGeneral);

        let keys: Vec<_> = mapping.iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(keys, vec![(s[1], t[0]), (s[0], t[1])]);
    }

    #[test]
    fn retain_all_with_self_is_identity() {
        let (source, target, s, t) = contexts();
        let mut mapping = ContextMapping::new(&source, &target);
        mapping.set_relation(s[0], t[0], Relation::Equivalence);
        mapping.set_relation(s[1], t[1], Relation::Disjoint);

        let snapshot = mapping.clone();
        let other = mapping.clone();
        mapping.retain_all(&other);

        assert_eq!(mapping.size(), snapshot.size());
        for (kept, original) in mapping.iter().zip(snapshot.iter()) {
            assert_eq!(kept, original);
        }
    }

    #[test]
    fn retain_all_drops_missing_keys() {
        let (source, target, s, t) = contexts();
        let mut mapping = ContextMapping::new(&source, &target);
        mapping.set_relation(s[0], t[0], Relation::Equivalence);
        mapping.set_relation(s[1], t[1], Relation::Disjoint);

        let mut other = ContextMapping::new(&source, &target);
        // Key presence counts, the relation does not.
        other.set_relation(s[1], t[1], Relation::LessGeneral);

        mapping.retain_all(&other);
        assert_eq!(mapping.size(), 1);
        assert_eq!(mapping.get(s[1], t[1]), Relation::Disjoint);
        assert_eq!(mapping.get(s[0], t[0]), Relation::Idk);
    }

    #[test]
    fn removing_reindexes() {
        let (source, target, s, t) = contexts();
        let mut mapping = ContextMapping::new(&source, &target);
        mapping.set_relation(s[0], t[0], Relation::Equivalence);
        mapping.set_relation(s[0], t[1], Relation::LessGeneral);
        mapping.set_relation(s[1], t[1], Relation::Disjoint);

        mapping.set_relation(s[0], t[0], Relation::Idk);

        assert_eq!(mapping.size(), 2);
        assert_eq!(mapping.get(s[0], t[1]), Relation::LessGeneral);
        assert_eq!(mapping.get(s[1], t[1]), Relation::Disjoint);
    }
}
