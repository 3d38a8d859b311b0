//! Structures, in the abstract sense of the things matching is about.
//!
//! - [formula]: propositional formulas over atomic concepts, their CNF form, and DIMACS rendering.
//! - [relation]: the vocabularies of mapping relations and sense relations.
//! - [tree]: labeled classifications, their nodes, and the atomic concepts of node labels.

pub mod formula;
pub mod relation;
pub mod tree;
