//! The structure-level matchers.
//!
//! A match runs over a fixed source context and target context whose concept at node formulas
//! have been built (see [classifiers](crate::classifiers)).
//! The [tree matcher](tree) enumerates all node pairs; for each pair the [node matcher](node)
//! poses up to three satisfiability questions built from the pair's formulas and the
//! [background axioms](axioms) the sense oracle implies between their atomic concepts.

pub mod axioms;
pub mod node;
pub mod tree;
