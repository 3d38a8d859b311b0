//! Background axioms for a node matching task.
//!
//! The vocabulary of a node matching task is the atomic concepts of the two concept at node
//! formulas: for each node, its own concepts first, then its ancestors' nearest first, each in
//! stored order.
//! Every concept is assigned a fresh DIMACS variable in first-seen order (source node's
//! vocabulary before the target's), giving a contiguous range `1..=N` scoped to this task alone.
//!
//! For every (source concept, target concept) pair the sense oracle is consulted; a non-unknown
//! answer becomes one or two clauses tying the two variables together:
//!
//! | relation | clauses |
//! |---|---|
//! | synonym | `¬a ∨ b`, `¬b ∨ a` |
//! | less general | `¬a ∨ b` |
//! | more general | `¬b ∨ a` |
//! | disjoint | `¬a ∨ ¬b` |
//! | unknown | none |

use std::collections::HashMap;

use crate::{
    boundary::SenseOracle,
    misc::log::targets,
    structures::{
        formula::Var,
        relation::SenseRelation,
        tree::{acol_key, AtomicConceptOfLabel, Context, NodeId},
    },
    types::err::ErrorKind,
};

/// Which side of a matching task a variable belongs to.
///
/// Keys are `nodeId.acolId` strings, unique within a tree but not across the two trees, so the
/// table qualifies every key with its side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    Source,
    Target,
}

/// The variable table of one node matching task: atomic concept keys to DIMACS variables.
///
/// Built fresh per task and never shared: every clause of the task's queries references only
/// variables from this table.
#[derive(Debug, Default)]
pub struct VariableTable {
    index: HashMap<(Side, String), Var>,
}

impl VariableTable {
    /// The variable of `key` on `side`, assigning the next free number on first sight.
    fn assign(&mut self, side: Side, key: &str) -> Var {
        let next = (self.index.len() + 1) as Var;
        *self.index.entry((side, key.to_string())).or_insert(next)
    }

    /// The variable of `key` on `side`, if the key belongs to the task vocabulary.
    pub fn variable_of(&self, side: Side, key: &str) -> Option<Var> {
        self.index.get(&(side, key.to_string())).copied()
    }

    /// The number of variables assigned.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// The background axioms of one node matching task.
#[derive(Debug)]
pub struct Axioms {
    /// Axiom clauses as DIMACS body text.
    pub dimacs: String,

    /// The number of axiom clauses, for the problem header.
    pub clause_count: usize,

    /// The task's variable table, covering both formulas' vocabularies.
    pub table: VariableTable,
}

/// The atomic concepts a node contributes to a matching task, keyed for formula lookup: the
/// node's own concepts first, then its ancestors' nearest first.
pub fn task_acols(context: &Context, node: NodeId) -> Vec<(String, &AtomicConceptOfLabel)> {
    let mut acols = Vec::new();
    let own = context.node(node);
    for acol in own.acols() {
        acols.push((acol_key(own.id(), acol.id), acol));
    }
    for ancestor in context.ancestors(node) {
        let ancestor = context.node(ancestor);
        for acol in ancestor.acols() {
            acols.push((acol_key(ancestor.id(), acol.id), acol));
        }
    }
    acols
}

/// Builds the background axioms for the (`source_node`, `target_node`) task.
///
/// The axiom set is order-independent in content, while variable numbering follows the fixed
/// iteration order above, so the same task always yields the same problem text.
pub fn build_axioms(
    source: &Context,
    source_node: NodeId,
    target: &Context,
    target_node: NodeId,
    oracle: &impl SenseOracle,
) -> Result<Axioms, ErrorKind> {
    let source_acols = task_acols(source, source_node);
    let target_acols = task_acols(target, target_node);

    let mut table = VariableTable::default();
    let source_vars: Vec<Var> = source_acols
        .iter()
        .map(|(key, _)| table.assign(Side::Source, key))
        .collect();
    let target_vars: Vec<Var> = target_acols
        .iter()
        .map(|(key, _)| table.assign(Side::Target, key))
        .collect();

    let mut dimacs = String::new();
    let mut clause_count = 0;

    for ((_, source_acol), &a) in source_acols.iter().zip(&source_vars) {
        for ((_, target_acol), &b) in target_acols.iter().zip(&target_vars) {
            match acol_relation(source_acol, target_acol, oracle)? {
                SenseRelation::Synonym => {
                    dimacs.push_str(&format!("-{a} {b} 0\n-{b} {a} 0\n"));
                    clause_count += 2;
                }
                SenseRelation::LessGeneral => {
                    dimacs.push_str(&format!("-{a} {b} 0\n"));
                    clause_count += 1;
                }
                SenseRelation::MoreGeneral => {
                    dimacs.push_str(&format!("-{b} {a} 0\n"));
                    clause_count += 1;
                }
                SenseRelation::Disjoint => {
                    dimacs.push_str(&format!("-{a} -{b} 0\n"));
                    clause_count += 1;
                }
                SenseRelation::Unknown => {}
            }
        }
    }

    log::trace!(
        target: targets::AXIOMS,
        "{} axiom clauses over {} variables for ({}, {})",
        clause_count,
        table.len(),
        source.node(source_node).id(),
        target.node(target_node).id(),
    );

    Ok(Axioms { dimacs, clause_count, table })
}

/// The relation between two atomic concepts: the first non-unknown oracle answer over their
/// sense pairs, in stored order.
fn acol_relation(
    source: &AtomicConceptOfLabel,
    target: &AtomicConceptOfLabel,
    oracle: &impl SenseOracle,
) -> Result<SenseRelation, ErrorKind> {
    for source_sense in &source.senses {
        for target_sense in &target.senses {
            match oracle.relation(source_sense, target_sense)? {
                SenseRelation::Unknown => continue,
                relation => return Ok(relation),
            }
        }
    }
    Ok(SenseRelation::Unknown)
}
