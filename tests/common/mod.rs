//! Shared test helpers: a miniature DPLL solver to exercise the SAT boundary, a table-backed
//! sense oracle, and small tree builders.
//!
//! The library ships no solver; the one here is just enough for the handful of variables a test
//! problem carries.

#![allow(dead_code)]

use std::collections::HashMap;

use sematch::{
    boundary::{SatSolver, SenseOracle},
    classifiers::{CnfContextClassifier, ContextClassifier},
    structures::relation::SenseRelation,
    structures::tree::{AtomicConceptOfLabel, Context, NodeId, Sense},
    types::err::{OracleError, SolverError},
};

/// A truth-table-with-pruning SAT solver over DIMACS text.
pub struct MiniSolver;

impl SatSolver for MiniSolver {
    fn satisfiable(&mut self, problem: &str) -> Result<bool, SolverError> {
        let mut clauses: Vec<Vec<i32>> = Vec::new();
        let mut max_var = 0_i32;
        for line in problem.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('p') || line.starts_with('c') {
                continue;
            }
            let mut clause = Vec::new();
            for token in line.split_whitespace() {
                let literal: i32 = token
                    .parse()
                    .map_err(|_| SolverError::Invocation(format!("bad literal {token}")))?;
                if literal == 0 {
                    break;
                }
                max_var = max_var.max(literal.abs());
                clause.push(literal);
            }
            clauses.push(clause);
        }
        let mut values = vec![None; max_var as usize + 1];
        Ok(dpll(&clauses, &mut values))
    }
}

fn dpll(clauses: &[Vec<i32>], values: &mut Vec<Option<bool>>) -> bool {
    let mut open_variable = None;
    let mut all_satisfied = true;
    for clause in clauses {
        let mut satisfied = false;
        let mut open = None;
        for &literal in clause {
            let variable = literal.unsigned_abs() as usize;
            match values[variable] {
                Some(value) if value == (literal > 0) => {
                    satisfied = true;
                    break;
                }
                Some(_) => {}
                None => open = Some(variable),
            }
        }
        if satisfied {
            continue;
        }
        all_satisfied = false;
        match open {
            None => return false,
            Some(variable) => open_variable = Some(variable),
        }
    }
    if all_satisfied {
        return true;
    }
    let variable = match open_variable {
        Some(variable) => variable,
        None => return false,
    };
    for value in [true, false] {
        values[variable] = Some(value);
        if dpll(clauses, values) {
            return true;
        }
    }
    values[variable] = None;
    false
}

/// A solver which fails the test when consulted, for asserting short-circuits.
pub struct UnreachableSolver;

impl SatSolver for UnreachableSolver {
    fn satisfiable(&mut self, _problem: &str) -> Result<bool, SolverError> {
        panic!("the SAT boundary must not be invoked");
    }
}

/// A sense oracle backed by a table of (source sense, target sense) entries; everything else is
/// unknown.
#[derive(Default)]
pub struct TableOracle {
    relations: HashMap<(Sense, Sense), SenseRelation>,
}

impl TableOracle {
    pub fn new() -> Self {
        TableOracle::default()
    }

    pub fn with(mut self, source: &str, target: &str, relation: SenseRelation) -> Self {
        self.relations.insert((Sense::new(source), Sense::new(target)), relation);
        self
    }
}

impl SenseOracle for TableOracle {
    fn relation(&self, source: &Sense, target: &Sense) -> Result<SenseRelation, OracleError> {
        Ok(self
            .relations
            .get(&(source.clone(), target.clone()))
            .copied()
            .unwrap_or(SenseRelation::Unknown))
    }
}

/// An oracle holding identical senses synonymous and everything else unknown.
pub fn identity_oracle(a: &Sense, b: &Sense) -> Result<SenseRelation, OracleError> {
    Ok(if a == b { SenseRelation::Synonym } else { SenseRelation::Unknown })
}

/// A single-node classified tree: root labeled `name`, one atomic concept with one sense.
pub fn single_concept_tree(node_id: &str, name: &str, sense: &str) -> (Context, NodeId) {
    let mut context = Context::new();
    let root = context.create_root(node_id, name);
    context.node_mut(root).set_clab_formula(format!("{node_id}.1"));
    context
        .node_mut(root)
        .add_acol(AtomicConceptOfLabel::new(1, name, name, vec![Sense::new(sense)]));
    CnfContextClassifier
        .build_cnode_formulas(&mut context)
        .expect("classification succeeds");
    (context, root)
}

/// A two-level classified tree: root plus one child, each with one single-sense concept.
pub fn parent_child_tree(
    root_id: &str,
    root_sense: &str,
    child_id: &str,
    child_sense: &str,
) -> (Context, NodeId, NodeId) {
    let mut context = Context::new();
    let root = context.create_root(root_id, root_id);
    context.node_mut(root).set_clab_formula(format!("{root_id}.1"));
    context
        .node_mut(root)
        .add_acol(AtomicConceptOfLabel::new(1, root_id, root_id, vec![Sense::new(root_sense)]));

    let child = context.create_child(root, child_id, child_id);
    context.node_mut(child).set_clab_formula(format!("{child_id}.1"));
    context
        .node_mut(child)
        .add_acol(AtomicConceptOfLabel::new(1, child_id, child_id, vec![Sense::new(child_sense)]));

    CnfContextClassifier
        .build_cnode_formulas(&mut context)
        .expect("classification succeeds");
    (context, root, child)
}
