//! Matching one (source node, target node) pair.
//!
//! A pair resolves through up to three satisfiability questions, each the conjunction of the
//! task's [background axioms](crate::matchers::axioms) with the pair's concept at node formulas:
//!
//! 1. containment: source ∧ ¬target — unsatisfiable when the source concept is less general;
//! 2. subsumption: target ∧ ¬source — unsatisfiable when the source concept is more general;
//! 3. disjointness: source ∧ target — unsatisfiable when the concepts exclude each other.
//!
//! Unsatisfiability of both 1 and 2 is equivalence; otherwise the first unsatisfiable question
//! in the order above names the relation, and a pair with no unsatisfiable question is unknown.
//!
//! # Negation of a context formula
//!
//! The negated formula in questions 1 and 2 is produced clause-wise: for each clause of the CNF
//! formula, one clause holding the negations of its literals.
//! A true negation of a CNF formula is a DNF; the clause-wise form is the documented behavior
//! here, relied on for the small per-concept clauses these formulas are made of, and deliberately
//! not replaced by a general negation.

use crate::{
    boundary::{SatSolver, SenseOracle},
    config::{Config, MatchMode},
    matchers::{
        axioms::{build_axioms, Side},
        tree::AcolMap,
    },
    misc::log::targets,
    structures::{
        formula::{cnf_clauses, to_dimacs, Clause, Literal},
        relation::Relation,
        tree::{Context, Node, NodeId},
    },
    types::err::{ErrorKind, NodeMatchError, SolverError},
};

/// Matches node pairs, holding the external collaborators and the configuration.
pub struct NodeMatcher<S, O> {
    solver: S,
    oracle: O,
    config: Config,
}

impl<S: SatSolver, O: SenseOracle> NodeMatcher<S, O> {
    pub fn new(solver: S, oracle: O, config: Config) -> Self {
        NodeMatcher { solver, oracle, config }
    }

    /// The relation between `source_node` and `target_node`.
    ///
    /// Answers [Relation::Idk] without touching the oracle or the solver when either node lacks
    /// a concept at label or concept at node formula.
    /// Any other failure is fatal for the pair and carries the pair's ids and formulas.
    pub fn match_nodes(
        &mut self,
        source: &Context,
        source_node: NodeId,
        target: &Context,
        target_node: NodeId,
        source_acols: &AcolMap,
        target_acols: &AcolMap,
    ) -> Result<Relation, ErrorKind> {
        let s = source.node(source_node);
        let t = target.node(target_node);
        if !matchable(s) || !matchable(t) {
            return Ok(Relation::Idk);
        }

        self.match_pair(source, source_node, target, target_node, source_acols, target_acols)
            .map_err(|cause| pair_error(s, t, cause))
    }

    fn match_pair(
        &mut self,
        source: &Context,
        source_node: NodeId,
        target: &Context,
        target_node: NodeId,
        source_acols: &AcolMap,
        target_acols: &AcolMap,
    ) -> Result<Relation, ErrorKind> {
        let axioms = build_axioms(source, source_node, target, target_node, &self.oracle)?;

        let context_a = cnf_clauses(source.node(source_node).cnode_formula())?;
        let context_b = cnf_clauses(target.node(target_node).cnode_formula())?;

        let source_variable = |atom: &str| {
            source_acols
                .contains_key(atom)
                .then(|| axioms.table.variable_of(Side::Source, atom))
                .flatten()
        };
        let target_variable = |atom: &str| {
            target_acols
                .contains_key(atom)
                .then(|| axioms.table.variable_of(Side::Target, atom))
                .flatten()
        };

        let a_text = to_dimacs(&context_a, source_variable)?;
        let b_text = to_dimacs(&context_b, target_variable)?;
        let variables = axioms.table.len();

        // Containment: axioms ∧ A ∧ ¬B.
        let negated_b = negate_clausewise(&context_b);
        let problem = assemble(
            variables,
            axioms.clause_count + context_a.len() + negated_b.len(),
            &axioms.dimacs,
            &a_text,
            &to_dimacs(&negated_b, target_variable)?,
        );
        let is_contained = match self.unsatisfiable(&problem)? {
            Some(unsat) => unsat,
            None => return Ok(Relation::Idk),
        };

        // Subsumption: axioms ∧ B ∧ ¬A.
        let negated_a = negate_clausewise(&context_a);
        let problem = assemble(
            variables,
            axioms.clause_count + context_b.len() + negated_a.len(),
            &axioms.dimacs,
            &b_text,
            &to_dimacs(&negated_a, source_variable)?,
        );
        let is_contains = match self.unsatisfiable(&problem)? {
            Some(unsat) => unsat,
            None => return Ok(Relation::Idk),
        };

        // Disjointness: axioms ∧ B ∧ A. Skipped in reduced mode.
        let is_opposite = match self.config.mode {
            MatchMode::Reduced => false,
            MatchMode::Full => {
                let problem = assemble(
                    variables,
                    axioms.clause_count + context_a.len() + context_b.len(),
                    &axioms.dimacs,
                    &b_text,
                    &a_text,
                );
                match self.unsatisfiable(&problem)? {
                    Some(unsat) => unsat,
                    None => return Ok(Relation::Idk),
                }
            }
        };

        Ok(relation_of(is_contains, is_contained, is_opposite))
    }

    /// Whether `node` is disjoint from `other`. One satisfiability question, as used by
    /// minimal-links matching.
    pub fn node_disjoint(
        &mut self,
        node_context: &Context,
        node: NodeId,
        other_context: &Context,
        other: NodeId,
        node_acols: &AcolMap,
        other_acols: &AcolMap,
    ) -> Result<bool, ErrorKind> {
        let n = node_context.node(node);
        let o = other_context.node(other);
        if !matchable(n) || !matchable(o) {
            return Ok(false);
        }

        let question = move |matcher: &mut Self| -> Result<bool, ErrorKind> {
            let axioms = build_axioms(node_context, node, other_context, other, &matcher.oracle)?;
            let clauses_a = cnf_clauses(node_context.node(node).cnode_formula())?;
            let clauses_b = cnf_clauses(other_context.node(other).cnode_formula())?;
            let a_text = to_dimacs(&clauses_a, |atom| {
                node_acols
                    .contains_key(atom)
                    .then(|| axioms.table.variable_of(Side::Source, atom))
                    .flatten()
            })?;
            let b_text = to_dimacs(&clauses_b, |atom| {
                other_acols
                    .contains_key(atom)
                    .then(|| axioms.table.variable_of(Side::Target, atom))
                    .flatten()
            })?;
            let problem = assemble(
                axioms.table.len(),
                axioms.clause_count + clauses_a.len() + clauses_b.len(),
                &axioms.dimacs,
                &b_text,
                &a_text,
            );
            Ok(matcher.unsatisfiable(&problem)?.unwrap_or(false))
        };

        question(self).map_err(|cause| pair_error(n, o, cause))
    }

    /// Whether the concept of `node` is subsumed by the concept of `other`. One satisfiability
    /// question (`node` ∧ ¬`other`), as used by minimal-links matching.
    ///
    /// `node` may come from either tree; the axiom orientation follows its
    /// [source flag](crate::structures::tree::Node::is_source).
    pub fn node_subsumed_by(
        &mut self,
        node_context: &Context,
        node: NodeId,
        other_context: &Context,
        other: NodeId,
        node_acols: &AcolMap,
        other_acols: &AcolMap,
    ) -> Result<bool, ErrorKind> {
        let n = node_context.node(node);
        let o = other_context.node(other);
        if !matchable(n) || !matchable(o) {
            return Ok(false);
        }

        let node_is_source = n.is_source();
        let question = move |matcher: &mut Self| -> Result<bool, ErrorKind> {
            let (axioms, node_side, other_side) = if node_is_source {
                let axioms =
                    build_axioms(node_context, node, other_context, other, &matcher.oracle)?;
                (axioms, Side::Source, Side::Target)
            } else {
                let axioms =
                    build_axioms(other_context, other, node_context, node, &matcher.oracle)?;
                (axioms, Side::Target, Side::Source)
            };

            let clauses_a = cnf_clauses(node_context.node(node).cnode_formula())?;
            let clauses_b = cnf_clauses(other_context.node(other).cnode_formula())?;
            let a_text = to_dimacs(&clauses_a, |atom| {
                node_acols
                    .contains_key(atom)
                    .then(|| axioms.table.variable_of(node_side, atom))
                    .flatten()
            })?;
            let negated_b = negate_clausewise(&clauses_b);
            let negated_b_text = to_dimacs(&negated_b, |atom| {
                other_acols
                    .contains_key(atom)
                    .then(|| axioms.table.variable_of(other_side, atom))
                    .flatten()
            })?;
            let problem = assemble(
                axioms.table.len(),
                axioms.clause_count + clauses_a.len() + negated_b.len(),
                &axioms.dimacs,
                &a_text,
                &negated_b_text,
            );
            Ok(matcher.unsatisfiable(&problem)?.unwrap_or(false))
        };

        question(self).map_err(|cause| pair_error(n, o, cause))
    }

    /// Whether a problem is unsatisfiable, or `None` for a timeout absorbed as unknown.
    fn unsatisfiable(&mut self, problem: &str) -> Result<Option<bool>, ErrorKind> {
        match self.solver.satisfiable(problem) {
            Ok(satisfiable) => Ok(Some(!satisfiable)),
            Err(SolverError::Timeout) if self.config.timeout_is_idk => {
                log::warn!(target: targets::NODE_MATCH, "query timed out, recording IDK");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// A pair takes part in matching only with both formulas present.
fn matchable(node: &Node) -> bool {
    !node.clab_formula().is_empty() && !node.cnode_formula().is_empty()
}

fn pair_error(source: &Node, target: &Node, cause: ErrorKind) -> ErrorKind {
    // Keep an already pair-scoped error as is.
    if matches!(cause, ErrorKind::NodeMatch(_)) {
        return cause;
    }
    ErrorKind::NodeMatch(NodeMatchError {
        source: source.id().to_string(),
        target: target.id().to_string(),
        source_formula: source.cnode_formula().to_string(),
        target_formula: target.cnode_formula().to_string(),
        cause: Box::new(cause),
    })
}

/// Clause-wise negation of a CNF formula: one clause of negated literals per original clause.
fn negate_clausewise(clauses: &[Clause]) -> Vec<Clause> {
    clauses
        .iter()
        .map(|clause| clause.iter().map(Literal::negate).collect())
        .collect()
}

/// A complete DIMACS problem from the header counts and the three body parts.
fn assemble(variables: usize, clauses: usize, axioms: &str, left: &str, right: &str) -> String {
    format!("p cnf {variables} {clauses}\n{axioms}{left}{right}")
}

/// The relation named by the outcomes of the three questions.
fn relation_of(is_contains: bool, is_contained: bool, is_opposite: bool) -> Relation {
    if is_contains && is_contained {
        Relation::Equivalence
    } else if is_contained {
        Relation::LessGeneral
    } else if is_contains {
        Relation::MoreGeneral
    } else if is_opposite {
        Relation::Disjoint
    } else {
        Relation::Idk
    }
}
