//! A library for semantic matching of labeled hierarchical classifications.
//!
//! sematch takes two trees whose node labels have been turned into propositional formulas over
//! atomic concepts, and derives for every pair of nodes across the trees the semantic relation
//! between them: equivalence, less general, more general, disjoint, or unknown.
//! Each question is encoded as a propositional satisfiability problem in DIMACS CNF form and
//! decided by an external SAT solver.
//!
//! # Orientation
//!
//! The library is the structure-level core of a matching pipeline.
//! What surrounds it arrives through explicit boundaries:
//! - Linguistic preprocessing (tokenization, sense lookup) has already happened: nodes arrive
//!   with a concept at label formula and its [atomic concepts](structures::tree::AtomicConceptOfLabel).
//! - The element-level sense matcher is a [SenseOracle](boundary::SenseOracle).
//! - The SAT solver is a [SatSolver](boundary::SatSolver): DIMACS text in, satisfiability out.
//!
//! A match then proceeds in two steps:
//! 1. A [classifier](classifiers) builds each node's concept at node formula — the CNF
//!    conjunction of its own label formula with everything on the path to the root.
//! 2. The [tree matcher](matchers::tree) enumerates all node pairs; per pair, the
//!    [node matcher](matchers::node) combines [background axioms](matchers::axioms) drawn from
//!    the oracle with the two formulas into up to three SAT queries and names the relation.
//!
//! The result is a [ContextMapping](mapping::ContextMapping): a sparse relation matrix which can
//! be filtered, iterated, and [round-tripped as plain text](mapping::plain).
//!
//! Useful starting points:
//! - [structures::formula] for the formula syntax, CNF conversion, and DIMACS rendering.
//! - [matchers::node] for the exact encoding of the three questions.
//! - [types::err] for the fail-fast error design.
//!
//! # Example
//!
//! Two single-node trees whose root concepts the oracle holds synonymous match as equivalent:
//!
//! ```rust
//! use sematch::{
//!     boundary::SatSolver,
//!     classifiers::{CnfContextClassifier, ContextClassifier},
//!     config::Config,
//!     matchers::tree::TreeMatcher,
//!     structures::relation::{Relation, SenseRelation},
//!     structures::tree::{AtomicConceptOfLabel, Context, Sense},
//!     types::err::{ErrorKind, OracleError, SolverError},
//! };
//! # struct MiniSolver;
//! # impl SatSolver for MiniSolver {
//! #     fn satisfiable(&mut self, problem: &str) -> Result<bool, SolverError> {
//! #         let mut clauses: Vec<Vec<i32>> = Vec::new();
//! #         let mut max_var = 0_i32;
//! #         for line in problem.lines() {
//! #             let line = line.trim();
//! #             if line.is_empty() || line.starts_with('p') || line.starts_with('c') {
//! #                 continue;
//! #             }
//! #             let mut clause = Vec::new();
//! #             for token in line.split_whitespace() {
//! #                 let literal: i32 = token
//! #                     .parse()
//! #                     .map_err(|_| SolverError::Invocation(format!("bad literal {token}")))?;
//! #                 if literal == 0 {
//! #                     break;
//! #                 }
//! #                 max_var = max_var.max(literal.abs());
//! #                 clause.push(literal);
//! #             }
//! #             clauses.push(clause);
//! #         }
//! #         let mut values = vec![None; max_var as usize + 1];
//! #         Ok(dpll(&clauses, &mut values))
//! #     }
//! # }
//! # fn dpll(clauses: &[Vec<i32>], values: &mut Vec<Option<bool>>) -> bool {
//! #     let mut open_variable = None;
//! #     let mut all_satisfied = true;
//! #     for clause in clauses {
//! #         let mut satisfied = false;
//! #         let mut open = None;
//! #         for &literal in clause {
//! #             let variable = literal.unsigned_abs() as usize;
//! #             match values[variable] {
//! #                 Some(value) if value == (literal > 0) => {
//! #                     satisfied = true;
//! #                     break;
//! #                 }
//! #                 Some(_) => {}
//! #                 None => open = Some(variable),
//! #             }
//! #         }
//! #         if satisfied {
//! #             continue;
//! #         }
//! #         all_satisfied = false;
//! #         match open {
//! #             None => return false,
//! #             Some(variable) => open_variable = Some(variable),
//! #         }
//! #     }
//! #     if all_satisfied {
//! #         return true;
//! #     }
//! #     let variable = match open_variable {
//! #         Some(variable) => variable,
//! #         None => return false,
//! #     };
//! #     for value in [true, false] {
//! #         values[variable] = Some(value);
//! #         if dpll(clauses, values) {
//! #             return true;
//! #         }
//! #     }
//! #     values[variable] = None;
//! #     false
//! # }
//! # fn main() -> Result<(), ErrorKind> {
//! let mut source = Context::new();
//! let source_root = source.create_root("1", "courses");
//! source.node_mut(source_root).set_clab_formula("1.1");
//! source.node_mut(source_root).add_acol(AtomicConceptOfLabel::new(
//!     1, "courses", "course", vec![Sense::new("n#1")],
//! ));
//! source.mark_source(true);
//!
//! let mut target = Context::new();
//! let target_root = target.create_root("2", "classes");
//! target.node_mut(target_root).set_clab_formula("2.1");
//! target.node_mut(target_root).add_acol(AtomicConceptOfLabel::new(
//!     1, "classes", "class", vec![Sense::new("n#2")],
//! ));
//!
//! CnfContextClassifier.build_cnode_formulas(&mut source)?;
//! CnfContextClassifier.build_cnode_formulas(&mut target)?;
//!
//! let oracle = |a: &Sense, b: &Sense| -> Result<SenseRelation, OracleError> {
//!     Ok(if a.as_str() == "n#1" && b.as_str() == "n#2" {
//!         SenseRelation::Synonym
//!     } else {
//!         SenseRelation::Unknown
//!     })
//! };
//!
//! let mut matcher = TreeMatcher::new(MiniSolver, oracle, Config::default());
//! let mapping = matcher.match_trees(&source, &target)?;
//!
//! assert_eq!(mapping.size(), 1);
//! assert_eq!(mapping.get(source_root, target_root), Relation::Equivalence);
//! # Ok(())
//! # }
//! ```
//!
//! # Guiding principles
//!
//! - Collaborators are injected, never global: every matcher receives its solver and oracle on
//!   construction, and configuration is a plain struct.
//! - Matching is fail-fast: a pair that cannot be encoded aborts the whole match with the pair
//!   named in the error, rather than degrading the mapping silently.
//! - Determinism: pair enumeration, variable numbering, and clause order are fixed, so a match
//!   is reproducible query for query.

pub mod boundary;
pub mod classifiers;
pub mod config;
pub mod mapping;
pub mod matchers;
pub mod misc;
pub mod structures;
pub mod types;
