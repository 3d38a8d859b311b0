//! The external collaborators of the matchers, as traits.
//!
//! Both are injected into a matcher on construction; the library ships no implementation of
//! either.
//! Closures implement the traits directly, which keeps tests and small embeddings free of
//! carrier types:
//!
//! ```rust
//! # use sematch::boundary::{SatSolver, SenseOracle};
//! # use sematch::structures::relation::SenseRelation;
//! # use sematch::structures::tree::Sense;
//! # use sematch::types::err::{OracleError, SolverError};
//! let mut solver = |_problem: &str| -> Result<bool, SolverError> { Ok(true) };
//! assert_eq!(solver.satisfiable("p cnf 1 1\n1 0\n"), Ok(true));
//!
//! let oracle = |a: &Sense, b: &Sense| -> Result<SenseRelation, OracleError> {
//!     Ok(if a == b { SenseRelation::Synonym } else { SenseRelation::Unknown })
//! };
//! let sense = Sense::new("n#2137");
//! assert_eq!(oracle.relation(&sense, &sense), Ok(SenseRelation::Synonym));
//! ```

use crate::{
    structures::{relation::SenseRelation, tree::Sense},
    types::err::{OracleError, SolverError},
};

/// A batch SAT solver.
///
/// Input is a complete DIMACS CNF problem: a `p cnf <vars> <clauses>` header followed by one
/// clause per line of space-separated signed integers terminated by `0`.
/// Only satisfiability is needed, never a model.
///
/// A solver imposing a per-query time limit should answer
/// [SolverError::Timeout](crate::types::err::SolverError::Timeout), which the matchers can absorb
/// as an unknown relation (see [Config](crate::config::Config)).
pub trait SatSolver {
    /// Whether the problem is satisfiable.
    fn satisfiable(&mut self, problem: &str) -> Result<bool, SolverError>;
}

impl<F> SatSolver for F
where
    F: FnMut(&str) -> Result<bool, SolverError>,
{
    fn satisfiable(&mut self, problem: &str) -> Result<bool, SolverError> {
        self(problem)
    }
}

/// The element-level sense matcher.
///
/// Answers the semantic relation between two word senses; the matchers ask it about every sense
/// pair drawn from the atomic concepts of a node matching task.
pub trait SenseOracle {
    /// The relation between a sense of a source-side concept and a sense of a target-side one.
    fn relation(&self, source: &Sense, target: &Sense) -> Result<SenseRelation, OracleError>;
}

impl<F> SenseOracle for F
where
    F: Fn(&Sense, &Sense) -> Result<SenseRelation, OracleError>,
{
    fn relation(&self, source: &Sense, target: &Sense) -> Result<SenseRelation, OracleError> {
        self(source, target)
    }
}
