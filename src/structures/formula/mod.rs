//! Propositional formulas over atomic concept identifiers.
//!
//! The surface syntax is the one stored on nodes by preprocessing: atoms are dot-separated
//! `nodeId.acolId` identifiers, combined with `&` (and), `|` (or), `~` (not), and parentheses.
//! Parsing produces an explicit [Formula] tree, so CNF conversion and negation are operations on
//! structure rather than string rewriting.
//!
//! ```rust
//! # use sematch::structures::formula::{parse, to_cnf, Formula};
//! let formula = parse("n1.1 & (n1.2 | ~n2.1)").unwrap();
//! assert_eq!(formula.atoms(), vec!["n1.1", "n1.2", "n2.1"]);
//!
//! // A formula with one connective kind and no negation is already flat CNF and passes through
//! // unchanged.
//! assert_eq!(to_cnf("n1.1 & n1.2").unwrap(), "n1.1 & n1.2");
//!
//! // Otherwise OR is distributed over AND.
//! assert_eq!(to_cnf("n1.1 | (n1.2 & n1.3)").unwrap(), "(n1.1 | n1.2) & (n1.1 | n1.3)");
//! ```

mod cnf;
mod parse;

pub use cnf::{cnf_clauses, to_cnf};
pub use parse::parse;

use crate::types::err::FormulaError;

/// A DIMACS variable number. Positive; sign carries polarity in a rendered literal.
pub type Var = i32;

/// A propositional formula over atomic concept identifiers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Formula {
    /// An atomic concept identifier, e.g. `n1.2`.
    Atom(String),

    /// Negation.
    Not(Box<Formula>),

    /// Conjunction of two or more formulas.
    And(Vec<Formula>),

    /// Disjunction of two or more formulas.
    Or(Vec<Formula>),
}

impl Formula {
    /// The distinct atoms of the formula, in first-appearance order.
    pub fn atoms(&self) -> Vec<&str> {
        let mut collected = Vec::new();
        self.collect_atoms(&mut collected);
        collected
    }

    fn collect_atoms<'f>(&'f self, into: &mut Vec<&'f str>) {
        match self {
            Formula::Atom(a) => {
                if !into.contains(&a.as_str()) {
                    into.push(a);
                }
            }
            Formula::Not(inner) => inner.collect_atoms(into),
            Formula::And(parts) | Formula::Or(parts) => {
                for part in parts {
                    part.collect_atoms(into);
                }
            }
        }
    }

    /// The truth value of the formula under the given assignment of atoms.
    pub fn evaluate(&self, assignment: &impl Fn(&str) -> bool) -> bool {
        match self {
            Formula::Atom(a) => assignment(a),
            Formula::Not(inner) => !inner.evaluate(assignment),
            Formula::And(parts) => parts.iter().all(|p| p.evaluate(assignment)),
            Formula::Or(parts) => parts.iter().any(|p| p.evaluate(assignment)),
        }
    }
}

/// An atom or its negation, as found in a clause.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Literal {
    /// The atomic concept identifier.
    pub atom: String,

    /// Whether the literal is the negation of its atom.
    pub negated: bool,
}

impl Literal {
    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            negated: !self.negated,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "~{}", self.atom)
        } else {
            write!(f, "{}", self.atom)
        }
    }
}

/// A clause: the disjunction of its literals.
pub type Clause = Vec<Literal>;

/// The DIMACS body for a sequence of clauses: one line per clause, space-separated signed
/// integers terminated by `0`.
///
/// `variable_of` supplies the variable number of an atom, answering `None` for atoms outside the
/// matching task (an error, as every clause of a query must draw on that query's variable table).
/// The `p cnf <vars> <clauses>` header is added by the caller once totals across axioms and
/// context formulas are known.
pub fn to_dimacs(
    clauses: &[Clause],
    variable_of: impl Fn(&str) -> Option<Var>,
) -> Result<String, FormulaError> {
    let mut text = String::new();
    for clause in clauses {
        for literal in clause {
            let variable = match variable_of(&literal.atom) {
                Some(v) => v,
                None => return Err(FormulaError::UnknownAtom(literal.atom.clone())),
            };
            if literal.negated {
                text.push_str(&format!("-{variable} "));
            } else {
                text.push_str(&format!("{variable} "));
            }
        }
        text.push_str("0\n");
    }
    Ok(text)
}
