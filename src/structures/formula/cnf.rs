//! Conversion to conjunctive normal form, and clause extraction from formulas already in CNF.

use crate::{
    structures::formula::{parse, Clause, Formula, Literal},
    types::err::FormulaError,
};

/// The CNF form of a formula, as text.
///
/// A formula which does not mix `&` with `|` and contains no `~` is already flat CNF and is
/// passed through byte-identical.
/// The pass-through covers the formula shapes preprocessing emits; it is not a general claim
/// about CNF equivalence of arbitrary connective-homogeneous formulas.
///
/// Otherwise the formula is parsed, negations are pushed down to atoms by De Morgan's laws, and
/// OR is distributed over AND.
/// The output is deterministic: clauses and literals keep the order of the input formula.
pub fn to_cnf(formula: &str) -> Result<String, FormulaError> {
    let requires_conversion =
        (formula.contains('&') && formula.contains('|')) || formula.contains('~');
    if !requires_conversion {
        return Ok(formula.to_string());
    }

    let parsed = parse(formula)?;
    let clauses = clausify(negation_normal(parsed, false));
    Ok(render(&clauses))
}

/// The clauses of a formula already in CNF, split into literal lists for encoding.
///
/// Accepts arbitrary nesting of conjunctions over disjunctions over literals, as produced by
/// [to_cnf] and by the concept at node composition of CNF parts.
pub fn cnf_clauses(formula: &str) -> Result<Vec<Clause>, FormulaError> {
    let parsed = parse(formula)?;
    let mut clauses = Vec::new();
    collect_clauses(&parsed, &mut clauses)?;
    Ok(clauses)
}

fn collect_clauses(formula: &Formula, into: &mut Vec<Clause>) -> Result<(), FormulaError> {
    match formula {
        Formula::And(parts) => {
            for part in parts {
                collect_clauses(part, into)?;
            }
            Ok(())
        }
        other => {
            let mut clause = Vec::new();
            collect_literals(other, &mut clause)?;
            into.push(clause);
            Ok(())
        }
    }
}

fn collect_literals(formula: &Formula, into: &mut Clause) -> Result<(), FormulaError> {
    match formula {
        Formula::Atom(atom) => {
            into.push(Literal { atom: atom.clone(), negated: false });
            Ok(())
        }
        Formula::Not(inner) => match inner.as_ref() {
            Formula::Atom(atom) => {
                into.push(Literal { atom: atom.clone(), negated: true });
                Ok(())
            }
            _ => Err(FormulaError::NotCnf("negation of a non-atom".to_string())),
        },
        Formula::Or(parts) => {
            for part in parts {
                collect_literals(part, into)?;
            }
            Ok(())
        }
        Formula::And(_) => Err(FormulaError::NotCnf("conjunction below a disjunction".to_string())),
    }
}

/// Negation normal form: `~` applied to atoms only, via De Morgan's laws.
fn negation_normal(formula: Formula, negate: bool) -> Formula {
    match formula {
        Formula::Atom(atom) => {
            if negate {
                Formula::Not(Box::new(Formula::Atom(atom)))
            } else {
                Formula::Atom(atom)
            }
        }
        Formula::Not(inner) => negation_normal(*inner, !negate),
        Formula::And(parts) => {
            let parts = parts.into_iter().map(|p| negation_normal(p, negate)).collect();
            if negate {
                Formula::Or(parts)
            } else {
                Formula::And(parts)
            }
        }
        Formula::Or(parts) => {
            let parts = parts.into_iter().map(|p| negation_normal(p, negate)).collect();
            if negate {
                Formula::And(parts)
            } else {
                Formula::Or(parts)
            }
        }
    }
}

/// Clauses of a formula in negation normal form, distributing OR over AND.
fn clausify(formula: Formula) -> Vec<Clause> {
    match formula {
        Formula::Atom(atom) => vec![vec![Literal { atom, negated: false }]],
        Formula::Not(inner) => match *inner {
            // In NNF the only negations are on atoms.
            Formula::Atom(atom) => vec![vec![Literal { atom, negated: true }]],
            other => clausify(negation_normal(other, true)),
        },
        Formula::And(parts) => parts.into_iter().flat_map(clausify).collect(),
        Formula::Or(parts) => {
            let mut product: Vec<Clause> = vec![Vec::new()];
            for part in parts {
                let part_clauses = clausify(part);
                let mut crossed = Vec::with_capacity(product.len() * part_clauses.len());
                for left in &product {
                    for right in &part_clauses {
                        let mut clause = left.clone();
                        clause.extend(right.iter().cloned());
                        crossed.push(clause);
                    }
                }
                product = crossed;
            }
            product
        }
    }
}

fn render(clauses: &[Clause]) -> String {
    let rendered: Vec<String> = clauses
        .iter()
        .map(|clause| {
            let literals: Vec<String> = clause.iter().map(Literal::to_string).collect();
            if literals.len() == 1 {
                literals.join(" | ")
            } else {
                format!("({})", literals.join(" | "))
            }
        })
        .collect();
    rendered.join(" & ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_through_single_connective() {
        assert_eq!(to_cnf("n1.1").unwrap(), "n1.1");
        assert_eq!(to_cnf("n1.1 & n1.2 & n1.3").unwrap(), "n1.1 & n1.2 & n1.3");
        assert_eq!(to_cnf("n1.1 | n1.2").unwrap(), "n1.1 | n1.2");
        assert_eq!(to_cnf("").unwrap(), "");
    }

    #[test]
    fn negation_forces_conversion() {
        assert_eq!(to_cnf("~(a & b)").unwrap(), "(~a | ~b)");
        assert_eq!(to_cnf("~~a").unwrap(), "a");
    }

    #[test]
    fn distribution() {
        assert_eq!(to_cnf("a | (b & c)").unwrap(), "(a | b) & (a | c)");
        assert_eq!(to_cnf("a & (b | c)").unwrap(), "a & (b | c)");
    }

    #[test]
    fn clause_extraction() {
        let clauses = cnf_clauses("(a | ~b) & c").unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].len(), 2);
        assert!(clauses[0][1].negated);
        assert_eq!(clauses[1][0].atom, "c");
    }

    #[test]
    fn clause_extraction_rejects_non_cnf() {
        assert!(matches!(cnf_clauses("a | (b & c)"), Err(FormulaError::NotCnf(_))));
        assert!(matches!(cnf_clauses("~(a | b)"), Err(FormulaError::NotCnf(_))));
    }
}
