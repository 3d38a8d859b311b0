//! Building concept at node formulas.
//!
//! The concept at node formula of a node is the conjunction of its own concept at label formula
//! (in CNF) with the concept at node formula of its parent, so it accumulates meaning along the
//! path from the root.
//! Classification walks the tree pre-order, so a parent's formula is always in place before its
//! children conjoin with it.
//!
//! ```rust
//! # use sematch::classifiers::{CnfContextClassifier, ContextClassifier};
//! # use sematch::structures::tree::Context;
//! let mut context = Context::new();
//! let root = context.create_root("1", "courses");
//! context.node_mut(root).set_clab_formula("1.1");
//! let child = context.create_child(root, "2", "history");
//! context.node_mut(child).set_clab_formula("2.1 & 2.2");
//!
//! CnfContextClassifier.build_cnode_formulas(&mut context).unwrap();
//!
//! assert_eq!(context.node(root).cnode_formula(), "1.1");
//! assert_eq!(context.node(child).cnode_formula(), "(2.1 & 2.2) & 1.1");
//! ```

use crate::{
    misc::log::targets,
    structures::{formula::to_cnf, tree::Context},
    types::err::{ClassifierError, ErrorKind},
};

/// Writes the concept at node formula of every node of a context.
pub trait ContextClassifier {
    fn build_cnode_formulas(&self, context: &mut Context) -> Result<(), ErrorKind>;
}

/// The CNF classifier: per node, CNF of the label formula conjoined with the parent's node
/// formula. The root keeps its own CNF label formula.
pub struct CnfContextClassifier;

impl ContextClassifier for CnfContextClassifier {
    fn build_cnode_formulas(&self, context: &mut Context) -> Result<(), ErrorKind> {
        let order: Vec<_> = context.nodes().collect();
        log::debug!(target: targets::CLASSIFIER, "classifying {} nodes", order.len());

        for id in order {
            let node = context.node(id);
            let clab_formula = node.clab_formula().to_string();

            let mut formula = to_cnf(&clab_formula).map_err(|cause| ClassifierError {
                node: node.id().to_string(),
                formula: clab_formula.clone(),
                cause,
            })?;
            // A multi-literal structure is parenthesized before composition.
            if formula.contains(' ') {
                formula = format!("({formula})");
            }

            let parent_formula = match node.parent() {
                Some(parent) => context.node(parent).cnode_formula().to_string(),
                None => String::new(),
            };

            let cnode_formula = match (formula.is_empty(), parent_formula.is_empty()) {
                (false, false) => format!("{formula} & {parent_formula}"),
                (false, true) => formula,
                (true, false) => parent_formula,
                (true, true) => String::new(),
            };

            context.node_mut(id).set_cnode_formula(cnode_formula);
        }

        Ok(())
    }
}

/// Does nothing: for contexts whose concept at node formulas are already in place.
pub struct ZeroContextClassifier;

impl ContextClassifier for ZeroContextClassifier {
    fn build_cnode_formulas(&self, _context: &mut Context) -> Result<(), ErrorKind> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::err::FormulaError;

    #[test]
    fn conjoins_down_the_path() {
        let mut context = Context::new();
        let root = context.create_root("1", "root");
        context.node_mut(root).set_clab_formula("1.1");
        let child = context.create_child(root, "2", "child");
        context.node_mut(child).set_clab_formula("2.1");
        let grandchild = context.create_child(child, "3", "grandchild");
        context.node_mut(grandchild).set_clab_formula("3.1 | 3.2");

        CnfContextClassifier.build_cnode_formulas(&mut context).unwrap();

        assert_eq!(context.node(root).cnode_formula(), "1.1");
        assert_eq!(context.node(child).cnode_formula(), "2.1 & 1.1");
        assert_eq!(context.node(grandchild).cnode_formula(), "(3.1 | 3.2) & 2.1 & 1.1");
    }

    #[test]
    fn converts_mixed_formulas_to_cnf() {
        let mut context = Context::new();
        let root = context.create_root("1", "root");
        context.node_mut(root).set_clab_formula("1.1 & (1.2 | 1.3)");

        CnfContextClassifier.build_cnode_formulas(&mut context).unwrap();

        assert_eq!(context.node(root).cnode_formula(), "(1.1 & (1.2 | 1.3))");
    }

    #[test]
    fn empty_label_formula_inherits_parent() {
        let mut context = Context::new();
        let root = context.create_root("1", "root");
        context.node_mut(root).set_clab_formula("1.1");
        let child = context.create_child(root, "2", "child");

        CnfContextClassifier.build_cnode_formulas(&mut context).unwrap();

        assert_eq!(context.node(child).cnode_formula(), "1.1");
    }

    #[test]
    fn malformed_formula_is_fatal() {
        let mut context = Context::new();
        let root = context.create_root("1", "root");
        context.node_mut(root).set_clab_formula("1.1 & ~");

        let result = CnfContextClassifier.build_cnode_formulas(&mut context);
        assert_eq!(
            result,
            Err(ErrorKind::Classifier(ClassifierError {
                node: "1".to_string(),
                formula: "1.1 & ~".to_string(),
                cause: FormulaError::UnexpectedEnd,
            }))
        );
    }

    #[test]
    fn zero_classifier_leaves_formulas_alone() {
        let mut context = Context::new();
        let root = context.create_root("1", "root");
        context.node_mut(root).set_cnode_formula("1.1");

        ZeroContextClassifier.build_cnode_formulas(&mut context).unwrap();
        assert_eq!(context.node(root).cnode_formula(), "1.1");
    }
}
