mod common;

use common::{
    identity_oracle, parent_child_tree, single_concept_tree, MiniSolver, TableOracle,
    UnreachableSolver,
};
use sematch::{
    config::{Config, MatchMode},
    matchers::tree::{acol_map, TreeMatcher},
    structures::relation::{Relation, SenseRelation},
    structures::tree::Context,
    types::err::{ErrorKind, SolverError},
};

mod single_node_scenarios {
    use super::*;

    #[test]
    fn synonym_roots_are_equivalent() {
        let (source, source_root) = single_concept_tree("1", "courses", "s#1");
        let (target, target_root) = single_concept_tree("2", "classes", "s#2");
        let oracle = TableOracle::new().with("s#1", "s#2", SenseRelation::Synonym);

        let mut matcher = TreeMatcher::new(MiniSolver, oracle, Config::default());
        let mapping = matcher.match_trees(&source, &target).expect("match");

        assert_eq!(mapping.size(), 1);
        assert_eq!(mapping.get(source_root, target_root), Relation::Equivalence);
    }

    #[test]
    fn disjoint_roots_are_disjoint() {
        let (source, source_root) = single_concept_tree("1", "cats", "s#1");
        let (target, target_root) = single_concept_tree("2", "dogs", "s#2");
        let oracle = TableOracle::new().with("s#1", "s#2", SenseRelation::Disjoint);

        let mut matcher = TreeMatcher::new(MiniSolver, oracle, Config::default());
        let mapping = matcher.match_trees(&source, &target).expect("match");

        assert_eq!(mapping.get(source_root, target_root), Relation::Disjoint);
    }

    #[test]
    fn less_general_sense_gives_less_general_node() {
        let (source, source_root) = single_concept_tree("1", "dogs", "s#1");
        let (target, target_root) = single_concept_tree("2", "animals", "s#2");
        let oracle = TableOracle::new().with("s#1", "s#2", SenseRelation::LessGeneral);

        let mut matcher = TreeMatcher::new(MiniSolver, oracle, Config::default());
        let mapping = matcher.match_trees(&source, &target).expect("match");

        assert_eq!(mapping.get(source_root, target_root), Relation::LessGeneral);
    }

    #[test]
    fn more_general_sense_gives_more_general_node() {
        let (source, source_root) = single_concept_tree("1", "animals", "s#1");
        let (target, target_root) = single_concept_tree("2", "dogs", "s#2");
        let oracle = TableOracle::new().with("s#1", "s#2", SenseRelation::MoreGeneral);

        let mut matcher = TreeMatcher::new(MiniSolver, oracle, Config::default());
        let mapping = matcher.match_trees(&source, &target).expect("match");

        assert_eq!(mapping.get(source_root, target_root), Relation::MoreGeneral);
    }

    #[test]
    fn unknown_senses_store_nothing() {
        let (source, source_root) = single_concept_tree("1", "cats", "s#1");
        let (target, target_root) = single_concept_tree("2", "sonatas", "s#2");

        // No axioms: both concepts stay independent atoms and every test is satisfiable.
        let mut matcher = TreeMatcher::new(MiniSolver, TableOracle::new(), Config::default());
        let mapping = matcher.match_trees(&source, &target).expect("match");

        assert_eq!(mapping.size(), 0);
        assert_eq!(mapping.get(source_root, target_root), Relation::Idk);
    }
}

mod short_circuits {
    use super::*;

    #[test]
    fn empty_label_formula_is_idk_without_sat() {
        let (mut source, _) = single_concept_tree("1", "cats", "s#1");
        if let Some(root) = source.root() {
            source.node_mut(root).set_clab_formula("");
        }
        let (target, _) = single_concept_tree("2", "dogs", "s#2");

        let mut matcher = TreeMatcher::new(UnreachableSolver, identity_oracle, Config::default());
        let mapping = matcher.match_trees(&source, &target).expect("match");
        assert_eq!(mapping.size(), 0);
    }

    #[test]
    fn empty_node_formula_is_idk_without_sat() {
        let (mut source, _) = single_concept_tree("1", "cats", "s#1");
        if let Some(root) = source.root() {
            source.node_mut(root).set_cnode_formula("");
        }
        let (target, _) = single_concept_tree("2", "dogs", "s#2");

        let mut matcher = TreeMatcher::new(UnreachableSolver, identity_oracle, Config::default());
        let mapping = matcher.match_trees(&source, &target).expect("match");
        assert_eq!(mapping.size(), 0);
    }

    #[test]
    fn empty_trees_match_to_an_empty_mapping() {
        let source = Context::new();
        let target = Context::new();

        let mut matcher = TreeMatcher::new(UnreachableSolver, identity_oracle, Config::default());
        let mapping = matcher.match_trees(&source, &target).expect("match");
        assert!(mapping.is_empty());
    }
}

mod self_match {
    use super::*;

    #[test]
    fn identical_nodes_are_equivalent() {
        // Two copies of the same classified tree; identical senses are synonymous.
        let (source, source_root, source_child) = parent_child_tree("1", "c#root", "2", "c#child");
        let (target, target_root, target_child) = parent_child_tree("1", "c#root", "2", "c#child");

        let mut matcher = TreeMatcher::new(MiniSolver, identity_oracle, Config::default());
        let mapping = matcher.match_trees(&source, &target).expect("match");

        assert_eq!(mapping.get(source_root, target_root), Relation::Equivalence);
        assert_eq!(mapping.get(source_child, target_child), Relation::Equivalence);
    }
}

mod reduced_mode {
    use super::*;

    #[test]
    fn disjointness_is_never_derived() {
        let (source, source_root) = single_concept_tree("1", "cats", "s#1");
        let (target, target_root) = single_concept_tree("2", "dogs", "s#2");
        let oracle = TableOracle::new().with("s#1", "s#2", SenseRelation::Disjoint);

        let config = Config { mode: MatchMode::Reduced, ..Config::default() };
        let mut matcher = TreeMatcher::new(MiniSolver, oracle, config);
        let mapping = matcher.match_trees(&source, &target).expect("match");

        assert_eq!(mapping.get(source_root, target_root), Relation::Idk);
        assert_eq!(mapping.size(), 0);
    }

    #[test]
    fn containment_still_works() {
        let (source, source_root) = single_concept_tree("1", "dogs", "s#1");
        let (target, target_root) = single_concept_tree("2", "animals", "s#2");
        let oracle = TableOracle::new().with("s#1", "s#2", SenseRelation::LessGeneral);

        let config = Config { mode: MatchMode::Reduced, ..Config::default() };
        let mut matcher = TreeMatcher::new(MiniSolver, oracle, config);
        let mapping = matcher.match_trees(&source, &target).expect("match");

        assert_eq!(mapping.get(source_root, target_root), Relation::LessGeneral);
    }
}

mod minimal_links {
    use super::*;

    #[test]
    fn node_disjoint_answers_one_question() {
        let (mut source, source_root) = single_concept_tree("1", "cats", "s#1");
        source.mark_source(true);
        let (target, target_root) = single_concept_tree("2", "dogs", "s#2");
        let oracle = TableOracle::new().with("s#1", "s#2", SenseRelation::Disjoint);

        let mut matcher = TreeMatcher::new(MiniSolver, oracle, Config::default());
        let source_acols = acol_map(&source);
        let target_acols = acol_map(&target);

        let disjoint = matcher
            .node_matcher()
            .node_disjoint(&source, source_root, &target, target_root, &source_acols, &target_acols)
            .expect("question");
        assert!(disjoint);
    }

    #[test]
    fn node_subsumed_by_in_both_orientations() {
        let (mut source, source_root) = single_concept_tree("1", "dogs", "s#1");
        source.mark_source(true);
        let (target, target_root) = single_concept_tree("2", "animals", "s#2");

        let oracle = TableOracle::new().with("s#1", "s#2", SenseRelation::LessGeneral);
        let mut matcher = TreeMatcher::new(MiniSolver, oracle, Config::default());
        let source_acols = acol_map(&source);
        let target_acols = acol_map(&target);

        // dogs ⊑ animals holds, animals ⊑ dogs does not.
        let subsumed = matcher
            .node_matcher()
            .node_subsumed_by(&source, source_root, &target, target_root, &source_acols, &target_acols)
            .expect("question");
        assert!(subsumed);

        let oracle = TableOracle::new().with("s#1", "s#2", SenseRelation::LessGeneral);
        let mut matcher = TreeMatcher::new(MiniSolver, oracle, Config::default());
        let reverse = matcher
            .node_matcher()
            .node_subsumed_by(&target, target_root, &source, source_root, &target_acols, &source_acols)
            .expect("question");
        assert!(!reverse);
    }
}

mod failures {
    use super::*;

    #[test]
    fn malformed_node_formula_aborts_the_match() {
        let (mut source, _) = single_concept_tree("1", "cats", "s#1");
        if let Some(root) = source.root() {
            source.node_mut(root).set_cnode_formula("1.1 &");
        }
        let (target, _) = single_concept_tree("2", "dogs", "s#2");

        let mut matcher = TreeMatcher::new(MiniSolver, identity_oracle, Config::default());
        let result = matcher.match_trees(&source, &target);

        match result {
            Err(ErrorKind::NodeMatch(pair)) => {
                assert_eq!(pair.source, "1");
                assert_eq!(pair.target, "2");
                assert_eq!(pair.source_formula, "1.1 &");
            }
            other => panic!("expected a pair-scoped error, got {other:?}"),
        }
    }

    #[test]
    fn solver_failure_aborts_the_match() {
        let (source, _) = single_concept_tree("1", "cats", "s#1");
        let (target, _) = single_concept_tree("2", "dogs", "s#2");

        let failing =
            |_: &str| -> Result<bool, SolverError> { Err(SolverError::Invocation("boom".to_string())) };
        let mut matcher = TreeMatcher::new(failing, identity_oracle, Config::default());

        assert!(matcher.match_trees(&source, &target).is_err());
    }

    #[test]
    fn timeout_is_absorbed_as_idk_when_configured() {
        let (source, _) = single_concept_tree("1", "cats", "s#1");
        let (target, _) = single_concept_tree("2", "dogs", "s#2");

        let timing_out = |_: &str| -> Result<bool, SolverError> { Err(SolverError::Timeout) };
        let config = Config { timeout_is_idk: true, ..Config::default() };
        let mut matcher = TreeMatcher::new(timing_out, identity_oracle, config);

        let mapping = matcher.match_trees(&source, &target).expect("match");
        assert_eq!(mapping.size(), 0);
    }

    #[test]
    fn timeout_propagates_when_not_absorbed() {
        let (source, _) = single_concept_tree("1", "cats", "s#1");
        let (target, _) = single_concept_tree("2", "dogs", "s#2");

        let timing_out = |_: &str| -> Result<bool, SolverError> { Err(SolverError::Timeout) };
        let config = Config { timeout_is_idk: false, ..Config::default() };
        let mut matcher = TreeMatcher::new(timing_out, identity_oracle, config);

        assert!(matcher.match_trees(&source, &target).is_err());
    }
}

mod progress {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn callback_sees_every_pair() {
        let (source, _, _) = parent_child_tree("1", "c#a", "2", "c#b");
        let (target, _, _) = parent_child_tree("3", "c#c", "4", "c#d");

        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = Rc::clone(&seen);

        let mut matcher = TreeMatcher::new(MiniSolver, identity_oracle, Config::default());
        matcher.set_callback_progress(Box::new(move |done, total| {
            record.borrow_mut().push((done, total));
        }));
        matcher.match_trees(&source, &target).expect("match");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(*seen.last().expect("nonempty"), (4, 4));
    }
}
