//! Matching every node of a source tree against every node of a target tree.
//!
//! The double loop is source-outer, target-inner, both in pre-order from the root, so results
//! are deterministic and each (source, target) key is written exactly once.
//! Every pair is independent of every other: the per-pair variable table is fresh, the acol
//! lookup maps are read-only, and only the final mapping is written.
//! Any per-pair error aborts the whole match.

use std::collections::HashMap;

use crate::{
    boundary::{SatSolver, SenseOracle},
    config::Config,
    mapping::ContextMapping,
    matchers::node::NodeMatcher,
    misc::log::targets,
    structures::tree::{acol_key, AtomicConceptOfLabel, Context},
    types::err::ErrorKind,
};

/// Lookup from `nodeId.acolId` keys, as found in formulas, to the atomic concepts of one tree.
pub type AcolMap<'c> = HashMap<String, &'c AtomicConceptOfLabel>;

/// The acol lookup map of a context, built once per tree and shared by all of its node matching
/// tasks.
pub fn acol_map(context: &Context) -> AcolMap<'_> {
    let mut map = AcolMap::new();
    for id in context.nodes() {
        let node = context.node(id);
        for acol in node.acols() {
            map.insert(acol_key(node.id(), acol.id), acol);
        }
    }
    map
}

/// Called after every matched pair with (pairs done, pairs total).
pub type CallbackProgress = dyn FnMut(usize, usize);

/// Matches two trees into a [ContextMapping].
pub struct TreeMatcher<S, O> {
    node_matcher: NodeMatcher<S, O>,
    large_task: usize,
    callback_progress: Option<Box<CallbackProgress>>,
}

impl<S: SatSolver, O: SenseOracle> TreeMatcher<S, O> {
    pub fn new(solver: S, oracle: O, config: Config) -> Self {
        let large_task = config.large_task;
        TreeMatcher {
            node_matcher: NodeMatcher::new(solver, oracle, config),
            large_task,
            callback_progress: None,
        }
    }

    /// Sets a callback to observe progress. Progress is reported best-effort and has no
    /// influence on the result.
    pub fn set_callback_progress(&mut self, callback: Box<CallbackProgress>) {
        self.callback_progress = Some(callback);
    }

    /// The mapping between all nodes of `source` and all nodes of `target`.
    ///
    /// Unknown results are not stored: the mapping holds an element per pair for which some
    /// relation was derived, and answers [Idk](crate::structures::relation::Relation::Idk) for
    /// the rest.
    pub fn match_trees(
        &mut self,
        source: &Context,
        target: &Context,
    ) -> Result<ContextMapping, ErrorKind> {
        let source_acols = acol_map(source);
        let target_acols = acol_map(target);

        let mut mapping = ContextMapping::new(source, target);

        let total = source.node_count() * target.node_count();
        let report_interval = total / 20 + 1;
        let mut counter = 0_usize;

        log::info!(
            target: targets::TREE_MATCH,
            "matching {} source nodes against {} target nodes",
            source.node_count(),
            target.node_count(),
        );

        for source_node in source.nodes() {
            for target_node in target.nodes() {
                let relation = self.node_matcher.match_nodes(
                    source,
                    source_node,
                    target,
                    target_node,
                    &source_acols,
                    &target_acols,
                )?;
                mapping.set_relation(source_node, target_node, relation);

                counter += 1;
                if self.large_task < total && counter % report_interval == 0 {
                    log::info!(target: targets::TREE_MATCH, "{}%", 100 * counter / total);
                }
                if let Some(callback) = self.callback_progress.as_mut() {
                    callback(counter, total);
                }
            }
        }

        log::info!(
            target: targets::TREE_MATCH,
            "matched {} pairs, {} relations found",
            counter,
            mapping.size(),
        );

        Ok(mapping)
    }

    /// The node matcher, for pair-at-a-time use over the same collaborators.
    pub fn node_matcher(&mut self) -> &mut NodeMatcher<S, O> {
        &mut self.node_matcher
    }
}
