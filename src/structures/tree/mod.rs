//! Labeled classifications and their nodes.
//!
//! A [Context] owns its nodes in an arena and hands out [NodeId] indices, so tree structure is a
//! matter of plain data rather than shared ownership.
//! Nodes carry the linguistic payload written by preprocessing (the concept at label formula and
//! its [atomic concepts](AtomicConceptOfLabel)) and the concept at node formula written by a
//! [classifier](crate::classifiers).
//! During matching a context is read-only.
//!
//! ```rust
//! # use sematch::structures::tree::Context;
//! let mut context = Context::new();
//! let root = context.create_root("1", "courses");
//! let child = context.create_child(root, "2", "history");
//!
//! assert_eq!(context.node_count(), 2);
//! assert_eq!(context.node(child).parent(), Some(root));
//!
//! // Pre-order: a node before its descendants.
//! let order: Vec<_> = context.nodes().collect();
//! assert_eq!(order, vec![root, child]);
//! ```

mod node;
pub use node::{AtomicConceptOfLabel, Node, Sense};

/// The index of a node within its owning [Context].
///
/// Ids are only meaningful for the context which produced them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(u32);

/// The key of an atomic concept within a tree, as referenced by formulas: `nodeId.acolId`.
pub fn acol_key(node_id: &str, acol_id: u32) -> String {
    format!("{node_id}.{acol_id}")
}

/// A labeled classification: one root, every non-root node with exactly one parent, no cycles.
///
/// The structure is fixed by construction: nodes are created in place with [create_root](Context::create_root)
/// and [create_child](Context::create_child), and are never re-parented or removed.
#[derive(Clone, Debug, Default)]
pub struct Context {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Context {
    pub fn new() -> Self {
        Context::default()
    }

    /// Creates the root node. Any previously created root is abandoned, not freed.
    pub fn create_root(&mut self, id: impl Into<String>, name: impl Into<String>) -> NodeId {
        let node_id = self.push(Node::new(id, name, None));
        self.root = Some(node_id);
        node_id
    }

    /// Creates a node as the last child of `parent`.
    pub fn create_child(
        &mut self,
        parent: NodeId,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> NodeId {
        let node_id = self.push(Node::new(id, name, Some(parent)));
        self.nodes[parent.0 as usize].children.push(node_id);
        node_id
    }

    fn push(&mut self, node: Node) -> NodeId {
        let node_id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        node_id
    }

    /// The root node, if any node has been created.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The number of nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    /// All nodes in pre-order from the root: a node before its descendants, children in order.
    pub fn nodes(&self) -> PreOrder<'_> {
        PreOrder {
            context: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// The subtree rooted at `from`, in pre-order, `from` included.
    pub fn subtree(&self, from: NodeId) -> PreOrder<'_> {
        PreOrder {
            context: self,
            stack: vec![from],
        }
    }

    /// The ancestors of `from`, nearest first, root last. `from` is not included.
    pub fn ancestors(&self, from: NodeId) -> Ancestors<'_> {
        Ancestors {
            context: self,
            at: self.node(from).parent(),
        }
    }

    /// Marks every node as belonging (or not) to the source tree of a match.
    pub fn mark_source(&mut self, source: bool) {
        for node in &mut self.nodes {
            node.source = source;
        }
    }
}

/// Pre-order traversal over a context. See [Context::nodes].
pub struct PreOrder<'c> {
    context: &'c Context,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.stack.pop()?;
        let children = self.context.node(next).children();
        self.stack.extend(children.iter().rev());
        Some(next)
    }
}

/// Parent-chain traversal over a context. See [Context::ancestors].
pub struct Ancestors<'c> {
    context: &'c Context,
    at: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.at?;
        self.at = self.context.node(next).parent();
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> (Context, Vec<NodeId>) {
        let mut context = Context::new();
        let root = context.create_root("1", "root");
        let a = context.create_child(root, "2", "a");
        let b = context.create_child(root, "3", "b");
        let aa = context.create_child(a, "4", "aa");
        (context, vec![root, a, aa, b])
    }

    #[test]
    fn preorder_root_first() {
        let (context, expected) = small_tree();
        let order: Vec<_> = context.nodes().collect();
        assert_eq!(order, expected);
        assert_eq!(context.node_count(), 4);
    }

    #[test]
    fn subtree_and_ancestors() {
        let (context, ids) = small_tree();
        let subtree: Vec<_> = context.subtree(ids[1]).collect();
        assert_eq!(subtree, vec![ids[1], ids[2]]);

        let ancestors: Vec<_> = context.ancestors(ids[2]).collect();
        assert_eq!(ancestors, vec![ids[1], ids[0]]);
        assert!(context.ancestors(ids[0]).next().is_none());
    }
}
