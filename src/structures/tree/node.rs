//! Nodes and the atomic concepts of their labels.

use crate::structures::tree::NodeId;

/// An external word sense identifier.
///
/// Opaque to the library: senses are compared, hashed, and passed through to the sense oracle,
/// nothing more.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sense(String);

impl Sense {
    pub fn new(id: impl Into<String>) -> Self {
        Sense(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An atomic unit of meaning extracted from a node's label by preprocessing.
///
/// Owned by its node; the `id` is unique within that node only, and formulas reference the
/// concept as `nodeId.acolId`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AtomicConceptOfLabel {
    /// Id, unique within the owning node.
    pub id: u32,

    /// The surface token of the label.
    pub token: String,

    /// The lemma of the token.
    pub lemma: String,

    /// Word senses of the lemma, in the order preprocessing ranked them.
    pub senses: Vec<Sense>,
}

impl AtomicConceptOfLabel {
    pub fn new(id: u32, token: impl Into<String>, lemma: impl Into<String>, senses: Vec<Sense>) -> Self {
        AtomicConceptOfLabel {
            id,
            token: token.into(),
            lemma: lemma.into(),
            senses,
        }
    }
}

/// A tree element: structure, label, and the formulas attached to it.
///
/// Created by a loader, written by preprocessing (label formula, atomic concepts) and by
/// classification (node formula), and read-only while a match runs.
#[derive(Clone, Debug)]
pub struct Node {
    id: String,
    name: String,
    parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
    pub(super) source: bool,
    preprocessed: bool,
    clab_formula: String,
    cnode_formula: String,
    acols: Vec<AtomicConceptOfLabel>,
}

impl Node {
    pub(super) fn new(id: impl Into<String>, name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Node {
            id: id.into(),
            name: name.into(),
            parent,
            children: Vec::new(),
            source: false,
            preprocessed: false,
            clab_formula: String::new(),
            cnode_formula: String::new(),
            acols: Vec::new(),
        }
    }

    /// The stable id of the node, unique within its tree.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name of the node.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the node belongs to the source tree of a match.
    pub fn is_source(&self) -> bool {
        self.source
    }

    /// Whether preprocessing has run over the node.
    pub fn is_preprocessed(&self) -> bool {
        self.preprocessed
    }

    pub fn set_preprocessed(&mut self, preprocessed: bool) {
        self.preprocessed = preprocessed;
    }

    /// The concept at label formula: the meaning of the node's own label, over its own atomic
    /// concepts.
    pub fn clab_formula(&self) -> &str {
        &self.clab_formula
    }

    pub fn set_clab_formula(&mut self, formula: impl Into<String>) {
        self.clab_formula = formula.into();
    }

    /// The concept at node formula: cumulative meaning along the path to the root, in CNF, over
    /// the node's and its ancestors' atomic concepts.
    pub fn cnode_formula(&self) -> &str {
        &self.cnode_formula
    }

    pub fn set_cnode_formula(&mut self, formula: impl Into<String>) {
        self.cnode_formula = formula.into();
    }

    /// The atomic concepts of the node's label, in extraction order.
    pub fn acols(&self) -> &[AtomicConceptOfLabel] {
        &self.acols
    }

    pub fn add_acol(&mut self, acol: AtomicConceptOfLabel) {
        self.acols.push(acol);
    }
}
