//! Error types used in the library.
//!
//! - A top-level [ErrorKind] wraps per-area errors, with `From` impls so `?` moves between layers.
//! - Matching is fail-fast: any error raised while matching a node pair aborts the whole tree match.
//!   No partial mapping survives an error, and pairs never degrade to a relation other than absence.
//! - [NodeMatchError] carries the offending node pair and the formulas under test, as the pair is
//!   otherwise lost by the time an error surfaces from the tree matcher.

/// The top-level error, wrapping errors from each area of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Classifier(ClassifierError),
    Formula(FormulaError),
    Mapping(MappingError),
    NodeMatch(NodeMatchError),
    Oracle(OracleError),
    Solver(SolverError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classifier(e) => write!(f, "classifier: {e}"),
            Self::Formula(e) => write!(f, "formula: {e}"),
            Self::Mapping(e) => write!(f, "mapping: {e}"),
            Self::NodeMatch(e) => write!(f, "node match: {e}"),
            Self::Oracle(e) => write!(f, "sense oracle: {e}"),
            Self::Solver(e) => write!(f, "sat solver: {e}"),
        }
    }
}

/// Noted errors when parsing or transforming a propositional formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// The formula contained no tokens.
    Empty,

    /// The formula ended where a subformula was required.
    UnexpectedEnd,

    /// A token which cannot start or continue a formula at its position.
    UnexpectedToken(String),

    /// An opening parenthesis without a matching close, or vice versa.
    UnbalancedParentheses,

    /// A formula expected to be in CNF was not (e.g. a conjunction below a disjunction).
    NotCnf(String),

    /// An atom with no corresponding atomic concept in the matching task.
    UnknownAtom(String),
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty formula"),
            Self::UnexpectedEnd => write!(f, "unexpected end of formula"),
            Self::UnexpectedToken(t) => write!(f, "unexpected token '{t}'"),
            Self::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            Self::NotCnf(t) => write!(f, "formula is not in CNF: {t}"),
            Self::UnknownAtom(a) => write!(f, "unknown atomic concept '{a}'"),
        }
    }
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Noted errors from the external sense oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// The lookup of a sense pair failed.
    Lookup(String),
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lookup(detail) => write!(f, "sense lookup failed: {detail}"),
        }
    }
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// Noted errors from the external SAT solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolverError {
    /// The solver process or library failed.
    Invocation(String),

    /// The solver gave up on a query.
    ///
    /// With [timeout_is_idk](crate::config::Config::timeout_is_idk) set the matcher absorbs this
    /// and records the pair as unknown, otherwise it propagates.
    Timeout,
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invocation(detail) => write!(f, "invocation failed: {detail}"),
            Self::Timeout => write!(f, "query timed out"),
        }
    }
}

impl From<SolverError> for ErrorKind {
    fn from(e: SolverError) -> Self {
        ErrorKind::Solver(e)
    }
}

/// An error scoped to one node matching task.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeMatchError {
    /// Id of the source node of the pair.
    pub source: String,

    /// Id of the target node of the pair.
    pub target: String,

    /// Concept at node formula of the source node.
    pub source_formula: String,

    /// Concept at node formula of the target node.
    pub target_formula: String,

    /// The underlying failure.
    pub cause: Box<ErrorKind>,
}

impl std::fmt::Display for NodeMatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pair ({}, {}) with formulas '{}' and '{}': {}",
            self.source, self.target, self.source_formula, self.target_formula, self.cause
        )
    }
}

impl From<NodeMatchError> for ErrorKind {
    fn from(e: NodeMatchError) -> Self {
        ErrorKind::NodeMatch(e)
    }
}

/// An error raised while building concept at node formulas.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassifierError {
    /// Id of the node whose formula was rejected.
    pub node: String,

    /// The concept at label formula as stored on the node.
    pub formula: String,

    /// The underlying failure.
    pub cause: FormulaError,
}

impl std::fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node {} with formula '{}': {}", self.node, self.formula, self.cause)
    }
}

impl From<ClassifierError> for ErrorKind {
    fn from(e: ClassifierError) -> Self {
        ErrorKind::Classifier(e)
    }
}

/// Noted errors when rendering or loading a mapping.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MappingError {
    /// An I/O failure while reading or writing, with the error's display text.
    Io(String),
}

impl std::fmt::Display for MappingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(detail) => write!(f, "io: {detail}"),
        }
    }
}

impl From<MappingError> for ErrorKind {
    fn from(e: MappingError) -> Self {
        ErrorKind::Mapping(e)
    }
}
