/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information on the progress of a match and for fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [tree matcher](crate::matchers::tree)
    pub const TREE_MATCH: &str = "tree_match";

    /// Logs related to the [node matcher](crate::matchers::node)
    pub const NODE_MATCH: &str = "node_match";

    /// Logs related to [axiom generation](crate::matchers::axioms)
    pub const AXIOMS: &str = "axioms";

    /// Logs related to [classification](crate::classifiers)
    pub const CLASSIFIER: &str = "classifier";

    /// Logs related to [mappings](crate::mapping)
    pub const MAPPING: &str = "mapping";
}
