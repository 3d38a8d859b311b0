/*!
Configuration of the matchers.

All configuration is an explicit structure built by the caller and handed to a matcher on
construction.
There is no keyed or reflective wiring: the collaborators a matcher needs (the SAT solver, the
sense oracle) are constructor parameters, so a missing component is a compile error rather than a
match-time failure.
*/

/// Which SAT tests a node matching task runs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MatchMode {
    /// Containment, subsumption, and disjointness tests, with equivalence derived from the first
    /// two. Three queries per pair.
    #[default]
    Full,

    /// Containment and subsumption tests only, as used for minimal-links matching.
    /// The disjointness test is skipped and [Disjoint](crate::structures::relation::Relation::Disjoint)
    /// is never produced.
    Reduced,
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which SAT tests to run per node pair.
    pub mode: MatchMode,

    /// Record a pair as unknown when the solver reports a timeout, instead of aborting the match.
    ///
    /// Matching itself places no limit on a query, so a solver which never times out is
    /// unaffected either way.
    pub timeout_is_idk: bool,

    /// Pair count above which the tree matcher logs periodic progress.
    pub large_task: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: MatchMode::Full,
            timeout_is_idk: true,
            large_task: 1000,
        }
    }
}
