//! The relation vocabularies: what a mapping records between nodes, and what the sense oracle
//! answers about word senses.
//!
//! The character form of a mapping relation follows the plain mapping file convention, so a
//! rendered mapping can be read back by the corresponding loader.
//!
//! ```rust
//! # use sematch::structures::relation::Relation;
//! assert_eq!(Relation::Equivalence.to_char(), '=');
//! assert_eq!(Relation::from_char('<'), Some(Relation::LessGeneral));
//! assert_eq!(Relation::from_char('x'), None);
//! ```

/// The semantic relation between a source node and a target node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Relation {
    /// The concepts are equivalent.
    Equivalence,

    /// The source concept is less general than the target concept.
    LessGeneral,

    /// The source concept is more general than the target concept.
    MoreGeneral,

    /// The concepts are disjoint.
    Disjoint,

    /// Nothing is known about the pair. The default for pairs a mapping does not store.
    Idk,
}

impl Relation {
    /// The one-character form used in plain mapping files.
    pub fn to_char(self) -> char {
        match self {
            Self::Equivalence => '=',
            Self::LessGeneral => '<',
            Self::MoreGeneral => '>',
            Self::Disjoint => '!',
            Self::Idk => '?',
        }
    }

    /// The relation denoted by a plain mapping file character, if any.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Equivalence),
            '<' => Some(Self::LessGeneral),
            '>' => Some(Self::MoreGeneral),
            '!' => Some(Self::Disjoint),
            '?' => Some(Self::Idk),
            _ => None,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The semantic relation between two word senses, as answered by the element-level oracle.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SenseRelation {
    /// The senses are synonymous.
    Synonym,

    /// The first sense is more specific than the second.
    LessGeneral,

    /// The first sense is more general than the second.
    MoreGeneral,

    /// The senses exclude each other.
    Disjoint,

    /// Nothing is known about the pair.
    Unknown,
}
