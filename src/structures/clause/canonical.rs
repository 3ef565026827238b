//! The canonical clause structure.

use crate::structures::{
    atom::Atom,
    clause::Clause,
    literal::{CLiteral, Literal},
};

/// The canonical implementation of a clause.
///
/// Literals are held sorted and without duplicates.
/// As the representation of a given member set is unique, the derived equality, ordering, and hash implementations depend only on which literals are members --- two independently constructed clauses with the same literals are interchangeable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CClause {
    literals: Vec<CLiteral>,
}

impl CClause {
    /// The empty clause, which is always false.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An iterator over the literals of the clause, in their fixed order.
    pub fn literals(&self) -> std::slice::Iter<'_, CLiteral> {
        self.literals.iter()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether the given literal is a member of the clause.
    pub fn contains(&self, literal: &CLiteral) -> bool {
        self.literals.binary_search(literal).is_ok()
    }
}

impl From<Vec<CLiteral>> for CClause {
    fn from(mut literals: Vec<CLiteral>) -> Self {
        literals.sort_unstable();
        literals.dedup();
        CClause { literals }
    }
}

impl FromIterator<CLiteral> for CClause {
    fn from_iter<I: IntoIterator<Item = CLiteral>>(iter: I) -> Self {
        CClause::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Clause for CClause {
    fn as_string(&self) -> String {
        self.literals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.literals.iter()
    }

    fn size(&self) -> usize {
        self.literals.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl std::fmt::Display for CClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
