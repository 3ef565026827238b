//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is the [CClause] structure, which holds distinct literals in a fixed order so that value equality and hashing depend only on which literals are members.
//! Any looser representation --- a vector of literals, or a lone literal read as a unit clause --- implements the [Clause] trait, and in particular [canonical](Clause::canonical) to obtain the canonical form.
//!
//! ```rust
//! # use stoat_sat::structures::literal::{CLiteral, Literal};
//! # use stoat_sat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(23, true),
//!                   CLiteral::new(41, false),
//!                   CLiteral::new(3,  false),
//!                   CLiteral::new(41, false)];
//!
//! assert_eq!(clause.size(), 4);
//! assert_eq!(clause.canonical().size(), 3);
//! ```
//!
//! - The empty clause is always false (never true), and deriving it during a solve settles unsatisfiability.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

mod canonical;
pub use canonical::CClause;

use crate::structures::{atom::Atom, literal::CLiteral};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    /// The representation does not need to use the external representation of atoms within the clause.
    fn as_string(&self) -> String;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    ///
    /// Duplicate literals collapse, as the canonical form is value-equal to any other clause with the same member literals.
    fn canonical(self) -> CClause;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

impl Clause for VClause {
    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        use crate::structures::literal::Literal;
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        CClause::from(self)
    }
}

impl Clause for CLiteral {
    fn as_string(&self) -> String {
        self.to_string()
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        use crate::structures::literal::Literal;
        std::iter::once(self.atom())
    }

    fn canonical(self) -> CClause {
        CClause::from(vec![self])
    }
}
