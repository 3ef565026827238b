//! Derives every resolvent of a pair of clauses.
//!
//! Two clauses resolve on each complementary pair of literals between them.
//! Given clauses C and D with *l* in C and the negation of *l* in D, the resolvent on *l* is the union of C without *l* and D without the negation of *l*.
//!
//! ```rust
//! # use stoat_sat::procedures::resolution::resolvents;
//! # use stoat_sat::structures::clause::{CClause, Clause};
//! # use stoat_sat::structures::literal::{CLiteral, Literal};
//! let p = CLiteral::new(0, true);
//!
//! let found = resolvents(&vec![p].canonical(), &vec![-p].canonical());
//!
//! assert_eq!(found.len(), 1);
//! assert!(found[0].is_empty());
//! ```
//!
//! A few notes:
//!
//! - Resolving a pair of unit clauses on complementary literals derives the empty clause, as above --- the witness of unsatisfiability.
//! - A clause without literals resolves with nothing, so the empty clause (and either clause of an empty pair) yields no resolvents.
//! - Distinct complementary pairs may derive value-equal resolvents, and the derived set collapses these.

use crate::structures::{
    clause::CClause,
    literal::{CLiteral, Literal},
};

/// Every resolvent of the given pair of clauses, without duplicates.
///
/// The order of derived clauses is fixed by the literal order of the given clauses, so the result is deterministic in its input.
/// No resolvent requires both clauses of the pair to be distinct --- though the saturation loop never pairs a clause with itself.
pub fn resolvents(c_i: &CClause, c_j: &CClause) -> Vec<CClause> {
    let mut found: Vec<CClause> = Vec::new();

    for d_i in c_i.literals() {
        for d_j in c_j.literals() {
            if *d_i == d_j.negate() {
                let merge: Vec<CLiteral> = c_i
                    .literals()
                    .filter(|literal| *literal != d_i)
                    .chain(c_j.literals().filter(|literal| *literal != d_j))
                    .copied()
                    .collect();

                let resolvent = CClause::from(merge);
                if !found.contains(&resolvent) {
                    found.push(resolvent);
                }
            }
        }
    }

    found
}
