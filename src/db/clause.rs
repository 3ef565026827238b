/*!
A database of clause related things.

The database holds the clauses of a context as an insertion-ordered set:

- Insertion deduplicates by clause value, so the database is a formula in the set-of-clauses sense.
- Iteration and index access follow insertion order, so pair enumeration during a solve is deterministic within a run.
- Membership is O(1), which the [fixpoint check](crate::procedures::solve) leans on each round.

Fields of the database are private to ensure the use of methods which uphold these invariants.
*/

use indexmap::IndexSet;

use crate::structures::clause::CClause;

/// A database of clause related things.
#[derive(Default)]
pub struct ClauseDB {
    /// The clauses of the database, in insertion order.
    clauses: IndexSet<CClause>,
}

impl ClauseDB {
    /// Inserts a clause, returning false if a value-equal clause is already present.
    pub fn insert(&mut self, clause: CClause) -> bool {
        self.clauses.insert(clause)
    }

    /// Whether a value-equal clause is present in the database.
    pub fn contains(&self, clause: &CClause) -> bool {
        self.clauses.contains(clause)
    }

    /// The clause at the given index, if the index is in bounds.
    pub fn get(&self, index: usize) -> Option<&CClause> {
        self.clauses.get_index(index)
    }

    /// The clause at the given index.
    ///
    /// # Safety
    /// Clauses are only ever added to the database, so any index below [len](ClauseDB::len) at some point during a solve remains in bounds for the rest of the solve.
    pub unsafe fn get_unchecked(&self, index: usize) -> &CClause {
        unsafe { self.clauses.get_index(index).unwrap_unchecked() }
    }

    /// A count of clauses in the database.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the database contains no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// An iterator over the clauses of the database, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }
}
