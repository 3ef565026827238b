/*!
Databases for the context --- one of atoms, and one of clauses.

- The atom database records the external representation of each atom.
- The clause database holds the formula of the context, and during a solve grows into the resolution closure of that formula.
*/

pub mod atom;
pub mod clause;
