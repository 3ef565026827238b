/*!
(The internal representation of) an atom (aka. a 'variable').

Broadly, atoms are things to which assigning a (boolean) value is of interest.
- 'Internal' atoms are used internal to a context.
- 'External' atoms are used during external interaction with a context, e.g. when providing a formula as input or printing a clause. \
     External atoms are a string of non-whitespace characters which does not begin with a negation marker (`¬`, `-`, or `!`). \
     Examples: `p`, `atom_one`, `96`.

Each internal atom is a u32 index into the [atom database](crate::db::atom), which records the external representation.
So, at any point the atoms of a context are [0..*m*) for some *m*.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX;
