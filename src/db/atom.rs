/*!
A database of atom related things.

The database pairs each external atom --- the name supplied by a caller --- with an internal [Atom], and resolves internal atoms back to their external representation when a clause is displayed.
Interning is get-or-create: supplying a known name returns the atom already paired with that name.
*/

use std::collections::HashMap;

use crate::{
    structures::atom::{Atom, ATOM_MAX},
    types::err::AtomDBError,
};

/// A database of atom related things, and in particular the external representation of each atom.
#[derive(Default)]
pub struct AtomDB {
    /// A map from an external representation to the corresponding atom.
    representation_map: HashMap<String, Atom>,

    /// The external representation of each atom, indexed by the atom.
    representations: Vec<String>,
}

impl AtomDB {
    /// The atom paired with the given external representation, interning the representation if it is fresh.
    pub fn intern(&mut self, name: &str) -> Result<Atom, AtomDBError> {
        if let Some(atom) = self.representation_map.get(name) {
            return Ok(*atom);
        }

        if self.representations.len() > ATOM_MAX as usize {
            return Err(AtomDBError::AtomsExhausted);
        }

        let atom = self.representations.len() as Atom;
        self.representations.push(name.to_string());
        self.representation_map.insert(name.to_string(), atom);
        Ok(atom)
    }

    /// The external representation of the given atom, if the atom is known to the database.
    pub fn representation(&self, atom: Atom) -> Option<&str> {
        self.representations.get(atom as usize).map(String::as_str)
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.representations.len()
    }
}
