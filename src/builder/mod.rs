/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [named_atom](crate::context::Context::named_atom), to obtain the atom for some external representation.
- [add_clause](crate::context::Context::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods.
In rough strokes, the pattern is to:
- Obtain atoms for the names appearing in a clause.
- Create [CLiteral](crate::structures::literal::CLiteral)s from the atoms.
- Bundle the literals into a clause, and add the clause to the context.

This process may be simplified by building from strings, with a bare name read as a positive literal and a name marked with `¬`, `-`, or `!` read as a negative literal.

# Examples

A formula built using basic methods.

```rust
# use stoat_sat::context::Context;
# use stoat_sat::config::Config;
# use stoat_sat::reports::Report;
# use stoat_sat::structures::literal::{CLiteral, Literal};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.named_atom("p").unwrap();
let q = the_context.named_atom("q").unwrap();

let clause_a = vec![CLiteral::new(p, true), CLiteral::new(q, false)];
let clause_b = vec![CLiteral::new(p, false), CLiteral::new(q, true)];

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());

the_context.solve();
assert_eq!(the_context.report(), Report::Satisfiable)
```

The same formula, built from strings.

```rust
# use stoat_sat::context::Context;
# use stoat_sat::config::Config;
# use stoat_sat::reports::Report;
#
let mut the_context = Context::from_config(Config::default());

let clause_a = the_context.clause_from_string("p ¬q").unwrap();
let clause_b = the_context.clause_from_string("¬p q").unwrap();

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());

the_context.solve();
assert_eq!(the_context.report(), Report::Satisfiable)
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{Clause, VClause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// A value-equal clause was already present in the context, and so the context is unchanged.
    Duplicate,
}

impl Context {
    /// The atom whose external representation is `name`, interning the representation if it is fresh.
    pub fn named_atom(&mut self, name: &str) -> Result<Atom, ErrorKind> {
        Ok(self.atom_db.intern(name)?)
    }

    /// Adds a clause to the context, in canonical form.
    ///
    /// Duplicate literals collapse on canonicalization, and a clause value-equal to some clause already present is not added twice.
    /// A tautological clause is accepted as any other --- tautologies are satisfied on every valuation, and are harmless (though unhelpful) as resolution premises.
    ///
    /// Adding the empty clause settles the formula as unsatisfiable, and a context in this state remains so regardless of further additions.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        let clause = clause.canonical();

        if clause.is_empty() {
            log::info!(target: targets::CLAUSE_DB, "The empty clause was given as input");
            self.clause_db.insert(clause);
            self.state = ContextState::Unsatisfiable;
            return Ok(ClauseOk::Added);
        }

        log::trace!(target: targets::CLAUSE_DB, "Adding clause: {clause}");

        match self.clause_db.insert(clause) {
            true => {
                if !matches!(self.state, ContextState::Unsatisfiable) {
                    self.state = ContextState::Input;
                }
                Ok(ClauseOk::Added)
            }

            false => Ok(ClauseOk::Duplicate),
        }
    }

    /// The literal read from the given token.
    ///
    /// A token is an external atom, optionally marked with a single leading `¬`, `-`, or `!` for a negative literal.
    pub fn literal_from_string(&mut self, token: &str) -> Result<CLiteral, ErrorKind> {
        let negation = |character: char| matches!(character, '¬' | '-' | '!');

        if token.is_empty() {
            return Err(ErrorKind::from(err::ParseError::Empty));
        }

        let (name, polarity) = match token.strip_prefix(negation) {
            Some(name) => (name, false),
            None => (token, true),
        };

        if name.is_empty() || name.starts_with(negation) {
            return Err(ErrorKind::from(err::ParseError::Negation));
        }

        let atom = self.named_atom(name)?;
        Ok(CLiteral::new(atom, polarity))
    }

    /// The clause read from the given string of whitespace separated literal tokens.
    pub fn clause_from_string(&mut self, string: &str) -> Result<VClause, ErrorKind> {
        let mut the_clause = VClause::default();

        for token in string.split_whitespace() {
            the_clause.push(self.literal_from_string(token)?);
        }

        if the_clause.is_empty() {
            return Err(ErrorKind::from(err::ParseError::Empty));
        }

        Ok(the_clause)
    }
}
