use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB},
    reports::Report,
    structures::{clause::CClause, literal::Literal},
};

use super::{ContextState, Counters};

/// The context, the primary structure of the library.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The status of the context.
    pub state: ContextState,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,

            counters: Counters::default(),

            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),

            state: ContextState::Configuration,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// A string representation of the given clause, using the external representation of each atom.
    ///
    /// Negative literals are marked with `¬`, and literals are joined by `∨`.
    pub fn clause_string(&self, clause: &CClause) -> String {
        clause
            .literals()
            .map(|literal| {
                let name = match self.atom_db.representation(literal.atom()) {
                    Some(name) => name.to_string(),
                    None => literal.atom().to_string(),
                };
                match literal.polarity() {
                    true => name,
                    false => format!("¬{name}"),
                }
            })
            .collect::<Vec<_>>()
            .join(" ∨ ")
    }

    /// A string representation of the formula of the context, as a conjunction of its clauses.
    ///
    /// After a solve the formula has grown to (some part of) the resolution closure of the formula given as input.
    pub fn formula_string(&self) -> String {
        self.clause_db
            .iter()
            .map(|clause| format!("({})", self.clause_string(clause)))
            .collect::<Vec<_>>()
            .join(" ∧ ")
    }
}
