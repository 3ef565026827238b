/*!
The context --- to which formulas are added and within which solves take place, etc.

A context is built from a configuration, clauses are added, and a call to [solve](Context::solve) saturates the formula under resolution until the question of satisfiability is settled (or the step limit is reached).

# Example
```rust
# use stoat_sat::context::Context;
# use stoat_sat::config::Config;
# use stoat_sat::reports::Report;
# use stoat_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.named_atom("p").unwrap();
let q = the_context.named_atom("q").unwrap();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);
assert!(the_context.add_clause(not_p).is_ok());

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);
```
*/

mod core;
pub use self::core::Context;
mod counters;
pub use counters::Counters;

/// The state of a context.
///
/// Each way a solve may end is a state of its own, with the step count held alongside in [Counters].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A solve is in progress, and the satisfiability of the formula is not (yet) settled.
    Saturating,

    /// The formula is known to be satisfiable, as resolution reached a fixpoint without deriving the empty clause.
    Satisfiable,

    /// The formula is known to be unsatisfiable, as the empty clause was derived (or supplied).
    Unsatisfiable,

    /// The step limit was reached before the question of satisfiability was settled.
    Exhausted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Saturating => write!(f, "Saturating"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}
