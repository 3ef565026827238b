//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! stoat_sat decides satisfiability by saturating a formula under the (propositional) resolution rule: resolvents are derived and added to the formula until either the empty clause appears (and the formula is unsatisfiable) or no fresh clause can be derived (and the formula is satisfiable).
//! As saturation is worst-case exponential, each solve carries a step limit, and a solve which reaches the limit reports that satisfiability remains unknown.
//!
//! The saturation procedure is the classical one, kept deliberately free of the techniques found in modern solvers --- no propagation, no subsumption, no clause learning.
//! stoat_sat is developed to help researchers, developers, or anyone curious, to study the resolution calculus itself, with every part of the procedure open to inspection.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config).
//! Clauses may be added through the [DIMACS](crate::context::Context::read_dimacs) representation of a formula, [from strings](crate::context::Context::clause_from_string), or [programatically](crate::context::Context::add_clause).
//!
//! Internally, and at a high-level, a solve is viewed in terms of a handful of databases which instantiate core theoretical objects:
//! - A formula is stored in a clause database, which a solve grows into (some part of) the resolution closure of the formula.
//! - The name of each atom is stored in an atom database.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their representation (literals, clauses, etc.)
//! - The [reports](crate::reports) to see the three ways a solve may end.
//!
//! # Examples
//!
//! + Decide a small unsatisfiable formula, built from strings.
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! for string in ["p q", "¬p q", "p ¬q", "¬p ¬q"] {
//!     let clause = the_context.clause_from_string(string).unwrap();
//!     assert!(the_context.add_clause(clause).is_ok());
//! }
//!
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Unsatisfiable);
//! ```
//!
//! + Parse and decide a DIMACS formula.
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 2 3
//!  1  2 0
//! -1  2 0
//! -2    0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Unsatisfiable);
//! ```
//!
//! # Limits, and the absence of an answer
//!
//! A solve makes one pairwise resolution step at a time, and gives up --- reporting [Unknown](crate::reports::Report::Unknown) --- as soon as the [step limit](crate::config::Config) is reached.
//! The limit bounds work per call, precisely: the check is made before each pair is examined, so a solve never completes more steps than the limit.
//! This is the only way a solve ends without an answer, as the procedure has no timeout and makes no random choices.
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs related to the saturation loop can be filtered with `RUST_LOG=saturation …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
