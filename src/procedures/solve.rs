//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve](Context::solve) closes the formula of the context under [resolution](crate::procedures::resolution), round by round, until one of three things happens:
//!
//! - The empty clause is derived, and the formula is *unsatisfiable*.
//! - A round derives no clause absent from the closure, and the formula is *satisfiable* --- resolution is at a fixpoint, refutation complete, and without a refutation.
//! - The step limit is reached, and satisfiability of the formula remains *unknown*.
//!
//! Each round examines every unordered pair of distinct clauses present when the round begins, in a deterministic order.
//! A clause is never paired with itself.
//! Examining one pair is one *step*, counted against the step limit before any of the pair's resolution work happens --- so a solve never completes more steps than the limit, regardless of how large a round's pair collection grows.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +-----------------------+
//!   +-------| merge frontier        |
//!   |       +-----------------------+
//!   |               ⌃
//!   |               |
//!   |               | if some clause of the frontier is absent from the closure
//!   |               |
//!   |               |          +-----> unsatisfiable, if some pair derives the empty clause
//!   ⌄   +------------------+   |
//! --+-->| resolve each     |---+-----> unknown, if the step limit is reached
//!       | pair of a round  |   |
//!       +------------------+   +-----> satisfiable, if the frontier is within the closure
//! ```
//!
//! And, abstracting the bookkeeping, solve is:
//!
//! ```rust,ignore
//! 'round_loop: loop {
//!     let mut frontier = fresh_frontier();
//!
//!     for (c_i, c_j) in round_pairs() {
//!         if steps == limit { return unknown }
//!
//!         for resolvent in resolvents(c_i, c_j) {
//!             if resolvent.is_empty() { return unsatisfiable }
//!             frontier.insert(resolvent);
//!         }
//!     }
//!
//!     if frontier ⊆ closure { return satisfiable }
//!     closure.merge(frontier);
//! }
//! ```
//!
//! The closure only ever grows, and a formula over finitely many atoms has finitely many distinct clauses, so a fixpoint exists --- though the cost of reaching it is worst-case exponential in the number of atoms, which is what the step limit is for.
//!
//! # Literature
//!
//! The procedure is the propositional core of Robinson's resolution calculus, as presented in most introductions to automated reasoning.
//! Modern solvers decide satisfiability another way; the value of saturation is its transparency.

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    procedures::resolution,
    reports::Report,
    structures::clause::CClause,
    types::err::ErrorKind,
};

use indexmap::IndexSet;

impl Context {
    /// Saturates the formula of the context under resolution, and reports the outcome.
    ///
    /// The step counter of the solve starts at zero on each call, so the step limit applies per invocation.
    /// The clauses given as input are never revised --- a solve only ever adds derived clauses to the database.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        let solve_time = std::time::Instant::now();

        if matches!(self.state, ContextState::Unsatisfiable) {
            // The empty clause is present, so there is nothing to derive.
            return Ok(self.report());
        }

        self.state = ContextState::Saturating;
        self.counters.fresh_steps = 0;

        let step_limit = self.config.step_limit.value;

        'round_loop: loop {
            self.counters.total_rounds += 1;
            log::trace!(target: targets::SATURATION, "Round {} with {} clauses", self.counters.total_rounds, self.clause_db.len());

            // Pairs are drawn from the clauses present as the round begins.
            let round_length = self.clause_db.len();
            let mut frontier: IndexSet<CClause> = IndexSet::new();

            for i in 0..round_length {
                for j in (i + 1)..round_length {
                    if self.counters.fresh_steps >= step_limit {
                        self.state = ContextState::Exhausted;
                        self.counters.time = solve_time.elapsed();
                        log::info!(target: targets::SATURATION, "Step limit of {step_limit} reached");
                        return Ok(self.report());
                    }

                    // Safe, as i and j are below the length of the database, which only grows.
                    let c_i = unsafe { self.clause_db.get_unchecked(i) };
                    let c_j = unsafe { self.clause_db.get_unchecked(j) };

                    let resolvents = resolution::resolvents(c_i, c_j);

                    self.counters.fresh_steps += 1;
                    self.counters.total_steps += 1;

                    for resolvent in resolvents {
                        if resolvent.is_empty() {
                            self.state = ContextState::Unsatisfiable;
                            self.counters.time = solve_time.elapsed();
                            log::info!(target: targets::SATURATION, "The empty clause was derived from clauses {i} and {j}");
                            return Ok(self.report());
                        }

                        frontier.insert(resolvent);
                    }
                }
            }

            if frontier
                .iter()
                .all(|resolvent| self.clause_db.contains(resolvent))
            {
                self.state = ContextState::Satisfiable;
                self.counters.time = solve_time.elapsed();
                log::info!(target: targets::SATURATION, "Fixpoint at {} clauses", self.clause_db.len());
                return Ok(self.report());
            }

            for resolvent in frontier {
                self.clause_db.insert(resolvent);
            }

            continue 'round_loop;
        }
    }
}
