//! Reading DIMACS representations of a formula into the context.

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        clause::VClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use std::io::BufRead;

/// Details from parsing some DIMACS input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The atom count from the problem specification, if a specification was read.
    pub expected_atom_count: Option<usize>,

    /// The clause count from the problem specification, if a specification was read.
    pub expected_clause_count: Option<usize>,

    /// A count of clauses added to the context.
    pub added_clauses: usize,
}

impl Context {
    /// Reads a DIMACS representation of a formula into the context.
    ///
    /// Comment lines (`c …`) and the problem specification (`p cnf <atoms> <clauses>`) are noted and otherwise skipped, `%` ends the input, and any other line contributes literals to the current clause, with `0` closing a clause.
    /// The integers of the representation are taken as external atom names, so `-3` is the negative literal of the atom named `3`.
    ///
    /// ```rust
    /// # use stoat_sat::context::Context;
    /// # use stoat_sat::config::Config;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    ///  1  2 0
    /// -1  2 0
    /// -1 -2 0
    ///  1 -2 0
    /// ");
    ///
    /// assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
    /// assert!(the_context.solve().is_ok());
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: VClause = Vec::default();

        let mut line_counter = 0;

        'line_loop: loop {
            buffer.clear();

            match reader.read_line(&mut buffer) {
                Ok(0) => break 'line_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('c') => continue 'line_loop,

                Some('%') => break 'line_loop,

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();

                    let atom_count: usize = match problem_details.nth(2) {
                        None => {
                            return Err(ErrorKind::from(err::ParseError::ProblemSpecification));
                        }
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(ErrorKind::from(err::ParseError::ProblemSpecification));
                            }
                            Ok(count) => count,
                        },
                    };

                    let clause_count: usize = match problem_details.next() {
                        None => {
                            return Err(ErrorKind::from(err::ParseError::ProblemSpecification));
                        }
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(ErrorKind::from(err::ParseError::ProblemSpecification));
                            }
                            Ok(count) => count,
                        },
                    };

                    log::info!(target: targets::PARSER, "Expectation is to read {atom_count} atoms over {clause_count} clauses");
                    info.expected_atom_count = Some(atom_count);
                    info.expected_clause_count = Some(clause_count);
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.added_clauses += 1;
                            }

                            _ => {
                                let parsed_int = match item.parse::<isize>() {
                                    Ok(int) => int,
                                    Err(_) => {
                                        return Err(ErrorKind::from(err::ParseError::Line(
                                            line_counter,
                                        )));
                                    }
                                };

                                let name = parsed_int.unsigned_abs().to_string();
                                let atom = self.named_atom(name.as_str())?;
                                clause_buffer.push(CLiteral::new(atom, parsed_int.is_positive()));
                            }
                        }
                    }
                }
            }
        }

        // A final clause without the closing `0` is taken as given.
        if !clause_buffer.is_empty() {
            self.add_clause(std::mem::take(&mut clause_buffer))?;
            info.added_clauses += 1;
        }

        Ok(info)
    }
}
