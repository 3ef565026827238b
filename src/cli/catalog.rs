//! A catalog of built-in example formulas.
//!
//! The catalog covers the small formulas used while developing the library, from trivial one-clause examples through formulas whose closure is large enough to exhaust the default step limit.
//! Each example is solved in a fresh context, and the formula, verdict, and elapsed time are written in turn.

use stoat_sat::{config::Config, context::Context};

const CATALOG: [(&str, &[&[&str]]); 15] = [
    ("Trivial SAT", &[&["A"]]),
    ("Trivial UNSAT", &[&["A"], &["¬A"]]),
    ("Simple SAT", &[&["A", "B"], &["¬A"]]),
    ("Simple UNSAT", &[&["A"], &["B"], &["¬A", "¬B"]]),
    ("Chain SAT", &[&["A", "B"], &["¬B", "C"], &["¬C", "D"]]),
    (
        "Chain UNSAT",
        &[&["A"], &["¬A", "B"], &["¬B", "C"], &["¬C", "¬A"]],
    ),
    (
        "3-SAT SAT",
        &[&["A", "B", "C"], &["¬A", "D", "E"], &["¬B", "¬E", "F"]],
    ),
    (
        "3-SAT UNSAT",
        &[
            &["A"],
            &["B"],
            &["C"],
            &["¬A", "¬B"],
            &["¬B", "¬C"],
            &["¬C", "¬A"],
        ],
    ),
    ("Redundant SAT", &[&["A"], &["A", "B"], &["A", "B", "C"]]),
    (
        "Deep Contradiction",
        &[
            &["A", "B"],
            &["¬B", "C"],
            &["¬C", "D"],
            &["¬D", "E"],
            &["¬E", "¬A"],
        ],
    ),
    ("Pure Literal SAT", &[&["A"], &["B", "C"], &["C", "D"]]),
    (
        "Unit Propagation SAT",
        &[&["A"], &["¬A", "B"], &["¬B", "C"]],
    ),
    (
        "Deep UNSAT",
        &[
            &["A"],
            &["¬A", "B"],
            &["¬B", "C"],
            &["¬C", "D"],
            &["¬D", "E"],
            &["¬E", "¬A"],
        ],
    ),
    (
        "Complex 3-SAT SAT",
        &[
            &["A", "B", "C"],
            &["¬A", "D", "E"],
            &["¬B", "¬E", "F"],
            &["¬C", "F", "G"],
            &["¬D", "¬F", "G"],
        ],
    ),
    (
        "Hard contradiction",
        &[
            &["A"],
            &["¬A", "B"],
            &["¬B", "C"],
            &["¬C", "D"],
            &["¬D", "E"],
            &["¬E", "F"],
            &["¬F", "¬A"],
        ],
    ),
];

/// Solves each example of the catalog, writing the formula, verdict, and elapsed time.
pub fn run(config: &Config) {
    for (index, (name, clauses)) in CATALOG.iter().enumerate() {
        let mut ctx: Context = Context::from_config(config.clone());

        for tokens in *clauses {
            let mut clause = Vec::new();

            for token in *tokens {
                match ctx.literal_from_string(token) {
                    Ok(literal) => clause.push(literal),
                    Err(e) => {
                        println!("c Catalog error: {e:?}");
                        std::process::exit(1);
                    }
                }
            }

            if let Err(e) = ctx.add_clause(clause) {
                println!("c Catalog error: {e:?}");
                std::process::exit(1);
            }
        }

        println!("c Example {}: {name}", index + 1);
        println!("c   {}", ctx.formula_string());

        if let Err(e) = ctx.solve() {
            println!("c Solve error: {e:?}");
            std::process::exit(2);
        }

        println!(
            "c   Steps: {}, elapsed: {:.2?}",
            ctx.counters.fresh_steps, ctx.counters.time
        );
        println!("s {}", ctx.report());
    }
}
