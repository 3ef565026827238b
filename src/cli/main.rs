use std::io::BufReader;

use stoat_sat::{config::Config, context::Context};

mod catalog;
mod parse_args;

use parse_args::parse_args;

#[derive(Default)]
struct CliOptions {
    catalog: bool,
    formula: bool,
}

fn main() {
    let mut cli_options = CliOptions::default();
    let mut config = Config::default();

    let args: Vec<String> = std::env::args().collect();
    let path = parse_args(&args, &mut config, &mut cli_options);

    if cli_options.catalog {
        catalog::run(&config);
        return;
    }

    let Some(path) = path else {
        println!("c Path to CNF required");
        std::process::exit(1);
    };

    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let mut ctx: Context = Context::from_config(config);

    let parse_result = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            ctx.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => ctx.read_dimacs(BufReader::new(&file)),
    };

    match parse_result {
        Ok(info) => println!("c Parsed {} clauses", info.added_clauses),
        Err(e) => {
            println!("c Parse error: {e:?}");
            std::process::exit(1);
        }
    }

    if cli_options.formula {
        println!("c {}", ctx.formula_string());
    }

    if let Err(e) = ctx.solve() {
        println!("c Solve error: {e:?}");
        std::process::exit(2);
    }

    println!(
        "c Rounds: {}, resolution steps: {}",
        ctx.counters.total_rounds, ctx.counters.fresh_steps
    );
    println!("c Elapsed: {:.2?}", ctx.counters.time);

    println!("s {}", ctx.report());
}
