use std::path::PathBuf;

use stoat_sat::config::Config;

use crate::CliOptions;

/// Parse CLI arguments to a [Config] struct or a [CliOptions](crate::CliOptions) struct, returning the path argument, if one was given.
///
/// If an unrecognised argument or invalid option is found a message is sent and the process is terminated.
pub fn parse_args(args: &[String], cfg: &mut Config, cli_options: &mut CliOptions) -> Option<PathBuf> {
    let mut path = None;

    'arg_examination: for arg in args.iter().skip(1) {
        if !arg.starts_with("--") {
            path = Some(PathBuf::from(arg));
            continue 'arg_examination;
        }

        let mut split = arg.split('=');
        match split.next() {
            Some("--catalog") => {
                cli_options.catalog = true;
            }

            Some("--formula") => {
                println!("c The parsed formula will be written.");
                cli_options.formula = true;
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, a message is sent.
            //
            Some("--step_limit") => {
                let (min, max) = cfg.step_limit.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if min <= value && value <= max {
                            println!("c step_limit set to: {value}");
                            cfg.step_limit.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("step_limit requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some(_) | None => {
                println!("Unable to parse argument: {arg:?}");
                std::process::exit(1);
            }
        }
    }

    path
}
