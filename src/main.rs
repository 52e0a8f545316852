use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use perceptor::parsing::{self, DecodeOptions};

mod output;
mod problem;

use output::{Identity, Terminal};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("perceptor")
        .version(VERSION)
        .propagate_version(true)
        .about("Decode the perceptor messages a simulated soccer humanoid receives each cycle.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging to standard error. Otherwise RUST_LOG is honoured."),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode each message in the given capture and print a summary of what was perceived")
                .arg(
                    Arg::new("team")
                        .long("team")
                        .value_name("NAME")
                        .help("Our own team's name, so that team mates can be told apart from opponents."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The capture file holding one perceptor message per line. Use '-' to read standard input."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Decode each message in the given capture and report any problems found")
                .arg(
                    Arg::new("team")
                        .long("team")
                        .value_name("NAME")
                        .help("Our own team's name, so that team mates can be told apart from opponents."),
                )
                .arg(
                    Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .action(ArgAction::SetTrue)
                        .help("Show the offending part of each message along with an explanation."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The capture file holding one perceptor message per line. Use '-' to read standard input."),
                ),
        )
        .get_matches();

    init_logging(matches.get_flag("debug"));

    match matches.subcommand() {
        Some(("decode", submatches)) => {
            let options = options_from(submatches);
            let raw = submatches.get_flag("raw-control-chars");

            let filename = match submatches.get_one::<String>("filename") {
                Some(filename) => Path::new(filename),
                None => unreachable!(),
            };
            debug!(?filename);

            let content = load_or_exit(filename);

            let colour = raw || std::io::stdout().is_terminal();

            for (line, message) in messages(&content) {
                let decoded = parsing::decode_with(&options, message);

                for error in &decoded.diagnostics {
                    eprintln!(
                        "{}",
                        problem::concise_parsing_error(error, filename, line, message)
                    );
                }

                let result = if colour {
                    output::summarize(&Terminal, line + 1, &decoded.state, decoded.diagnostics.len())
                } else {
                    output::summarize(&Identity, line + 1, &decoded.state, decoded.diagnostics.len())
                };

                match result {
                    Ok(summary) => print!("{}", summary),
                    Err(error) => {
                        eprintln!("{}: {}", "error".bright_red(), error);
                        std::process::exit(1);
                    }
                }
            }
        }
        Some(("check", submatches)) => {
            let options = options_from(submatches);
            let verbose = submatches.get_flag("verbose");

            let filename = match submatches.get_one::<String>("filename") {
                Some(filename) => Path::new(filename),
                None => unreachable!(),
            };
            debug!(?filename);

            let content = load_or_exit(filename);

            let mut count = 0;
            let mut total = 0;

            for (line, message) in messages(&content) {
                let decoded = parsing::decode_with(&options, message);
                total += 1;

                for error in &decoded.diagnostics {
                    count += 1;
                    if verbose {
                        eprintln!(
                            "{}\n",
                            problem::full_parsing_error(error, filename, line, message)
                        );
                    } else {
                        eprintln!(
                            "{}",
                            problem::concise_parsing_error(error, filename, line, message)
                        );
                    }
                }
            }

            info!(messages = total, diagnostics = count, "Check complete");

            if count > 0 {
                eprintln!(
                    "{}: {} problem{} found in {} message{}",
                    "warning".bright_yellow(),
                    count,
                    if count == 1 { "" } else { "s" },
                    total,
                    if total == 1 { "" } else { "s" }
                );
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: perceptor [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn options_from(submatches: &ArgMatches) -> DecodeOptions {
    DecodeOptions {
        team: submatches
            .get_one::<String>("team")
            .cloned(),
    }
}

fn load_or_exit(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

// A capture holds one message per line. Blank lines are skipped; the line
// index returned is zero-origin.
fn messages(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, message)| {
            !message
                .trim()
                .is_empty()
        })
}
