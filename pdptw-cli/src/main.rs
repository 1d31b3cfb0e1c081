//! A command line interface to *Pickup and Delivery Problem with Time Windows* solution checker.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("PDPTW Solution Checker")
            .version(env!("CARGO_PKG_VERSION"))
            .author("Ilya Builuk <ilya.builuk@gmail.com>")
            .about("A command line interface to check Pickup and Delivery Problem with Time Windows solutions")
            .subcommand(get_check_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        match arg_matches.subcommand() {
            Some(("check", check_matches)) => process::exit(run_check(check_matches)),
            _ => {
                eprintln!("No subcommand was used. Use -h to print help information.");
                process::exit(2);
            }
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches)
}
