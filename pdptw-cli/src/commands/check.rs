#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use pdptw_checker::prelude::*;
use pdptw_cli::extensions::check::{Config, check_solution_files, read_config};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

const INSTANCE_ARG_NAME: &str = "INSTANCE";
const SOLUTION_ARG_NAME: &str = "SOLUTION";
const MODE_ARG_NAME: &str = "mode";
const EXPECTED_COST_ARG_NAME: &str = "expected-cost";
const NAME_OBJECTIVE_ARG_NAME: &str = "check-name-objective";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

/// An exit code when solution is feasible.
pub const VALID_EXIT_CODE: i32 = 0;
/// An exit code when solution is checked and found infeasible.
pub const INVALID_EXIT_CODE: i32 = 1;
/// An exit code when solution cannot be checked.
pub const NOT_CHECKED_EXIT_CODE: i32 = 2;

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Checks PDPTW solution feasibility and recalculates its cost")
        .arg(Arg::new(INSTANCE_ARG_NAME).help("Sets instance file").required(true).index(1))
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets solution file or a directory with solution files")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new(MODE_ARG_NAME)
                .help("Specifies whether check stops at the first violation or reports all of them")
                .long(MODE_ARG_NAME)
                .required(false)
                .value_parser(["fail-fast", "report-all"]),
        )
        .arg(
            Arg::new(EXPECTED_COST_ARG_NAME)
                .help("Specifies expected total cost of the solution")
                .long(EXPECTED_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(NAME_OBJECTIVE_ARG_NAME)
                .help("Checks vehicles and cost encoded in solution file name as <instance>.<vehicles>_<cost>.txt")
                .long(NAME_OBJECTIVE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file to write verdict in json format")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether diagnostic messages should be printed")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Runs check and returns process exit code.
pub fn run_check(matches: &ArgMatches) -> i32 {
    match check_solution(matches) {
        Ok(verdict) if verdict.is_valid => {
            println!("{verdict}");
            VALID_EXIT_CODE
        }
        Ok(verdict) => {
            println!("{verdict}");
            INVALID_EXIT_CODE
        }
        Err(err) => {
            eprintln!("{err}");
            NOT_CHECKED_EXIT_CODE
        }
    }
}

fn check_solution(matches: &ArgMatches) -> Result<Verdict, String> {
    let instance_path = matches.get_one::<String>(INSTANCE_ARG_NAME).ok_or("no instance path")?;
    let solution_path = matches.get_one::<String>(SOLUTION_ARG_NAME).ok_or("no solution path")?;

    let config = get_config(matches)?;
    let logger: Option<InfoLogger> = if matches.get_flag(LOG_ARG_NAME) || config.is_logging_enabled() {
        Some(Arc::new(|msg: &str| println!("{msg}")))
    } else {
        None
    };

    let verdict = check_solution_files(
        Path::new(instance_path),
        Path::new(solution_path),
        &config,
        matches.get_flag(NAME_OBJECTIVE_ARG_NAME),
        logger,
    )
    .map_err(|err| err.to_string())?;

    if let Some(out_result) = matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        write_verdict(out_result, &verdict)?;
    }

    Ok(verdict)
}

/// Reads config file, if specified, and applies command line arguments on top of it.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };

    let mut checker = config.checker.take().unwrap_or_default();

    if let Some(mode) = matches.get_one::<String>(MODE_ARG_NAME) {
        checker.mode = match mode.as_str() {
            "report-all" => CheckMode::ReportAll,
            _ => CheckMode::FailFast,
        };
    }

    if let Some(expected_cost) = parse_float_value::<f64>(matches, EXPECTED_COST_ARG_NAME, "expected cost")? {
        checker.expected_cost = Some(expected_cost);
    }

    config.checker = Some(checker);

    Ok(config)
}

fn write_verdict(path: &str, verdict: &Verdict) -> Result<(), String> {
    let mut writer = BufWriter::new(create_file(path, "result")?);

    serde_json::to_writer_pretty(&mut writer, verdict)
        .map_err(|err| format!("cannot serialize verdict: '{err}'"))
        .and_then(|_| writer.flush().map_err(|err| format!("cannot write result file '{path}': '{err}'")))
}
