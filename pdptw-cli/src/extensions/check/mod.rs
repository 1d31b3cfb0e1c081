//! A helper module which contains functionality to run feasibility checks on solution files.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

mod config;
pub use self::config::*;

use pdptw_checker::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A minimal tolerance used when cost is taken from file name: it is printed with two decimals.
const NAME_COST_TOLERANCE: f64 = 0.005;

/// Returns path to solution file. When directory is given, the first regular file with one of
/// the extensions in lexicographic order is used.
pub fn resolve_solution_path(path: &Path, extensions: &[String]) -> Result<PathBuf, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }

    let mut candidates = path
        .read_dir()
        .map_err(|err| InputError::from_io(path, err))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|candidate| candidate.is_file())
        .filter(|candidate| {
            candidate
                .extension()
                .and_then(|extension| extension.to_str())
                .is_some_and(|extension| extensions.iter().any(|known| known.eq_ignore_ascii_case(extension)))
        })
        .collect::<Vec<_>>();

    candidates.sort();

    candidates.into_iter().next().ok_or_else(|| InputError::NotFound(path.join(get_lookup_pattern(extensions))))
}

/// Reads instance from file.
pub fn read_instance_file(path: &Path) -> Result<Instance, InputError> {
    let file = File::open(path).map_err(|err| InputError::from_io(path, err))?;

    Ok(BufReader::new(file).read_pdptw()?)
}

/// Reads solution from file.
pub fn read_solution_file(path: &Path) -> Result<Solution, InputError> {
    let file = File::open(path).map_err(|err| InputError::from_io(path, err))?;

    Ok(BufReader::new(file).read_sintef()?)
}

/// Returns objective encoded in solution file name, if the name follows SINTEF convention.
pub fn get_name_objective(path: &Path) -> Option<SolutionFileName> {
    path.file_name().and_then(|name| name.to_str()).and_then(SolutionFileName::parse)
}

/// Checks solution file (or the first solution file in directory) against instance file.
pub fn check_solution_files(
    instance_path: &Path,
    solution_path: &Path,
    config: &Config,
    check_name_objective: bool,
    logger: Option<InfoLogger>,
) -> Result<Verdict, InputError> {
    let log = |message: String| {
        if let Some(logger) = logger.as_ref() {
            (logger)(message.as_str())
        }
    };

    let solution_path = resolve_solution_path(solution_path, config.get_extensions().as_slice())?;
    log(format!("checking '{}' against '{}'", solution_path.display(), instance_path.display()));

    let instance = read_instance_file(instance_path)?;
    let solution = read_solution_file(solution_path.as_path())?;

    let names = instance.name.as_ref().zip(solution.instance_name.as_ref());
    if let Some((instance_name, solution_name)) = names.filter(|(left, right)| !left.eq_ignore_ascii_case(right)) {
        log(format!("warning: solution is made for '{solution_name}', but instance is '{instance_name}'"));
    }

    let mut checker_config = config.checker.clone().unwrap_or_default();
    if check_name_objective {
        match get_name_objective(solution_path.as_path()) {
            Some(objective) => {
                checker_config.expected_cost = Some(objective.cost);
                checker_config.expected_vehicles = Some(objective.vehicles);
                checker_config.cost_tolerance = checker_config.cost_tolerance.max(NAME_COST_TOLERANCE);
            }
            None => log(format!("warning: cannot get objective from file name '{}'", solution_path.display())),
        }
    }

    let context = CheckerContext::new(&instance, &solution, checker_config);
    let context = match logger {
        Some(logger) => context.with_logger(logger),
        None => context,
    };

    Ok(context.check())
}

fn get_lookup_pattern(extensions: &[String]) -> String {
    format!("*.{{{}}}", extensions.join(","))
}
