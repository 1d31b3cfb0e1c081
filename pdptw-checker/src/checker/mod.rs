//! This module provides functionality to check that given solution is feasible for given instance,
//! which means that there is no constraint violations, and to recalculate its real cost.
//!
//! Routes are simulated one by one in file order. For each visited node the following is checked:
//! * node is not visited twice
//! * service starts within time window, earlier arrival waits
//! * delivery is not visited before its pickup
//! * vehicle capacity is not exceeded
//!
//! After all routes, every non depot node should be visited. Only travel time is charged as cost.
//!
//! NOTE precedence check verifies visit order only: pickup and delivery served by different
//! vehicles are not reported.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

mod config;
pub use self::config::*;

mod coverage;
use self::coverage::check_coverage;

mod objective;
use self::objective::check_objective;

mod route;
use self::route::check_route;

mod visits;
use self::visits::VisitRegistry;

use crate::models::*;
use crate::utils::{InfoLogger, log_info};

/// Stores instance and solution together and provides a method to check the solution.
pub struct CheckerContext<'a> {
    /// An instance definition.
    pub instance: &'a Instance,
    /// A solution to be checked.
    pub solution: &'a Solution,
    /// A checker configuration.
    pub config: CheckerConfig,

    logger: Option<InfoLogger>,
}

impl<'a> CheckerContext<'a> {
    /// Creates a new instance of `CheckerContext`.
    pub fn new(instance: &'a Instance, solution: &'a Solution, config: CheckerConfig) -> Self {
        Self { instance, solution, config, logger: None }
    }

    /// Sets logger which receives diagnostic messages.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Performs solution check. Each call starts from a clean state.
    pub fn check(&self) -> Verdict {
        self.log_input_diagnostics();

        let mut visits = VisitRegistry::new(self.instance.size);
        let mut journal = Journal::new(self.config.mode);

        let result = (1..)
            .zip(self.solution.routes.iter())
            .try_for_each(|(number, route)| check_route(self, number, route, &mut visits, &mut journal))
            .and_then(|_| check_coverage(self, &visits, &mut journal))
            .and_then(|_| check_objective(self, &mut journal));

        if result.is_err() {
            self.log(|| "check is stopped at the first violation".to_string());
        }

        let verdict = Verdict::new(self.solution.routes.len(), journal.cost, journal.violations);
        self.log(|| format!("{verdict}"));

        verdict
    }

    pub(crate) fn log(&self, message: impl FnOnce() -> String) {
        log_info(self.logger.as_ref(), message)
    }

    fn log_input_diagnostics(&self) {
        if self.logger.is_none() {
            return;
        }

        if self.instance.size == 0 {
            self.log(|| "instance size is 0: instance file is likely malformed".to_string());
        }

        self.instance.get_pair_conflicts().iter().for_each(|conflict| self.log(|| format!("warning: {conflict}")));

        self.solution.malformed.iter().for_each(|malformed| {
            self.log(|| {
                format!(
                    "route {} at line {} cannot be parsed and is treated as empty: '{}'",
                    malformed.route_index + 1,
                    malformed.line_no,
                    malformed.content
                )
            })
        });
    }
}

/// A marker which signals that check should not continue.
#[derive(Debug)]
pub(crate) struct Interrupted;

/// Accumulates cost and violations during a single check.
pub(crate) struct Journal {
    mode: CheckMode,
    pub cost: Cost,
    pub violations: Vec<Violation>,
}

impl Journal {
    fn new(mode: CheckMode) -> Self {
        Self { mode, cost: 0, violations: vec![] }
    }

    /// Registers violation and returns error when check should stop.
    pub fn report(&mut self, violation: Violation) -> Result<(), Interrupted> {
        self.violations.push(violation);

        match self.mode {
            CheckMode::FailFast => Err(Interrupted),
            CheckMode::ReportAll => Ok(()),
        }
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}
