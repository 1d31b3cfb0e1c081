use super::*;

/// Compares recalculated objective with expected one. Skipped when solution is already infeasible.
pub(crate) fn check_objective(context: &CheckerContext, journal: &mut Journal) -> Result<(), Interrupted> {
    if journal.has_violations() {
        return Ok(());
    }

    if let Some(expected) = context.config.expected_vehicles {
        let actual = context.solution.get_used_vehicles();
        if actual != expected {
            journal.report(Violation::RouteCountMismatch { expected, actual })?;
        }
    }

    if let Some(expected) = context.config.expected_cost {
        let actual = journal.cost;
        if (actual as f64 - expected).abs() > context.config.cost_tolerance {
            journal.report(Violation::CostMismatch { expected, actual })?;
        }
    }

    Ok(())
}
