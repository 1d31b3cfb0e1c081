use super::*;

/// Checks that every non depot node is visited.
pub(crate) fn check_coverage(
    context: &CheckerContext,
    visits: &VisitRegistry,
    journal: &mut Journal,
) -> Result<(), Interrupted> {
    let missing = visits.get_unvisited();

    if missing.is_empty() {
        Ok(())
    } else {
        journal.report(Violation::Coverage { missing, total: context.instance.size.saturating_sub(1) })
    }
}
