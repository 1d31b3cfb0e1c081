use super::*;

/// A vehicle state while route is simulated.
struct RouteState {
    time: Timestamp,
    load: Demand,
    previous: NodeIndex,
}

/// Simulates one vehicle trip from depot back to depot.
pub(crate) fn check_route(
    context: &CheckerContext,
    number: usize,
    route: &Route,
    visits: &mut VisitRegistry,
    journal: &mut Journal,
) -> Result<(), Interrupted> {
    let instance = context.instance;
    let initial_cost = journal.cost;
    let mut state = RouteState { time: 0, load: 0, previous: DEPOT_INDEX };

    for &index in route.nodes().iter().skip(1) {
        let known = instance.get_node(index).filter(|_| instance.contains(index));
        let Some((node, travel)) = known.zip(instance.travel_time(state.previous, index)) else {
            journal.report(Violation::UnknownNode { route: number, node: index })?;
            continue;
        };

        if !node.is_depot() && visits.is_visited(index) {
            journal.report(Violation::VisitedTwice { route: number, node: index })?;
        }

        state.time = state.time.saturating_add(travel);

        // NOTE depot is exempt from time window and capacity checks
        if !node.is_depot() {
            state.time = state.time.max(node.time_window.start);
            if !node.time_window.contains(state.time) {
                journal.report(Violation::TimeWindow {
                    route: number,
                    node: index,
                    time: state.time,
                    latest: node.time_window.end,
                })?;
            }

            if let Some(pickup) = node.pair.filter(|pickup| node.is_delivery() && !visits.is_visited(*pickup)) {
                journal.report(Violation::Precedence { route: number, pickup, delivery: index })?;
            }

            state.load = state.load.saturating_add(node.demand);
            if state.load > instance.capacity {
                journal.report(Violation::Capacity {
                    route: number,
                    node: index,
                    load: state.load,
                    capacity: instance.capacity,
                })?;
            }

            state.time = state.time.saturating_add(node.service);
        }

        journal.cost = journal.cost.saturating_add(travel);
        visits.visit(index);
        state.previous = index;
    }

    context.log(|| {
        format!(
            "route {number}: {} stops, cost: {}, end time: {}",
            route.stops().len(),
            journal.cost - initial_cost,
            state.time
        )
    });

    Ok(())
}
