use super::*;
use serde::Serialize;
use std::fmt;

/// A constraint violation found by checker. Route numbers are 1-based as in solution file.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Violation {
    /// Route refers to a node which is not defined in instance.
    UnknownNode {
        /// A route number.
        route: usize,
        /// A node index.
        node: NodeIndex,
    },
    /// Node is visited more than once.
    VisitedTwice {
        /// A route number.
        route: usize,
        /// A node index.
        node: NodeIndex,
    },
    /// Service cannot start before time window end.
    TimeWindow {
        /// A route number.
        route: usize,
        /// A node index.
        node: NodeIndex,
        /// A service start time.
        time: Timestamp,
        /// A time window end.
        latest: Timestamp,
    },
    /// Delivery is visited before its pickup.
    Precedence {
        /// A route number.
        route: usize,
        /// A pickup index.
        pickup: NodeIndex,
        /// A delivery index.
        delivery: NodeIndex,
    },
    /// Vehicle load exceeds capacity.
    Capacity {
        /// A route number.
        route: usize,
        /// A node index.
        node: NodeIndex,
        /// A load after the node.
        load: Demand,
        /// A vehicle capacity.
        capacity: Demand,
    },
    /// Some nodes are not visited at all.
    Coverage {
        /// Unvisited node indices.
        missing: Vec<NodeIndex>,
        /// Amount of non depot nodes.
        total: usize,
    },
    /// Recalculated cost differs from expected one.
    CostMismatch {
        /// Expected cost.
        expected: f64,
        /// Recalculated cost.
        actual: Cost,
    },
    /// Amount of used vehicles differs from expected one.
    RouteCountMismatch {
        /// Expected amount of vehicles.
        expected: usize,
        /// Actual amount of non-empty routes.
        actual: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownNode { route, node } => write!(f, "node {node} does not exist in instance (route {route})"),
            Self::VisitedTwice { route, node } => write!(f, "node {node} visited twice (route {route})"),
            Self::TimeWindow { route, node, time, latest } => {
                write!(f, "visit after time window limit at node {node}: {time} > {latest} (route {route})")
            }
            Self::Precedence { route, pickup, delivery } => {
                write!(f, "delivery before pickup for pair ({pickup}, {delivery}) (route {route})")
            }
            Self::Capacity { route, node, load, capacity } => write!(
                f,
                "vehicle overloaded at node {node}: {load} > {capacity}, overflow {} (route {route})",
                load - capacity
            ),
            Self::Coverage { missing, total } => write!(
                f,
                "nodes were not visited ({} out of {total}): [{}]",
                missing.len(),
                missing.iter().map(|node| node.to_string()).collect::<Vec<_>>().join(", ")
            ),
            Self::CostMismatch { expected, actual } => write!(f, "cost mismatch: expected {expected}, got {actual}"),
            Self::RouteCountMismatch { expected, actual } => {
                write!(f, "vehicles mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

/// A checker outcome. Invalid verdict is a normal result, not a failure of the checker.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// True if no violation is found.
    pub is_valid: bool,
    /// `Valid` or description of the first violation.
    pub message: String,
    /// Amount of routes in solution, empty routes included.
    pub route_count: usize,
    /// Total travel cost accumulated until check has stopped.
    pub total_cost: Cost,
    /// All found violations in encounter order.
    pub violations: Vec<Violation>,
}

impl Verdict {
    /// A message used for valid verdict.
    pub const VALID_MESSAGE: &'static str = "Valid";

    /// Creates a verdict from check results.
    pub fn new(route_count: usize, total_cost: Cost, violations: Vec<Violation>) -> Self {
        let message = violations.first().map_or_else(|| Self::VALID_MESSAGE.to_string(), |v| v.to_string());

        Self { is_valid: violations.is_empty(), message, route_count, total_cost, violations }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_valid {
            write!(f, "VALID: routes: {}, cost: {}", self.route_count, self.total_cost)
        } else {
            write!(f, "INVALID: {}", self.message)?;
            self.violations.iter().skip(1).try_for_each(|violation| write!(f, "\n\t{violation}"))
        }
    }
}
