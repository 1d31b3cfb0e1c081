use super::*;

/// Represents one vehicle trip. Node sequence always starts and ends at depot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    nodes: Vec<NodeIndex>,
}

impl Route {
    /// Creates a new route from visit order, depot is added at both ends unless it is already there.
    pub fn new(stops: Vec<NodeIndex>) -> Self {
        let start = stops.iter().take_while(|node| **node == DEPOT_INDEX).count();
        let end = stops.len() - stops.iter().rev().take_while(|node| **node == DEPOT_INDEX).count();

        let mut nodes = Vec::with_capacity(stops.len() + 2);
        nodes.push(DEPOT_INDEX);
        nodes.extend_from_slice(&stops[start..end.max(start)]);
        nodes.push(DEPOT_INDEX);

        Self { nodes }
    }

    /// Creates depot to depot route without stops.
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns all nodes including depot at both ends.
    pub fn nodes(&self) -> &[NodeIndex] {
        self.nodes.as_slice()
    }

    /// Returns visit order without depot ends.
    pub fn stops(&self) -> &[NodeIndex] {
        &self.nodes[1..self.nodes.len() - 1]
    }

    /// Returns true if route has no stops.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 2
    }
}

/// Keeps information about route line which cannot be parsed and is replaced by empty route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedRoute {
    /// A zero-based route index in solution.
    pub route_index: usize,
    /// A 1-based line number in input.
    pub line_no: usize,
    /// A line content.
    pub content: String,
}

/// A candidate solution to be checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    /// An instance name from header, informational only.
    pub instance_name: Option<String>,
    /// Routes in input order, empty routes included.
    pub routes: Vec<Route>,
    /// Route lines replaced by empty routes.
    pub malformed: Vec<MalformedRoute>,
}

impl Solution {
    /// Returns amount of routes with at least one stop.
    pub fn get_used_vehicles(&self) -> usize {
        self.routes.iter().filter(|route| !route.is_empty()).count()
    }
}
