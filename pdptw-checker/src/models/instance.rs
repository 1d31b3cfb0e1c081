#[cfg(test)]
#[path = "../../tests/unit/models/instance_test.rs"]
mod instance_test;

use super::*;
use std::fmt;

/// Represents a physical location: depot or one side of pickup and delivery request.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// A node index, `0` is depot.
    pub index: NodeIndex,
    /// A node location as (lat, lon). Not used by checker.
    pub location: (f64, f64),
    /// A load change at the node.
    pub demand: Demand,
    /// A time window when service may start.
    pub time_window: TimeWindow,
    /// A service duration.
    pub service: Duration,
    /// A resolved complementary node of the request. Depot has no pair.
    pub pair: Option<NodeIndex>,
    /// A pair as it was set explicitly in the input, if any.
    pub declared_pair: Option<NodeIndex>,
}

impl Node {
    /// Returns true if node is depot.
    pub fn is_depot(&self) -> bool {
        self.index == DEPOT_INDEX
    }

    /// Returns true if node is pickup side of the request.
    pub fn is_pickup(&self) -> bool {
        self.demand > 0
    }

    /// Returns true if node is delivery side of the request.
    pub fn is_delivery(&self) -> bool {
        self.demand < 0
    }
}

/// An immutable PDPTW problem definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    /// An instance name from header, if present.
    pub name: Option<String>,
    /// Total amount of nodes including depot.
    pub size: usize,
    /// Maximum vehicle load shared by the whole fleet.
    pub capacity: Demand,
    /// A route time limit from header, if present. Informational only.
    pub route_time: Option<Timestamp>,
    /// Nodes ordered by their index.
    pub nodes: Vec<Node>,
    /// A travel time matrix: `matrix[from][to]`.
    pub matrix: Vec<Vec<Duration>>,
}

impl Instance {
    /// Returns node by its index.
    pub fn get_node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Returns true if index refers to existing node.
    pub fn contains(&self, index: NodeIndex) -> bool {
        index < self.size && index < self.nodes.len()
    }

    /// Returns travel time between two nodes or `None` if any index is outside of the matrix.
    pub fn travel_time(&self, from: NodeIndex, to: NodeIndex) -> Option<Duration> {
        self.matrix.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Derives a pair of the node using parallel request layout: pickups occupy the first half
    /// of non depot indices, deliveries the second half in the same order.
    pub fn derive_pair(&self, index: NodeIndex, demand: Demand) -> Option<NodeIndex> {
        derive_pair(self.size, index, demand)
    }

    /// Returns (pickup, delivery) pairs of the instance ordered by pickup index.
    pub fn get_requests(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.nodes.iter().filter(|node| node.is_pickup()).filter_map(|node| node.pair.map(|pair| (node.index, pair)))
    }

    /// Returns nodes where pair definition is inconsistent: explicitly declared pair disagrees
    /// with derived one or the pair is not complementary.
    pub fn get_pair_conflicts(&self) -> Vec<PairConflict> {
        self.nodes
            .iter()
            .filter(|node| !node.is_depot() && node.demand != 0)
            .flat_map(|node| {
                let derived = self.derive_pair(node.index, node.demand);
                let mismatch = node
                    .declared_pair
                    .filter(|declared| Some(*declared) != derived)
                    .map(|declared| PairConflict::OffsetMismatch { node: node.index, declared, derived });

                let broken = match node.pair.and_then(|pair| self.get_node(pair)) {
                    Some(pair) if pair.demand.signum() == -node.demand.signum() && pair.pair == Some(node.index) => {
                        None
                    }
                    _ => Some(PairConflict::NotComplementary { node: node.index, pair: node.pair }),
                };

                mismatch.into_iter().chain(broken)
            })
            .collect()
    }
}

/// Derives a pair of the node using parallel request layout.
pub(crate) fn derive_pair(size: usize, index: NodeIndex, demand: Demand) -> Option<NodeIndex> {
    let offset = size / 2;

    match demand.signum() {
        1 => Some(index + offset).filter(|pair| *pair < size),
        -1 => index.checked_sub(offset).filter(|pair| *pair != DEPOT_INDEX),
        _ => None,
    }
}

/// Describes inconsistency in pickup and delivery pair definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PairConflict {
    /// Explicit pair field disagrees with pair derived from index offset.
    OffsetMismatch {
        /// A node index.
        node: NodeIndex,
        /// A pair from input.
        declared: NodeIndex,
        /// A pair derived from index offset.
        derived: Option<NodeIndex>,
    },
    /// A pair is missing or does not refer back to the node with opposite demand.
    NotComplementary {
        /// A node index.
        node: NodeIndex,
        /// A resolved pair.
        pair: Option<NodeIndex>,
    },
}

impl fmt::Display for PairConflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OffsetMismatch { node, declared, derived: Some(derived) } => {
                write!(f, "node {node} declares pair {declared}, but index offset gives {derived}: declared is used")
            }
            Self::OffsetMismatch { node, declared, derived: None } => {
                write!(f, "node {node} declares pair {declared}, but index offset gives no pair: declared is used")
            }
            Self::NotComplementary { node, pair: Some(pair) } => {
                write!(f, "node {node} and its pair {pair} do not form pickup and delivery request")
            }
            Self::NotComplementary { node, pair: None } => write!(f, "node {node} has non-zero demand, but no pair"),
        }
    }
}
