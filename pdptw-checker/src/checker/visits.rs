use crate::models::{DEPOT_INDEX, NodeIndex};

/// Keeps visit flags of a single check run.
pub(crate) struct VisitRegistry {
    visited: Vec<bool>,
}

impl VisitRegistry {
    pub fn new(size: usize) -> Self {
        Self { visited: vec![false; size] }
    }

    pub fn is_visited(&self, node: NodeIndex) -> bool {
        self.visited.get(node).copied().unwrap_or(false)
    }

    pub fn visit(&mut self, node: NodeIndex) {
        if let Some(flag) = self.visited.get_mut(node) {
            *flag = true;
        }
    }

    /// Returns non depot nodes which are not visited, ordered by index.
    pub fn get_unvisited(&self) -> Vec<NodeIndex> {
        self.visited.iter().enumerate().skip(DEPOT_INDEX + 1).filter(|(_, visited)| !**visited).map(|(idx, _)| idx).collect()
    }
}
