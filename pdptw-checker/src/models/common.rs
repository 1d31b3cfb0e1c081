use serde::{Deserialize, Serialize};

/// Specifies an index of the node in the instance. Index `0` is reserved for depot.
pub type NodeIndex = usize;

/// Specifies a moment of time measured in instance units.
pub type Timestamp = i64;

/// Specifies a time duration measured in instance units.
pub type Duration = i64;

/// Specifies a signed load change: positive for pickup, negative for delivery.
pub type Demand = i64;

/// Specifies a travel cost.
pub type Cost = i64;

/// An index reserved for the depot.
pub const DEPOT_INDEX: NodeIndex = 0;

/// Represents a closed time window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeWindow {
    /// Earliest moment service may start.
    pub start: Timestamp,
    /// Latest moment service may start.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Checks whether the time window contains given moment.
    pub fn contains(&self, time: Timestamp) -> bool {
        time >= self.start && time <= self.end
    }
}
