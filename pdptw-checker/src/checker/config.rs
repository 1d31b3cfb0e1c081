use serde::{Deserialize, Serialize};

/// Specifies how checker reacts on violation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckMode {
    /// Stop at the first violation.
    #[default]
    FailFast,
    /// Continue simulation and report every violation.
    ReportAll,
}

/// A checker configuration.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckerConfig {
    /// A check mode.
    pub mode: CheckMode,
    /// An expected total cost of the solution, if known.
    pub expected_cost: Option<f64>,
    /// An expected amount of used vehicles, if known.
    pub expected_vehicles: Option<usize>,
    /// An allowed absolute difference between expected and recalculated cost.
    pub cost_tolerance: f64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self { mode: CheckMode::default(), expected_cost: None, expected_vehicles: None, cost_tolerance: 1E-6 }
    }
}
