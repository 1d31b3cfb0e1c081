//! This module reimports commonly used types.

pub use crate::checker::{CheckMode, CheckerConfig, CheckerContext};
pub use crate::format::instance::PdptwInstance;
pub use crate::format::solution::{SintefSolution, SolutionFileName, SolutionMetadata, write_sintef_solution};
pub use crate::models::{Instance, Node, Route, Solution, Verdict, Violation};
pub use crate::utils::{FormatError, InfoLogger, InputError};
