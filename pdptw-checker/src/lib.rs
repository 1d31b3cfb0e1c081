//! Checker crate contains logic to read a Pickup and Delivery Problem with Time Windows (PDPTW)
//! instance together with a candidate solution and to re-derive solution feasibility and cost
//! from first principles, without trusting a solver which produced the solution.
//!
//!
//! # Supported formats
//!
//! - **instance**: a line oriented format with `KEY: VALUE` header, `NODES` and `EDGES` sections
//! - **solution**: [SINTEF](https://www.sintef.no/projectweb/top/pdptw/li-lim-benchmark) solution format
//!
//! # Example
//!
//! ```
//! use pdptw_checker::prelude::*;
//!
//! let instance = "SIZE: 3\nCAPACITY: 10\nNODES\n\
//!                 0 0 0 0 0 100 0 0 0\n1 0 0 3 0 20 0 0 2\n2 0 0 -3 0 30 0 1 0\n\
//!                 EDGES\n0 5 8\n5 0 4\n8 4 0\n"
//!     .to_string()
//!     .read_pdptw()
//!     .expect("cannot read instance");
//! let solution = "Instance name : tiny\nAuthors : me\nDate : today\nReference : none\nSolution\nRoute 1 : 1 2\n"
//!     .to_string()
//!     .read_sintef()
//!     .expect("cannot read solution");
//!
//! let verdict = CheckerContext::new(&instance, &solution, CheckerConfig::default()).check();
//!
//! assert!(verdict.is_valid);
//! assert_eq!(verdict.total_cost, 17);
//! assert_eq!(verdict.route_count, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_solutions_test.rs"]
mod known_solutions_test;

pub mod checker;
pub mod format;
pub mod models;
pub mod prelude;
pub mod utils;
