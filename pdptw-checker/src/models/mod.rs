//! A collection of models to represent problem instance, candidate solution and verdict.

mod common;
pub use self::common::*;

mod instance;
pub use self::instance::*;

mod solution;
pub use self::solution::*;

mod verdict;
pub use self::verdict::*;
