//! Contains functionality to read and write solution in SINTEF format.

mod reader;
pub use self::reader::SintefSolution;

mod writer;
pub use self::writer::*;
