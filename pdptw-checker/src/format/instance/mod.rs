//! Contains functionality to read PDPTW instance.

mod reader;
pub use self::reader::PdptwInstance;
