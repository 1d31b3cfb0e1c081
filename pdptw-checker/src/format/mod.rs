//! Contains functionality to read PDPTW instance and read or write its solution in text formats.

use crate::utils::FormatError;
use std::io::prelude::*;
use std::io::{BufReader, Read};

pub(crate) mod tokenizer;

pub mod instance;
pub mod solution;

/// An input format error code: underlying reader has failed.
pub const READ_FAILURE_CODE: &str = "E1005";

/// Reads the next line into the buffer replacing invalid UTF-8 sequences. Returns amount of read bytes.
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, FormatError> {
    let mut bytes = Vec::new();
    buffer.clear();

    let read = reader.read_until(b'\n', &mut bytes).map_err(|err| {
        FormatError::new(READ_FAILURE_CODE, format!("cannot read input: '{err}'"), "check input source".to_string())
    })?;

    buffer.push_str(String::from_utf8_lossy(&bytes).as_ref());

    Ok(read)
}
