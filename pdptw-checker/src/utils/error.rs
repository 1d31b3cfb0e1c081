#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt;
use std::path::{Path, PathBuf};

/// An instance format error code: a mandatory section marker is absent.
pub const MISSING_MARKER_CODE: &str = "E1000";
/// An instance format error code: a row has fewer fields than required.
pub const SHORT_ROW_CODE: &str = "E1001";
/// An instance format error code: a field cannot be parsed as a number of expected kind.
pub const INVALID_NUMBER_CODE: &str = "E1002";
/// An instance format error code: input ended before all declared rows were consumed.
pub const END_OF_INPUT_CODE: &str = "E1003";
/// An instance format error code: node index or pair reference is inconsistent.
pub const INVALID_INDEX_CODE: &str = "E1004";
/// An instance format error code: a numeric field is outside of supported range.
pub const OUT_OF_RANGE_CODE: &str = "E1006";

/// A format error returned when text input cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception: typically, a line number and its content.
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` without details.
    pub fn new(code: &str, cause: String, action: String) -> Self {
        Self { code: code.to_string(), cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` which refers to specific input line.
    pub fn new_at_line(code: &str, cause: String, action: String, line_no: usize, line: &str) -> Self {
        Self { code: code.to_string(), cause, action, details: Some(format!("line {line_no}: '{}'", line.trim_end())) }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)?;
        if let Some(details) = &self.details {
            write!(f, " {details}")?;
        }

        Ok(())
    }
}

impl std::error::Error for FormatError {}

/// An error which prevents input from being checked at all.
#[derive(Debug)]
pub enum InputError {
    /// Given path does not exist.
    NotFound(PathBuf),
    /// Given path exists, but cannot be read.
    Io {
        /// A path to the file.
        path: PathBuf,
        /// An underlying I/O error.
        cause: std::io::Error,
    },
    /// Given file is readable, but malformed.
    Format(FormatError),
}

impl InputError {
    /// Creates an error from I/O error which happened while accessing the path.
    pub fn from_io(path: &Path, cause: std::io::Error) -> Self {
        match cause.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            _ => Self::Io { path: path.to_path_buf(), cause },
        }
    }

    /// Returns true if error is caused by missing input.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "file not found: '{}'", path.display()),
            Self::Io { path, cause } => write!(f, "cannot read file '{}': '{cause}'", path.display()),
            Self::Format(err) => write!(f, "cannot parse input: {err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io { cause, .. } => Some(cause),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<FormatError> for InputError {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}
