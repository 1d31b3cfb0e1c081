//! This module contains helper functionality shared by formats and checker.

mod error;
pub use self::error::*;

use std::sync::Arc;

/// Specifies an information logger which receives human readable diagnostic messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Sends a message to the logger, if it is set.
pub(crate) fn log_info(logger: Option<&InfoLogger>, message: impl FnOnce() -> String) {
    if let Some(logger) = logger {
        (logger)(message().as_str())
    }
}
