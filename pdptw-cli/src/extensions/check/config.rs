//! This module is responsible for reading checker configuration from json file.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/config_test.rs"]
mod config_test;

use pdptw_checker::prelude::CheckerConfig;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// Extensions of files which are considered as solutions when directory is given.
pub const DEFAULT_SOLUTION_EXTENSIONS: &[&str] = &["txt", "sol"];

/// A configuration of solution check.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies checker configuration.
    pub checker: Option<CheckerConfig>,
    /// Specifies how solution file is looked up in directory.
    pub lookup: Option<LookupConfig>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A solution file lookup configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupConfig {
    /// File extensions without leading dot.
    pub extensions: Vec<String>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Enables diagnostic messages.
    pub enabled: bool,
}

impl Config {
    /// Returns solution file extensions to look up in directory.
    pub fn get_extensions(&self) -> Vec<String> {
        self.lookup.as_ref().map(|lookup| lookup.extensions.clone()).unwrap_or_else(|| {
            DEFAULT_SOLUTION_EXTENSIONS.iter().map(|extension| extension.to_string()).collect()
        })
    }

    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.logging.as_ref().is_some_and(|logging| logging.enabled)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}
