//! A crate contains helper functionality to check PDPTW solution files from command line.
//!
//! # Example
//!
//! ```no_run
//! use pdptw_cli::extensions::check::{Config, check_solution_files};
//! use std::path::Path;
//!
//! let verdict = check_solution_files(
//!     Path::new("lc101.txt"),
//!     Path::new("solutions/"),
//!     &Config::default(),
//!     false,
//!     None,
//! )
//! .expect("cannot check solution");
//!
//! println!("{verdict}");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod extensions;
