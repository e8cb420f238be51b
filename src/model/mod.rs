//! Core data types for installed programs and scan results.
//!
//! - [`InstalledProgram`] - One registered application
//! - [`Root`] - The `Uninstall` key a record came from
//! - [`ScanReport`] - Complete scan results, including root-level warnings
//!
//! # Example
//!
//! ```
//! use winclone::{InstalledProgram, ScanReport};
//!
//! let program = InstalledProgram::new("7-Zip").with_version("23.01");
//! let report = ScanReport::new(vec![program]);
//!
//! println!("Scanned {} programs", report.programs.len());
//! ```

mod program;
mod report;

pub use program::*;
pub use report::*;
