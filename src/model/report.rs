use super::{InstalledProgram, RootSummary};
use crate::error::ScanWarning;

/// Result of a full scan.
///
/// `programs` holds the native root's records followed by the WOW64 root's,
/// each in the order the registry listed them.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub programs: Vec<InstalledProgram>,
    pub warnings: Vec<ScanWarning>,
    pub roots: Vec<RootSummary>,
}

impl ScanReport {
    pub fn new(programs: Vec<InstalledProgram>) -> Self {
        Self {
            programs,
            warnings: Vec::new(),
            roots: Vec::new(),
        }
    }
}
