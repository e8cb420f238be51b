//! Error types.
//!
//! Two outcomes of a scan are kept apart on purpose: [`ScanWarning`] is a
//! root-level failure that is reported to the user, while child-level
//! failures never leave the scanner as values at all.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::Root;

/// Failure of a configuration store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key or value does not exist.
    #[error("not found")]
    NotFound,

    /// The store is not available on this platform.
    #[error("registry access is only available on Windows")]
    Unsupported,

    /// Any other OS-level failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Maps `ErrorKind::NotFound` onto [`StoreError::NotFound`].
    pub fn from_io(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StoreError::NotFound
        } else {
            StoreError::Io(err)
        }
    }
}

/// A non-fatal, root-level scan failure. The root contributes no records.
#[derive(Debug, Error)]
pub enum ScanWarning {
    #[error("Could not scan {root} programs: failed to open registry key: {source}")]
    RootOpen {
        root: Root,
        #[source]
        source: StoreError,
    },

    #[error("Could not scan {root} programs: failed to read subkey names: {source}")]
    RootList {
        root: Root,
        #[source]
        source: StoreError,
    },
}

impl ScanWarning {
    pub fn root(&self) -> Root {
        match self {
            ScanWarning::RootOpen { root, .. } | ScanWarning::RootList { root, .. } => *root,
        }
    }
}

/// Failure to write an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}
