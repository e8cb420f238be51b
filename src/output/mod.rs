//! Rendering and exporting scan results.
//!
//! Results go to the console when no output path is given. Otherwise the
//! path's extension picks the export format: `.json` (any case) for a JSON
//! array, anything else for a plain-text report.

mod cli;
mod json;
mod text;

pub use cli::{print_console, render_console};
pub use json::write_json;
pub use text::write_text_report;

pub(crate) use text::generated_on;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::ExportError;
use crate::model::InstalledProgram;

/// Width of the `=` separator lines.
pub const SEPARATOR_WIDTH: usize = 50;

/// Default strftime format for the text report's date line.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// File export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Indented JSON array of programs
    Json,
    /// Human-readable report
    Text,
}

impl ExportFormat {
    /// Picks the format from the destination path.
    pub fn from_path(path: &Path) -> Self {
        if path.to_string_lossy().to_lowercase().ends_with(".json") {
            ExportFormat::Json
        } else {
            ExportFormat::Text
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Text => "text",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Settings for file exports.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// strftime format for the text report's `Generated on:` line.
    pub date_format: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Writes `programs` to `path` in the format its extension selects.
///
/// The whole document is rendered in memory before the destination is
/// opened, so an encoding failure never touches it. The destination is
/// created or truncated.
///
/// # Errors
///
/// Returns an error if the destination cannot be created or written, or
/// if encoding fails.
pub fn export(
    programs: &[InstalledProgram],
    path: &Path,
    options: &ExportOptions,
) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path);
    debug!(path = %path.display(), %format, count = programs.len(), "exporting");

    let mut buf = Vec::new();
    match format {
        ExportFormat::Json => write_json(&mut buf, programs)?,
        ExportFormat::Text => {
            let generated_on = generated_on(&options.date_format);
            write_text_report(&mut buf, programs, &generated_on)?;
        }
    }

    fs::write(path, &buf).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(format)
}

/// Writes one numbered program block.
///
/// ```text
/// 1. Alpha (v1.0)
///    Path: C:\Alpha
///
/// ```
pub(crate) fn write_program_block<W: Write>(
    w: &mut W,
    index: usize,
    program: &InstalledProgram,
) -> io::Result<()> {
    write!(w, "{}. {}", index, program.name)?;
    if !program.version.is_empty() {
        write!(w, " (v{})", program.version)?;
    }
    writeln!(w)?;

    if !program.install_path.is_empty() {
        writeln!(w, "   Path: {}", program.install_path)?;
    }
    writeln!(w)
}

pub(crate) fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}
