use std::fmt::Write as _;
use std::io::{self, Write};

use chrono::Local;

use super::{separator, write_program_block, DEFAULT_DATE_FORMAT};
use crate::model::InstalledProgram;

pub const REPORT_TITLE: &str = "WinClone - Installed Programs List";

/// Writes the text report: a header block followed by one block per program.
pub fn write_text_report<W: Write>(
    w: &mut W,
    programs: &[InstalledProgram],
    generated_on: &str,
) -> io::Result<()> {
    writeln!(w, "{}", REPORT_TITLE)?;
    writeln!(w, "Generated on: {}", generated_on)?;
    writeln!(w, "Total programs found: {}", programs.len())?;
    writeln!(w, "{}", separator())?;
    writeln!(w)?;

    for (i, program) in programs.iter().enumerate() {
        write_program_block(w, i + 1, program)?;
    }

    Ok(())
}

/// Today's date in `format`, falling back to `%Y-%m-%d` when the format
/// string is invalid.
pub(crate) fn generated_on(format: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_ok() {
        return out;
    }
    now.format(DEFAULT_DATE_FORMAT).to_string()
}
