use std::io::Write;

use crate::error::ExportError;
use crate::model::InstalledProgram;

/// Writes `programs` as a 2-space indented JSON array followed by a newline.
pub fn write_json<W: Write>(w: &mut W, programs: &[InstalledProgram]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *w, programs)?;
    writeln!(w)?;
    Ok(())
}
