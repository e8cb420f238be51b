use std::io::{self, Write};

use super::{separator, write_program_block};
use crate::model::InstalledProgram;

/// Renders the numbered console listing.
pub fn render_console<W: Write>(w: &mut W, programs: &[InstalledProgram]) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", separator())?;
    writeln!(w, "SCAN COMPLETE!")?;
    writeln!(w, "Found {} installed programs:", programs.len())?;
    writeln!(w, "{}", separator())?;
    writeln!(w)?;

    for (i, program) in programs.iter().enumerate() {
        write_program_block(w, i + 1, program)?;
    }

    Ok(())
}

/// Prints the numbered console listing to stdout.
pub fn print_console(programs: &[InstalledProgram]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    render_console(&mut lock, programs)?;
    lock.flush()
}
