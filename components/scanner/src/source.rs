//! Source loading - reads program files into tagged lines

use core_types::{ErrorKind, MachineError, MachineResult, Source, SourceLine};
use std::io;
use std::path::Path;

/// Conventional extension of top-level programs
pub const PROGRAM_EXTENSION: &str = "lmp";

/// Conventional extension of module programs
pub const MODULE_EXTENSION: &str = "lmm";

/// Read a file into a [`Source`] named after its path.
///
/// Blank lines are dropped; the remaining lines keep their 1-based line
/// numbers from the file.
pub fn read_source(path: impl AsRef<Path>) -> io::Result<Source> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    Ok(Source::from_text(path.display().to_string(), &text))
}

/// Read a top-level program, reporting failures as machine errors
pub fn load_program(path: impl AsRef<Path>) -> MachineResult<Source> {
    let path = path.as_ref();
    let source = read_source(path).map_err(|e| {
        MachineError::new(ErrorKind::Io, SourceLine::new(path.display().to_string(), 0, ""))
            .with_message("Could not read program file.")
            .with_message(e.to_string())
    })?;

    tracing::debug!(path = %path.display(), lines = source.len(), "program loaded");
    Ok(source)
}
