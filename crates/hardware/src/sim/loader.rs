//! Source file loading.
//!
//! Reads assembly text from disk and runs it through the assembler. Errors
//! are returned to the caller rather than exiting, so an interactive session
//! survives a bad path.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::asm::assembler::assemble;
use crate::asm::program::AssembledProgram;
use crate::common::error::SimError;

/// Reads a source file into a string.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String, SimError> {
    fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and assembles a source file.
///
/// # Errors
///
/// Returns [`SimError::Io`] for read failures and [`SimError::Asm`] for the
/// first line that fails to assemble.
pub fn assemble_file(path: &Path) -> Result<AssembledProgram, SimError> {
    let source = read_source(path)?;
    let program = assemble(&source)?;
    debug!(path = %path.display(), bytes = program.len(), "assembled");
    Ok(program)
}
