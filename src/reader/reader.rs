use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::errors::SourceError;

/// Directory searched for programs when no override is given.
pub const PROGRAMS_DIR: &str = "programs";

/// Extension every program file is expected to carry.
pub const PROGRAM_EXTENSION: &str = "oem";

/// Resolves a bare program name against a directory and the fixed
/// extension.
pub fn resolve_program_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, PROGRAM_EXTENSION))
}

/// Reads the complete text of a named program.
pub fn read_program(dir: &Path, name: &str) -> Result<String, SourceError> {
    let path = resolve_program_path(dir, name);
    fs::read_to_string(&path).map_err(|source| SourceError::Unreadable { path, source })
}
