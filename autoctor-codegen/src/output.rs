//! Generated units and writing them to disk.

use crate::error::CodegenError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of generated units.
pub const UNIT_EXTENSION: &str = ".g.cs";

/// One emitted source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Unique unit name.
    pub name: String,
    /// Unit source text.
    pub source: String,
}

impl GeneratedUnit {
    /// Creates a new unit.
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Returns the file name the unit is written to.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name, UNIT_EXTENSION)
    }
}

/// Writes every unit into `dir`, creating the directory if needed.
///
/// # Errors
/// Returns `CodegenError::Generation` if two units share a file name, or
/// `CodegenError::Io` if a file cannot be written. Name clashes are detected
/// before anything is written.
pub fn write_units(dir: &Path, units: &[GeneratedUnit]) -> Result<Vec<PathBuf>, CodegenError> {
    let mut seen = HashSet::with_capacity(units.len());
    for unit in units {
        if !seen.insert(unit.file_name()) {
            return Err(CodegenError::generation(format!(
                "duplicate unit file name: {}",
                unit.file_name()
            )));
        }
    }

    fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(units.len());
    for unit in units {
        let path = dir.join(unit.file_name());
        fs::write(&path, &unit.source)?;
        tracing::debug!("wrote {}", path.display());
        paths.push(path);
    }

    Ok(paths)
}
