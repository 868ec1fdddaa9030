//! Write generated code only if it changed.
//!
//! Leaving an up-to-date file alone keeps its mtime, so downstream builds are
//! not triggered by a no-op regeneration.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{GenError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    UpToDate,
}

/// Status line for one output file, as printed by the generator.
pub struct Report<'a> {
    pub path: &'a Path,
    pub outcome: WriteOutcome,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            WriteOutcome::Written => write!(f, "Writing {}", self.path.display()),
            WriteOutcome::UpToDate => write!(
                f,
                "Checked {}: up to date, not rewritten",
                self.path.display()
            ),
        }
    }
}

pub fn banner(generator: &str) -> String {
    format!("// DO NOT EDIT - autogenerated by {generator}\n\n")
}

/// Prefix `content` with the banner and write it to `path` unless the file
/// already holds exactly those bytes.
pub fn write_if_changed(path: &Path, content: &str, generator: &str) -> Result<WriteOutcome> {
    let full = banner(generator) + content;

    match fs::read(path) {
        Ok(existing) if existing == full.as_bytes() => {
            log::debug!("{} unchanged", path.display());
            return Ok(WriteOutcome::UpToDate);
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(GenError::io(path, e)),
    }

    fs::write(path, full).map_err(|e| GenError::io(path, e))?;
    Ok(WriteOutcome::Written)
}
