use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rules;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Unchanged,
    Updated,
    WouldUpdate,
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Error reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Error writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Reads `path` as UTF-8, applies the rewrite table and writes the result
/// back in place. Files that no rule touches are never opened for writing.
pub fn process_file(path: &Path, options: ProcessOptions) -> Result<FileOutcome, ProcessError> {
    let content = fs::read_to_string(path).map_err(|source| ProcessError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let rewrite = rules::apply(&content);
    if !rewrite.changed() {
        return Ok(FileOutcome::Unchanged);
    }

    if options.dry_run {
        return Ok(FileOutcome::WouldUpdate);
    }

    fs::write(path, rewrite.content.as_bytes()).map_err(|source| ProcessError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileOutcome::Updated)
}
