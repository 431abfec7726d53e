use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardFileError {
    #[error("failed to read board file {}", path.display())]
    Read { path: PathBuf, #[source] source: std::io::Error },

    #[error("failed to write board file {}", path.display())]
    Write { path: PathBuf, #[source] source: std::io::Error },
}

impl BoardFileError {
    pub fn path(&self) -> &Path {
        match self {
            BoardFileError::Read { path, .. } | BoardFileError::Write { path, .. } => path,
        }
    }

    /// "read" or "write", for diagnostics.
    pub fn operation(&self) -> &'static str {
        match self {
            BoardFileError::Read { .. } => "read",
            BoardFileError::Write { .. } => "write",
        }
    }
}
