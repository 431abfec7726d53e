use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What normalization did to a single board file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub name: String,
    pub lines_read: usize,
    pub lines_kept: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub changed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub root: PathBuf,
    pub files: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn changed_count(&self) -> usize { self.files.iter().filter(|f| f.changed).count() }

    /// Lines discarded past the board limit, summed over all files.
    pub fn dropped_lines(&self) -> usize {
        self.files.iter().map(|f| f.lines_read.saturating_sub(f.lines_kept)).sum()
    }
}

pub fn write_report<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("serialize run summary")?;
    std::fs::write(&path, json)
        .with_context(|| format!("write report: {}", path.as_ref().display()))?;
    Ok(())
}
