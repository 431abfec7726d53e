use crate::board::{physical_line_count, BoardLines};
use crate::error::BoardFileError;
use crate::report::{FileOutcome, RunSummary};
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Rewrites board files in place, one at a time, in the order given.
/// The first file that cannot be read or written stops the batch; boards
/// already rewritten stay rewritten.
#[derive(Debug, Clone)]
pub struct BoardNormalizer {
    root: PathBuf,
    dry_run: bool,
}

impl BoardNormalizer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), dry_run: false }
    }

    /// Read and measure every board but never write.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn normalize<I, S>(&self, names: I) -> Result<RunSummary, BoardFileError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = RunSummary { root: self.root.clone(), files: Vec::new() };
        for name in names {
            let outcome = self.normalize_file(name.as_ref())?;
            summary.files.push(outcome);
        }
        info!(
            "normalized {} boards in {} ({} changed, {} lines dropped{})",
            summary.files.len(),
            self.root.display(),
            summary.changed_count(),
            summary.dropped_lines(),
            if self.dry_run { ", dry run" } else { "" }
        );
        Ok(summary)
    }

    pub fn normalize_file(&self, name: &str) -> Result<FileOutcome, BoardFileError> {
        let path = self.root.join(name);
        let original = read_board(&path)?;
        let board = BoardLines::from_text(&original);
        let rendered = board.render();
        let outcome = FileOutcome {
            name: name.to_string(),
            lines_read: physical_line_count(&original),
            lines_kept: board.len(),
            bytes_before: original.len(),
            bytes_after: rendered.len(),
            changed: rendered != original,
        };
        if !self.dry_run {
            write_board(&path, &rendered)?;
        }
        debug!(
            "{}: {} -> {} lines, {} -> {} bytes{}",
            name, outcome.lines_read, outcome.lines_kept, outcome.bytes_before, outcome.bytes_after,
            if outcome.changed { "" } else { " (unchanged)" }
        );
        Ok(outcome)
    }
}

fn read_board(path: &Path) -> Result<String, BoardFileError> {
    let read_err = |source: std::io::Error| BoardFileError::Read { path: path.to_path_buf(), source };
    let mut f = File::open(path).map_err(read_err)?;
    let mut text = String::new();
    f.read_to_string(&mut text).map_err(read_err)?;
    Ok(text)
}

fn write_board(path: &Path, contents: &str) -> Result<(), BoardFileError> {
    let write_err = |source: std::io::Error| BoardFileError::Write { path: path.to_path_buf(), source };
    let mut f = OpenOptions::new().write(true).create(true).truncate(true).open(path).map_err(write_err)?;
    f.write_all(contents.as_bytes()).map_err(write_err)?;
    f.flush().map_err(write_err)?;
    Ok(())
}
