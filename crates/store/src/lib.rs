//! Append-only JSON Lines log of per-chunk extraction outcomes.
//!
//! The log is the resume mechanism: outcome `i` is written before chunk
//! `i + 1` is processed, so the log prefix always matches a contiguous prefix
//! of the chunk sequence. Repeated runs against the same path accumulate;
//! rotating the file for a clean run is the caller's job. One writer per log
//! path at a time.

use anyhow::{Context, Result};
use extract::ChunkOutcome;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one outcome as a single JSON line. The file handle is scoped to
    /// this call and flushed before it closes, so an interrupted run loses at
    /// most the chunk in flight. Any failure here is fatal to the run: a
    /// result that never reaches the log would silently break resumability.
    pub fn append(&self, outcome: &ChunkOutcome) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open result log: {}", self.path.display()))?;

        let line = serde_json::to_string(outcome).context("failed to serialize outcome")?;
        writeln!(file, "{line}")
            .and_then(|()| file.flush())
            .with_context(|| format!("failed to write result log: {}", self.path.display()))?;

        Ok(())
    }

    /// Read the full log in append order, one record per line. A line that
    /// fails to parse means the log no longer matches what was written; that
    /// is fatal, not something to skip past.
    pub fn read_all(&self) -> Result<Vec<ChunkOutcome>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read result log: {}", self.path.display()))?;

        let mut outcomes = Vec::new();
        for (number, line) in content.lines().enumerate() {
            let outcome = serde_json::from_str(line).with_context(|| {
                format!(
                    "corrupt record at line {} of {}",
                    number + 1,
                    self.path.display()
                )
            })?;
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Number of chunks already processed by a previous run against this log.
    /// A missing log means a fresh run.
    pub fn resume_index(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }
        Ok(self.read_all()?.len())
    }
}
