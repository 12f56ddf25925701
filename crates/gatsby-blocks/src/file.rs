//! Whole-file splicing.
//!
//! Each call reads the target in full, computes the new text in memory, and
//! rewrites the file atomically. No lock is held across the cycle; callers
//! must not splice the same file concurrently.

use crate::error::Result;
use crate::marker::MarkerPair;
use crate::splice::{self, SpliceOutcome, Spliced};
use gatsby_fs::{NormalizedPath, io};
use similar::TextDiff;

/// What a file splice did, with the text before and after.
#[derive(Debug, Clone)]
pub struct SpliceReport {
    pub path: NormalizedPath,
    pub outcome: SpliceOutcome,
    pub before: String,
    pub after: String,
}

impl SpliceReport {
    /// Whether the file content changed.
    pub fn changed(&self) -> bool {
        self.outcome != SpliceOutcome::Unchanged
    }

    /// Unified diff of the change, empty when nothing changed.
    pub fn diff(&self) -> String {
        if !self.changed() {
            return String::new();
        }
        let path = self.path.as_str();
        TextDiff::from_lines(&self.before, &self.after)
            .unified_diff()
            .context_radius(2)
            .header(path, path)
            .to_string()
    }
}

/// Insert or replace the block for `markers` in the file at `path`.
///
/// A missing file is treated as empty and created along with any missing
/// parent directories. When the file already holds the requested block the
/// write is skipped.
///
/// # Errors
/// Returns `Error::Fs` if the file cannot be read or written, plus the
/// errors of [`splice::splice`], with the file path attached.
pub fn splice_file(path: &NormalizedPath, markers: &MarkerPair, body: &str) -> Result<SpliceReport> {
    let before = io::read_text_or_empty(path)?;
    let spliced =
        splice::splice(&before, markers, body).map_err(|e| e.in_file(path.to_native()))?;
    commit(path, before, spliced)
}

/// Remove the block for `markers` from the file at `path`.
///
/// A missing file, or one without the block, is left untouched.
pub fn remove_file(path: &NormalizedPath, markers: &MarkerPair) -> Result<SpliceReport> {
    let before = io::read_text_or_empty(path)?;
    let spliced = splice::remove(&before, markers).map_err(|e| e.in_file(path.to_native()))?;
    commit(path, before, spliced)
}

fn commit(path: &NormalizedPath, before: String, spliced: Spliced) -> Result<SpliceReport> {
    let report = SpliceReport {
        path: path.clone(),
        outcome: spliced.outcome,
        before,
        after: spliced.content,
    };

    if report.changed() {
        io::write_text(path, &report.after)?;
        tracing::debug!(path = %path, outcome = ?report.outcome, diff = %report.diff(), "spliced block");
    } else {
        tracing::debug!(path = %path, "block already up to date");
    }

    Ok(report)
}
