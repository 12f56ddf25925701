//! Error types for gatsby-blocks

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Placeholder path used by the in-memory operations.
pub(crate) const CONTENT_PATH: &str = "<content>";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] gatsby_fs::Error),

    #[error("Invalid marker {marker:?}: {reason}")]
    InvalidMarker { marker: String, reason: String },

    #[error("Block body contains the marker line {marker:?}")]
    MarkerInBody { marker: String },

    #[error("Malformed block in {path}: found {found:?} on line {line} but no matching {missing:?}")]
    MalformedBlock {
        path: PathBuf,
        found: String,
        missing: String,
        line: usize,
    },
}

impl Error {
    /// Attach the file path to errors raised by the in-memory operations.
    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::MalformedBlock {
                found,
                missing,
                line,
                ..
            } => Self::MalformedBlock {
                path: path.into(),
                found,
                missing,
                line,
            },
            other => other,
        }
    }
}
