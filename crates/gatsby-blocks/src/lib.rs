//! Marker-delimited block splicing.
//!
//! Maintains a single auto-managed block inside an otherwise user-owned text
//! file such as `.gitignore` or `_redirects`. A block is delimited by an exact
//! start-marker line and end-marker line:
//!
//! ```text
//! # @netlify/plugin-gatsby redirects start
//! /api/* /.netlify/functions/gatsby 200
//! # @netlify/plugin-gatsby redirects end
//! ```
//!
//! The [`splice`] module works on in-memory text; the [`file`] module wraps it
//! with a whole-file read-modify-write cycle.

pub mod error;
pub mod file;
pub mod marker;
pub mod splice;

pub use error::{Error, Result};
pub use file::{SpliceReport, remove_file, splice_file};
pub use marker::MarkerPair;
pub use splice::{MarkedBlock, SpliceOutcome, Spliced, find_block, remove, splice};
