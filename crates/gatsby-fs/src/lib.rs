//! Filesystem layer for the Netlify Gatsby build plugin
//!
//! Provides normalized paths, whole-file text I/O with atomic writes,
//! recursive directory copies and format-agnostic config loading.

pub mod config;
pub mod copy;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use copy::copy_dir;
pub use error::{Error, Result};
pub use path::NormalizedPath;
