//! Error types for gatsby-plugin

use crate::hooks::HookEvent;

/// Result type for gatsby-plugin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised inside a hook
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The publish directory is the site root instead of Gatsby's `public/`
    #[error(
        "Gatsby sites must publish the public directory, but your site’s publish directory is set to “{publish_dir}”. Please set your publish directory to your Gatsby site’s public directory."
    )]
    PublishDirMisconfigured { publish_dir: String },

    /// No `gatsby-config` file in the site root
    #[error("Cannot find a gatsby-config file in {site_root}")]
    SiteConfigMissing { site_root: String },

    /// The host cache service failed
    #[error("Cache {operation} failed: {message}")]
    Cache {
        operation: &'static str,
        message: String,
    },

    /// Invalid plugin name pattern
    #[error("Invalid plugin pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Filesystem error from gatsby-fs
    #[error(transparent)]
    Fs(#[from] gatsby_fs::Error),

    /// Splicing error from gatsby-blocks
    #[error(transparent)]
    Blocks(#[from] gatsby_blocks::Error),
}

impl Error {
    pub fn cache(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Cache {
            operation,
            message: message.into(),
        }
    }
}

/// A hook failure handed to the host: it halts the build.
///
/// Carries a fixed per-hook message and the error that caused it.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct BuildFailure {
    pub hook: HookEvent,
    pub message: String,
    #[source]
    pub error: Error,
}

impl BuildFailure {
    pub fn new(hook: HookEvent, error: Error) -> Self {
        Self {
            hook,
            message: format!("@netlify/plugin-gatsby failed during {}", hook),
            error,
        }
    }
}
