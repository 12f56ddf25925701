//! Capabilities the host pipeline injects into hooks.

use crate::Result;
use crate::error::BuildFailure;
use gatsby_fs::NormalizedPath;

/// The host's cache between builds.
pub trait CacheService {
    /// Restore `dirs` from the cache. Returns `false` when nothing was cached.
    fn restore(&self, dirs: &[NormalizedPath]) -> Result<bool>;

    /// Save `dirs` to the cache. Returns `false` when there was nothing to
    /// save.
    fn save(&self, dirs: &[NormalizedPath]) -> Result<bool>;
}

/// Recursive directory copy.
pub trait FileCopier {
    fn copy(&self, src: &NormalizedPath, dest: &NormalizedPath) -> Result<()>;
}

/// Receives the failure that aborts a build.
///
/// Called once per failed hook, before the hook returns the failure to the
/// host.
pub trait FailureReporter {
    fn fail_build(&self, failure: &BuildFailure);
}

/// Copies directories on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCopier;

impl FileCopier for FsCopier {
    fn copy(&self, src: &NormalizedPath, dest: &NormalizedPath) -> Result<()> {
        gatsby_fs::copy_dir(src, dest)?;
        Ok(())
    }
}

/// Reports failures through the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl FailureReporter for LogReporter {
    fn fail_build(&self, failure: &BuildFailure) {
        tracing::error!(hook = %failure.hook, error = %failure.error, "{}", failure.message);
    }
}
