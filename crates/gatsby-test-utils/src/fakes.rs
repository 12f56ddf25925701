//! Recording fakes for the host capabilities.

use gatsby_fs::NormalizedPath;
use gatsby_plugin::{BuildFailure, CacheService, Error, FailureReporter, FileCopier, FsCopier, Result};
use std::cell::RefCell;

/// A call made to [`RecordingCache`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheCall {
    Restore(Vec<String>),
    Save(Vec<String>),
}

fn strings(dirs: &[NormalizedPath]) -> Vec<String> {
    dirs.iter().map(ToString::to_string).collect()
}

/// Cache that records calls and answers with a fixed hit/miss.
#[derive(Debug, Default)]
pub struct RecordingCache {
    hit: bool,
    fail: bool,
    pub calls: RefCell<Vec<CacheCall>>,
}

impl RecordingCache {
    /// Every restore/save reports success.
    pub fn hit() -> Self {
        Self {
            hit: true,
            ..Self::default()
        }
    }

    /// Every restore/save reports nothing cached.
    pub fn miss() -> Self {
        Self::default()
    }

    /// Every restore/save fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn answer(&self, operation: &'static str) -> Result<bool> {
        if self.fail {
            Err(Error::cache(operation, "cache service unavailable"))
        } else {
            Ok(self.hit)
        }
    }
}

impl CacheService for RecordingCache {
    fn restore(&self, dirs: &[NormalizedPath]) -> Result<bool> {
        self.calls.borrow_mut().push(CacheCall::Restore(strings(dirs)));
        self.answer("restore")
    }

    fn save(&self, dirs: &[NormalizedPath]) -> Result<bool> {
        self.calls.borrow_mut().push(CacheCall::Save(strings(dirs)));
        self.answer("save")
    }
}

/// Copier that records calls and delegates to [`FsCopier`] unless told to
/// fail.
#[derive(Debug, Default)]
pub struct RecordingCopier {
    fail: bool,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl RecordingCopier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every copy fails with a permission error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl FileCopier for RecordingCopier {
    fn copy(&self, src: &NormalizedPath, dest: &NormalizedPath) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((src.to_string(), dest.to_string()));
        if self.fail {
            return Err(gatsby_fs::Error::io(
                src.to_native(),
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            )
            .into());
        }
        FsCopier.copy(src, dest)
    }
}

/// Reporter that records failure messages.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub messages: RefCell<Vec<String>>,
    pub details: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `fail_build` was called.
    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl FailureReporter for RecordingReporter {
    fn fail_build(&self, failure: &BuildFailure) {
        self.messages.borrow_mut().push(failure.message.clone());
        self.details.borrow_mut().push(failure.error.to_string());
    }
}
