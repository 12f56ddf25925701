//! Build constants supplied by the host pipeline.

use gatsby_fs::NormalizedPath;

/// Functions directory used when the host does not provide one.
pub const DEFAULT_FUNCTIONS_SRC: &str = "netlify/functions";

/// Paths the host pipeline hands to every hook.
///
/// `site_root` is the directory the build runs in. Relative `publish_dir` and
/// `functions_src` values resolve against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConstants {
    pub site_root: NormalizedPath,
    pub publish_dir: NormalizedPath,
    pub functions_src: Option<NormalizedPath>,
}

impl BuildConstants {
    pub fn new(site_root: impl Into<NormalizedPath>, publish_dir: impl Into<NormalizedPath>) -> Self {
        Self {
            site_root: site_root.into(),
            publish_dir: publish_dir.into(),
            functions_src: None,
        }
    }

    pub fn with_functions_src(mut self, functions_src: impl Into<NormalizedPath>) -> Self {
        self.functions_src = Some(functions_src.into());
        self
    }

    /// The functions directory as configured, falling back to
    /// [`DEFAULT_FUNCTIONS_SRC`].
    pub fn functions_src(&self) -> NormalizedPath {
        self.functions_src
            .clone()
            .unwrap_or_else(|| NormalizedPath::new(DEFAULT_FUNCTIONS_SRC))
    }

    /// Resolve `path` against the site root.
    pub fn resolve(&self, path: &NormalizedPath) -> NormalizedPath {
        path.resolve_against(&self.site_root)
    }

    pub fn publish_path(&self) -> NormalizedPath {
        self.resolve(&self.publish_dir)
    }

    pub fn functions_path(&self) -> NormalizedPath {
        self.resolve(&self.functions_src())
    }

    /// Gatsby's `.cache` directory, a sibling of the publish directory.
    pub fn cache_dir(&self) -> NormalizedPath {
        self.publish_path().join("../.cache").normalize()
    }

    /// Directories persisted between builds: the publish directory and the
    /// Gatsby cache.
    pub fn cache_dirs(&self) -> Vec<NormalizedPath> {
        vec![self.publish_path(), self.cache_dir()]
    }
}
