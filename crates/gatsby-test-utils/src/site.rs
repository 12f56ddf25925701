//! [`TestSite`] builder for plugin test scenarios.

use gatsby_plugin::{BuildConstants, BuildContext};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary site directory laid out like a Gatsby project on Netlify:
/// `public/` as the publish directory and a `gatsby-config.js` listing
/// `gatsby-plugin-netlify`.
pub struct TestSite {
    temp_dir: TempDir,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    /// Create a site with a `public/` directory and a minimal Gatsby config.
    pub fn new() -> Self {
        let site = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(site.path("public")).unwrap();
        site.gatsby_config_js(&["gatsby-plugin-netlify"]);
        site
    }

    /// Return the root path of the site.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the site.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Read `relative` as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Write a `gatsby-config.js` listing `plugins` as string entries.
    pub fn gatsby_config_js(&self, plugins: &[&str]) {
        let entries = plugins
            .iter()
            .map(|p| format!("    '{}',", p))
            .collect::<Vec<_>>()
            .join("\n");
        self.write(
            "gatsby-config.js",
            &format!("module.exports = {{\n  plugins: [\n{}\n  ],\n}}\n", entries),
        );
    }

    /// Simulate a Gatsby build that produced functions in `.cache/functions`.
    pub fn gatsby_functions(&self, files: &[&str]) {
        for file in files {
            self.write(&format!(".cache/functions/{}", file), "// compiled function\n");
        }
    }

    /// Constants for a site publishing `public/`.
    pub fn constants(&self) -> BuildConstants {
        BuildConstants::new(self.root(), self.path("public"))
    }

    /// Context with default settings.
    pub fn context(&self) -> BuildContext {
        BuildContext::new(self.constants())
    }

    /// Remove `relative` if it exists.
    pub fn remove(&self, relative: &str) {
        let path = self.path(relative);
        if path.exists() {
            fs::remove_file(path).unwrap();
        }
    }

    /// Assert that `relative` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(path.exists(), "Expected path to exist: {}", path.display());
    }

    /// Assert that `relative` does **not** exist.
    pub fn assert_not_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(!path.exists(), "Expected path NOT to exist: {}", path.display());
    }
}
