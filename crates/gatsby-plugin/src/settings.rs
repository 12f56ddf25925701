//! Plugin settings.
//!
//! Every value the hooks use beyond the host constants lives here, with
//! defaults matching the published plugin. Settings can be overridden from a
//! TOML, JSON or YAML file.

use crate::Result;
use crate::constants::BuildConstants;
use gatsby_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

/// Function wrapper templates shipped with this crate.
pub const TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginSettings {
    /// Namespace used in the block markers.
    pub namespace: String,
    /// Function wrapper templates copied into the functions directory.
    /// Defaults to the shipped [`TEMPLATES_DIR`]; relative overrides resolve
    /// against the site root.
    pub templates_dir: String,
    /// Subdirectory of the functions directory owned by the plugin.
    pub functions_subdir: String,
    /// Redirect rule routing API requests to the Gatsby function.
    pub api_redirect: String,
    /// Site plugin needed for Gatsby redirects.
    pub required_site_plugin: String,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            namespace: "@netlify/plugin-gatsby".into(),
            templates_dir: TEMPLATES_DIR.into(),
            functions_subdir: "gatsby".into(),
            api_redirect: "/api/* /.netlify/functions/gatsby 200".into(),
            required_site_plugin: "gatsby-plugin-netlify".into(),
        }
    }
}

impl PluginSettings {
    /// Load settings from a file; missing keys keep their defaults.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    pub fn templates_path(&self, constants: &BuildConstants) -> NormalizedPath {
        constants.resolve(&NormalizedPath::new(&self.templates_dir))
    }

    /// The plugin-owned functions directory on disk.
    pub fn functions_dir(&self, constants: &BuildConstants) -> NormalizedPath {
        constants.functions_path().join(&self.functions_subdir)
    }

    /// The `.gitignore` entry for the plugin-owned functions directory,
    /// spelled the way the functions directory was configured.
    pub fn ignore_entry(&self, constants: &BuildConstants) -> String {
        constants
            .functions_src()
            .join(&self.functions_subdir)
            .to_string()
    }
}
