//! Inspection of the Gatsby site config.
//!
//! Structured configs (`gatsby-config.json`, `.toml`, `.yaml`, `.yml`) are
//! deserialized. Script configs (`gatsby-config.js`, `.mjs`, `.ts`) cannot be
//! evaluated, so they are scanned for the plugin name as a quoted string
//! outside a line comment. A site without any Gatsby config is an error.

use crate::Result;
use crate::error::Error;
use gatsby_fs::{ConfigStore, NormalizedPath, io};
use regex::Regex;
use serde::Deserialize;

/// Config file names, in lookup order.
const CANDIDATES: &[&str] = &[
    "gatsby-config.json",
    "gatsby-config.toml",
    "gatsby-config.yaml",
    "gatsby-config.yml",
    "gatsby-config.js",
    "gatsby-config.mjs",
    "gatsby-config.ts",
];

/// One entry of the site's `plugins` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PluginEntry {
    /// `"gatsby-plugin-netlify"`
    Name(String),
    /// `{ resolve: "gatsby-plugin-netlify", options: { ... } }`
    Resolved {
        #[serde(default)]
        resolve: Option<String>,
    },
}

impl PluginEntry {
    /// The plugin name, if the entry names one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Resolved { resolve } => resolve.as_deref(),
        }
    }
}

/// The parts of a structured Gatsby config the plugin reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub plugins: Vec<PluginEntry>,
}

impl SiteConfig {
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|entry| entry.name() == Some(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginPresence {
    Present,
    Absent,
}

/// The first Gatsby config file found in `site_root`.
pub fn locate(site_root: &NormalizedPath) -> Option<NormalizedPath> {
    CANDIDATES
        .iter()
        .map(|name| site_root.join(name))
        .find(NormalizedPath::is_file)
}

/// Whether the site config in `site_root` lists `plugin`.
///
/// # Errors
/// Returns `Error::SiteConfigMissing` if the site has no Gatsby config, or an
/// error if the config file cannot be read or parsed.
pub fn detect_plugin(site_root: &NormalizedPath, plugin: &str) -> Result<PluginPresence> {
    let Some(path) = locate(site_root) else {
        return Err(Error::SiteConfigMissing {
            site_root: site_root.to_string(),
        });
    };
    tracing::debug!(config = %path, "inspecting Gatsby config");

    let present = if ConfigStore::supports(&path) {
        let config: SiteConfig = ConfigStore::new().load(&path)?;
        config.has_plugin(plugin)
    } else {
        script_mentions(&io::read_text(&path)?, plugin)?
    };

    Ok(if present {
        PluginPresence::Present
    } else {
        PluginPresence::Absent
    })
}

/// String literals, consumed whole so a `//` inside one is not a comment.
const STRING_LITERAL: &str = r#"'(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*"|`(?:[^`\\\n]|\\.)*`"#;

/// Whether a script config mentions `plugin` as a string literal before any
/// `//` comment on its line.
fn script_mentions(source: &str, plugin: &str) -> Result<bool> {
    let pattern = format!(
        r#"(?m)^(?:[^/'"`\n]|/[^/'"`\n]|/?(?:{literal}))*?/?["'`]{name}["'`]"#,
        literal = STRING_LITERAL,
        name = regex::escape(plugin)
    );
    Ok(Regex::new(&pattern)?.is_match(source))
}
