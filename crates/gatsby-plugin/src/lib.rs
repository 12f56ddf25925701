//! Netlify build plugin hooks for Gatsby sites.
//!
//! The host pipeline drives a [`BuildPlugin`] through three hooks:
//!
//! - `onPreBuild`: validates the publish directory, restores the Gatsby
//!   cache, checks the site config for `gatsby-plugin-netlify`, copies the
//!   function templates and keeps `.gitignore` up to date.
//! - `onBuild`: copies the compiled Gatsby functions and adds the `/api/*`
//!   redirect to `_redirects`.
//! - `onPostBuild`: saves the Gatsby cache.
//!
//! Cache access, file copies and build aborts go through the capability
//! traits in [`capabilities`], injected per call via [`Capabilities`].

pub mod capabilities;
pub mod constants;
pub mod error;
pub mod gatsby;
pub mod hooks;
pub mod logging;
pub mod settings;
pub mod site_config;

pub use capabilities::{CacheService, FailureReporter, FileCopier, FsCopier, LogReporter};
pub use constants::{BuildConstants, DEFAULT_FUNCTIONS_SRC};
pub use error::{BuildFailure, Error, Result};
pub use gatsby::GatsbyPlugin;
pub use hooks::{
    BuildContext, BuildPlugin, Capabilities, HookEvent, HookResult, run_hook, run_pipeline,
};
pub use settings::{PluginSettings, TEMPLATES_DIR};
pub use site_config::{PluginEntry, PluginPresence, SiteConfig};
