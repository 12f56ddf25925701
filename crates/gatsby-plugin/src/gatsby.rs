//! The Gatsby plugin.

use gatsby_blocks::{MarkerPair, splice_file};
use tracing::{debug, info, warn};

use crate::Result;
use crate::error::Error;
use crate::hooks::{BuildContext, BuildPlugin, Capabilities, HookEvent, HookResult, guard};
use crate::site_config::{self, PluginPresence};

const CACHE_RESTORED: &str = "Found a Gatsby cache. We’re about to go FAST. ⚡️";
const CACHE_EMPTY: &str = "No Gatsby cache found. Building fresh.";
const CACHE_SAVED: &str = "Stored the Gatsby cache to speed up future builds. 🔥";
const CACHE_NOTHING_TO_SAVE: &str = "No Gatsby build found.";

/// Wires a Gatsby site into the Netlify build: cache persistence, function
/// wrappers, `.gitignore` and `_redirects` blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct GatsbyPlugin;

impl GatsbyPlugin {
    pub fn new() -> Self {
        Self
    }

    fn pre_build(&self, ctx: &BuildContext, caps: &Capabilities<'_>) -> Result<()> {
        let constants = &ctx.constants;
        let settings = &ctx.settings;

        if constants.site_root.same_location(&constants.publish_path()) {
            return Err(Error::PublishDirMisconfigured {
                publish_dir: constants.publish_dir.to_string(),
            });
        }

        if caps.cache.restore(&constants.cache_dirs())? {
            info!("{}", CACHE_RESTORED);
        } else {
            info!("{}", CACHE_EMPTY);
        }

        let plugin = &settings.required_site_plugin;
        match site_config::detect_plugin(&constants.site_root, plugin)? {
            PluginPresence::Present => debug!(plugin = %plugin, "site plugin configured"),
            PluginPresence::Absent => warn!(
                "Add `{}` to `gatsby-config` if you would like to support Gatsby redirects. 🎉",
                plugin
            ),
        }

        caps.copier.copy(
            &settings.templates_path(constants),
            &settings.functions_dir(constants),
        )?;

        splice_file(
            &constants.site_root.join(".gitignore"),
            &MarkerPair::ignores(&settings.namespace)?,
            &settings.ignore_entry(constants),
        )?;

        Ok(())
    }

    fn build(&self, ctx: &BuildContext, caps: &Capabilities<'_>) -> Result<()> {
        let constants = &ctx.constants;
        let settings = &ctx.settings;

        caps.copier.copy(
            &constants.cache_dir().join("functions"),
            &settings.functions_dir(constants).join("functions"),
        )?;

        splice_file(
            &constants.publish_path().join("_redirects"),
            &MarkerPair::redirects(&settings.namespace)?,
            &settings.api_redirect,
        )?;

        Ok(())
    }

    fn post_build(&self, ctx: &BuildContext, caps: &Capabilities<'_>) -> Result<()> {
        if caps.cache.save(&ctx.constants.cache_dirs())? {
            info!("{}", CACHE_SAVED);
        } else {
            info!("{}", CACHE_NOTHING_TO_SAVE);
        }
        Ok(())
    }
}

impl BuildPlugin for GatsbyPlugin {
    fn name(&self) -> &str {
        "@netlify/plugin-gatsby"
    }

    fn on_pre_build(&self, ctx: &BuildContext, caps: &Capabilities<'_>) -> HookResult {
        guard(HookEvent::PreBuild, caps.reporter, || self.pre_build(ctx, caps))
    }

    fn on_build(&self, ctx: &BuildContext, caps: &Capabilities<'_>) -> HookResult {
        guard(HookEvent::Build, caps.reporter, || self.build(ctx, caps))
    }

    fn on_post_build(&self, ctx: &BuildContext, caps: &Capabilities<'_>) -> HookResult {
        guard(HookEvent::PostBuild, caps.reporter, || self.post_build(ctx, caps))
    }
}
