//! Lifecycle hooks driven by the host build pipeline
//!
//! The host invokes one hook at a time, in pipeline order. A hook either
//! succeeds or reports a single [`BuildFailure`] and returns it, which halts
//! the build.

use std::fmt;

use crate::Result;
use crate::capabilities::{CacheService, FailureReporter, FileCopier};
use crate::constants::BuildConstants;
use crate::error::BuildFailure;
use crate::settings::PluginSettings;

/// Pipeline phases a plugin can hook into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    /// Before the site generator runs
    PreBuild,
    /// After the site generator has produced its output
    Build,
    /// After the build, before deploy
    PostBuild,
}

impl HookEvent {
    /// All events, in pipeline order
    pub const ALL: [HookEvent; 3] = [Self::PreBuild, Self::Build, Self::PostBuild];

    /// Parse a hook event from its host name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "onPreBuild" => Some(Self::PreBuild),
            "onBuild" => Some(Self::Build),
            "onPostBuild" => Some(Self::PostBuild),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreBuild => "onPreBuild",
            Self::Build => "onBuild",
            Self::PostBuild => "onPostBuild",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values every hook receives
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub constants: BuildConstants,
    pub settings: PluginSettings,
}

impl BuildContext {
    pub fn new(constants: BuildConstants) -> Self {
        Self {
            constants,
            settings: PluginSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: PluginSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Host capabilities injected into each hook call
#[derive(Clone, Copy)]
pub struct Capabilities<'a> {
    pub cache: &'a dyn CacheService,
    pub copier: &'a dyn FileCopier,
    pub reporter: &'a dyn FailureReporter,
}

/// Outcome of a hook as seen by the host
pub type HookResult = std::result::Result<(), BuildFailure>;

/// A build plugin. Hooks a plugin does not implement succeed immediately.
pub trait BuildPlugin {
    fn name(&self) -> &str;

    fn on_pre_build(&self, _ctx: &BuildContext, _caps: &Capabilities<'_>) -> HookResult {
        Ok(())
    }

    fn on_build(&self, _ctx: &BuildContext, _caps: &Capabilities<'_>) -> HookResult {
        Ok(())
    }

    fn on_post_build(&self, _ctx: &BuildContext, _caps: &Capabilities<'_>) -> HookResult {
        Ok(())
    }
}

/// Run a hook body, converting its first error into a reported failure.
///
/// No retries: the reporter sees the failure once and the host receives it
/// as `Err`.
pub fn guard(
    event: HookEvent,
    reporter: &dyn FailureReporter,
    body: impl FnOnce() -> Result<()>,
) -> HookResult {
    body().map_err(|error| {
        let failure = BuildFailure::new(event, error);
        reporter.fail_build(&failure);
        failure
    })
}

/// Dispatch a single hook by event
pub fn run_hook(
    plugin: &dyn BuildPlugin,
    event: HookEvent,
    ctx: &BuildContext,
    caps: &Capabilities<'_>,
) -> HookResult {
    let _span = tracing::info_span!("hook", plugin = plugin.name(), event = %event).entered();
    tracing::debug!("running hook");

    match event {
        HookEvent::PreBuild => plugin.on_pre_build(ctx, caps),
        HookEvent::Build => plugin.on_build(ctx, caps),
        HookEvent::PostBuild => plugin.on_post_build(ctx, caps),
    }
}

/// Run every hook in pipeline order, stopping at the first failure
pub fn run_pipeline(
    plugin: &dyn BuildPlugin,
    ctx: &BuildContext,
    caps: &Capabilities<'_>,
) -> HookResult {
    for event in HookEvent::ALL {
        run_hook(plugin, event, ctx, caps)?;
    }
    Ok(())
}
