//! End-to-end runs of the Gatsby plugin through the hook pipeline.

use gatsby_blocks::{MarkerPair, find_block};
use gatsby_fs::NormalizedPath;
use gatsby_plugin::{
    BuildPlugin, Capabilities, GatsbyPlugin, HookEvent, LogReporter, PluginSettings, run_hook,
    run_pipeline,
};
use gatsby_test_utils::{CacheCall, RecordingCache, RecordingCopier, RecordingReporter, TestSite};
use pretty_assertions::assert_eq;

#[test]
fn full_pipeline_on_fresh_site() {
    let site = TestSite::new();
    site.gatsby_config_js(&["gatsby-plugin-image", "gatsby-plugin-netlify"]);
    site.gatsby_functions(&["api/hello.js"]);

    let cache = RecordingCache::miss();
    let copier = RecordingCopier::new();
    let reporter = RecordingReporter::new();
    let caps = Capabilities {
        cache: &cache,
        copier: &copier,
        reporter: &reporter,
    };

    run_pipeline(&GatsbyPlugin, &site.context(), &caps).unwrap();

    let calls = cache.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], CacheCall::Restore(_)));
    assert!(matches!(calls[1], CacheCall::Save(_)));
    assert_eq!(copier.calls.borrow().len(), 2);
    assert_eq!(reporter.count(), 0);

    site.assert_exists("netlify/functions/gatsby/gatsby.js");
    site.assert_exists("netlify/functions/gatsby/functions/api/hello.js");

    let ignores = MarkerPair::ignores("@netlify/plugin-gatsby").unwrap();
    let block = find_block(&site.read(".gitignore"), &ignores).unwrap().unwrap();
    assert_eq!(block.body, "netlify/functions/gatsby");

    let redirects = MarkerPair::redirects("@netlify/plugin-gatsby").unwrap();
    let block = find_block(&site.read("public/_redirects"), &redirects)
        .unwrap()
        .unwrap();
    assert_eq!(block.body, "/api/* /.netlify/functions/gatsby 200");
}

#[test]
fn repeated_builds_leave_config_files_identical() {
    let site = TestSite::new();
    site.write(".gitignore", "node_modules\n");
    site.write("public/_redirects", "/blog/* /posts/:splat 301\n");
    site.gatsby_functions(&["api/hello.js"]);

    let cache = RecordingCache::hit();
    let copier = RecordingCopier::new();
    let caps = Capabilities {
        cache: &cache,
        copier: &copier,
        reporter: &LogReporter,
    };

    run_pipeline(&GatsbyPlugin, &site.context(), &caps).unwrap();
    let gitignore = site.read(".gitignore");
    let redirects = site.read("public/_redirects");

    run_pipeline(&GatsbyPlugin, &site.context(), &caps).unwrap();

    assert_eq!(site.read(".gitignore"), gitignore);
    assert_eq!(site.read("public/_redirects"), redirects);
    assert!(redirects.starts_with("/blog/* /posts/:splat 301\n"));
}

#[test]
fn failing_pre_build_stops_pipeline() {
    let site = TestSite::new();
    let cache = RecordingCache::miss();
    let copier = RecordingCopier::failing();
    let reporter = RecordingReporter::new();
    let caps = Capabilities {
        cache: &cache,
        copier: &copier,
        reporter: &reporter,
    };

    let failure = run_pipeline(&GatsbyPlugin, &site.context(), &caps).unwrap_err();

    assert_eq!(failure.hook, HookEvent::PreBuild);
    assert_eq!(reporter.count(), 1);
    // onPostBuild never ran, so the cache was only asked to restore
    assert_eq!(cache.calls.borrow().len(), 1);
}

#[test]
fn settings_file_overrides_redirect_rule() {
    let site = TestSite::new();
    site.gatsby_functions(&["api/hello.js"]);
    site.write(
        "plugin.toml",
        "api_redirect = \"/api/* /.netlify/functions/site-api 200\"\n",
    );
    let settings = PluginSettings::load(&NormalizedPath::new(site.path("plugin.toml"))).unwrap();
    let ctx = site.context().with_settings(settings);

    let cache = RecordingCache::miss();
    let copier = RecordingCopier::new();
    let reporter = RecordingReporter::new();
    let caps = Capabilities {
        cache: &cache,
        copier: &copier,
        reporter: &reporter,
    };

    run_hook(&GatsbyPlugin, HookEvent::Build, &ctx, &caps).unwrap();

    assert!(
        site.read("public/_redirects")
            .contains("\n/api/* /.netlify/functions/site-api 200\n")
    );
    assert_eq!(GatsbyPlugin.name(), "@netlify/plugin-gatsby");
}
