use gatsby_fs::NormalizedPath;
use gatsby_plugin::site_config::{detect_plugin, locate};
use gatsby_plugin::{Error, PluginPresence};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

const PLUGIN: &str = "gatsby-plugin-netlify";

fn site_with(file: &str, content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(file), content).unwrap();
    temp
}

#[rstest]
#[case("gatsby-config.json", r#"{"plugins": ["gatsby-plugin-netlify"]}"#, PluginPresence::Present)]
#[case(
    "gatsby-config.json",
    r#"{"plugins": [{"resolve": "gatsby-plugin-netlify", "options": {"mergeSecurityHeaders": false}}]}"#,
    PluginPresence::Present
)]
#[case("gatsby-config.json", r#"{"plugins": ["gatsby-plugin-image"]}"#, PluginPresence::Absent)]
#[case("gatsby-config.json", r#"{"siteMetadata": {}}"#, PluginPresence::Absent)]
#[case(
    "gatsby-config.json",
    r#"{"plugins": [{"options": {"path": "src/pages"}}, "gatsby-plugin-netlify"]}"#,
    PluginPresence::Present
)]
#[case("gatsby-config.json", r#"{"plugins": [{"options": {}}]}"#, PluginPresence::Absent)]
#[case("gatsby-config.toml", "plugins = [\"gatsby-plugin-netlify\"]\n", PluginPresence::Present)]
#[case("gatsby-config.yaml", "plugins:\n  - resolve: gatsby-plugin-netlify\n", PluginPresence::Present)]
#[case(
    "gatsby-config.js",
    "module.exports = {\n  plugins: [{ resolve: `gatsby-plugin-netlify` }],\n}\n",
    PluginPresence::Present
)]
#[case(
    "gatsby-config.js",
    "module.exports = { siteMetadata: { siteUrl: 'https://example.com' }, plugins: ['gatsby-plugin-netlify'] }\n",
    PluginPresence::Present
)]
#[case(
    "gatsby-config.mjs",
    "export default { plugins: [\"gatsby-plugin-image\", /* netlify */ 'gatsby-plugin-netlify'] }\n",
    PluginPresence::Present
)]
#[case(
    "gatsby-config.js",
    "module.exports = { siteUrl: 'https://example.com', // 'gatsby-plugin-netlify'\n}\n",
    PluginPresence::Absent
)]
#[case(
    "gatsby-config.ts",
    "const config = {\n  plugins: [\n    // 'gatsby-plugin-netlify',\n  ],\n}\nexport default config\n",
    PluginPresence::Absent
)]
fn test_detect_plugin(#[case] file: &str, #[case] content: &str, #[case] expected: PluginPresence) {
    let site = site_with(file, content);
    let root = NormalizedPath::new(site.path());

    assert_eq!(detect_plugin(&root, PLUGIN).unwrap(), expected);
}

#[test]
fn test_no_config_file_is_error() {
    let site = TempDir::new().unwrap();
    let root = NormalizedPath::new(site.path());

    assert_eq!(locate(&root), None);
    let err = detect_plugin(&root, PLUGIN).unwrap_err();
    assert!(matches!(err, Error::SiteConfigMissing { .. }));
}

#[test]
fn test_structured_config_wins_over_script() {
    let site = site_with("gatsby-config.js", "plugins: ['gatsby-plugin-netlify']");
    fs::write(site.path().join("gatsby-config.json"), r#"{"plugins": []}"#).unwrap();
    let root = NormalizedPath::new(site.path());

    assert!(locate(&root).unwrap().as_str().ends_with("gatsby-config.json"));
    assert_eq!(detect_plugin(&root, PLUGIN).unwrap(), PluginPresence::Absent);
}

#[test]
fn test_invalid_structured_config_is_error() {
    let site = site_with("gatsby-config.yaml", "plugins: [unclosed\n");
    let root = NormalizedPath::new(site.path());

    assert!(detect_plugin(&root, PLUGIN).is_err());
}
