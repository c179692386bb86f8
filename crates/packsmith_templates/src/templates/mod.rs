//! Template bodies, grouped by family.
//!
//! Each module exposes constructor functions building the fragment tree for
//! one or more templates. [`lookup`] maps a template id to its constructor;
//! [`asset`] returns the verbatim body of a static (non-templated) asset.

use crate::fragment::Template;

pub mod assets;
pub mod bundler;
pub mod ci;
pub mod docs;
pub mod entry;
pub mod meta;
pub mod package_json;
pub mod styles;
pub mod test_harness;
pub mod typescript;

/// Resolve a template id to its fragment tree.
pub fn lookup(id: &str) -> Option<Template> {
    let template = match id {
        "package-json" => package_json::package_json(),
        "readme" => docs::readme(),
        "license" => docs::license(),
        "changelog" => docs::changelog(),
        "gitignore" => meta::gitignore(),
        "nvmrc" => meta::nvmrc(),
        "browserslistrc" => meta::browserslistrc(),
        "eslint-config" => meta::eslint_config(),
        "c8rc" => meta::c8rc(),
        "release-it" => meta::release_it(),
        "entry-js" => entry::entry_js(),
        "entry-ts" => entry::entry_ts(),
        "entry-widget" => entry::entry_widget(),
        "cli-js" => entry::cli_js(),
        "cli-ts" => entry::cli_ts(),
        "test-node" => test_harness::test_node(),
        "test-browser" => test_harness::test_browser(),
        "test-integration" => test_harness::test_integration(),
        "karma-conf" => test_harness::karma_conf(),
        "karma-cloud" => test_harness::karma_cloud(),
        "tsconfig" => typescript::tsconfig(),
        "tsconfig-build" => typescript::tsconfig_build(),
        "jsconfig" => typescript::jsconfig(),
        "build-script" => bundler::build_script(),
        "styles-sass" => styles::styles_sass(),
        "styles-css" => styles::styles_css(),
        "demo-html" => styles::demo_html(),
        "ci-github" => ci::github_workflow(),
        "ci-gitlab" => ci::gitlab_pipeline(),
        _ => return None,
    };
    Some(template)
}

/// Resolve a static asset id to its verbatim contents.
pub fn asset(id: &str) -> Option<&'static str> {
    match id {
        "editorconfig" => Some(assets::EDITORCONFIG),
        "gitattributes" => Some(assets::GITATTRIBUTES),
        _ => None,
    }
}
