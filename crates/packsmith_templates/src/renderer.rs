//! Template rendering.
//!
//! Walks a fragment tree against a resolved [`ProjectConfig`]. Rendering is
//! referentially transparent: the same (template, configuration) pair always
//! produces the same bytes.

use packsmith_config::ProjectConfig;
use serde_json::{json, Map, Value};

use crate::fragment::{Expr, Field, Fragment, Template};

/// Render a whole template.
pub fn render(template: &Template, cfg: &ProjectConfig) -> String {
    let mut out = String::new();
    render_fragments(&template.body, cfg, &mut out);
    out
}

fn render_fragments(fragments: &[Fragment], cfg: &ProjectConfig, out: &mut String) {
    for fragment in fragments {
        match fragment {
            Fragment::Lit(text) => out.push_str(text),
            Fragment::Field(field) => out.push_str(&field_value(*field, cfg)),
            Fragment::Expr(expr) => out.push_str(&expr_value(*expr, cfg)),
            Fragment::When(cond, body) => {
                if cond.eval(cfg) {
                    render_fragments(body, cfg, out);
                }
            }
            Fragment::Either(cond, then, otherwise) => {
                if cond.eval(cfg) {
                    render_fragments(then, cfg, out);
                } else {
                    render_fragments(otherwise, cfg, out);
                }
            }
        }
    }
}

fn field_value(field: Field, cfg: &ProjectConfig) -> String {
    match field {
        Field::PackageName => cfg.package_name.clone(),
        Field::CleanName => cfg.clean_name.clone(),
        Field::Description => cfg.description.clone(),
        Field::Author => cfg.author.clone(),
        Field::License => cfg.license.clone(),
        Field::Year => cfg.year.to_string(),
        Field::NodeEngines => cfg.node_engines.raw.clone(),
        Field::NodeMajor => cfg.node_engines.minimum.major.to_string(),
        Field::CompileTarget => cfg.node_engines.target.as_str().to_string(),
        Field::EsbuildNodeTarget => cfg.node_engines.target.esbuild_id().to_string(),
        Field::BrowsersRaw => {
            cfg.browsers.as_ref().map(|b| b.raw.clone()).unwrap_or_default()
        }
        Field::EntryFile => cfg.entry_file().to_string(),
        Field::MainFile => cfg.main_file().to_string(),
        Field::BinFile => cfg.bin_file().to_string(),
    }
}

fn expr_value(expr: Expr, cfg: &ProjectConfig) -> String {
    match expr {
        Expr::BundlerTargetsJson => {
            let targets = cfg
                .browsers
                .as_ref()
                .map(|b| b.bundler_targets.clone())
                .unwrap_or_default();
            serde_json::to_string(&targets).expect("string list serializes")
        }
        Expr::SauceLaunchersJson => sauce_launchers(cfg),
        Expr::BrowserStackLaunchersJson => browserstack_launchers(cfg),
    }
}

/// Karma custom-launcher map for the Sauce grid, keyed `sl_<browser>`.
fn sauce_launchers(cfg: &ProjectConfig) -> String {
    let mut map = Map::new();
    if let Some(matrix) = &cfg.cloud_matrix {
        for cap in &matrix.sauce {
            let key = format!("sl_{}", launcher_suffix(cap.browser_name));
            map.insert(
                key,
                json!({
                    "base": "SauceLabs",
                    "browserName": cap.browser_name,
                    "platformName": cap.platform_name,
                    "browserVersion": cap.browser_version,
                }),
            );
        }
    }
    serde_json::to_string_pretty(&Value::Object(map)).expect("launcher map serializes")
}

/// Karma custom-launcher map for the BrowserStack grid, keyed `bs_<browser>`.
fn browserstack_launchers(cfg: &ProjectConfig) -> String {
    let mut map = Map::new();
    if let Some(matrix) = &cfg.cloud_matrix {
        for cap in &matrix.browserstack {
            let key = format!("bs_{}", launcher_suffix(cap.browser));
            map.insert(
                key,
                json!({
                    "base": "BrowserStack",
                    "browser": cap.browser,
                    "os": cap.os,
                    "os_version": cap.os_version,
                    "browser_version": cap.browser_version,
                }),
            );
        }
    }
    serde_json::to_string_pretty(&Value::Object(map)).expect("launcher map serializes")
}

fn launcher_suffix(browser: &str) -> String {
    browser.to_ascii_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{either, field, lit, when, Cond};
    use packsmith_config::answers::keys;
    use packsmith_config::Answers;

    fn cfg_with(pairs: &[(&str, &str)]) -> ProjectConfig {
        let mut answers = Answers::new();
        answers.set_text(keys::NAME, "bella");
        for (key, value) in pairs {
            match *value {
                "true" => answers.set_bool(key, true),
                "false" => answers.set_bool(key, false),
                text => answers.set_text(key, text),
            }
        }
        packsmith_config::derive(&answers, None, 2026).unwrap()
    }

    #[test]
    fn test_render_literal_and_field() {
        let template = Template {
            id: "t",
            body: vec![lit("# "), field(Field::PackageName), lit("\n")],
        };
        let out = render(&template, &cfg_with(&[]));
        assert_eq!(out, "# bella\n");
    }

    #[test]
    fn test_render_conditional() {
        let template = Template {
            id: "t",
            body: vec![either(Cond::Cli, vec![lit("cli")], vec![lit("lib")])],
        };
        assert_eq!(render(&template, &cfg_with(&[])), "lib");
        assert_eq!(render(&template, &cfg_with(&[(keys::CLI, "true")])), "cli");
    }

    #[test]
    fn test_render_nested_conditionals() {
        let template = Template {
            id: "t",
            body: vec![when(
                Cond::AutomatedTests,
                vec![lit("tests"), when(Cond::Coverage, vec![lit("+coverage")])],
            )],
        };
        assert_eq!(render(&template, &cfg_with(&[])), "tests");
        assert_eq!(
            render(&template, &cfg_with(&[(keys::COVERAGE, "true")])),
            "tests+coverage"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = cfg_with(&[
            (keys::BROWSER_MODULE, "true"),
            (keys::BROWSERS, "chrome 120, safari 16.6"),
        ]);
        let template = Template {
            id: "t",
            body: vec![crate::fragment::expr(Expr::BundlerTargetsJson)],
        };
        let first = render(&template, &cfg);
        let second = render(&template, &cfg);
        assert_eq!(first, second);
        assert_eq!(first, r#"["chrome120","safari16.6"]"#);
    }

    #[test]
    fn test_sauce_launchers_shape() {
        let cfg = cfg_with(&[
            (keys::INTEGRATION_TESTS, "true"),
            (keys::BROWSERS, "chrome 120"),
        ]);
        let launchers = sauce_launchers(&cfg);
        assert!(launchers.contains("\"sl_chrome\""));
        assert!(launchers.contains("\"base\": \"SauceLabs\""));
        assert!(launchers.contains("\"browserVersion\": \"120\""));
    }
}
