//! The derivation engine: a pure, deterministic transform from a raw answer
//! set to the fully resolved project configuration.
//!
//! Resolution order matters: defaults are filled first (seed descriptor,
//! then static defaults), individual answers are validated, implication
//! rules are applied, and only then are the derived fields computed.
//! The copyright year is injected by the caller; the engine never reads a
//! clock.

use tracing::debug;

use crate::answers::{keys, Answers, SeedDescriptor, Value};
use crate::browsers::BrowserSupport;
use crate::engines::EngineSupport;
use crate::error::{ConfigError, ConfigResult};
use crate::matrix::CloudMatrix;
use crate::names;

/// Browser module sub-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Plain,
    Sass,
    Css,
    VanillaWidget,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Plain => "plain",
            ModuleKind::Sass => "sass",
            ModuleKind::Css => "css",
            ModuleKind::VanillaWidget => "vanilla-widget",
        }
    }

    fn from_answer(s: &str) -> ConfigResult<Self> {
        match s {
            "plain" => Ok(ModuleKind::Plain),
            "sass" => Ok(ModuleKind::Sass),
            "css" => Ok(ModuleKind::Css),
            "vanilla-widget" => Ok(ModuleKind::VanillaWidget),
            other => Err(ConfigError::invalid(keys::MODULE_KIND, format!("'{other}'"))),
        }
    }
}

/// How TypeScript is used in the generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypescriptMode {
    None,
    Comments,
    Full,
}

impl TypescriptMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypescriptMode::None => "none",
            TypescriptMode::Comments => "comments",
            TypescriptMode::Full => "full",
        }
    }

    fn from_answer(s: &str) -> ConfigResult<Self> {
        match s {
            "none" => Ok(TypescriptMode::None),
            "comments" => Ok(TypescriptMode::Comments),
            "full" => Ok(TypescriptMode::Full),
            other => Err(ConfigError::invalid(keys::TYPESCRIPT_MODE, format!("'{other}'"))),
        }
    }
}

/// CI provider for the generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiProvider {
    Github,
    Gitlab,
    None,
}

impl CiProvider {
    fn from_answer(s: &str) -> ConfigResult<Self> {
        match s {
            "github" => Ok(CiProvider::Github),
            "gitlab" => Ok(CiProvider::Gitlab),
            "none" => Ok(CiProvider::None),
            other => Err(ConfigError::invalid(keys::CI_PROVIDER, format!("'{other}'"))),
        }
    }
}

/// The build pipeline wired into the generated package. Exactly one per
/// configuration, selected deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bundler {
    /// No build step; sources are published as-is.
    None,
    /// esbuild with browser targets from the Browserslist query.
    Browser,
    /// esbuild with the Node compile-target bucket.
    Node,
    /// esbuild plus `tsc --emitDeclarationOnly` as a post-build step.
    NodeDeclarations,
}

/// Tooling derived from the test strategy flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTools {
    pub runner: Option<&'static str>,
    pub coverage: Option<&'static str>,
    pub automation: Option<&'static str>,
}

/// The fully resolved, immutable configuration consumed by every template.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Name exactly as answered.
    pub raw_name: String,
    /// Normalized package name, scope preserved.
    pub package_name: String,
    /// Normalized name with the scope stripped.
    pub clean_name: String,
    pub scope: Option<String>,
    pub description: String,
    pub author: String,
    pub license: String,
    pub year: i32,
    pub cli: bool,
    pub browser_module: bool,
    /// Only populated for browser modules.
    pub module_kind: Option<ModuleKind>,
    pub typescript_mode: TypescriptMode,
    pub transpile: bool,
    pub bundler: Bundler,
    pub automated_tests: bool,
    pub manual_tests: bool,
    pub integration_tests: bool,
    pub coverage: bool,
    pub test_tools: TestTools,
    pub ci: CiProvider,
    pub changelog: bool,
    pub node_engines: EngineSupport,
    /// Only populated for browser modules.
    pub browsers: Option<BrowserSupport>,
    /// Only populated when integration tests are enabled.
    pub cloud_matrix: Option<CloudMatrix>,
}

impl ProjectConfig {
    pub fn typescript(&self) -> bool {
        self.typescript_mode != TypescriptMode::None
    }

    /// Source entry file, relative to the package root.
    pub fn entry_file(&self) -> &'static str {
        if self.typescript_mode == TypescriptMode::Full {
            "src/index.ts"
        } else {
            "src/index.js"
        }
    }

    /// CLI entry source file.
    pub fn cli_file(&self) -> &'static str {
        if self.typescript_mode == TypescriptMode::Full {
            "src/cli.ts"
        } else {
            "src/cli.js"
        }
    }

    /// What the package descriptor's `main` points at.
    pub fn main_file(&self) -> &'static str {
        if self.bundler == Bundler::None {
            "src/index.js"
        } else {
            "dist/index.js"
        }
    }

    /// What the executable-binary map points at.
    pub fn bin_file(&self) -> &'static str {
        if self.bundler == Bundler::None {
            "src/cli.js"
        } else {
            "dist/cli.js"
        }
    }
}

/// Derive the project configuration from answers, an optional seed
/// descriptor, and the injected copyright year.
pub fn derive(
    answers: &Answers,
    seed: Option<&SeedDescriptor>,
    year: i32,
) -> ConfigResult<ProjectConfig> {
    let mut answers = answers.clone();
    apply_defaults(&mut answers, seed);
    validate_present(&answers)?;
    resolve_implications(&mut answers)?;
    assemble(&answers, year)
}

/// Fill unanswered questions: seed descriptor first, then static defaults.
fn apply_defaults(answers: &mut Answers, seed: Option<&SeedDescriptor>) {
    if let Some(seed) = seed {
        if let Some(name) = &seed.name {
            answers.default_value(keys::NAME, Value::Text(name.clone()));
        }
        if let Some(description) = &seed.description {
            answers.default_value(keys::DESCRIPTION, Value::Text(description.clone()));
        }
        if let Some(author) = &seed.author {
            answers.default_value(keys::AUTHOR, Value::Text(author.display()));
        }
        if let Some(license) = &seed.license {
            answers.default_value(keys::LICENSE, Value::Text(license.clone()));
        }
    }

    for question in crate::answers::QUESTIONS {
        match question.default {
            crate::answers::QuestionDefault::Bool(b) => {
                answers.default_value(question.key, Value::Bool(b))
            }
            crate::answers::QuestionDefault::Text(t) => {
                answers.default_value(question.key, Value::Text(t.to_string()))
            }
            crate::answers::QuestionDefault::None => {}
        }
    }
}

/// Run every present answer through its question validator.
fn validate_present(answers: &Answers) -> ConfigResult<()> {
    for question in crate::answers::QUESTIONS {
        if let Some(value) = answers.get(question.key) {
            crate::answers::validate_answer(question.key, value)?;
        }
    }
    if answers.get(keys::NAME).is_none() {
        return Err(ConfigError::invalid(keys::NAME, "name is required"));
    }
    Ok(())
}

/// Fixed implication rules: (requesting key, prerequisite key).
const IMPLICATIONS: &[(&str, &str)] = &[
    (keys::INTEGRATION_TESTS, keys::AUTOMATED_TESTS),
    (keys::INTEGRATION_TESTS, keys::BROWSER_MODULE),
    (keys::MANUAL_TESTS, keys::BROWSER_MODULE),
    (keys::COVERAGE, keys::AUTOMATED_TESTS),
];

/// Apply implication rules before anything is derived.
///
/// Policy: a prerequisite whose answer was merely defaulted is auto-implied;
/// a prerequisite the user explicitly declined is a conflict.
fn resolve_implications(answers: &mut Answers) -> ConfigResult<()> {
    for &(requested, prerequisite) in IMPLICATIONS {
        if answers.bool(requested) != Some(true) {
            continue;
        }
        if answers.bool(prerequisite) == Some(true) {
            continue;
        }
        if answers.is_explicit(prerequisite) {
            return Err(ConfigError::ConflictingAnswers {
                requested: requested.to_string(),
                conflict: prerequisite.to_string(),
            });
        }
        debug!(requested, prerequisite, "auto-implying prerequisite answer");
        answers.imply_bool(prerequisite, true);
    }

    // A non-plain module kind only makes sense for a browser module.
    let kind = answers.text(keys::MODULE_KIND).unwrap_or("plain").to_string();
    if kind != "plain" && answers.bool(keys::BROWSER_MODULE) != Some(true) {
        if answers.is_explicit(keys::BROWSER_MODULE) {
            return Err(ConfigError::ConflictingAnswers {
                requested: keys::MODULE_KIND.to_string(),
                conflict: keys::BROWSER_MODULE.to_string(),
            });
        }
        answers.imply_bool(keys::BROWSER_MODULE, true);
    }

    // Full TypeScript compiles before publishing; imply transpilation.
    if answers.text(keys::TYPESCRIPT_MODE) == Some("full")
        && answers.bool(keys::TRANSPILE) != Some(true)
    {
        if answers.is_explicit(keys::TRANSPILE) {
            return Err(ConfigError::ConflictingAnswers {
                requested: keys::TYPESCRIPT_MODE.to_string(),
                conflict: keys::TRANSPILE.to_string(),
            });
        }
        answers.imply_bool(keys::TRANSPILE, true);
    }

    // The browser pipeline (karma harness, esbuild browser build) is
    // plain-JS-only; full TypeScript needs the Node declarations path.
    if answers.text(keys::TYPESCRIPT_MODE) == Some("full") {
        if kind == "vanilla-widget" {
            return Err(ConfigError::ConflictingAnswers {
                requested: keys::TYPESCRIPT_MODE.to_string(),
                conflict: keys::MODULE_KIND.to_string(),
            });
        }
        if answers.bool(keys::BROWSER_MODULE) == Some(true) {
            return Err(ConfigError::ConflictingAnswers {
                requested: keys::TYPESCRIPT_MODE.to_string(),
                conflict: keys::BROWSER_MODULE.to_string(),
            });
        }
    }

    Ok(())
}

/// Exactly-one-bundler selection. Deterministic in (module kind, transpile,
/// typescript mode, test strategy); the ladder is evaluated top to bottom.
fn select_bundler(
    browser_module: bool,
    transpile: bool,
    typescript_mode: TypescriptMode,
) -> Bundler {
    if browser_module {
        Bundler::Browser
    } else if transpile && typescript_mode == TypescriptMode::Full {
        Bundler::NodeDeclarations
    } else if transpile {
        Bundler::Node
    } else {
        Bundler::None
    }
}

fn derive_test_tools(
    browser_module: bool,
    automated: bool,
    coverage: bool,
    integration: bool,
) -> TestTools {
    if !automated {
        return TestTools { runner: None, coverage: None, automation: None };
    }
    if browser_module {
        TestTools {
            runner: Some("karma"),
            coverage: coverage.then_some("karma-coverage"),
            automation: integration.then_some("karma-sauce-launcher").or(Some("puppeteer")),
        }
    } else {
        TestTools {
            runner: Some("mocha"),
            coverage: coverage.then_some("c8"),
            automation: None,
        }
    }
}

fn assemble(answers: &Answers, year: i32) -> ConfigResult<ProjectConfig> {
    let raw_name = answers.text(keys::NAME).unwrap_or_default().trim().to_string();
    let package_name = names::normalize(&raw_name);
    let clean_name = names::normalize_clean(&raw_name);
    let scope = names::split_scope(&raw_name).0.map(|s| s.trim_end_matches('/').to_string());

    let browser_module = answers.bool(keys::BROWSER_MODULE).unwrap_or(false);
    let transpile = answers.bool(keys::TRANSPILE).unwrap_or(false);
    let typescript_mode =
        TypescriptMode::from_answer(answers.text(keys::TYPESCRIPT_MODE).unwrap_or("none"))?;
    let automated_tests = answers.bool(keys::AUTOMATED_TESTS).unwrap_or(false);
    let manual_tests = answers.bool(keys::MANUAL_TESTS).unwrap_or(false);
    let integration_tests = answers.bool(keys::INTEGRATION_TESTS).unwrap_or(false);
    let coverage = answers.bool(keys::COVERAGE).unwrap_or(false);

    let module_kind = if browser_module {
        Some(ModuleKind::from_answer(answers.text(keys::MODULE_KIND).unwrap_or("plain"))?)
    } else {
        None
    };

    let node_engines = EngineSupport::parse(answers.text(keys::NODE_ENGINES).unwrap_or(">=20"))?;

    let browsers = if browser_module {
        Some(BrowserSupport::parse(answers.text(keys::BROWSERS).unwrap_or("defaults"))?)
    } else {
        None
    };

    let cloud_matrix = match (&browsers, integration_tests) {
        (Some(support), true) => Some(CloudMatrix::build(&support.minimums)?),
        _ => None,
    };

    let bundler = select_bundler(browser_module, transpile, typescript_mode);
    let test_tools =
        derive_test_tools(browser_module, automated_tests, coverage, integration_tests);

    debug!(%package_name, ?bundler, "derived project configuration");

    Ok(ProjectConfig {
        raw_name,
        package_name,
        clean_name,
        scope,
        description: answers.text(keys::DESCRIPTION).unwrap_or_default().to_string(),
        author: answers.text(keys::AUTHOR).unwrap_or_default().to_string(),
        license: answers.text(keys::LICENSE).unwrap_or("MIT").to_string(),
        year,
        cli: answers.bool(keys::CLI).unwrap_or(false),
        browser_module,
        module_kind,
        typescript_mode,
        transpile,
        bundler,
        automated_tests,
        manual_tests,
        integration_tests,
        coverage,
        test_tools,
        ci: CiProvider::from_answer(answers.text(keys::CI_PROVIDER).unwrap_or("github"))?,
        changelog: answers.bool(keys::CHANGELOG).unwrap_or(false),
        node_engines,
        browsers,
        cloud_matrix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, Value)]) -> Answers {
        let mut a = Answers::new();
        for (key, value) in pairs {
            a.set(key, value.clone());
        }
        a
    }

    #[test]
    fn test_minimal_library() {
        let a = answers(&[(keys::NAME, Value::Text("bella".into()))]);
        let cfg = derive(&a, None, 2026).unwrap();
        assert_eq!(cfg.package_name, "bella");
        assert!(!cfg.browser_module);
        assert!(cfg.browsers.is_none());
        assert!(cfg.module_kind.is_none());
        assert_eq!(cfg.bundler, Bundler::None);
        assert_eq!(cfg.main_file(), "src/index.js");
    }

    #[test]
    fn test_name_is_required() {
        let err = derive(&Answers::new(), None, 2026).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAnswer { ref key, .. } if key == "name"));
    }

    #[test]
    fn test_integration_tests_imply_browser_module() {
        let a = answers(&[
            (keys::NAME, Value::Text("bella".into())),
            (keys::INTEGRATION_TESTS, Value::Bool(true)),
        ]);
        let cfg = derive(&a, None, 2026).unwrap();
        assert!(cfg.browser_module);
        assert!(cfg.automated_tests);
        assert!(cfg.cloud_matrix.is_some());
    }

    #[test]
    fn test_explicit_contradiction_is_conflict() {
        let a = answers(&[
            (keys::NAME, Value::Text("bella".into())),
            (keys::INTEGRATION_TESTS, Value::Bool(true)),
            (keys::BROWSER_MODULE, Value::Bool(false)),
        ]);
        let err = derive(&a, None, 2026).unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingAnswers { .. }));
    }

    #[test]
    fn test_bundler_ladder() {
        assert_eq!(select_bundler(true, false, TypescriptMode::None), Bundler::Browser);
        assert_eq!(
            select_bundler(false, true, TypescriptMode::Full),
            Bundler::NodeDeclarations
        );
        assert_eq!(select_bundler(false, true, TypescriptMode::None), Bundler::Node);
        assert_eq!(select_bundler(false, false, TypescriptMode::None), Bundler::None);
    }

    #[test]
    fn test_full_typescript_implies_transpile() {
        let a = answers(&[
            (keys::NAME, Value::Text("bella".into())),
            (keys::TYPESCRIPT_MODE, Value::Text("full".into())),
        ]);
        let cfg = derive(&a, None, 2026).unwrap();
        assert!(cfg.transpile);
        assert_eq!(cfg.bundler, Bundler::NodeDeclarations);
        assert_eq!(cfg.entry_file(), "src/index.ts");
        assert_eq!(cfg.main_file(), "dist/index.js");
    }

    #[test]
    fn test_widget_excludes_full_typescript() {
        let a = answers(&[
            (keys::NAME, Value::Text("bella".into())),
            (keys::MODULE_KIND, Value::Text("vanilla-widget".into())),
            (keys::TYPESCRIPT_MODE, Value::Text("full".into())),
        ]);
        let err = derive(&a, None, 2026).unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingAnswers { .. }));
    }

    #[test]
    fn test_browser_module_excludes_full_typescript() {
        let a = answers(&[
            (keys::NAME, Value::Text("bella".into())),
            (keys::BROWSER_MODULE, Value::Bool(true)),
            (keys::TYPESCRIPT_MODE, Value::Text("full".into())),
        ]);
        let err = derive(&a, None, 2026).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ConflictingAnswers { ref requested, ref conflict }
                if requested == keys::TYPESCRIPT_MODE && conflict == keys::BROWSER_MODULE
        ));
    }

    #[test]
    fn test_module_kind_implies_browser_module() {
        let a = answers(&[
            (keys::NAME, Value::Text("bella".into())),
            (keys::MODULE_KIND, Value::Text("sass".into())),
        ]);
        let cfg = derive(&a, None, 2026).unwrap();
        assert!(cfg.browser_module);
        assert_eq!(cfg.module_kind, Some(ModuleKind::Sass));
        assert!(cfg.browsers.is_some());
    }

    #[test]
    fn test_seed_defaults() {
        let seed = SeedDescriptor::from_json(
            r#"{"name": "oldName", "description": "an old package", "license": "ISC"}"#,
        )
        .unwrap();
        let cfg = derive(&Answers::new(), Some(&seed), 2026).unwrap();
        assert_eq!(cfg.package_name, "old-name");
        assert_eq!(cfg.description, "an old package");
        assert_eq!(cfg.license, "ISC");
    }

    #[test]
    fn test_scoped_name() {
        let a = answers(&[(keys::NAME, Value::Text("@sammy/ellie".into()))]);
        let cfg = derive(&a, None, 2026).unwrap();
        assert_eq!(cfg.package_name, "@sammy/ellie");
        assert_eq!(cfg.clean_name, "ellie");
        assert_eq!(cfg.scope.as_deref(), Some("@sammy"));
    }

    #[test]
    fn test_test_tools_node() {
        let a = answers(&[
            (keys::NAME, Value::Text("bella".into())),
            (keys::COVERAGE, Value::Bool(true)),
        ]);
        let cfg = derive(&a, None, 2026).unwrap();
        assert_eq!(cfg.test_tools.runner, Some("mocha"));
        assert_eq!(cfg.test_tools.coverage, Some("c8"));
        assert_eq!(cfg.test_tools.automation, None);
    }

    #[test]
    fn test_test_tools_browser() {
        let a = answers(&[
            (keys::NAME, Value::Text("bella".into())),
            (keys::BROWSER_MODULE, Value::Bool(true)),
        ]);
        let cfg = derive(&a, None, 2026).unwrap();
        assert_eq!(cfg.test_tools.runner, Some("karma"));
        assert_eq!(cfg.test_tools.automation, Some("puppeteer"));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a = answers(&[
            (keys::NAME, Value::Text("bella".into())),
            (keys::BROWSER_MODULE, Value::Bool(true)),
            (keys::BROWSERS, Value::Text("chrome 120, safari 16.6".into())),
        ]);
        let first = derive(&a, None, 2026).unwrap();
        let second = derive(&a, None, 2026).unwrap();
        assert_eq!(
            first.browsers.as_ref().unwrap().bundler_targets,
            second.browsers.as_ref().unwrap().bundler_targets
        );
    }
}
