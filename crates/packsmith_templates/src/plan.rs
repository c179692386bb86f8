//! Template selection and plan rendering.
//!
//! [`select_plan`] maps a resolved [`ProjectConfig`] onto an ordered
//! [`GenerationPlan`]: which files to render from which template, which
//! static assets to copy, which directories to ensure. The same
//! configuration always yields the same plan, in the same order.

use packsmith_config::{Bundler, CiProvider, ModuleKind, ProjectConfig, TypescriptMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};
use crate::renderer::render;
use crate::templates;

/// One step of the generation plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlanEntry {
    /// Render the template `template` into `path`.
    Render { path: String, template: String },
    /// Copy the static asset `asset` verbatim into `path`.
    CopyAsset { path: String, asset: String },
    /// Create the directory `path` (and parents).
    EnsureDir { path: String },
}

impl PlanEntry {
    fn render(path: &str, template: &str) -> Self {
        PlanEntry::Render {
            path: path.to_string(),
            template: template.to_string(),
        }
    }

    fn copy(path: &str, asset: &str) -> Self {
        PlanEntry::CopyAsset {
            path: path.to_string(),
            asset: asset.to_string(),
        }
    }

    fn dir(path: &str) -> Self {
        PlanEntry::EnsureDir {
            path: path.to_string(),
        }
    }

    /// Target path of this entry, relative to the package root.
    pub fn path(&self) -> &str {
        match self {
            PlanEntry::Render { path, .. }
            | PlanEntry::CopyAsset { path, .. }
            | PlanEntry::EnsureDir { path } => path,
        }
    }
}

/// Ordered list of generation steps for one package.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerationPlan {
    pub entries: Vec<PlanEntry>,
}

impl GenerationPlan {
    /// Paths of the files this plan produces (directories excluded).
    pub fn file_paths(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !matches!(e, PlanEntry::EnsureDir { .. }))
            .map(|e| e.path())
            .collect()
    }
}

/// One fully rendered output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedFile {
    pub path: String,
    pub contents: String,
}

/// Everything the project writer needs: directories first, then files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Manifest {
    pub directories: Vec<String>,
    pub files: Vec<RenderedFile>,
}

/// Select the generation plan for a resolved configuration.
pub fn select_plan(cfg: &ProjectConfig) -> GenerationPlan {
    let mut entries = vec![PlanEntry::dir("src")];

    if cfg.automated_tests || cfg.integration_tests {
        entries.push(PlanEntry::dir("test"));
    }
    if cfg.manual_tests {
        entries.push(PlanEntry::dir("demo"));
    }
    match cfg.ci {
        CiProvider::Github => entries.push(PlanEntry::dir(".github/workflows")),
        CiProvider::Gitlab | CiProvider::None => {}
    }

    entries.push(PlanEntry::render("package.json", "package-json"));
    entries.push(PlanEntry::render("README.md", "readme"));
    entries.push(PlanEntry::render("LICENSE", "license"));
    if cfg.changelog {
        entries.push(PlanEntry::render("CHANGELOG.md", "changelog"));
        entries.push(PlanEntry::render(".release-it.json", "release-it"));
    }

    entries.push(PlanEntry::render(".gitignore", "gitignore"));
    entries.push(PlanEntry::render(".nvmrc", "nvmrc"));
    if cfg.browsers.is_some() {
        entries.push(PlanEntry::render(".browserslistrc", "browserslistrc"));
    }
    entries.push(PlanEntry::render("eslint.config.js", "eslint-config"));
    entries.push(PlanEntry::copy(".editorconfig", "editorconfig"));
    entries.push(PlanEntry::copy(".gitattributes", "gitattributes"));

    let entry_template = match (cfg.module_kind, cfg.typescript_mode) {
        (Some(ModuleKind::VanillaWidget), _) => "entry-widget",
        (_, TypescriptMode::Full) => "entry-ts",
        _ => "entry-js",
    };
    entries.push(PlanEntry::render(cfg.entry_file(), entry_template));
    match cfg.module_kind {
        Some(ModuleKind::Sass) => entries.push(PlanEntry::render("src/styles.scss", "styles-sass")),
        Some(ModuleKind::Css) => entries.push(PlanEntry::render("src/styles.css", "styles-css")),
        _ => {}
    }
    if cfg.cli {
        let cli_template = if cfg.typescript_mode == TypescriptMode::Full {
            "cli-ts"
        } else {
            "cli-js"
        };
        entries.push(PlanEntry::render(cfg.cli_file(), cli_template));
    }

    if cfg.automated_tests {
        if cfg.browser_module {
            entries.push(PlanEntry::render("test/index.spec.js", "test-browser"));
            entries.push(PlanEntry::render("karma.conf.js", "karma-conf"));
        } else if cfg.typescript_mode == TypescriptMode::Full {
            entries.push(PlanEntry::render("test/index.spec.ts", "test-node"));
        } else {
            entries.push(PlanEntry::render("test/index.spec.js", "test-node"));
        }
    }
    if cfg.integration_tests {
        entries.push(PlanEntry::render("test/index.integration.js", "test-integration"));
        entries.push(PlanEntry::render("karma.cloud.conf.js", "karma-cloud"));
    }
    if cfg.automated_tests && !cfg.browser_module && cfg.coverage {
        entries.push(PlanEntry::render(".c8rc.json", "c8rc"));
    }

    match cfg.typescript_mode {
        TypescriptMode::Full => {
            entries.push(PlanEntry::render("tsconfig.json", "tsconfig"));
            if cfg.bundler == Bundler::NodeDeclarations {
                entries.push(PlanEntry::render("tsconfig.build.json", "tsconfig-build"));
            }
        }
        TypescriptMode::Comments => {
            entries.push(PlanEntry::render("jsconfig.json", "jsconfig"));
        }
        TypescriptMode::None => {}
    }

    if cfg.bundler != Bundler::None {
        entries.push(PlanEntry::render("build.mjs", "build-script"));
    }
    if cfg.manual_tests {
        entries.push(PlanEntry::render("demo/index.html", "demo-html"));
    }

    match cfg.ci {
        CiProvider::Github => {
            entries.push(PlanEntry::render(".github/workflows/ci.yml", "ci-github"));
        }
        CiProvider::Gitlab => {
            entries.push(PlanEntry::render(".gitlab-ci.yml", "ci-gitlab"));
        }
        CiProvider::None => {}
    }

    debug!(entries = entries.len(), "selected generation plan");
    GenerationPlan { entries }
}

/// Render every entry of a plan into a writable manifest.
pub fn render_plan(plan: &GenerationPlan, cfg: &ProjectConfig) -> TemplateResult<Manifest> {
    let mut manifest = Manifest::default();
    for entry in &plan.entries {
        match entry {
            PlanEntry::EnsureDir { path } => manifest.directories.push(path.clone()),
            PlanEntry::Render { path, template } => {
                let body = templates::lookup(template)
                    .ok_or_else(|| TemplateError::UnknownTemplate(template.clone()))?;
                manifest.files.push(RenderedFile {
                    path: path.clone(),
                    contents: render(&body, cfg),
                });
            }
            PlanEntry::CopyAsset { path, asset } => {
                let contents = templates::asset(asset)
                    .ok_or_else(|| TemplateError::UnknownAsset(asset.clone()))?;
                manifest.files.push(RenderedFile {
                    path: path.clone(),
                    contents: contents.to_string(),
                });
            }
        }
    }
    Ok(manifest)
}

/// Convenience: select and render in one call.
pub fn generate(cfg: &ProjectConfig) -> TemplateResult<Manifest> {
    render_plan(&select_plan(cfg), cfg)
}
