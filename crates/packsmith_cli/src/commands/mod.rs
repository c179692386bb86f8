//! CLI command definitions.
//!
//! Each subcommand collects answers the same way: an optional JSON answer
//! file, then individual flags on top. `new` fills the rest interactively
//! (or from defaults with `--yes`); `plan` is always non-interactive.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use packsmith_config::answers::keys;
use packsmith_config::Answers;

pub mod new;
pub mod plan;

/// packsmith - npm package scaffolder
#[derive(Parser)]
#[command(name = "packsmith")]
#[command(version, about = "packsmith - scaffold npm packages from a handful of answers")]
#[command(long_about = r#"
packsmith derives a full npm package layout from a handful of answers:
name, module kind, TypeScript usage, test setup, CI provider. Everything
else (bundler, test tooling, browser grids, compile targets) is derived.

COMMANDS:
  new   → Scaffold a package (interactive, or --yes / --answers for CI)
  plan  → Dry-run: show which files a configuration would generate

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or invalid answer
  3 - Conflicting answers
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new package
    New(new::NewArgs),

    /// Show the generation plan without writing anything
    Plan(plan::PlanArgs),
}

/// Answer inputs shared by `new` and `plan`.
#[derive(Args)]
pub struct AnswerArgs {
    /// Package name (bare or @scope/name)
    pub name: Option<String>,

    /// JSON file with pre-recorded answers
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Package description
    #[arg(long)]
    pub description: Option<String>,

    /// Package author
    #[arg(long)]
    pub author: Option<String>,

    /// License identifier
    #[arg(long)]
    pub license: Option<String>,

    /// Provide a command-line executable
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub cli: Option<bool>,

    /// Target browsers instead of Node
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub browser_module: Option<bool>,

    /// Browser module kind (plain, sass, css, vanilla-widget)
    #[arg(long)]
    pub module_kind: Option<String>,

    /// TypeScript usage (none, comments, full)
    #[arg(long)]
    pub typescript: Option<String>,

    /// Transpile before publishing
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub transpile: Option<bool>,

    /// Add automated tests
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub automated_tests: Option<bool>,

    /// Add a manual test page
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub manual_tests: Option<bool>,

    /// Add cloud browser integration tests
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub integration_tests: Option<bool>,

    /// Collect test coverage
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub coverage: Option<bool>,

    /// CI provider (github, gitlab, none)
    #[arg(long)]
    pub ci: Option<String>,

    /// Keep a changelog with release tooling
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub changelog: Option<bool>,

    /// Supported Node versions (semver range)
    #[arg(long, value_name = "RANGE")]
    pub node_engines: Option<String>,

    /// Supported browsers (Browserslist query)
    #[arg(long, value_name = "QUERY")]
    pub browsers: Option<String>,
}

impl AnswerArgs {
    /// Build the explicit answer set: the answer file first, flags on top.
    pub fn collect(&self) -> Result<Answers> {
        let mut answers = match &self.answers {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read answer file {}", path.display()))?;
                Answers::from_json(&json)
                    .with_context(|| format!("Invalid answer file {}", path.display()))?
            }
            None => Answers::new(),
        };

        let text_flags = [
            (keys::NAME, &self.name),
            (keys::DESCRIPTION, &self.description),
            (keys::AUTHOR, &self.author),
            (keys::LICENSE, &self.license),
            (keys::MODULE_KIND, &self.module_kind),
            (keys::TYPESCRIPT_MODE, &self.typescript),
            (keys::CI_PROVIDER, &self.ci),
            (keys::NODE_ENGINES, &self.node_engines),
            (keys::BROWSERS, &self.browsers),
        ];
        for (key, value) in text_flags {
            if let Some(text) = value {
                packsmith_config::answers::validate_answer(
                    key,
                    &packsmith_config::Value::Text(text.clone()),
                )?;
                answers.set_text(key, text.clone());
            }
        }

        let bool_flags = [
            (keys::CLI, self.cli),
            (keys::BROWSER_MODULE, self.browser_module),
            (keys::TRANSPILE, self.transpile),
            (keys::AUTOMATED_TESTS, self.automated_tests),
            (keys::MANUAL_TESTS, self.manual_tests),
            (keys::INTEGRATION_TESTS, self.integration_tests),
            (keys::COVERAGE, self.coverage),
            (keys::CHANGELOG, self.changelog),
        ];
        for (key, value) in bool_flags {
            if let Some(flag) = value {
                answers.set_bool(key, flag);
            }
        }

        Ok(answers)
    }
}
