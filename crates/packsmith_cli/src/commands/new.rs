//! New command - scaffold a package.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;
use tracing::{debug, info};

use packsmith_config::{derive, SeedDescriptor};
use packsmith_templates::generate;

use crate::commands::AnswerArgs;
use crate::prompts;
use crate::writer::ProjectWriter;

#[derive(Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub answers: AnswerArgs,

    /// Accept defaults for all unanswered questions
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output directory (defaults to the unscoped package name)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Write into a non-empty target directory
    #[arg(short, long)]
    pub force: bool,

    /// package.json to seed defaults from (auto-detected in the current directory)
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,
}

pub async fn execute(args: NewArgs) -> Result<()> {
    let mut answers = args.answers.collect()?;
    if !args.yes {
        prompts::fill_interactively(&mut answers)?;
    }

    let seed = load_seed(args.seed.as_deref())?;
    let year = chrono::Utc::now().year();
    let cfg = derive(&answers, seed.as_ref(), year)?;
    info!("Derived configuration for {}", cfg.package_name);

    let manifest = generate(&cfg)?;
    debug!(files = manifest.files.len(), "rendered manifest");

    let out = args.out.unwrap_or_else(|| PathBuf::from(&cfg.clean_name));
    let writer = ProjectWriter::new(out.clone(), args.force);
    writer.write(&manifest)?;

    println!("Scaffolded {} ({} files)", cfg.package_name, manifest.files.len());
    println!();
    println!("Next steps:");
    println!("  cd {}", out.display());
    println!("  npm install");
    if cfg.automated_tests {
        println!("  npm test");
    }

    Ok(())
}

/// Load the seed descriptor: the explicit `--seed` file, or a package.json
/// in the current directory if one exists.
fn load_seed(path: Option<&Path>) -> Result<Option<SeedDescriptor>> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let detected = PathBuf::from("package.json");
            if !detected.is_file() {
                return Ok(None);
            }
            debug!("seeding defaults from ./package.json");
            detected
        }
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let seed = SeedDescriptor::from_json(&json)
        .with_context(|| format!("Invalid seed file {}", path.display()))?;
    Ok(Some(seed))
}
