//! Plan command - dry-run the generation plan.

use anyhow::Result;
use chrono::Datelike;
use clap::Args;

use packsmith_config::derive;
use packsmith_templates::{select_plan, PlanEntry};

use crate::commands::AnswerArgs;

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub answers: AnswerArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: PlanArgs) -> Result<()> {
    let answers = args.answers.collect()?;
    let year = chrono::Utc::now().year();
    let cfg = derive(&answers, None, year)?;
    let plan = select_plan(&cfg);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Plan for {} ({} entries):", cfg.package_name, plan.entries.len());
    for entry in &plan.entries {
        match entry {
            PlanEntry::Render { path, template } => {
                println!("  render  {path}  ({template})");
            }
            PlanEntry::CopyAsset { path, asset } => {
                println!("  copy    {path}  ({asset})");
            }
            PlanEntry::EnsureDir { path } => {
                println!("  mkdir   {path}/");
            }
        }
    }
    Ok(())
}
