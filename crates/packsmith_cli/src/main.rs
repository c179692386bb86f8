//! packsmith CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments or invalid answer
//! - 3: Conflicting answers
//! - 4: Template error

use std::process::ExitCode;

use clap::Parser;
use packsmith_config::ConfigError;
use packsmith_templates::TemplateError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod prompts;
mod writer;

use commands::{Cli, Commands};

/// Crates whose log events the default filter passes through. The core
/// crates emit under their own targets, not the bin's.
const CRATE_TARGETS: &[&str] = &["packsmith", "packsmith_config", "packsmith_templates"];

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ANSWER: u8 = 2;
    pub const CONFLICTING_ANSWERS: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let mut filter =
        EnvFilter::from_default_env().add_directive("warn".parse().expect("static directive parses"));
    for target in CRATE_TARGETS {
        let directive = format!("{target}={level}");
        filter = filter.add_directive(directive.parse().expect("crate directive parses"));
    }
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::New(args) => commands::new::execute(args).await,
        Commands::Plan(args) => commands::plan::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(config) = e.downcast_ref::<ConfigError>() {
        return match config {
            ConfigError::ConflictingAnswers { .. } => ExitCodes::CONFLICTING_ANSWERS,
            ConfigError::InvalidAnswer { .. }
            | ConfigError::UnknownKey(_)
            | ConfigError::UnknownTargetIdentifier(_) => ExitCodes::INVALID_ANSWER,
            _ => ExitCodes::GENERAL_ERROR,
        };
    }
    if e.downcast_ref::<TemplateError>().is_some() {
        return ExitCodes::TEMPLATE_ERROR;
    }
    ExitCodes::GENERAL_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_conflict() {
        let err = anyhow::Error::new(ConfigError::ConflictingAnswers {
            requested: "typescriptMode=full".into(),
            conflict: "moduleKind=vanilla-widget".into(),
        });
        assert_eq!(categorize_error(&err), ExitCodes::CONFLICTING_ANSWERS);
    }

    #[test]
    fn test_categorize_invalid_answer() {
        let err = anyhow::Error::new(ConfigError::invalid("name", "name must not be empty"));
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ANSWER);
    }

    #[test]
    fn test_categorize_template_error() {
        let err = anyhow::Error::new(TemplateError::UnknownTemplate("nope".into()));
        assert_eq!(categorize_error(&err), ExitCodes::TEMPLATE_ERROR);
    }

    #[test]
    fn test_categorize_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }

    #[test]
    fn test_filter_directives_parse_for_every_crate() {
        for target in CRATE_TARGETS {
            for level in ["debug", "info"] {
                let directive = format!("{target}={level}");
                directive
                    .parse::<tracing_subscriber::filter::Directive>()
                    .unwrap_or_else(|e| panic!("directive '{directive}' failed to parse: {e}"));
            }
        }
    }
}
