//! Interactive answer collection.
//!
//! Walks the question table in prompt order and asks whatever the answer
//! file and flags left open. An invalid text answer re-prompts instead of
//! aborting.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::debug;

use packsmith_config::answers::{validate_answer, QuestionDefault, QuestionKind, QUESTIONS};
use packsmith_config::{Answers, ConfigError, Value};

pub fn fill_interactively(answers: &mut Answers) -> Result<()> {
    let theme = ColorfulTheme::default();

    for question in QUESTIONS {
        if answers.contains(question.key) {
            debug!(key = question.key, "already answered, skipping prompt");
            continue;
        }

        match question.kind {
            QuestionKind::Bool => {
                let default = matches!(question.default, QuestionDefault::Bool(true));
                let value = Confirm::with_theme(&theme)
                    .with_prompt(question.prompt)
                    .default(default)
                    .interact()?;
                answers.set_bool(question.key, value);
            }
            QuestionKind::Choice(choices) => {
                let default = match question.default {
                    QuestionDefault::Text(text) => {
                        choices.iter().position(|c| *c == text).unwrap_or(0)
                    }
                    _ => 0,
                };
                let index = Select::with_theme(&theme)
                    .with_prompt(question.prompt)
                    .items(choices)
                    .default(default)
                    .interact()?;
                answers.set_text(question.key, choices[index]);
            }
            QuestionKind::Text => loop {
                let mut input = Input::<String>::with_theme(&theme)
                    .with_prompt(question.prompt)
                    .allow_empty(true);
                if let QuestionDefault::Text(text) = question.default {
                    input = input.default(text.to_string()).show_default(!text.is_empty());
                }
                let raw = input.interact_text()?;
                match validate_answer(question.key, &Value::Text(raw.clone())) {
                    Ok(()) => {
                        answers.set_text(question.key, raw);
                        break;
                    }
                    Err(ConfigError::InvalidAnswer { message, .. }) => {
                        eprintln!("  {message}");
                    }
                    Err(other) => return Err(other.into()),
                }
            },
        }
    }

    Ok(())
}
