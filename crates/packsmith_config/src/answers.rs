//! The answer model: recognized questions, their defaults and validators,
//! and the raw answer map handed to the derivation engine.
//!
//! Answers carry provenance: an `Explicit` answer came from the user, a
//! `Defaulted` one was filled in. Implication rules treat the two
//! differently (a defaulted prerequisite may be auto-implied, an explicit
//! contradiction is a conflict).

use std::collections::BTreeMap;

use regex::Regex;
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Answer keys. Kept as constants so call sites cannot drift from the
/// question table.
pub mod keys {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const AUTHOR: &str = "author";
    pub const LICENSE: &str = "license";
    pub const CLI: &str = "cli";
    pub const BROWSER_MODULE: &str = "browserModule";
    pub const MODULE_KIND: &str = "moduleKind";
    pub const TYPESCRIPT_MODE: &str = "typescriptMode";
    pub const TRANSPILE: &str = "transpile";
    pub const AUTOMATED_TESTS: &str = "automatedTests";
    pub const MANUAL_TESTS: &str = "manualTests";
    pub const INTEGRATION_TESTS: &str = "integrationTests";
    pub const COVERAGE: &str = "coverage";
    pub const CI_PROVIDER: &str = "ciProvider";
    pub const CHANGELOG: &str = "changelog";
    pub const NODE_ENGINES: &str = "nodeEngines";
    pub const BROWSERS: &str = "browsers";
}

/// Where an answer value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Explicit,
    Defaulted,
}

/// A raw answer value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Text(String),
}

/// Question value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Bool,
    Text,
    Choice(&'static [&'static str]),
}

/// Static default for a question. Defaults computed from the seed
/// descriptor are applied by the derivation engine, not here.
#[derive(Debug, Clone, Copy)]
pub enum QuestionDefault {
    None,
    Bool(bool),
    Text(&'static str),
}

/// One recognized scaffolding question.
pub struct Question {
    pub key: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub default: QuestionDefault,
    /// Regex a text answer must match, if any.
    pub pattern: Option<&'static str>,
}

/// npm package-name shape: optional scope kept verbatim, then a segment of
/// word characters, spaces, dots and dashes (normalized later).
const NAME_PATTERN: &str = r"^(@[A-Za-z0-9][\w.-]*/)?[A-Za-z0-9][\w .-]*$";

pub const MODULE_KINDS: &[&str] = &["plain", "sass", "css", "vanilla-widget"];
pub const TYPESCRIPT_MODES: &[&str] = &["none", "comments", "full"];
pub const CI_PROVIDERS: &[&str] = &["github", "gitlab", "none"];

/// The full question table, in prompt order.
pub const QUESTIONS: &[Question] = &[
    Question {
        key: keys::NAME,
        prompt: "Package name",
        kind: QuestionKind::Text,
        default: QuestionDefault::None,
        pattern: Some(NAME_PATTERN),
    },
    Question {
        key: keys::DESCRIPTION,
        prompt: "Description",
        kind: QuestionKind::Text,
        default: QuestionDefault::Text(""),
        pattern: None,
    },
    Question {
        key: keys::AUTHOR,
        prompt: "Author",
        kind: QuestionKind::Text,
        default: QuestionDefault::Text(""),
        pattern: None,
    },
    Question {
        key: keys::LICENSE,
        prompt: "License",
        kind: QuestionKind::Text,
        default: QuestionDefault::Text("MIT"),
        pattern: None,
    },
    Question {
        key: keys::CLI,
        prompt: "Provide a command-line executable?",
        kind: QuestionKind::Bool,
        default: QuestionDefault::Bool(false),
        pattern: None,
    },
    Question {
        key: keys::BROWSER_MODULE,
        prompt: "Target browsers (instead of Node)?",
        kind: QuestionKind::Bool,
        default: QuestionDefault::Bool(false),
        pattern: None,
    },
    Question {
        key: keys::MODULE_KIND,
        prompt: "Browser module kind",
        kind: QuestionKind::Choice(MODULE_KINDS),
        default: QuestionDefault::Text("plain"),
        pattern: None,
    },
    Question {
        key: keys::TYPESCRIPT_MODE,
        prompt: "TypeScript usage",
        kind: QuestionKind::Choice(TYPESCRIPT_MODES),
        default: QuestionDefault::Text("none"),
        pattern: None,
    },
    Question {
        key: keys::TRANSPILE,
        prompt: "Transpile before publishing?",
        kind: QuestionKind::Bool,
        default: QuestionDefault::Bool(false),
        pattern: None,
    },
    Question {
        key: keys::AUTOMATED_TESTS,
        prompt: "Add automated tests?",
        kind: QuestionKind::Bool,
        default: QuestionDefault::Bool(true),
        pattern: None,
    },
    Question {
        key: keys::MANUAL_TESTS,
        prompt: "Add a manual test page?",
        kind: QuestionKind::Bool,
        default: QuestionDefault::Bool(false),
        pattern: None,
    },
    Question {
        key: keys::INTEGRATION_TESTS,
        prompt: "Add cloud browser integration tests?",
        kind: QuestionKind::Bool,
        default: QuestionDefault::Bool(false),
        pattern: None,
    },
    Question {
        key: keys::COVERAGE,
        prompt: "Collect test coverage?",
        kind: QuestionKind::Bool,
        default: QuestionDefault::Bool(false),
        pattern: None,
    },
    Question {
        key: keys::CI_PROVIDER,
        prompt: "CI provider",
        kind: QuestionKind::Choice(CI_PROVIDERS),
        default: QuestionDefault::Text("github"),
        pattern: None,
    },
    Question {
        key: keys::CHANGELOG,
        prompt: "Keep a changelog with release tooling?",
        kind: QuestionKind::Bool,
        default: QuestionDefault::Bool(false),
        pattern: None,
    },
    Question {
        key: keys::NODE_ENGINES,
        prompt: "Supported Node versions (semver range)",
        kind: QuestionKind::Text,
        default: QuestionDefault::Text(">=20"),
        pattern: None,
    },
    Question {
        key: keys::BROWSERS,
        prompt: "Supported browsers (Browserslist query)",
        kind: QuestionKind::Text,
        default: QuestionDefault::Text("defaults"),
        pattern: None,
    },
];

/// Look up a question by key.
pub fn question(key: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.key == key)
}

/// Validate a single raw answer against its question declaration.
pub fn validate_answer(key: &str, value: &Value) -> ConfigResult<()> {
    let question = question(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

    match (question.kind, value) {
        (QuestionKind::Bool, Value::Bool(_)) => Ok(()),
        (QuestionKind::Text, Value::Text(text)) => {
            if key == keys::NAME && text.trim().is_empty() {
                return Err(ConfigError::invalid(key, "name must not be empty"));
            }
            if let Some(pattern) = question.pattern {
                let re = Regex::new(pattern).expect("question pattern is valid");
                if !re.is_match(text) {
                    return Err(ConfigError::invalid(
                        key,
                        format!("'{text}' is not a valid value"),
                    ));
                }
            }
            Ok(())
        }
        (QuestionKind::Choice(choices), Value::Text(text)) => {
            if choices.contains(&text.as_str()) {
                Ok(())
            } else {
                Err(ConfigError::invalid(
                    key,
                    format!("'{}' is not one of: {}", text, choices.join(", ")),
                ))
            }
        }
        (QuestionKind::Bool, Value::Text(_)) => {
            Err(ConfigError::invalid(key, "expected a boolean"))
        }
        (_, Value::Bool(_)) => Err(ConfigError::invalid(key, "expected text")),
    }
}

/// The raw answer set handed to the derivation engine. Built once, then
/// read-only.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    values: BTreeMap<String, (Value, Provenance)>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an explicit user answer.
    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), (value, Provenance::Explicit));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, Value::Bool(value));
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.set(key, Value::Text(value.into()));
    }

    /// Fill a default; keeps any existing answer.
    pub fn default_value(&mut self, key: &str, value: Value) {
        self.values
            .entry(key.to_string())
            .or_insert((value, Provenance::Defaulted));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).map(|(v, _)| v)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some((Value::Bool(b), _)) => Some(*b),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some((Value::Text(t), _)) => Some(t.as_str()),
            _ => None,
        }
    }

    pub fn provenance(&self, key: &str) -> Option<Provenance> {
        self.values.get(key).map(|(_, p)| *p)
    }

    pub fn is_explicit(&self, key: &str) -> bool {
        self.provenance(key) == Some(Provenance::Explicit)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Overwrite an answer as part of implication resolution. Provenance
    /// stays `Defaulted`: the user did not say this.
    pub fn imply_bool(&mut self, key: &str, value: bool) {
        self.values
            .insert(key.to_string(), (Value::Bool(value), Provenance::Defaulted));
    }

    /// Parse a programmatic answer map from JSON. All values are explicit;
    /// unknown keys and malformed values are rejected.
    pub fn from_json(json: &str) -> ConfigResult<Answers> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut answers = Answers::new();
        for (key, value) in raw {
            let value = match value {
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::String(s) => Value::Text(s),
                other => {
                    return Err(ConfigError::invalid(
                        &key,
                        format!("unsupported value type: {other}"),
                    ))
                }
            };
            validate_answer(&key, &value)?;
            answers.set(&key, value);
        }
        Ok(answers)
    }
}

/// Author field of a package descriptor: npm allows a string or an object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeedAuthor {
    Text(String),
    Object {
        name: String,
        #[serde(default)]
        email: Option<String>,
    },
}

impl SeedAuthor {
    pub fn display(&self) -> String {
        match self {
            SeedAuthor::Text(text) => text.clone(),
            SeedAuthor::Object { name, email: Some(email) } => format!("{name} <{email}>"),
            SeedAuthor::Object { name, email: None } => name.clone(),
        }
    }
}

/// Existing package descriptor used to seed defaults for unanswered
/// questions. Read-only input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<SeedAuthor>,
    #[serde(default)]
    pub license: Option<String>,
}

impl SeedDescriptor {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
