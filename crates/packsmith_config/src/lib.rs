//! # packsmith_config
//!
//! Answer model and project-configuration derivation for packsmith.
//!
//! This crate is the pure core of the scaffolder: it declares the
//! recognized questions, validates raw answers, applies the fixed
//! implication rules, and derives the immutable [`ProjectConfig`] every
//! template consumes. It performs no I/O; seed descriptors are handed in
//! already parsed and the copyright year is an injected argument.

pub mod answers;
pub mod browsers;
pub mod derive;
pub mod engines;
pub mod error;
pub mod matrix;
pub mod names;

pub use answers::{Answers, Provenance, Question, QuestionKind, SeedDescriptor, Value};
pub use browsers::{BrowserFamily, BrowserSupport, BrowserVersion};
pub use derive::{derive, Bundler, CiProvider, ModuleKind, ProjectConfig, TestTools, TypescriptMode};
pub use engines::{compile_target, CompileTarget, EngineSupport};
pub use error::{ConfigError, ConfigResult};
pub use matrix::{BrowserStackCapability, CloudMatrix, SauceCapability};
