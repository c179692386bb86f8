//! Integration tests for configuration derivation.

use packsmith_config::answers::keys;
use packsmith_config::{derive, Answers, Bundler, ConfigError, SeedDescriptor, TypescriptMode};

#[test]
fn test_minimal_library_scenario() {
    let mut answers = Answers::new();
    answers.set_text(keys::NAME, "bella");

    let cfg = derive(&answers, None, 2026).unwrap();

    assert_eq!(cfg.package_name, "bella");
    assert_eq!(cfg.clean_name, "bella");
    assert!(!cfg.browser_module);
    assert!(!cfg.cli);
    assert_eq!(cfg.typescript_mode, TypescriptMode::None);
    assert_eq!(cfg.bundler, Bundler::None);
    assert!(cfg.browsers.is_none());
    assert!(cfg.cloud_matrix.is_none());
    assert_eq!(cfg.main_file(), "src/index.js");
}

#[test]
fn test_scoped_cli_scenario() {
    let mut answers = Answers::new();
    answers.set_text(keys::NAME, "@sammy/ellie");
    answers.set_bool(keys::CLI, true);

    let cfg = derive(&answers, None, 2026).unwrap();

    assert_eq!(cfg.package_name, "@sammy/ellie");
    assert_eq!(cfg.clean_name, "ellie");
    assert!(cfg.cli);
    assert_eq!(cfg.bin_file(), "src/cli.js");
}

#[test]
fn test_typescript_transpile_scenario() {
    let mut answers = Answers::new();
    answers.set_text(keys::NAME, "bella");
    answers.set_text(keys::TYPESCRIPT_MODE, "full");
    answers.set_bool(keys::TRANSPILE, true);

    let cfg = derive(&answers, None, 2026).unwrap();

    assert_eq!(cfg.bundler, Bundler::NodeDeclarations);
    assert_eq!(cfg.entry_file(), "src/index.ts");
    assert_eq!(cfg.main_file(), "dist/index.js");
}

#[test]
fn test_implication_closure_auto_imply() {
    let mut answers = Answers::new();
    answers.set_text(keys::NAME, "bella");
    answers.set_bool(keys::INTEGRATION_TESTS, true);

    let cfg = derive(&answers, None, 2026).unwrap();

    assert!(cfg.browser_module);
    assert!(cfg.automated_tests);
    assert!(cfg.integration_tests);
    let matrix = cfg.cloud_matrix.expect("integration tests build a cloud matrix");
    assert_eq!(matrix.sauce.len(), matrix.browserstack.len());
}

#[test]
fn test_implication_closure_explicit_conflict() {
    let mut answers = Answers::new();
    answers.set_text(keys::NAME, "bella");
    answers.set_bool(keys::INTEGRATION_TESTS, true);
    answers.set_bool(keys::BROWSER_MODULE, false);

    let err = derive(&answers, None, 2026).unwrap_err();
    assert!(matches!(err, ConfigError::ConflictingAnswers { .. }));
}

#[test]
fn test_answers_from_json_round() {
    let answers = Answers::from_json(
        r#"{"name": "hankCharlie", "browserModule": true, "browsers": "chrome 120"}"#,
    )
    .unwrap();
    let cfg = derive(&answers, None, 2026).unwrap();

    assert_eq!(cfg.package_name, "hank-charlie");
    let browsers = cfg.browsers.unwrap();
    assert_eq!(browsers.bundler_targets, vec!["chrome120"]);
}

#[test]
fn test_seed_defaults_are_overridable() {
    let seed =
        SeedDescriptor::from_json(r#"{"name": "oldName", "description": "seeded"}"#).unwrap();

    let mut answers = Answers::new();
    answers.set_text(keys::NAME, "bella");

    let cfg = derive(&answers, Some(&seed), 2026).unwrap();
    assert_eq!(cfg.package_name, "bella");
    assert_eq!(cfg.description, "seeded");
}

#[test]
fn test_year_is_injected() {
    let mut answers = Answers::new();
    answers.set_text(keys::NAME, "bella");

    let cfg = derive(&answers, None, 1999).unwrap();
    assert_eq!(cfg.year, 1999);
}
