//! Declarative template fragments.
//!
//! A template body is a tree of fragments: literal text, field
//! interpolations, named derived expressions, and conditionals guarded by a
//! predicate tree. Nothing here executes user-provided code; the renderer
//! only walks data. Conditionals nest arbitrarily.

use packsmith_config::{Bundler, CiProvider, ModuleKind, ProjectConfig, TypescriptMode};

/// Predicate over the resolved project configuration.
#[derive(Debug, Clone)]
pub enum Cond {
    Cli,
    BrowserModule,
    AutomatedTests,
    ManualTests,
    IntegrationTests,
    Coverage,
    Changelog,
    Scoped,
    HasAuthor,
    /// TypeScript in any mode.
    Typescript,
    LicenseIs(&'static str),
    Kind(ModuleKind),
    Ts(TypescriptMode),
    BundlerIs(Bundler),
    CiIs(CiProvider),
    Not(Box<Cond>),
    All(Vec<Cond>),
    Any(Vec<Cond>),
}

impl Cond {
    pub fn eval(&self, cfg: &ProjectConfig) -> bool {
        match self {
            Cond::Cli => cfg.cli,
            Cond::BrowserModule => cfg.browser_module,
            Cond::AutomatedTests => cfg.automated_tests,
            Cond::ManualTests => cfg.manual_tests,
            Cond::IntegrationTests => cfg.integration_tests,
            Cond::Coverage => cfg.coverage,
            Cond::Changelog => cfg.changelog,
            Cond::Scoped => cfg.scope.is_some(),
            Cond::HasAuthor => !cfg.author.is_empty(),
            Cond::Typescript => cfg.typescript(),
            Cond::LicenseIs(license) => cfg.license == *license,
            Cond::Kind(kind) => cfg.module_kind == Some(*kind),
            Cond::Ts(mode) => cfg.typescript_mode == *mode,
            Cond::BundlerIs(bundler) => cfg.bundler == *bundler,
            Cond::CiIs(provider) => cfg.ci == *provider,
            Cond::Not(inner) => !inner.eval(cfg),
            Cond::All(conds) => conds.iter().all(|c| c.eval(cfg)),
            Cond::Any(conds) => conds.iter().any(|c| c.eval(cfg)),
        }
    }
}

pub fn not(cond: Cond) -> Cond {
    Cond::Not(Box::new(cond))
}

pub fn all(conds: Vec<Cond>) -> Cond {
    Cond::All(conds)
}

pub fn any(conds: Vec<Cond>) -> Cond {
    Cond::Any(conds)
}

/// A configuration field interpolated as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PackageName,
    CleanName,
    Description,
    Author,
    License,
    Year,
    NodeEngines,
    NodeMajor,
    CompileTarget,
    /// esbuild target for the Node pipeline (`es2022`).
    EsbuildNodeTarget,
    BrowsersRaw,
    EntryFile,
    MainFile,
    BinFile,
}

/// A small named derived expression (list joins, JSON fragments).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expr {
    /// `["chrome118", "ios16.6"]`
    BundlerTargetsJson,
    /// Karma-style custom launchers for the Sauce grid.
    SauceLaunchersJson,
    /// Karma-style custom launchers for the BrowserStack grid.
    BrowserStackLaunchersJson,
}

/// One node of a template body.
#[derive(Debug, Clone)]
pub enum Fragment {
    Lit(&'static str),
    Field(Field),
    Expr(Expr),
    When(Cond, Vec<Fragment>),
    Either(Cond, Vec<Fragment>, Vec<Fragment>),
}

pub fn lit(text: &'static str) -> Fragment {
    Fragment::Lit(text)
}

pub fn field(field: Field) -> Fragment {
    Fragment::Field(field)
}

pub fn expr(expr: Expr) -> Fragment {
    Fragment::Expr(expr)
}

pub fn when(cond: Cond, body: Vec<Fragment>) -> Fragment {
    Fragment::When(cond, body)
}

pub fn either(cond: Cond, then: Vec<Fragment>, otherwise: Vec<Fragment>) -> Fragment {
    Fragment::Either(cond, then, otherwise)
}

/// A template: an id plus its fragment body.
pub struct Template {
    pub id: &'static str,
    pub body: Vec<Fragment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use packsmith_config::answers::keys;
    use packsmith_config::{derive, Answers};

    fn minimal() -> ProjectConfig {
        let mut answers = Answers::new();
        answers.set_text(keys::NAME, "bella");
        derive(&answers, None, 2026).unwrap()
    }

    #[test]
    fn test_cond_combinators() {
        let cfg = minimal();
        assert!(not(Cond::Cli).eval(&cfg));
        assert!(all(vec![not(Cond::Cli), Cond::AutomatedTests]).eval(&cfg));
        assert!(any(vec![Cond::Cli, Cond::AutomatedTests]).eval(&cfg));
        assert!(!any(vec![Cond::Cli, Cond::BrowserModule]).eval(&cfg));
    }

    #[test]
    fn test_typescript_cond() {
        let cfg = minimal();
        assert!(Cond::Ts(TypescriptMode::None).eval(&cfg));
        assert!(!Cond::Typescript.eval(&cfg));
    }
}
