//! Node engine range parsing and compile-target selection.

use semver::{Comparator, Op, Version, VersionReq};
use serde::Serialize;

use crate::error::{ConfigError, ConfigResult};

/// TypeScript/esbuild compile-target bucket, selected from the minimum
/// supported Node major version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompileTarget {
    Es2024,
    Es2023,
    Es2022,
    Es2021,
    Es2017,
}

impl CompileTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompileTarget::Es2024 => "ES2024",
            CompileTarget::Es2023 => "ES2023",
            CompileTarget::Es2022 => "ES2022",
            CompileTarget::Es2021 => "ES2021",
            CompileTarget::Es2017 => "ES2017",
        }
    }

    /// esbuild spelling of the target (`es2022`).
    pub fn esbuild_id(&self) -> &'static str {
        match self {
            CompileTarget::Es2024 => "es2024",
            CompileTarget::Es2023 => "es2023",
            CompileTarget::Es2022 => "es2022",
            CompileTarget::Es2021 => "es2021",
            CompileTarget::Es2017 => "es2017",
        }
    }
}

impl std::fmt::Display for CompileTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Select the compile target for a minimum Node major version.
///
/// Descending threshold ladder, first match wins.
pub fn compile_target(min_major: u64) -> CompileTarget {
    if min_major >= 24 {
        CompileTarget::Es2024
    } else if min_major >= 22 {
        CompileTarget::Es2023
    } else if min_major >= 20 {
        CompileTarget::Es2022
    } else if min_major >= 18 {
        CompileTarget::Es2021
    } else {
        CompileTarget::Es2017
    }
}

/// Parsed Node engine support: the raw range for display plus the derived
/// minimum and compile target. Derived fields are read-only; they are never
/// recomputed from anything but the raw string.
#[derive(Debug, Clone, Serialize)]
pub struct EngineSupport {
    pub raw: String,
    pub minimum: Version,
    pub target: CompileTarget,
}

impl EngineSupport {
    /// Parse a semver range and extract the minimum satisfying version.
    ///
    /// Accepts npm-style compound ranges (`>=18 <21`, space-separated) as
    /// well as the comma-separated form `VersionReq` expects.
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        let req = VersionReq::parse(&comma_separated(raw))
            .map_err(|e| ConfigError::invalid("nodeEngines", format!("not a semver range: {e}")))?;
        let minimum = minimum_version(&req).ok_or_else(|| {
            ConfigError::invalid("nodeEngines", format!("range '{raw}' matches no version"))
        })?;
        let target = compile_target(minimum.major);
        Ok(EngineSupport { raw: raw.to_string(), minimum, target })
    }
}

/// Rewrite an npm-style range as comma-separated comparators. npm writes
/// compound `engines` ranges space-separated (`>=18 <21`), and may put a
/// space between the operator and its version (`>= 18`).
fn comma_separated(raw: &str) -> String {
    let mut comparators: Vec<String> = Vec::new();
    let mut pending_op: Option<String> = None;

    let tokens = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());
    for token in tokens {
        let is_bare_op = token.chars().all(|c| matches!(c, '>' | '<' | '=' | '^' | '~'));
        if is_bare_op {
            pending_op = Some(match pending_op.take() {
                Some(op) => op + token,
                None => token.to_string(),
            });
            continue;
        }
        match pending_op.take() {
            Some(op) => comparators.push(op + token),
            None => comparators.push(token.to_string()),
        }
    }
    if let Some(op) = pending_op {
        comparators.push(op);
    }
    comparators.join(", ")
}

/// Lowest version satisfying the whole requirement.
///
/// Candidates are the lower bounds of each comparator; the smallest candidate
/// that the full requirement accepts wins.
fn minimum_version(req: &VersionReq) -> Option<Version> {
    if req.comparators.is_empty() {
        return Some(Version::new(0, 0, 0));
    }

    let mut candidates: Vec<Version> = req.comparators.iter().map(lower_bound).collect();
    candidates.sort();

    candidates.into_iter().find(|v| req.matches(v))
}

/// Lower bound implied by a single comparator, with missing minor/patch
/// filled as zero. A strict `>` bumps the lowest component the comparator
/// actually specifies: `>18` excludes all of 18.x, so the bound is 19.0.0;
/// `>18.2` is 18.3.0; `>18.2.1` is 18.2.2.
fn lower_bound(c: &Comparator) -> Version {
    let mut v = Version::new(c.major, c.minor.unwrap_or(0), c.patch.unwrap_or(0));
    if c.op == Op::Greater {
        if c.minor.is_none() {
            v.major += 1;
        } else if c.patch.is_none() {
            v.minor += 1;
        } else {
            v.patch += 1;
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_of_simple_range() {
        let support = EngineSupport::parse(">=18").unwrap();
        assert_eq!(support.minimum, Version::new(18, 0, 0));
        assert_eq!(support.raw, ">=18");
    }

    #[test]
    fn test_minimum_of_caret_range() {
        let support = EngineSupport::parse("^20.9.0").unwrap();
        assert_eq!(support.minimum, Version::new(20, 9, 0));
    }

    #[test]
    fn test_minimum_of_compound_range() {
        let support = EngineSupport::parse(">=18 <21").unwrap();
        assert_eq!(support.minimum, Version::new(18, 0, 0));
    }

    #[test]
    fn test_npm_range_spellings() {
        // Operator separated from its version, and comma-separated comparators.
        assert_eq!(EngineSupport::parse(">= 18").unwrap().minimum, Version::new(18, 0, 0));
        assert_eq!(
            EngineSupport::parse(">=18, <21").unwrap().minimum,
            Version::new(18, 0, 0)
        );
        assert_eq!(
            EngineSupport::parse(">=16 <=20").unwrap().minimum,
            Version::new(16, 0, 0)
        );
    }

    #[test]
    fn test_strict_greater_bumps_specified_component() {
        assert_eq!(EngineSupport::parse(">18").unwrap().minimum, Version::new(19, 0, 0));
        assert_eq!(EngineSupport::parse(">18.2").unwrap().minimum, Version::new(18, 3, 0));
        assert_eq!(
            EngineSupport::parse(">18.2.1").unwrap().minimum,
            Version::new(18, 2, 2)
        );
    }

    #[test]
    fn test_engine_support_serializes() {
        let support = EngineSupport::parse(">=20").unwrap();
        let value = serde_json::to_value(&support).unwrap();
        assert_eq!(value["minimum"], "20.0.0");
        assert_eq!(value["target"], "es2022");
    }

    #[test]
    fn test_bucket_ladder() {
        assert_eq!(compile_target(24), CompileTarget::Es2024);
        assert_eq!(compile_target(22), CompileTarget::Es2023);
        assert_eq!(compile_target(20), CompileTarget::Es2022);
        assert_eq!(compile_target(18), CompileTarget::Es2021);
        assert_eq!(compile_target(12), CompileTarget::Es2017);
    }

    #[test]
    fn test_bucket_between_thresholds() {
        assert_eq!(compile_target(25), CompileTarget::Es2024);
        assert_eq!(compile_target(23), CompileTarget::Es2023);
        assert_eq!(compile_target(19), CompileTarget::Es2021);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let err = EngineSupport::parse("not a range").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAnswer { ref key, .. } if key == "nodeEngines"));
    }
}
