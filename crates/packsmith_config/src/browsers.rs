//! Browser support derivation.
//!
//! A Browserslist-style query string is resolved against an embedded
//! browser-version snapshot into concrete (family, version) pairs, then
//! projected twice: into bundler target identifiers (esbuild spelling,
//! oldest version per family) and into CSS-transform targets (mobile and
//! legacy aliases folded into their desktop family).

use std::collections::BTreeMap;

use crate::error::{ConfigError, ConfigResult};

/// Browser family, keyed the way Browserslist spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BrowserFamily {
    Chrome,
    Edge,
    Firefox,
    Safari,
    Opera,
    Ie,
    IosSaf,
    AndChr,
    AndFf,
    Android,
    Samsung,
    OpMob,
    IeMob,
}

impl BrowserFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserFamily::Chrome => "chrome",
            BrowserFamily::Edge => "edge",
            BrowserFamily::Firefox => "firefox",
            BrowserFamily::Safari => "safari",
            BrowserFamily::Opera => "opera",
            BrowserFamily::Ie => "ie",
            BrowserFamily::IosSaf => "ios_saf",
            BrowserFamily::AndChr => "and_chr",
            BrowserFamily::AndFf => "and_ff",
            BrowserFamily::Android => "android",
            BrowserFamily::Samsung => "samsung",
            BrowserFamily::OpMob => "op_mob",
            BrowserFamily::IeMob => "ie_mob",
        }
    }

    pub fn from_str(s: &str) -> ConfigResult<Self> {
        match s {
            "chrome" => Ok(BrowserFamily::Chrome),
            "edge" => Ok(BrowserFamily::Edge),
            "firefox" | "ff" => Ok(BrowserFamily::Firefox),
            "safari" => Ok(BrowserFamily::Safari),
            "opera" => Ok(BrowserFamily::Opera),
            "ie" | "explorer" => Ok(BrowserFamily::Ie),
            "ios_saf" | "ios" => Ok(BrowserFamily::IosSaf),
            "and_chr" | "chromeandroid" => Ok(BrowserFamily::AndChr),
            "and_ff" | "firefoxandroid" => Ok(BrowserFamily::AndFf),
            "android" => Ok(BrowserFamily::Android),
            "samsung" => Ok(BrowserFamily::Samsung),
            "op_mob" | "operamobile" => Ok(BrowserFamily::OpMob),
            "ie_mob" | "explorermobile" => Ok(BrowserFamily::IeMob),
            other => Err(ConfigError::UnknownTargetIdentifier(other.to_string())),
        }
    }
}

impl std::fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A browser version: major plus optional minor (`13.4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrowserVersion {
    pub major: u32,
    pub minor: u32,
}

impl BrowserVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        BrowserVersion { major, minor }
    }

    /// Parse a version token. Ranges (`13.4-13.7`) take the lower bound;
    /// `all` maps to version 1.
    pub fn parse(token: &str) -> ConfigResult<Self> {
        if token == "all" {
            return Ok(BrowserVersion::new(1, 0));
        }
        let lower = token.split('-').next().unwrap_or(token);
        let mut parts = lower.splitn(2, '.');
        let major = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| ConfigError::invalid("browsers", format!("bad version '{token}'")))?;
        let minor = match parts.next() {
            Some(p) => p
                .parse::<u32>()
                .map_err(|_| ConfigError::invalid("browsers", format!("bad version '{token}'")))?,
            None => 0,
        };
        Ok(BrowserVersion::new(major, minor))
    }
}

impl std::fmt::Display for BrowserVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.minor == 0 {
            write!(f, "{}", self.major)
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

const fn v(major: u32, minor: u32) -> BrowserVersion {
    BrowserVersion::new(major, minor)
}

/// Embedded release snapshot, oldest to newest per family. Queries like
/// `last 2 versions` are evaluated against this table rather than a live
/// caniuse database.
const SNAPSHOT: &[(BrowserFamily, &[BrowserVersion])] = &[
    (BrowserFamily::Chrome, &[v(118, 0), v(119, 0), v(120, 0), v(121, 0), v(122, 0), v(123, 0)]),
    (BrowserFamily::Edge, &[v(118, 0), v(119, 0), v(120, 0), v(121, 0), v(122, 0)]),
    (BrowserFamily::Firefox, &[v(119, 0), v(120, 0), v(121, 0), v(122, 0), v(123, 0)]),
    (BrowserFamily::Safari, &[v(16, 6), v(17, 0), v(17, 1), v(17, 2), v(17, 3), v(17, 4)]),
    (BrowserFamily::IosSaf, &[v(16, 6), v(17, 0), v(17, 1), v(17, 2), v(17, 3), v(17, 4)]),
    (BrowserFamily::Opera, &[v(104, 0), v(105, 0), v(106, 0), v(107, 0), v(108, 0)]),
    (BrowserFamily::AndChr, &[v(122, 0)]),
    (BrowserFamily::AndFf, &[v(123, 0)]),
    (BrowserFamily::Samsung, &[v(22, 0), v(23, 0)]),
    (BrowserFamily::Android, &[v(122, 0)]),
    (BrowserFamily::Ie, &[v(11, 0)]),
];

/// Families included by the bare `defaults` and `last N versions` queries.
const DEFAULT_FAMILIES: &[BrowserFamily] = &[
    BrowserFamily::Chrome,
    BrowserFamily::Edge,
    BrowserFamily::Firefox,
    BrowserFamily::Safari,
    BrowserFamily::IosSaf,
    BrowserFamily::AndChr,
];

fn snapshot_versions(family: BrowserFamily) -> ConfigResult<&'static [BrowserVersion]> {
    SNAPSHOT
        .iter()
        .find(|(f, _)| *f == family)
        .map(|(_, versions)| *versions)
        .ok_or_else(|| ConfigError::UnknownTargetIdentifier(family.as_str().to_string()))
}

/// Resolve a query string into (family, version) pairs.
///
/// Entries are separated by `,` or `or`. Supported forms: `defaults`,
/// `last N versions`, `last N <family> versions`, `<family> >= V`,
/// `<family> V` (where V may be a range or `all`).
pub fn resolve_query(raw: &str) -> ConfigResult<Vec<(BrowserFamily, BrowserVersion)>> {
    let normalized = raw.to_ascii_lowercase().replace(" or ", ",");
    let mut resolved = Vec::new();

    for entry in normalized.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        resolve_entry(entry, &mut resolved)?;
    }

    if resolved.is_empty() {
        return Err(ConfigError::invalid("browsers", format!("query '{raw}' selects no browsers")));
    }
    Ok(resolved)
}

fn resolve_entry(
    entry: &str,
    out: &mut Vec<(BrowserFamily, BrowserVersion)>,
) -> ConfigResult<()> {
    if entry == "defaults" {
        for &family in DEFAULT_FAMILIES {
            let versions = snapshot_versions(family)?;
            // Second-newest release, matching the conservative Browserslist default.
            let idx = versions.len().saturating_sub(2);
            out.push((family, versions[idx]));
        }
        return Ok(());
    }

    let words: Vec<&str> = entry.split_whitespace().collect();

    // last N versions / last N <family> versions
    if words.first() == Some(&"last") && words.last() == Some(&"versions") {
        let count: usize = words
            .get(1)
            .and_then(|w| w.parse().ok())
            .ok_or_else(|| ConfigError::invalid("browsers", format!("bad entry '{entry}'")))?;
        let families: Vec<BrowserFamily> = if words.len() == 3 {
            DEFAULT_FAMILIES.to_vec()
        } else if words.len() == 4 {
            vec![BrowserFamily::from_str(words[2])?]
        } else {
            return Err(ConfigError::invalid("browsers", format!("bad entry '{entry}'")));
        };
        for family in families {
            let versions = snapshot_versions(family)?;
            let start = versions.len().saturating_sub(count);
            for &version in &versions[start..] {
                out.push((family, version));
            }
        }
        return Ok(());
    }

    // <family> >= V
    if words.len() == 3 && words[1] == ">=" {
        let family = BrowserFamily::from_str(words[0])?;
        let version = BrowserVersion::parse(words[2])?;
        out.push((family, version));
        return Ok(());
    }

    // <family> V (also tolerates `family >=V` without the space)
    if words.len() == 2 {
        let family = BrowserFamily::from_str(words[0])?;
        let token = words[1].strip_prefix(">=").unwrap_or(words[1]);
        let version = BrowserVersion::parse(token)?;
        out.push((family, version));
        return Ok(());
    }

    Err(ConfigError::invalid("browsers", format!("bad entry '{entry}'")))
}

/// Oldest version per family. The map is ordered, so downstream projections
/// are independent of query entry order.
pub fn oldest_per_family(
    resolved: &[(BrowserFamily, BrowserVersion)],
) -> BTreeMap<BrowserFamily, BrowserVersion> {
    let mut minimums = BTreeMap::new();
    for &(family, version) in resolved {
        minimums
            .entry(family)
            .and_modify(|current: &mut BrowserVersion| {
                if version < *current {
                    *current = version;
                }
            })
            .or_insert(version);
    }
    minimums
}

/// Bundler (esbuild) identifier for a family. IE has no bundler target.
fn bundler_id(family: BrowserFamily) -> ConfigResult<&'static str> {
    match family {
        BrowserFamily::Chrome
        | BrowserFamily::AndChr
        | BrowserFamily::Android
        | BrowserFamily::Samsung => Ok("chrome"),
        BrowserFamily::Edge => Ok("edge"),
        BrowserFamily::Firefox | BrowserFamily::AndFf => Ok("firefox"),
        BrowserFamily::Safari => Ok("safari"),
        BrowserFamily::IosSaf => Ok("ios"),
        BrowserFamily::Opera | BrowserFamily::OpMob => Ok("opera"),
        BrowserFamily::Ie | BrowserFamily::IeMob => {
            Err(ConfigError::UnknownTargetIdentifier(family.as_str().to_string()))
        }
    }
}

/// CSS-transform family for a browser, folding mobile and legacy aliases
/// into their desktop family.
fn css_family(family: BrowserFamily) -> &'static str {
    match family {
        BrowserFamily::Chrome
        | BrowserFamily::AndChr
        | BrowserFamily::Android
        | BrowserFamily::Samsung => "chrome",
        BrowserFamily::Edge => "edge",
        BrowserFamily::Firefox | BrowserFamily::AndFf => "firefox",
        BrowserFamily::Safari | BrowserFamily::IosSaf => "safari",
        BrowserFamily::Opera | BrowserFamily::OpMob => "opera",
        BrowserFamily::Ie | BrowserFamily::IeMob => "ie",
    }
}

/// Project family minimums into bundler target identifiers (`chrome118`,
/// `ios16.6`), taking the oldest version per bundler id.
pub fn bundler_targets(
    minimums: &BTreeMap<BrowserFamily, BrowserVersion>,
) -> ConfigResult<Vec<String>> {
    let mut by_id: BTreeMap<&'static str, BrowserVersion> = BTreeMap::new();
    for (&family, &version) in minimums {
        let id = bundler_id(family)?;
        by_id
            .entry(id)
            .and_modify(|current| {
                if version < *current {
                    *current = version;
                }
            })
            .or_insert(version);
    }
    Ok(by_id.into_iter().map(|(id, version)| format!("{id}{version}")).collect())
}

/// Project family minimums into CSS-transform targets, oldest version per
/// folded family.
pub fn css_targets(
    minimums: &BTreeMap<BrowserFamily, BrowserVersion>,
) -> BTreeMap<&'static str, BrowserVersion> {
    let mut by_family: BTreeMap<&'static str, BrowserVersion> = BTreeMap::new();
    for (&family, &version) in minimums {
        let id = css_family(family);
        by_family
            .entry(id)
            .and_modify(|current| {
                if version < *current {
                    *current = version;
                }
            })
            .or_insert(version);
    }
    by_family
}

/// Fully derived browser support for one configuration.
#[derive(Debug, Clone)]
pub struct BrowserSupport {
    /// Original query string, kept for display and the `browserslist` field.
    pub raw: String,
    /// Oldest supported version per browser family.
    pub minimums: BTreeMap<BrowserFamily, BrowserVersion>,
    /// esbuild-style target identifiers, sorted.
    pub bundler_targets: Vec<String>,
    /// CSS-transform targets, folded to desktop families.
    pub css_targets: BTreeMap<&'static str, BrowserVersion>,
}

impl BrowserSupport {
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        let resolved = resolve_query(raw)?;
        let minimums = oldest_per_family(&resolved);
        let bundler_targets = bundler_targets(&minimums)?;
        let css_targets = css_targets(&minimums);
        Ok(BrowserSupport { raw: raw.to_string(), minimums, bundler_targets, css_targets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_pins() {
        let resolved = resolve_query("chrome 120, firefox 121").unwrap();
        assert_eq!(
            resolved,
            vec![
                (BrowserFamily::Chrome, v(120, 0)),
                (BrowserFamily::Firefox, v(121, 0)),
            ]
        );
    }

    #[test]
    fn test_range_takes_lower_bound() {
        let resolved = resolve_query("ios_saf 13.4-13.7").unwrap();
        assert_eq!(resolved, vec![(BrowserFamily::IosSaf, v(13, 4))]);
    }

    #[test]
    fn test_all_maps_to_version_one() {
        let resolved = resolve_query("opera all").unwrap();
        assert_eq!(resolved, vec![(BrowserFamily::Opera, v(1, 0))]);
    }

    #[test]
    fn test_unknown_family_is_fatal() {
        let err = resolve_query("netscape 4").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTargetIdentifier(ref id) if id == "netscape"));
    }

    #[test]
    fn test_oldest_per_family() {
        let resolved = resolve_query("chrome 120, chrome 118, chrome 123").unwrap();
        let minimums = oldest_per_family(&resolved);
        assert_eq!(minimums[&BrowserFamily::Chrome], v(118, 0));
    }

    #[test]
    fn test_bundler_targets_are_order_independent() {
        let a = BrowserSupport::parse("chrome 120, safari 16.6, ios_saf 17.0").unwrap();
        let b = BrowserSupport::parse("ios_saf 17.0, chrome 120, safari 16.6").unwrap();
        assert_eq!(a.bundler_targets, b.bundler_targets);
        assert_eq!(a.bundler_targets, vec!["chrome120", "ios17", "safari16.6"]);
    }

    #[test]
    fn test_bundler_targets_idempotent() {
        let first = BrowserSupport::parse("defaults").unwrap();
        let second = BrowserSupport::parse("defaults").unwrap();
        assert_eq!(first.bundler_targets, second.bundler_targets);
        assert_eq!(first.css_targets, second.css_targets);
    }

    #[test]
    fn test_bundler_rejects_ie() {
        let err = BrowserSupport::parse("ie 11").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTargetIdentifier(_)));
    }

    #[test]
    fn test_css_folds_mobile_aliases() {
        let support = BrowserSupport::parse("and_chr 122, chrome 118, ios_saf 16.6").unwrap();
        // and_chr folds into chrome; the older desktop pin wins.
        assert_eq!(support.css_targets["chrome"], v(118, 0));
        // ios_saf folds into safari.
        assert_eq!(support.css_targets["safari"], v(16, 6));
    }

    #[test]
    fn test_last_n_versions() {
        let resolved = resolve_query("last 2 firefox versions").unwrap();
        assert_eq!(
            resolved,
            vec![
                (BrowserFamily::Firefox, v(122, 0)),
                (BrowserFamily::Firefox, v(123, 0)),
            ]
        );
    }

    #[test]
    fn test_defaults_query() {
        let support = BrowserSupport::parse("defaults").unwrap();
        assert!(support.minimums.contains_key(&BrowserFamily::Chrome));
        assert!(support.minimums.contains_key(&BrowserFamily::IosSaf));
    }
}
