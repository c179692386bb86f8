//! Cloud test-runner capability matrices.
//!
//! Integration testing runs against two hosted browser grids. Each derived
//! browser minimum is mapped through a static lookup into the capability
//! object shape the grid expects. A browser with no entry is a configuration
//! error; silently dropping a requested target would produce an incorrect
//! test matrix.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::browsers::{BrowserFamily, BrowserVersion};
use crate::error::{ConfigError, ConfigResult};

/// Sauce-style capability descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SauceCapability {
    pub browser_name: &'static str,
    pub platform_name: &'static str,
    pub browser_version: String,
}

/// BrowserStack-style capability descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserStackCapability {
    pub browser: &'static str,
    pub os: &'static str,
    pub os_version: &'static str,
    pub browser_version: String,
}

/// Both descriptor lists, built in parallel from the same browser set.
#[derive(Debug, Clone, Serialize)]
pub struct CloudMatrix {
    pub sauce: Vec<SauceCapability>,
    pub browserstack: Vec<BrowserStackCapability>,
}

/// Static grid shapes per browser family: (sauce browser/platform,
/// browserstack browser/os/os_version).
fn grid_entry(
    family: BrowserFamily,
) -> ConfigResult<((&'static str, &'static str), (&'static str, &'static str, &'static str))> {
    match family {
        BrowserFamily::Chrome => Ok((("chrome", "Windows 11"), ("Chrome", "Windows", "11"))),
        BrowserFamily::Edge => Ok((("MicrosoftEdge", "Windows 11"), ("Edge", "Windows", "11"))),
        BrowserFamily::Firefox => Ok((("firefox", "Windows 11"), ("Firefox", "Windows", "11"))),
        BrowserFamily::Safari => Ok((("safari", "macOS 14"), ("Safari", "OS X", "Sonoma"))),
        BrowserFamily::IosSaf => Ok((("Safari", "iOS"), ("Mobile Safari", "ios", "17"))),
        BrowserFamily::AndChr => Ok((("Chrome", "Android"), ("Android Browser", "android", "14"))),
        BrowserFamily::Ie => Ok((("internet explorer", "Windows 10"), ("IE", "Windows", "10"))),
        other => Err(ConfigError::UnknownTargetIdentifier(other.as_str().to_string())),
    }
}

impl CloudMatrix {
    /// Build both matrices from the derived per-family minimums.
    pub fn build(
        minimums: &BTreeMap<BrowserFamily, BrowserVersion>,
    ) -> ConfigResult<CloudMatrix> {
        let mut sauce = Vec::with_capacity(minimums.len());
        let mut browserstack = Vec::with_capacity(minimums.len());

        for (&family, &version) in minimums {
            let ((sauce_browser, sauce_platform), (bs_browser, bs_os, bs_os_version)) =
                grid_entry(family)?;
            sauce.push(SauceCapability {
                browser_name: sauce_browser,
                platform_name: sauce_platform,
                browser_version: version.to_string(),
            });
            browserstack.push(BrowserStackCapability {
                browser: bs_browser,
                os: bs_os,
                os_version: bs_os_version,
                browser_version: version.to_string(),
            });
        }

        Ok(CloudMatrix { sauce, browserstack })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimums(
        entries: &[(BrowserFamily, u32, u32)],
    ) -> BTreeMap<BrowserFamily, BrowserVersion> {
        entries
            .iter()
            .map(|&(f, major, minor)| (f, BrowserVersion::new(major, minor)))
            .collect()
    }

    #[test]
    fn test_parallel_lists_same_length() {
        let matrix = CloudMatrix::build(&minimums(&[
            (BrowserFamily::Chrome, 120, 0),
            (BrowserFamily::Safari, 17, 0),
        ]))
        .unwrap();
        assert_eq!(matrix.sauce.len(), 2);
        assert_eq!(matrix.browserstack.len(), 2);
    }

    #[test]
    fn test_capability_shapes() {
        let matrix =
            CloudMatrix::build(&minimums(&[(BrowserFamily::IosSaf, 16, 6)])).unwrap();
        assert_eq!(matrix.sauce[0].browser_name, "Safari");
        assert_eq!(matrix.sauce[0].platform_name, "iOS");
        assert_eq!(matrix.sauce[0].browser_version, "16.6");
        assert_eq!(matrix.browserstack[0].browser, "Mobile Safari");
    }

    #[test]
    fn test_unknown_id_is_fatal() {
        let err = CloudMatrix::build(&minimums(&[(BrowserFamily::Samsung, 23, 0)])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTargetIdentifier(ref id) if id == "samsung"));
    }
}
