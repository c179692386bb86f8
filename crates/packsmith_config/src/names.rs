//! Package name normalization.
//!
//! Names may carry an npm scope prefix (`@scope/`). The scope is detected
//! before dash-casing and preserved verbatim; only the unscoped segment is
//! normalized. The "clean" variant strips the scope entirely.

/// Split a name into its optional `@scope` prefix and the bare segment.
pub fn split_scope(name: &str) -> (Option<&str>, &str) {
    if let Some(rest) = name.strip_prefix('@') {
        if let Some(slash) = rest.find('/') {
            return (Some(&name[..slash + 1]), &rest[slash + 1..]);
        }
    }
    (None, name)
}

/// Normalize a name to its package-name form, keeping any scope verbatim.
///
/// `@scope/SomeName` → `@scope/some-name`, `hankCharlie` → `hank-charlie`.
pub fn normalize(name: &str) -> String {
    match split_scope(name) {
        (Some(scope), bare) => format!("{}/{}", scope, dash_case(bare)),
        (None, bare) => dash_case(bare),
    }
}

/// Normalize a name and strip the scope: `@scope/SomeName` → `some-name`.
pub fn normalize_clean(name: &str) -> String {
    let (_, bare) = split_scope(name);
    dash_case(bare)
}

/// Convert a segment to dash-case: lowercase, word boundaries become dashes.
pub fn dash_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_dash = true; // suppress a leading dash
    for c in s.chars() {
        if c.is_uppercase() {
            if !prev_dash {
                result.push('-');
            }
            result.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if c == '_' || c == ' ' || c == '-' || c == '.' {
            if !prev_dash {
                result.push('-');
            }
            prev_dash = true;
        } else {
            result.push(c);
            prev_dash = false;
        }
    }
    while result.ends_with('-') {
        result.pop();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_case() {
        assert_eq!(dash_case("hankCharlie"), "hank-charlie");
        assert_eq!(dash_case("SomeName"), "some-name");
        assert_eq!(dash_case("my project"), "my-project");
        assert_eq!(dash_case("already-dashed"), "already-dashed");
        assert_eq!(dash_case("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn test_normalize_scoped() {
        assert_eq!(normalize("@scope/SomeName"), "@scope/some-name");
        assert_eq!(normalize("@sammy/ellie"), "@sammy/ellie");
    }

    #[test]
    fn test_normalize_unscoped() {
        assert_eq!(normalize("hankCharlie"), "hank-charlie");
        assert_eq!(normalize("bella"), "bella");
    }

    #[test]
    fn test_normalize_clean_strips_scope() {
        assert_eq!(normalize_clean("@scope/SomeName"), "some-name");
        assert_eq!(normalize_clean("@sammy/ellie"), "ellie");
        assert_eq!(normalize_clean("bella"), "bella");
    }

    #[test]
    fn test_scope_preserved_verbatim() {
        // Scope casing is not normalized, only the bare segment is.
        assert_eq!(normalize("@MyOrg/SomeName"), "@MyOrg/some-name");
    }
}
