//! Version constraint matching and release selection
//!
//! A constraint expression is free text such as `>=0.8.0 <0.9.0` or
//! `^0.8.19`. It is tokenized into sub-constraints (a comparator prefix made
//! of `^ < > = ~ !` followed by one to three dotted numbers), all of which
//! must hold for a release to be selected.
//!
//! | prefix          | meaning                 |
//! |-----------------|-------------------------|
//! | none, `=`, `==` | exact                   |
//! | `^`             | caret (same major/left-most non-zero) |
//! | `~`             | tilde (same minor)      |
//! | `>` `>=` `<` `<=` | ordering              |
//! | `!`, `!=`       | not equal               |

use crate::install::platform::Os;
use crate::release::ReleaseRecord;
use regex::Regex;
use semver::{Comparator, Version};
use std::sync::LazyLock;

static SUBCONSTRAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\^<>=~!]{0,3}\s*\d+(?:\s*\.\s*\d+){0,2}").expect("sub-constraint pattern is valid")
});

/// Splits a constraint expression into normalized sub-constraint tokens
///
/// Order is preserved and duplicates are kept. Whitespace inside a token is
/// removed, so `>= 0.8 .0` becomes `>=0.8.0`.
pub fn extract_subconstraints(expr: &str) -> Vec<String> {
    SUBCONSTRAINT
        .find_iter(expr)
        .map(|m| m.as_str().split_whitespace().collect::<String>())
        .filter(|token| !token.is_empty())
        .collect()
}

/// One parsed sub-constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subconstraint {
    /// Version must satisfy the comparator
    Matches(Comparator),
    /// Version must not satisfy the comparator (`!=`)
    Excludes(Comparator),
    /// Operator not understood; nothing satisfies it
    Unsatisfiable(String),
}

impl Subconstraint {
    pub fn parse(token: &str) -> Self {
        let split = token
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(token.len());
        let (prefix, version) = token.split_at(split);

        let (op, negate) = match prefix {
            "" | "=" | "==" => ("=", false),
            "^" => ("^", false),
            "~" => ("~", false),
            ">" => (">", false),
            ">=" => (">=", false),
            "<" => ("<", false),
            "<=" => ("<=", false),
            "!" | "!=" => ("=", true),
            other => {
                log::warn!("unsupported version operator '{}' in '{}'", other, token);
                return Subconstraint::Unsatisfiable(token.to_string());
            }
        };

        match Comparator::parse(&format!("{}{}", op, version)) {
            Ok(comparator) if negate => Subconstraint::Excludes(comparator),
            Ok(comparator) => Subconstraint::Matches(comparator),
            Err(e) => {
                log::warn!("invalid version constraint '{}': {}", token, e);
                Subconstraint::Unsatisfiable(token.to_string())
            }
        }
    }

    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Subconstraint::Matches(comparator) => comparator.matches(version),
            Subconstraint::Excludes(comparator) => !comparator.matches(version),
            Subconstraint::Unsatisfiable(_) => false,
        }
    }
}

/// Conjunction of sub-constraints parsed from one expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    parts: Vec<Subconstraint>,
}

impl VersionConstraint {
    /// Parses an expression
    ///
    /// An expression with no recognizable sub-constraint yields an
    /// unconstrained matcher and logs a warning.
    pub fn parse(expr: &str) -> Self {
        let tokens = extract_subconstraints(expr);
        if tokens.is_empty() {
            log::warn!(
                "no version constraint found in '{}', accepting any release",
                expr
            );
        }
        Self::from_tokens(&tokens)
    }

    pub fn from_tokens(tokens: &[String]) -> Self {
        Self {
            parts: tokens.iter().map(|t| Subconstraint::parse(t)).collect(),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.parts.iter().all(|part| part.matches(version))
    }

    /// Version satisfies every sub-constraint and a build exists for `os`
    pub fn accepts(&self, release: &ReleaseRecord, os: Os) -> bool {
        if !release.is_available_for(os) {
            return false;
        }
        release.semver().is_some_and(|v| self.matches(&v))
    }
}

/// Whether `release` satisfies every token in `subconstraints` and has a build for `os`
pub fn is_compatible(release: &ReleaseRecord, subconstraints: &[String], os: Os) -> bool {
    VersionConstraint::from_tokens(subconstraints).accepts(release, os)
}

/// Picks the release to use
///
/// `releases` must be ascending by version. Without a constraint the last
/// (highest) release is returned as-is; with one, the last compatible release
/// for `os`, or `None`.
pub fn resolve(constraint: Option<&str>, releases: &[ReleaseRecord], os: Os) -> Option<ReleaseRecord> {
    let Some(expr) = constraint else {
        return releases.last().cloned();
    };

    let constraint = VersionConstraint::parse(expr);
    let selected = releases
        .iter()
        .rev()
        .find(|release| constraint.accepts(release, os))
        .cloned();

    match &selected {
        Some(release) => log::debug!("'{}' resolved to solc {} for {}", expr, release.version, os),
        None => log::debug!("no release satisfies '{}' for {}", expr, os),
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn release(version: &str, mac: bool) -> ReleaseRecord {
        let mac_url = if mac { "https://x/solc-macos" } else { "" };
        ReleaseRecord::new(version, "https://x/solc-windows.exe", "https://x/solc-static-linux", mac_url)
    }

    fn releases() -> Vec<ReleaseRecord> {
        vec![
            release("0.4.26", false),
            release("0.5.17", false),
            release("0.6.12", false),
            release("0.7.6", true),
            release("0.8.0", true),
            release("0.8.19", false),
        ]
    }

    #[test]
    fn test_extract_range() {
        assert_eq!(extract_subconstraints("^0.8.0 <0.9.0"), vec!["^0.8.0", "<0.9.0"]);
    }

    #[test]
    fn test_extract_strips_internal_whitespace() {
        assert_eq!(extract_subconstraints(" >= 0.8 .0 "), vec![">=0.8.0"]);
    }

    #[test]
    fn test_extract_keeps_duplicates_and_partials() {
        assert_eq!(
            extract_subconstraints("^0.8 ^0.8 0"),
            vec!["^0.8", "^0.8", "0"]
        );
    }

    #[test]
    fn test_extract_ignores_garbage() {
        assert!(extract_subconstraints("latest please").is_empty());
        assert!(extract_subconstraints("").is_empty());
    }

    #[test]
    fn test_bare_version_is_exact() {
        let c = VersionConstraint::parse("0.8.0");
        assert!(c.matches(&v("0.8.0")));
        assert!(!c.matches(&v("0.8.1")));
    }

    #[test]
    fn test_caret_and_tilde() {
        let caret = VersionConstraint::parse("^0.8.0");
        assert!(caret.matches(&v("0.8.19")));
        assert!(!caret.matches(&v("0.9.0")));

        let tilde = VersionConstraint::parse("~0.7.1");
        assert!(tilde.matches(&v("0.7.6")));
        assert!(!tilde.matches(&v("0.8.0")));
    }

    #[test]
    fn test_not_equal() {
        let c = VersionConstraint::parse(">=0.8.0 !=0.8.1");
        assert!(c.matches(&v("0.8.0")));
        assert!(!c.matches(&v("0.8.1")));
        assert!(c.matches(&v("0.8.2")));

        let bang = VersionConstraint::parse("!0.8.1");
        assert!(!bang.matches(&v("0.8.1")));
    }

    #[test]
    fn test_unknown_operator_matches_nothing() {
        let c = VersionConstraint::parse("=>0.8.0");
        assert!(!c.is_unconstrained());
        assert!(!c.matches(&v("0.8.0")));
        assert!(resolve(Some("=>0.8.0"), &releases(), Os::Linux).is_none());
    }

    #[test]
    fn test_resolve_without_constraint_is_last() {
        let all = releases();
        assert_eq!(resolve(None, &all, Os::MacOS), all.last().cloned());
        assert_eq!(resolve(None, &[], Os::Linux), None);
    }

    #[test]
    fn test_resolve_picks_highest_compatible() {
        let found = resolve(Some(">=0.5.0 <0.8.0"), &releases(), Os::Linux).unwrap();
        assert_eq!(found.version, "0.7.6");
    }

    #[test]
    fn test_resolve_skips_releases_without_build_for_os() {
        let found = resolve(Some("^0.8.0"), &releases(), Os::MacOS).unwrap();
        assert_eq!(found.version, "0.8.0");

        let found = resolve(Some("^0.8.0"), &releases(), Os::Linux).unwrap();
        assert_eq!(found.version, "0.8.19");
    }

    #[test]
    fn test_resolve_no_match() {
        assert!(resolve(Some("^0.9.0"), &releases(), Os::Linux).is_none());
        assert!(resolve(Some("<0.6.0"), &releases(), Os::MacOS).is_none());
    }

    #[test]
    fn test_empty_constraint_is_unconstrained_but_os_filtered() {
        let found = resolve(Some("whatever"), &releases(), Os::MacOS).unwrap();
        assert_eq!(found.version, "0.8.0");
    }

    #[test]
    fn test_is_compatible() {
        let tokens = extract_subconstraints("^0.8.0 <0.9.0");
        assert!(is_compatible(&release("0.8.19", false), &tokens, Os::Windows));
        assert!(!is_compatible(&release("0.8.19", false), &tokens, Os::MacOS));
        assert!(!is_compatible(&release("0.7.6", true), &tokens, Os::MacOS));
    }

    #[test]
    fn test_resolve_is_maximal() {
        let all = releases();
        for expr in ["^0.8.0", ">=0.4.0", "<0.8.0", "~0.5.0", ">0.5.17 <=0.8.0", "0.6.12"] {
            for os in [Os::Linux, Os::MacOS, Os::Windows] {
                let tokens = extract_subconstraints(expr);
                let expected = all
                    .iter()
                    .filter(|r| is_compatible(r, &tokens, os))
                    .max_by_key(|r| r.semver().unwrap())
                    .cloned();
                assert_eq!(resolve(Some(expr), &all, os), expected, "{} on {}", expr, os);
            }
        }
    }
}
