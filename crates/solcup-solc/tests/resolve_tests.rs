//! Integration tests for constraint resolution against realistic release lists

use solcup_solc::{Os, ReleaseRecord, extract_subconstraints, is_compatible, resolve};

fn release(version: &str, mac: &str) -> ReleaseRecord {
    ReleaseRecord::new(
        version,
        format!("https://x/v{}/solc-windows.exe", version),
        format!("https://x/v{}/solc-static-linux", version),
        mac,
    )
}

#[test]
fn test_mac_caret_skips_releases_without_mac_build() {
    // 0.8.1 has no macOS build, so ^0.8.0 must settle on 0.8.0
    let releases = vec![
        release("0.7.6", "https://x/solc-macos"),
        release("0.8.0", "https://x/solc-macos"),
        release("0.8.1", ""),
    ];

    let selected = resolve(Some("^0.8.0"), &releases, Os::MacOS).unwrap();
    assert_eq!(selected.version, "0.8.0");
}

#[test]
fn test_range_tokenizing() {
    assert_eq!(
        extract_subconstraints("^0.8.0 <0.9.0"),
        vec!["^0.8.0".to_string(), "<0.9.0".to_string()]
    );
}

#[test]
fn test_pragma_style_range() {
    let releases: Vec<_> = ["0.4.26", "0.5.17", "0.6.12", "0.7.6", "0.8.0", "0.8.26"]
        .iter()
        .map(|v| release(v, "https://x/solc-macos"))
        .collect();

    let selected = resolve(Some(">=0.4.22 <0.8.0"), &releases, Os::Linux).unwrap();
    assert_eq!(selected.version, "0.7.6");

    let selected = resolve(Some("=0.5.17"), &releases, Os::Windows).unwrap();
    assert_eq!(selected.version, "0.5.17");
}

#[test]
fn test_no_constraint_returns_last_even_without_os_build() {
    let releases = vec![release("0.8.0", "https://x/solc-macos"), release("0.8.1", "")];
    let selected = resolve(None, &releases, Os::MacOS).unwrap();
    assert_eq!(selected.version, "0.8.1");
}

#[test]
fn test_selection_is_maximal_over_bundled_snapshot() {
    let releases = solcup_solc::catalog::bundled_releases().unwrap();

    for expr in ["^0.8.0", "^0.7.0", "~0.6.0", ">=0.5.0 <0.8.0", "0.8.19", ">0.8.10 !=0.8.26"] {
        for os in [Os::Linux, Os::MacOS, Os::Windows] {
            let tokens = extract_subconstraints(expr);
            let selected = resolve(Some(expr), &releases, os);

            if let Some(selected) = &selected {
                assert!(is_compatible(selected, &tokens, os));
                let best = selected.semver().unwrap();
                assert!(
                    releases
                        .iter()
                        .filter(|r| is_compatible(r, &tokens, os))
                        .all(|r| r.semver().unwrap() <= best),
                    "{} on {} is not maximal",
                    expr,
                    os
                );
            } else {
                assert!(!releases.iter().any(|r| is_compatible(r, &tokens, os)));
            }
        }
    }
}
