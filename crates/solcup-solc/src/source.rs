//! Solidity source files as compiler inputs
//!
//! A source presents its compiler requirement through the
//! `pragma solidity <constraint>;` directive.

use regex::Regex;
use solcup_core::{Result, SolcupError};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PRAGMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*pragma\s+solidity\s+([^;]+);").expect("pragma pattern is valid")
});

/// Constraint of the first `pragma solidity` directive in `contents`
pub fn pragma_constraint(contents: &str) -> Option<String> {
    PRAGMA
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|constraint| !constraint.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidityFile {
    path: PathBuf,
}

impl SolidityFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file and extracts its pragma constraint, if any
    pub fn read_pragma(&self) -> Result<Option<String>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            SolcupError::Generic(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        Ok(pragma_constraint(&contents))
    }
}

/// Joins the pragma constraints of several sources into one conjunctive expression
///
/// Sources without a pragma contribute nothing; `None` when none has one.
pub fn combined_pragma(files: &[SolidityFile]) -> Result<Option<String>> {
    let mut constraints = Vec::new();
    for file in files {
        if let Some(constraint) = file.read_pragma()? {
            constraints.push(constraint);
        }
    }
    Ok((!constraints.is_empty()).then(|| constraints.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solcup_testkit::temp_dir_in_workspace;

    #[test]
    fn test_pragma_constraint() {
        let source = "// SPDX-License-Identifier: MIT\npragma solidity >=0.8.0 <0.9.0;\n\ncontract A {}\n";
        assert_eq!(pragma_constraint(source), Some(">=0.8.0 <0.9.0".to_string()));
    }

    #[test]
    fn test_pragma_ignores_other_pragmas() {
        let source = "pragma abicoder v2;\npragma solidity ^0.7.6;\n";
        assert_eq!(pragma_constraint(source), Some("^0.7.6".to_string()));
    }

    #[test]
    fn test_pragma_missing() {
        assert_eq!(pragma_constraint("contract A {}"), None);
        assert_eq!(pragma_constraint("// pragma solidity ^0.8.0;"), None);
    }

    #[test]
    fn test_combined_pragma() {
        let temp = temp_dir_in_workspace();
        let a = temp.path().join("A.sol");
        let b = temp.path().join("B.sol");
        let c = temp.path().join("C.sol");
        fs::write(&a, "pragma solidity ^0.8.0;").unwrap();
        fs::write(&b, "pragma solidity <0.8.20;").unwrap();
        fs::write(&c, "contract C {}").unwrap();

        let files = vec![SolidityFile::new(&a), SolidityFile::new(&b), SolidityFile::new(&c)];
        assert_eq!(
            combined_pragma(&files).unwrap(),
            Some("^0.8.0 <0.8.20".to_string())
        );
        assert_eq!(combined_pragma(&files[2..]).unwrap(), None);
    }

    #[test]
    fn test_read_pragma_missing_file() {
        let temp = temp_dir_in_workspace();
        let err = SolidityFile::new(temp.path().join("missing.sol"))
            .read_pragma()
            .unwrap_err();
        assert!(err.to_string().contains("missing.sol"));
    }
}
