//! Installed command - list compilers present under the root

use crate::context::Context;
use crate::output::{print_json, print_line};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct InstalledEntry {
    version: String,
    path: PathBuf,
}

/// Execute `solcup installed`
pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let toolchain = ctx.toolchain()?;
    let installer = toolchain.installer();

    // Newest first
    let entries: Vec<InstalledEntry> = toolchain
        .installed_versions()?
        .into_iter()
        .rev()
        .map(|version| {
            let version = version.to_string();
            let path = installer
                .paths()
                .binary_path(&version, installer.os().binary_name());
            InstalledEntry { version, path }
        })
        .collect();

    if json {
        print_json(&entries)?;
        return Ok(());
    }

    if entries.is_empty() {
        print_line("No solc versions installed")?;
        return Ok(());
    }

    print_line("Installed solc versions:")?;
    for entry in &entries {
        if ctx.verbose {
            print_line(&format!("  {}  {}", entry.version, entry.path.display()))?;
        } else {
            print_line(&format!("  {}", entry.version))?;
        }
    }
    Ok(())
}
