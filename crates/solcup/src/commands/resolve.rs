//! Resolve command - show which release a constraint selects

use crate::context::Context;
use crate::output::{print_json, print_line};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct Resolution {
    constraint: Option<String>,
    version: String,
    download_url: Option<String>,
    installed: bool,
    binary_path: PathBuf,
}

/// Execute `solcup resolve [CONSTRAINT]`
pub fn run(ctx: &Context, constraint: Option<String>, json: bool) -> Result<()> {
    let toolchain = ctx.toolchain()?;
    let release = toolchain.require(constraint.as_deref())?;
    let instance = toolchain.instance(&release);

    let resolution = Resolution {
        download_url: release.download_url(toolchain.os()).map(str::to_string),
        installed: instance.is_installed(),
        binary_path: instance.binary_path.clone(),
        version: release.version,
        constraint,
    };

    if json {
        print_json(&resolution)?;
        return Ok(());
    }

    print_line(&format!(
        "✓ {} → solc {}",
        resolution.constraint.as_deref().unwrap_or("latest"),
        resolution.version
    ))?;
    if resolution.installed {
        print_line(&format!("  installed at {}", resolution.binary_path.display()))?;
    } else {
        print_line("  not installed")?;
    }
    Ok(())
}
