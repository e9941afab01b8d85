//! Releases command - list compiler releases known to the catalog

use crate::context::Context;
use crate::output::{print_json, print_line};
use anyhow::Result;

/// Execute `solcup releases`
pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let toolchain = ctx.toolchain()?;
    let (releases, source) = toolchain.releases_with_source()?;

    if json {
        print_json(&releases)?;
        return Ok(());
    }

    let os = toolchain.os();
    print_line(&format!("solc releases ({} from {}):", releases.len(), source))?;
    for release in releases.iter().rev() {
        match release.download_url(os) {
            Some(url) if ctx.verbose => print_line(&format!("  {}  {}", release.version, url))?,
            Some(_) => print_line(&format!("  {}", release.version))?,
            None => print_line(&format!("  {}  (no {} build)", release.version, os))?,
        }
    }
    Ok(())
}
