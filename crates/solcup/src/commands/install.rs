//! Install command - install the release a constraint resolves to

use crate::context::Context;
use anyhow::Result;

/// Execute `solcup install [CONSTRAINT]`
pub fn run(ctx: &Context, constraint: Option<String>) -> Result<()> {
    let toolchain = ctx.toolchain()?;
    let release = toolchain.require(constraint.as_deref())?;

    if toolchain.installer().is_installed(&release) {
        let instance = toolchain.instance(&release);
        println!(
            "✓ solc {} already installed at {}",
            release.version,
            instance.binary_path.display()
        );
        return Ok(());
    }

    println!("Installing solc {}...", release.version);
    let instance = toolchain.install(&release)?;
    println!(
        "✓ Installed solc {} at {}",
        instance.version(),
        instance.binary_path.display()
    );
    Ok(())
}
