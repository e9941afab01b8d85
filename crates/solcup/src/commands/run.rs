//! Run command - resolve, install and run solc on the given sources

use crate::context::Context;
use anyhow::Result;
use solcup_solc::source::{SolidityFile, combined_pragma};
use solcup_core::SolcupError;
use solcup_solc::{RunOutcome, SolcArg};
use std::path::PathBuf;

/// Execute `solcup run`, returning the exit code for the process
pub fn run(
    ctx: &Context,
    constraint: Option<String>,
    from_pragma: bool,
    args: Vec<String>,
    sources: Vec<PathBuf>,
) -> Result<i32> {
    let constraint = if from_pragma {
        let files: Vec<SolidityFile> = sources.iter().map(SolidityFile::new).collect();
        let pragma = combined_pragma(&files)?;
        match &pragma {
            Some(expr) => log::info!("Using constraint '{}' from pragma", expr),
            None => log::warn!("No pragma solidity found, using latest release"),
        }
        pragma
    } else {
        constraint
    };

    let options: Vec<SolcArg> = args.into_iter().map(SolcArg::from).collect();
    let toolchain = ctx.toolchain()?;
    let outcome = toolchain.run(constraint.as_deref(), &options, &sources)?;

    match &outcome {
        RunOutcome::Completed(_) => {}
        RunOutcome::TimedOut => eprintln!(
            "✗ solc did not finish within {}s",
            ctx.config.exec.timeout_secs
        ),
        RunOutcome::InstallFailed(reason) => eprintln!("✗ Could not install solc: {}", reason),
        RunOutcome::SpawnFailed(reason) => {
            let err = SolcupError::ExecFailed(format!("could not start solc: {}", reason));
            return Err(err.into());
        }
    }

    Ok(outcome.code())
}
