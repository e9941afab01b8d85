//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "solcup")]
#[command(version, about = "Resolve, install and run Solidity compilers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the release cache and installed compilers
    #[arg(long, global = true, env = "SOLCUP_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (default: ~/.solcup/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Never contact the release listing; use the cache or bundled snapshot
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available compiler releases
    Releases {
        #[arg(long)]
        json: bool,
    },

    /// Show which release a constraint resolves to
    Resolve {
        /// Version constraint (e.g. "^0.8.0" or ">=0.7.0 <0.9.0"); latest if omitted
        constraint: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Install the release a constraint resolves to
    Install {
        /// Version constraint; latest if omitted
        constraint: Option<String>,
    },

    /// List installed compilers
    Installed {
        #[arg(long)]
        json: bool,
    },

    /// Run a compiler on Solidity sources, exiting with its status
    Run {
        /// Version constraint
        #[arg(short, long, conflicts_with = "from_pragma")]
        constraint: Option<String>,

        /// Take the constraint from the sources' `pragma solidity` lines
        #[arg(long)]
        from_pragma: bool,

        /// Compiler option, repeatable, passed through in order (e.g. --arg=--bin)
        #[arg(long = "arg", value_name = "TOKEN", allow_hyphen_values = true)]
        args: Vec<String>,

        /// Solidity source files
        #[arg(required = true)]
        sources: Vec<PathBuf>,
    },
}
