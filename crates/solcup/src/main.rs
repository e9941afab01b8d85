mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = Context::new(&cli.global).and_then(|ctx| match cli.command {
        Commands::Releases { json } => commands::releases::run(&ctx, json).map(|_| 0),
        Commands::Resolve { constraint, json } => {
            commands::resolve::run(&ctx, constraint, json).map(|_| 0)
        }
        Commands::Install { constraint } => commands::install::run(&ctx, constraint).map(|_| 0),
        Commands::Installed { json } => commands::installed::run(&ctx, json).map(|_| 0),
        Commands::Run {
            constraint,
            from_pragma,
            args,
            sources,
        } => commands::run::run(&ctx, constraint, from_pragma, args, sources),
    });

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// `info` by default, `debug` with --verbose; RUST_LOG overrides both
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
