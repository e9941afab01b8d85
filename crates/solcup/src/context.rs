//! Global context for CLI commands

use crate::cli::GlobalArgs;
use anyhow::{Result, anyhow};
use solcup_core::config::consts::CONFIG_FILE_NAME;
use solcup_core::config::default_root_dir;
use solcup_core::{Config, NetworkPolicy};
use solcup_solc::Toolchain;

/// Effective configuration after applying command-line overrides
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Loads the configuration file and applies `--root` / `--offline`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit `--config` file does not exist
    /// - The config file cannot be parsed or holds invalid values
    /// - No root is given and the home directory is unknown
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                if !path.exists() {
                    return Err(anyhow!("Config file not found: {}", path.display()));
                }
                Config::from_file(path)?
            }
            None => match &args.root {
                // An explicit root needs no home directory
                Some(root) => {
                    let path = root.join(CONFIG_FILE_NAME);
                    if path.exists() {
                        Config::from_file(&path)?
                    } else {
                        Config::with_root(root)
                    }
                }
                None => Config::load_or_default(default_root_dir()?.join(CONFIG_FILE_NAME))?,
            },
        };

        if let Some(root) = &args.root {
            config.root_dir = root.clone();
        }
        if args.offline {
            config.network.policy = NetworkPolicy::Never;
        }

        log::debug!("using root {}", config.root_dir.display());
        Ok(Self {
            config,
            verbose: args.verbose,
        })
    }

    pub fn toolchain(&self) -> Result<Toolchain> {
        Ok(Toolchain::new(&self.config)?)
    }
}
