use super::consts;
use crate::error::{Result, SolcupError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// config.toml schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Root of everything solcup writes (`<root>/solc/...`)
    #[serde(default = "fallback_root_dir")]
    pub root_dir: PathBuf,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub exec: ExecConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    #[serde(default = "default_network_policy")]
    pub policy: NetworkPolicy,
    #[serde(default = "default_releases_url")]
    pub releases_url: String,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
    #[serde(default = "default_download_timeout_secs")]
    pub download_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            policy: NetworkPolicy::Auto,
            releases_url: default_releases_url(),
            connect_timeout_ms: consts::network::CONNECT_TIMEOUT_MS,
            read_timeout_ms: consts::network::READ_TIMEOUT_MS,
            download_timeout_secs: consts::network::DOWNLOAD_TIMEOUT_SECS,
        }
    }
}

impl NetworkConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NetworkPolicy {
    Auto,
    Never,
}

fn default_network_policy() -> NetworkPolicy {
    NetworkPolicy::Auto
}

fn default_releases_url() -> String {
    consts::network::RELEASES_URL.to_string()
}

fn default_connect_timeout_ms() -> u64 {
    consts::network::CONNECT_TIMEOUT_MS
}

fn default_read_timeout_ms() -> u64 {
    consts::network::READ_TIMEOUT_MS
}

fn default_download_timeout_secs() -> u64 {
    consts::network::DOWNLOAD_TIMEOUT_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecConfig {
    #[serde(default = "default_exec_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_timeout_policy")]
    pub on_timeout: TimeoutPolicy,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            timeout_secs: consts::exec::TIMEOUT_SECS,
            on_timeout: TimeoutPolicy::Detach,
        }
    }
}

impl ExecConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// What happens to a compiler process that outlives the wait ceiling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeoutPolicy {
    /// Stop waiting and leave the process running
    Detach,
    /// Kill and reap the process
    Kill,
}

fn default_exec_timeout_secs() -> u64 {
    consts::exec::TIMEOUT_SECS
}

fn default_timeout_policy() -> TimeoutPolicy {
    TimeoutPolicy::Detach
}

impl Config {
    /// Configuration rooted at an explicit directory, all other values default
    pub fn with_root(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            network: NetworkConfig::default(),
            exec: ExecConfig::default(),
        }
    }

    /// Default configuration rooted at `<home>/.solcup`
    pub fn from_home() -> Result<Self> {
        Ok(Self::with_root(default_root_dir()?))
    }

    /// Parse a config.toml file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SolcupError::ConfigParseError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SolcupError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to [`Config::from_home`]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Self::from_home()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.network.connect_timeout_ms == 0 {
            return Err(invalid("network.connect_timeout_ms", "must be greater than zero"));
        }
        if self.network.read_timeout_ms == 0 {
            return Err(invalid("network.read_timeout_ms", "must be greater than zero"));
        }
        if self.network.download_timeout_secs == 0 {
            return Err(invalid("network.download_timeout_secs", "must be greater than zero"));
        }
        if self.exec.timeout_secs == 0 {
            return Err(invalid("exec.timeout_secs", "must be greater than zero"));
        }
        url::Url::parse(&self.network.releases_url)
            .map_err(|e| invalid("network.releases_url", &e.to_string()))?;
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> SolcupError {
    SolcupError::ConfigInvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn fallback_root_dir() -> PathBuf {
    default_root_dir().unwrap_or_else(|_| PathBuf::from(consts::DEFAULT_ROOT_DIR_NAME))
}

/// `<home>/.solcup`
pub fn default_root_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(consts::DEFAULT_ROOT_DIR_NAME))
        .ok_or_else(|| SolcupError::Generic("Could not determine home directory".to_string()))
}
