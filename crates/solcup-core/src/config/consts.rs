//! Default values shared by the configuration and the pipeline

/// Network defaults for the release catalog and binary downloads
pub mod network {
    /// Upstream release-listing endpoint
    pub const RELEASES_URL: &str = "https://api.github.com/repos/ethereum/solidity/releases";

    /// Connect timeout for the release listing (milliseconds)
    pub const CONNECT_TIMEOUT_MS: u64 = 200;

    /// Read timeout for the release listing (milliseconds)
    pub const READ_TIMEOUT_MS: u64 = 1000;

    /// Whole-request timeout for binary downloads (seconds)
    pub const DOWNLOAD_TIMEOUT_SECS: u64 = 300;
}

/// Compiler execution defaults
pub mod exec {
    /// Wall-clock ceiling for a compiler run (seconds)
    pub const TIMEOUT_SECS: u64 = 30;

    /// Exit code reported when the ceiling elapses or installation fails
    pub const TIMEOUT_EXIT_CODE: i32 = -1;
}

/// Directory name under the home directory used when no root is configured
pub const DEFAULT_ROOT_DIR_NAME: &str = ".solcup";

/// Configuration file name inside the root directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
