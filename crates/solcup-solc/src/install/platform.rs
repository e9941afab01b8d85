use solcup_core::Result;
#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
use solcup_core::SolcupError;
use std::fmt;

/// Operating systems solc publishes builds for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    MacOS,
    Linux,
    Windows,
}

impl Os {
    /// Detects the operating system this binary was compiled for
    pub fn current() -> Result<Os> {
        #[cfg(target_os = "macos")]
        return Ok(Os::MacOS);

        #[cfg(target_os = "linux")]
        return Ok(Os::Linux);

        #[cfg(target_os = "windows")]
        return Ok(Os::Windows);

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        Err(SolcupError::UnsupportedPlatform(format!(
            "no solc builds for operating system: {}",
            std::env::consts::OS
        )))
    }

    /// Executable file name of the compiler on this OS
    pub fn binary_name(self) -> &'static str {
        match self {
            Os::Windows => "solc.exe",
            Os::MacOS | Os::Linux => "solc",
        }
    }

    /// Substring identifying this OS in upstream asset URLs
    pub fn asset_marker(self) -> &'static str {
        match self {
            Os::MacOS => "macos",
            Os::Linux => "linux",
            Os::Windows => "windows",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::MacOS => write!(f, "macOS"),
            Os::Linux => write!(f, "Linux"),
            Os::Windows => write!(f, "Windows"),
        }
    }
}
