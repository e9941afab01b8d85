// Core modules
pub mod config;
pub mod error;
pub mod lock;
pub mod paths;

// Re-export commonly used types
pub use config::{Config, ExecConfig, NetworkConfig, NetworkPolicy, TimeoutPolicy};
pub use error::{Result, SolcupError};
pub use paths::SolcPaths;
