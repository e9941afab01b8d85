//! solcup configuration (`config.toml`)

pub mod consts;
mod model;

pub use model::{Config, ExecConfig, NetworkConfig, NetworkPolicy, TimeoutPolicy, default_root_dir};
