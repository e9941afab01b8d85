//! CLI command implementations

pub mod install;
pub mod installed;
pub mod releases;
pub mod resolve;
pub mod run;
