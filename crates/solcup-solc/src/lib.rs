//! Solidity compiler (solc) resolution, installation and execution
//!
//! # Architecture
//!
//! - [`catalog`]: release list with network → cache → bundled fallback
//! - [`resolve`]: constraint parsing and best-release selection
//! - [`install`]: per-OS download strategies and idempotent installs
//! - [`exec`]: running a compiler with a bounded wait
//! - [`toolchain`]: the whole pipeline behind one type
//!
//! # Pipeline
//!
//! ```text
//! constraint (optional, e.g. from `pragma solidity`)
//!     ↓
//! ReleaseCatalog::fetch_releases()    ascending ReleaseRecords
//!     ↓
//! resolve(constraint, releases, os)   highest compatible release
//!     ↓
//! Installer::ensure_installed()       <root>/solc/<version>/solc[.exe]
//!     ↓
//! Executor::run()                     exit code, or -1 on timeout
//! ```
//!
//! # Example
//!
//! ```no_run
//! use solcup_core::Config;
//! use solcup_solc::{SolcArg, Toolchain};
//! use std::path::PathBuf;
//!
//! # fn main() -> solcup_core::Result<()> {
//! let toolchain = Toolchain::new(&Config::from_home()?)?;
//! let outcome = toolchain.run(
//!     Some("^0.8.0"),
//!     &[SolcArg::Bin, SolcArg::Abi],
//!     &[PathBuf::from("contracts/Token.sol")],
//! )?;
//! println!("solc exited with {}", outcome.code());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod exec;
pub mod github;
pub mod info;
pub mod install;
pub mod release;
pub mod resolve;
pub mod source;
pub mod toolchain;

pub use catalog::{CatalogError, CatalogSource, ReleaseCatalog};
pub use exec::{Executor, RunOutcome, SolcArg};
pub use info::CompilerInstance;
pub use install::{InstallError, Installer, Os};
pub use release::{RawAsset, RawReleaseInfo, ReleaseRecord};
pub use resolve::{VersionConstraint, extract_subconstraints, is_compatible, resolve};
pub use source::{SolidityFile, pragma_constraint};
pub use toolchain::Toolchain;
