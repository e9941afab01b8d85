//! End-to-end pipeline: catalog → resolve → install → run

use crate::catalog::{CatalogSource, ReleaseCatalog};
use crate::exec::{Executor, RunOutcome, SolcArg};
use crate::info::CompilerInstance;
use crate::install::{Installer, Os};
use crate::release::ReleaseRecord;
use crate::resolve::resolve;
use semver::Version;
use solcup_core::{Config, Result, SolcupError};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Toolchain {
    catalog: ReleaseCatalog,
    executor: Executor,
}

impl Toolchain {
    /// Pipeline for the current OS configured from `config`
    pub fn new(config: &Config) -> Result<Self> {
        let installer = Installer::new(config)?;
        Ok(Self::from_parts(
            ReleaseCatalog::new(config),
            Executor::new(installer, &config.exec),
        ))
    }

    pub fn from_parts(catalog: ReleaseCatalog, executor: Executor) -> Self {
        Self { catalog, executor }
    }

    pub fn os(&self) -> Os {
        self.installer().os()
    }

    pub fn installer(&self) -> &Installer {
        self.executor.installer()
    }

    pub fn releases(&self) -> Result<Vec<ReleaseRecord>> {
        self.catalog.fetch_releases()
    }

    pub fn releases_with_source(&self) -> Result<(Vec<ReleaseRecord>, CatalogSource)> {
        self.catalog.fetch_releases_with_source()
    }

    /// Best release for `constraint`, `None` when nothing matches
    pub fn resolve(&self, constraint: Option<&str>) -> Result<Option<ReleaseRecord>> {
        let releases = self.releases()?;
        Ok(resolve(constraint, &releases, self.os()))
    }

    /// Like [`resolve`](Self::resolve) but a missing match is an error
    pub fn require(&self, constraint: Option<&str>) -> Result<ReleaseRecord> {
        self.resolve(constraint)?
            .ok_or_else(|| SolcupError::NoCompatibleRelease {
                constraint: constraint.unwrap_or("*").to_string(),
                os: self.os().to_string(),
            })
    }

    pub fn instance(&self, release: &ReleaseRecord) -> CompilerInstance {
        self.installer().instance(release)
    }

    pub fn install(&self, release: &ReleaseRecord) -> Result<CompilerInstance> {
        Ok(self.installer().ensure_installed(release)?)
    }

    pub fn installed_versions(&self) -> Result<Vec<Version>> {
        Ok(self.installer().installed_versions()?)
    }

    /// Resolves, installs if needed and runs the compiler
    ///
    /// Only catalog failures and an unmatched constraint are errors; install
    /// and process failures are reported through the [`RunOutcome`].
    pub fn run(&self, constraint: Option<&str>, options: &[SolcArg], sources: &[PathBuf]) -> Result<RunOutcome> {
        let release = self.require(constraint)?;
        let instance = self.instance(&release);
        Ok(self.executor.run(&instance, options, sources))
    }
}
