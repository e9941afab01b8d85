//! Running an installed compiler with a bounded wait
//!
//! ```text
//! NotInstalled → Installing → Installed → Running → Completed(code)
//!                    ↓                         ↘
//!              InstallFailed                     TimedOut (detach or kill)
//! ```
//!
//! Output streams are inherited from the caller. The wait ceiling bounds how
//! long the caller blocks; with [`TimeoutPolicy::Detach`] a compiler that
//! outlives it keeps running in the background.

use crate::info::CompilerInstance;
use crate::install::Installer;
use solcup_core::config::consts::exec::TIMEOUT_EXIT_CODE;
use solcup_core::{ExecConfig, TimeoutPolicy};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A compiler command-line option, rendered to one or more tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolcArg {
    Abi,
    Bin,
    BinRuntime,
    Optimize,
    OptimizeRuns(u32),
    Overwrite,
    OutputDir(PathBuf),
    EvmVersion(String),
    /// Passed through untouched
    Raw(OsString),
}

impl SolcArg {
    pub fn to_args(&self) -> Vec<OsString> {
        match self {
            SolcArg::Abi => vec!["--abi".into()],
            SolcArg::Bin => vec!["--bin".into()],
            SolcArg::BinRuntime => vec!["--bin-runtime".into()],
            SolcArg::Optimize => vec!["--optimize".into()],
            SolcArg::OptimizeRuns(runs) => vec!["--optimize-runs".into(), runs.to_string().into()],
            SolcArg::Overwrite => vec!["--overwrite".into()],
            SolcArg::OutputDir(dir) => vec!["-o".into(), dir.clone().into_os_string()],
            SolcArg::EvmVersion(version) => vec!["--evm-version".into(), version.into()],
            SolcArg::Raw(token) => vec![token.clone()],
        }
    }
}

impl From<&str> for SolcArg {
    fn from(token: &str) -> Self {
        SolcArg::Raw(token.into())
    }
}

impl From<String> for SolcArg {
    fn from(token: String) -> Self {
        SolcArg::Raw(token.into())
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The compiler exited before the ceiling
    Completed(i32),
    /// The ceiling elapsed first
    TimedOut,
    /// The compiler was missing and could not be installed
    InstallFailed(String),
    /// The process could not be started
    SpawnFailed(String),
}

impl RunOutcome {
    /// Process exit code, `-1` for every outcome without one
    pub fn code(&self) -> i32 {
        match self {
            RunOutcome::Completed(code) => *code,
            _ => TIMEOUT_EXIT_CODE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed(0))
    }
}

/// Full argument vector: binary, option tokens in order, absolute source paths in order
pub fn command_line(instance: &CompilerInstance, options: &[SolcArg], sources: &[PathBuf]) -> Vec<OsString> {
    let mut argv = vec![instance.binary_path.clone().into_os_string()];
    argv.extend(options.iter().flat_map(SolcArg::to_args));
    argv.extend(sources.iter().map(|source| absolute_path(source).into_os_string()));
    argv
}

fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|e| {
        log::debug!("could not make {} absolute: {}", path.display(), e);
        path.to_path_buf()
    })
}

#[derive(Debug)]
pub struct Executor {
    installer: Installer,
    timeout: Duration,
    on_timeout: TimeoutPolicy,
}

impl Executor {
    pub fn new(installer: Installer, config: &ExecConfig) -> Self {
        Self {
            installer,
            timeout: config.timeout(),
            on_timeout: config.on_timeout,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_policy(mut self, policy: TimeoutPolicy) -> Self {
        self.on_timeout = policy;
        self
    }

    pub fn installer(&self) -> &Installer {
        &self.installer
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Installs the compiler if needed, runs it and waits up to the ceiling
    pub fn run(&self, instance: &CompilerInstance, options: &[SolcArg], sources: &[PathBuf]) -> RunOutcome {
        let instance = if instance.is_installed() {
            instance.clone()
        } else {
            match self.installer.ensure_installed(&instance.release) {
                Ok(installed) => installed,
                Err(e) => {
                    log::error!("Cannot run solc {}: {}", instance.version(), e);
                    return RunOutcome::InstallFailed(e.to_string());
                }
            }
        };

        let argv = command_line(&instance, options, sources);
        log::debug!("running {:?}", argv);

        let child = Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn();
        let mut child = match child {
            Ok(child) => child,
            Err(e) => {
                log::error!("Failed to start {}: {}", instance.binary_path.display(), e);
                return RunOutcome::SpawnFailed(e.to_string());
            }
        };

        match wait_with_timeout(&mut child, self.timeout) {
            Ok(Some(status)) => RunOutcome::Completed(exit_code(status)),
            Ok(None) => {
                self.handle_timeout(child);
                RunOutcome::TimedOut
            }
            Err(e) => {
                log::error!("Failed waiting for solc: {}", e);
                RunOutcome::SpawnFailed(e.to_string())
            }
        }
    }

    fn handle_timeout(&self, mut child: Child) {
        match self.on_timeout {
            TimeoutPolicy::Detach => {
                log::warn!(
                    "solc (pid {}) still running after {:?}, leaving it detached",
                    child.id(),
                    self.timeout
                );
            }
            TimeoutPolicy::Kill => {
                log::warn!("solc (pid {}) timed out after {:?}, killing it", child.id(), self.timeout);
                if let Err(e) = child.kill() {
                    log::debug!("kill failed: {}", e);
                }
                if let Err(e) = child.wait() {
                    log::debug!("reaping killed process failed: {}", e);
                }
            }
        }
    }
}

/// Polls `child` until it exits or `timeout` elapses (`Ok(None)`)
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(TIMEOUT_EXIT_CODE)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(TIMEOUT_EXIT_CODE)
}
