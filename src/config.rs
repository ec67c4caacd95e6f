//! Runtime settings merged from flags, environment and built-in defaults.
//!
//! Precedence is: command-line flag, then environment variable (a `.env`
//! file is loaded into the environment by the binary), then the default.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::Cli;

/// Directory where INDI looks for driver XMLs.
pub const DEFAULT_INDI_PATH: &str = "/usr/share/indi";

/// Environment variable overriding [`DEFAULT_INDI_PATH`].
pub const INDI_PATH_ENV: &str = "INDI_PYLIBCAMERA_INDI_PATH";

/// Environment variable naming the directory that holds the driver XML.
pub const SOURCE_DIR_ENV: &str = "INDI_PYLIBCAMERA_SOURCE_DIR";

/// Errors raised while resolving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The running executable could not be located.
    #[error("cannot locate the installer executable: {0}")]
    Executable(#[source] io::Error),
    /// A relative source directory could not be anchored.
    #[error("cannot resolve source directory {}: {source}", .dir.display())]
    SourceDir {
        /// The relative directory as given.
        dir: PathBuf,
        /// The working directory lookup failure.
        source: io::Error,
    },
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prompt the operator before doing anything.
    pub interactive: bool,
    /// Directory the link is created in.
    pub indi_path: PathBuf,
    /// Directory holding `indi_pylibcamera.xml`.
    pub source_dir: PathBuf,
    /// Create `indi_path` if it is missing.
    pub make_directory: bool,
}

impl Settings {
    /// Resolves settings against the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no source directory is configured and the
    /// executable's own directory cannot be determined, or if a relative
    /// source directory is given and the working directory is unavailable.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve_with(
            cli,
            |key| std::env::var_os(key),
            executable_dir,
            std::env::current_dir,
        )
    }

    /// Resolves settings with injectable environment, executable and working
    /// directory lookups.
    ///
    /// The source directory is always returned absolute, since a link target
    /// is resolved against the link's own directory.
    ///
    /// # Errors
    ///
    /// Propagates the error from `exe_dir` or `cwd` when it is consulted.
    pub fn resolve_with<E, X, C>(
        cli: &Cli,
        env: E,
        exe_dir: X,
        cwd: C,
    ) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<OsString>,
        X: FnOnce() -> io::Result<PathBuf>,
        C: FnOnce() -> io::Result<PathBuf>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        let indi_path = cli
            .path
            .clone()
            .or_else(|| lookup(INDI_PATH_ENV))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INDI_PATH));

        let source_dir = match cli.source_dir.clone().or_else(|| lookup(SOURCE_DIR_ENV)) {
            Some(dir) if dir.is_relative() => match cwd() {
                Ok(base) => base.join(dir),
                Err(source) => return Err(ConfigError::SourceDir { dir, source }),
            },
            Some(dir) => dir,
            None => exe_dir().map_err(ConfigError::Executable)?,
        };

        Ok(Self { interactive: !cli.silent, indi_path, source_dir, make_directory: cli.mkdir })
    }
}

/// Directory containing the running executable.
///
/// # Errors
///
/// Returns an error if the executable path is unavailable or has no parent.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory"))
}
