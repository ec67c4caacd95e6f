//! Recording adapters that capture port interactions for inspection.

pub mod console;
pub mod filesystem;

pub use console::ScriptedConsole;
pub use filesystem::{FsOp, RecordingFileSystem};

use std::path::PathBuf;

/// A filesystem call captured by [`RecordingFileSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    /// `remove_file(path)`.
    RemoveFile(PathBuf),
    /// `create_dir_all(path)`.
    CreateDirAll(PathBuf),
    /// `symlink(original, link)`.
    Symlink {
        /// Link target.
        original: PathBuf,
        /// Location of the new link.
        link: PathBuf,
    },
}

/// One line of console traffic captured by [`ScriptedConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    /// Text written with `print_line`.
    Output(String),
    /// A prompt shown to the operator.
    Prompt(String),
}
