//! Service context bundling the port trait objects.

use crate::ports::console::Console;
use crate::ports::filesystem::FileSystem;

/// Bundles the filesystem and console ports into a single context.
pub struct ServiceContext {
    /// Filesystem used to remove, create and link entries.
    pub fs: Box<dyn FileSystem>,
    /// Console used for banners, prompts and diagnostics.
    pub console: Box<dyn Console>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk and terminal.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::console::LiveConsole;
        use crate::adapters::live::filesystem::LiveFileSystem;

        Self { fs: Box::new(LiveFileSystem), console: Box::new(LiveConsole) }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, console: Box<dyn Console>) -> Self {
        Self { fs, console }
    }
}
