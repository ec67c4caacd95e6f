//! Filesystem port for the link operations.

use std::io;
use std::path::Path;

/// Provides the handful of filesystem calls needed to install a link.
///
/// Errors are plain [`io::Error`] values so callers can branch on
/// [`io::ErrorKind`].
pub trait FileSystem: Send + Sync {
    /// Removes a file or symbolic link. Does not follow the link.
    ///
    /// # Errors
    ///
    /// Returns the underlying error, including `NotFound` when nothing is
    /// present at `path`.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Creates `path` and all missing ancestors. Succeeds if it already exists.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when a component cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Creates a symbolic link at `link` pointing to `original`.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if `link` is occupied, `NotFound` if its parent
    /// directory is missing, or `PermissionDenied`.
    fn symlink(&self, original: &Path, link: &Path) -> io::Result<()>;

    /// Returns `true` if `path` exists, following links.
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for std::sync::Arc<T> {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn symlink(&self, original: &Path, link: &Path) -> io::Result<()> {
        (**self).symlink(original, link)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
