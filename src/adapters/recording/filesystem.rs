//! Recording adapter for the `FileSystem` port.

use std::io;
use std::path::Path;
use std::sync::Mutex;

use super::FsCall;
use crate::ports::FileSystem;

/// Records filesystem calls while delegating to an inner implementation.
///
/// A fault can be armed per operation; the armed call fails with the given
/// error kind without reaching the inner filesystem.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    calls: Mutex<Vec<FsCall>>,
    faults: Mutex<Vec<(FsOp, io::ErrorKind)>>,
}

/// Filesystem operation selector used to arm faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    /// [`FileSystem::remove_file`].
    RemoveFile,
    /// [`FileSystem::create_dir_all`].
    CreateDirAll,
    /// [`FileSystem::symlink`].
    Symlink,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>) -> Self {
        Self { inner, calls: Mutex::new(Vec::new()), faults: Mutex::new(Vec::new()) }
    }

    /// Makes every subsequent `op` call fail with `kind`.
    #[must_use]
    pub fn with_fault(self, op: FsOp, kind: io::ErrorKind) -> Self {
        self.faults.lock().expect("faults lock poisoned").push((op, kind));
        self
    }

    /// Returns the calls recorded so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the call log lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<FsCall> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    fn record(&self, call: FsCall) {
        self.calls.lock().expect("calls lock poisoned").push(call);
    }

    fn fault(&self, op: FsOp) -> io::Result<()> {
        let faults = self.faults.lock().expect("faults lock poisoned");
        match faults.iter().find(|(armed, _)| *armed == op) {
            Some((_, kind)) => Err(io::Error::new(*kind, format!("injected {op:?} fault"))),
            None => Ok(()),
        }
    }
}

impl FileSystem for RecordingFileSystem {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.record(FsCall::RemoveFile(path.to_path_buf()));
        self.fault(FsOp::RemoveFile)?;
        self.inner.remove_file(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.record(FsCall::CreateDirAll(path.to_path_buf()));
        self.fault(FsOp::CreateDirAll)?;
        self.inner.create_dir_all(path)
    }

    fn symlink(&self, original: &Path, link: &Path) -> io::Result<()> {
        self.record(FsCall::Symlink { original: original.to_path_buf(), link: link.to_path_buf() });
        self.fault(FsOp::Symlink)?;
        self.inner.symlink(original, link)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }
}
