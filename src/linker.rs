//! Creation of the driver XML link inside the INDI directory.
//!
//! Every filesystem failure is turned into a [`LinkError`] at the call that
//! produced it. [`Linker::create_link`] prints the diagnostic line once and
//! hands the error back; it never panics.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::context::ServiceContext;

/// File name of the driver descriptor shipped next to the installer.
pub const DRIVER_XML_FILE_NAME: &str = "indi_pylibcamera.xml";

/// Status reported when the link is in place.
pub const STATUS_OK: i32 = 0;

/// How [`Linker::create_link`] treats the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    /// Remove an existing entry at the destination first.
    pub overwrite: bool,
    /// Create the destination directory and its ancestors if missing.
    pub make_directory: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self { overwrite: true, make_directory: false }
    }
}

/// Reasons the link could not be installed.
///
/// The `Display` text is the diagnostic shown to the operator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// Something still occupies the destination path.
    #[error("File {} exists. Please remove it before running this script.", .path.display())]
    AlreadyExists {
        /// The occupied destination.
        path: PathBuf,
    },
    /// The link could not be created, usually because the directory is missing.
    #[error("File {} could not be created. Is the INDI path wrong?", .path.display())]
    PathNotFound {
        /// The destination that could not be created.
        path: PathBuf,
    },
    /// Removing the old entry or creating the link was refused.
    #[error("You need to run this with root permissions (sudo).")]
    PermissionDenied,
    /// Creating the destination directory was refused.
    #[error("Insufficient permissions to create directory {}.", .dir.display())]
    CreateDirDenied {
        /// The directory that could not be created.
        dir: PathBuf,
    },
}

impl LinkError {
    /// Process status code for this failure.
    #[must_use]
    pub fn status(&self) -> i32 {
        match self {
            Self::AlreadyExists { .. } => -1,
            Self::PathNotFound { .. } => -2,
            Self::PermissionDenied | Self::CreateDirDenied { .. } => -3,
        }
    }
}

/// Installs a link to the driver XML found in `source_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linker {
    source_dir: PathBuf,
}

impl Linker {
    /// Creates a linker whose XML lives in `source_dir`.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self { source_dir: source_dir.into() }
    }

    /// Path of the driver XML the link points to.
    #[must_use]
    pub fn source(&self) -> PathBuf {
        self.source_dir.join(DRIVER_XML_FILE_NAME)
    }

    /// Path of the link inside `destination_dir`.
    #[must_use]
    pub fn destination(destination_dir: &Path) -> PathBuf {
        destination_dir.join(DRIVER_XML_FILE_NAME)
    }

    /// Links `destination_dir/indi_pylibcamera.xml` to the driver XML.
    ///
    /// On failure the diagnostic is printed to the console before the error
    /// is returned. On success the path of the new link is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`LinkError`] describing which step failed.
    pub fn create_link(
        &self,
        ctx: &ServiceContext,
        destination_dir: &Path,
        options: LinkOptions,
    ) -> Result<PathBuf, LinkError> {
        self.try_create_link(ctx, destination_dir, options).map_err(|err| {
            ctx.console.print_line(&format!("ERROR: {err}"));
            err
        })
    }

    fn try_create_link(
        &self,
        ctx: &ServiceContext,
        destination_dir: &Path,
        options: LinkOptions,
    ) -> Result<PathBuf, LinkError> {
        let source = self.source();
        let dest = Self::destination(destination_dir);
        debug!(source = %source.display(), dest = %dest.display(), ?options, "creating link");

        if !ctx.fs.exists(&source) {
            warn!("driver XML {} not found; the link will dangle", source.display());
        }

        if options.overwrite {
            match ctx.fs.remove_file(&dest) {
                Ok(()) => info!("removed existing {}", dest.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    return Err(LinkError::PermissionDenied);
                }
                Err(e) => warn!("could not remove {}: {e}", dest.display()),
            }
        }

        if options.make_directory {
            match ctx.fs.create_dir_all(destination_dir) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    return Err(LinkError::CreateDirDenied { dir: destination_dir.to_path_buf() });
                }
                Err(e) => warn!("could not create {}: {e}", destination_dir.display()),
            }
        }

        match ctx.fs.symlink(&source, &dest) {
            Ok(()) => {
                info!("linked {} -> {}", dest.display(), source.display());
                Ok(dest)
            }
            Err(e) => Err(classify_symlink_error(&e, dest)),
        }
    }
}

fn classify_symlink_error(err: &io::Error, dest: PathBuf) -> LinkError {
    match err.kind() {
        io::ErrorKind::AlreadyExists => LinkError::AlreadyExists { path: dest },
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
            LinkError::PermissionDenied
        }
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
            LinkError::PathNotFound { path: dest }
        }
        _ => {
            warn!("unexpected error linking {}: {err}", dest.display());
            LinkError::PathNotFound { path: dest }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::adapters::recording::{FsCall, FsOp, RecordingFileSystem, ScriptedConsole};

    struct Fixture {
        _root: tempfile::TempDir,
        source_dir: PathBuf,
        indi_dir: PathBuf,
        fs: Arc<RecordingFileSystem>,
        console: Arc<ScriptedConsole>,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_fs(RecordingFileSystem::new(Box::new(LiveFileSystem)))
        }

        fn with_fs(fs: RecordingFileSystem) -> Self {
            let root = tempfile::tempdir().unwrap();
            let source_dir = root.path().join("site-packages/indi_pylibcamera");
            std::fs::create_dir_all(&source_dir).unwrap();
            std::fs::write(source_dir.join(DRIVER_XML_FILE_NAME), "<driversList/>").unwrap();
            let indi_dir = root.path().join("usr/share/indi");
            Self {
                source_dir,
                indi_dir,
                _root: root,
                fs: Arc::new(fs),
                console: Arc::new(ScriptedConsole::new(Vec::<String>::new())),
            }
        }

        fn ctx(&self) -> ServiceContext {
            ServiceContext::new(Box::new(Arc::clone(&self.fs)), Box::new(Arc::clone(&self.console)))
        }

        fn linker(&self) -> Linker {
            Linker::new(&self.source_dir)
        }

        fn link(&self, options: LinkOptions) -> Result<PathBuf, LinkError> {
            self.linker().create_link(&self.ctx(), &self.indi_dir, options)
        }
    }

    const NO_OVERWRITE: LinkOptions = LinkOptions { overwrite: false, make_directory: false };

    #[test]
    fn missing_destination_directory_is_path_not_found() {
        let fx = Fixture::new();

        let err = fx.link(LinkOptions::default()).unwrap_err();

        assert_eq!(err.status(), -2);
        assert!(matches!(err, LinkError::PathNotFound { .. }));
        assert_eq!(fx.console.output().len(), 1);
        assert!(fx.console.output()[0].starts_with("ERROR: File "));
        assert!(fx.console.output()[0].ends_with("Is the INDI path wrong?"));
    }

    #[test]
    fn existing_destination_without_overwrite_is_already_exists() {
        let fx = Fixture::new();
        std::fs::create_dir_all(&fx.indi_dir).unwrap();
        std::fs::write(fx.indi_dir.join(DRIVER_XML_FILE_NAME), "stale").unwrap();

        let err = fx.link(NO_OVERWRITE).unwrap_err();

        assert_eq!(err.status(), -1);
        assert_eq!(
            std::fs::read_to_string(fx.indi_dir.join(DRIVER_XML_FILE_NAME)).unwrap(),
            "stale"
        );
        assert!(!fx.fs.calls().iter().any(|c| matches!(c, FsCall::RemoveFile(_))));
    }

    #[test]
    fn existing_destination_with_overwrite_is_replaced() {
        let fx = Fixture::new();
        std::fs::create_dir_all(&fx.indi_dir).unwrap();
        std::fs::write(fx.indi_dir.join(DRIVER_XML_FILE_NAME), "stale").unwrap();

        let dest = fx.link(LinkOptions::default()).unwrap();

        assert_eq!(std::fs::read_link(&dest).unwrap(), fx.linker().source());
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "<driversList/>");
        assert!(fx.console.output().is_empty());
    }

    #[test]
    fn denied_removal_leaves_destination_untouched() {
        let fx = Fixture::with_fs(
            RecordingFileSystem::new(Box::new(LiveFileSystem))
                .with_fault(FsOp::RemoveFile, io::ErrorKind::PermissionDenied),
        );
        std::fs::create_dir_all(&fx.indi_dir).unwrap();
        let dest = fx.indi_dir.join(DRIVER_XML_FILE_NAME);
        std::fs::write(&dest, "stale").unwrap();

        let err = fx.link(LinkOptions::default()).unwrap_err();

        assert_eq!(err, LinkError::PermissionDenied);
        assert_eq!(err.status(), -3);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "stale");
        assert!(!fx.fs.calls().iter().any(|c| matches!(c, FsCall::Symlink { .. })));
        assert_eq!(
            fx.console.output(),
            vec!["ERROR: You need to run this with root permissions (sudo).".to_string()]
        );
    }

    #[test]
    fn denied_symlink_is_permission_denied() {
        let fx = Fixture::with_fs(
            RecordingFileSystem::new(Box::new(LiveFileSystem))
                .with_fault(FsOp::Symlink, io::ErrorKind::PermissionDenied),
        );
        std::fs::create_dir_all(&fx.indi_dir).unwrap();

        let err = fx.link(LinkOptions::default()).unwrap_err();

        assert_eq!(err.status(), -3);
    }

    #[test]
    fn make_directory_creates_missing_tree() {
        let fx = Fixture::new();

        let dest = fx.link(LinkOptions { overwrite: true, make_directory: true }).unwrap();

        assert!(fx.indi_dir.is_dir());
        assert_eq!(std::fs::read_link(dest).unwrap(), fx.linker().source());
    }

    #[test]
    fn denied_directory_creation_reports_directory() {
        let fx = Fixture::with_fs(
            RecordingFileSystem::new(Box::new(LiveFileSystem))
                .with_fault(FsOp::CreateDirAll, io::ErrorKind::PermissionDenied),
        );

        let err = fx.link(LinkOptions { overwrite: false, make_directory: true }).unwrap_err();

        assert_eq!(err, LinkError::CreateDirDenied { dir: fx.indi_dir.clone() });
        assert_eq!(err.status(), -3);
        assert!(fx.console.output()[0].contains("Insufficient permissions to create directory"));
    }

    #[test]
    fn relinking_is_idempotent() {
        let fx = Fixture::new();
        std::fs::create_dir_all(&fx.indi_dir).unwrap();

        let first = fx.link(LinkOptions::default()).unwrap();
        let second = fx.link(LinkOptions::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_link(&second).unwrap(), fx.linker().source());
    }

    #[test]
    fn missing_source_still_links() {
        let fx = Fixture::new();
        std::fs::remove_file(fx.linker().source()).unwrap();
        std::fs::create_dir_all(&fx.indi_dir).unwrap();

        let dest = fx.link(LinkOptions::default()).unwrap();

        assert_eq!(std::fs::read_link(dest).unwrap(), fx.linker().source());
    }

    #[test]
    fn unexpected_symlink_error_maps_to_path_not_found() {
        let err = classify_symlink_error(
            &io::Error::new(io::ErrorKind::Other, "boom"),
            PathBuf::from("/x/indi_pylibcamera.xml"),
        );
        assert_eq!(err.status(), -2);
    }

    #[test]
    fn read_only_filesystem_is_permission_denied() {
        let err = classify_symlink_error(
            &io::Error::new(io::ErrorKind::ReadOnlyFilesystem, "read-only"),
            PathBuf::from("/usr/share/indi/indi_pylibcamera.xml"),
        );
        assert_eq!(err, LinkError::PermissionDenied);
        assert_eq!(err.status(), -3);
    }

    #[test]
    fn not_a_directory_is_path_not_found() {
        let err = classify_symlink_error(
            &io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            PathBuf::from("/etc/hosts/indi_pylibcamera.xml"),
        );
        assert_eq!(err.status(), -2);
    }

    #[test]
    fn destination_joins_fixed_file_name() {
        assert_eq!(
            Linker::destination(Path::new("/usr/share/indi")),
            PathBuf::from("/usr/share/indi/indi_pylibcamera.xml")
        );
    }
}
