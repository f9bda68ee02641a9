//! Filesystem capability used by the pipeline.
//!
//! Every filesystem touch — the walk, the in-place renames, the final
//! manifest write — goes through the [`Filesystem`] trait. The planning and
//! record-building stages stay pure, and the stages that do perform I/O can
//! be exercised against [`MemoryFilesystem`] without a real disk.
//!
//! ## Walk order
//!
//! [`Filesystem::walk`] returns files in a deterministic order: sorted by
//! file name at each directory level. Manifest content is therefore stable
//! across runs on an unchanged tree.
//!
//! ## Per-entry errors
//!
//! A single unreadable entry mid-walk is handled per [`EntryErrorPolicy`]:
//! the one-shot bulk tool defaults to skipping it and continuing, but the
//! policy is an explicit parameter rather than a hidden catch, so the
//! behavior is selectable and testable.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum VfsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error at {path}: {message}")]
    Walk { path: PathBuf, message: String },
    #[error("No such path: {0}")]
    NotFound(PathBuf),
}

/// What to do when a single entry cannot be read during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryErrorPolicy {
    /// Skip the entry and keep walking.
    Continue,
    /// Surface the first walk error.
    Abort,
}

/// Minimal filesystem surface the pipeline needs: list, rename, write.
pub trait Filesystem {
    /// Every file reachable under `root`, recursively, in a deterministic
    /// order (sorted by file name at each directory level). Directories
    /// themselves are not returned.
    fn walk(&self, root: &Path, policy: EntryErrorPolicy) -> Result<Vec<PathBuf>, VfsError>;

    /// True when `path` names an existing file or directory.
    fn exists(&self, path: &Path) -> bool;

    fn rename(&mut self, from: &Path, to: &Path) -> Result<(), VfsError>;

    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<(), VfsError>;
}

/// The real filesystem, walked with `walkdir`.
#[derive(Debug, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn walk(&self, root: &Path, policy: EntryErrorPolicy) -> Result<Vec<PathBuf>, VfsError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        files.push(entry.into_path());
                    }
                }
                Err(err) => match policy {
                    EntryErrorPolicy::Continue => continue,
                    EntryErrorPolicy::Abort => {
                        return Err(VfsError::Walk {
                            path: err.path().map(Path::to_path_buf).unwrap_or_default(),
                            message: err.to_string(),
                        });
                    }
                },
            }
        }
        Ok(files)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&mut self, from: &Path, to: &Path) -> Result<(), VfsError> {
        std::fs::rename(from, to)?;
        Ok(())
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<(), VfsError> {
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// In-memory [`Filesystem`]: a sorted map of file paths to contents.
///
/// Directories exist implicitly as path prefixes. Renames can be rigged to
/// fail so the best-effort rename path is reachable from tests.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    files: BTreeMap<PathBuf, Vec<u8>>,
    fail_renames: bool,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with empty files at the given paths.
    pub fn with_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: paths.into_iter().map(|p| (p.into(), Vec::new())).collect(),
            fail_renames: false,
        }
    }

    /// Make every subsequent rename fail with a permission error.
    pub fn fail_renames(&mut self) {
        self.fail_renames = true;
    }

    /// Contents written at `path`, if any.
    pub fn contents(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }
}

impl Filesystem for MemoryFilesystem {
    fn walk(&self, root: &Path, _policy: EntryErrorPolicy) -> Result<Vec<PathBuf>, VfsError> {
        Ok(self
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .keys()
            .any(|p| p == path || p.starts_with(path))
    }

    fn rename(&mut self, from: &Path, to: &Path) -> Result<(), VfsError> {
        if self.fail_renames {
            return Err(VfsError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "renames disabled",
            )));
        }
        match self.files.remove(from) {
            Some(contents) => {
                self.files.insert(to.to_path_buf(), contents);
                Ok(())
            }
            None => Err(VfsError::NotFound(from.to_path_buf())),
        }
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<(), VfsError> {
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}
