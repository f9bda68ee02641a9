//! Candidate discovery.
//!
//! Walks the image directory through the
//! [`Filesystem`] capability and keeps every file whose extension matches the
//! catalog's allow-list. Everything else — sidecar text files, directories,
//! unlisted extension spellings — is silently skipped.
//!
//! The walk is recursive and its order is deterministic per filesystem
//! (see [`crate::vfs`]), so candidate order — and therefore manifest order —
//! is stable across runs on an unchanged tree.

use crate::vfs::{EntryErrorPolicy, Filesystem, VfsError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {0}")]
    RootNotFound(PathBuf),
    #[error("Walk error: {0}")]
    Walk(#[from] VfsError),
}

/// Extensions accepted for import. The match is case-SENSITIVE and exact:
/// these are the spellings the catalog's converter handles, so `.JPG` and
/// `.JPEG` are not candidates.
const IMAGE_EXTENSIONS: &[&str] = &["png", "PNG", "jpg", "jpeg", "gif", "GIF"];

/// Walk `root` and return every candidate image, in walk order.
///
/// Per-entry traversal errors follow `policy`; under
/// [`EntryErrorPolicy::Continue`] an unreadable entry is skipped and the
/// scan keeps going.
pub fn scan<F: Filesystem>(
    fs: &F,
    root: &Path,
    policy: EntryErrorPolicy,
) -> Result<Vec<PathBuf>, ScanError> {
    if !fs.exists(root) {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    let files = fs.walk(root, policy)?;
    Ok(files.into_iter().filter(|p| is_candidate(p)).collect())
}

/// True when the path's extension matches the allow-list exactly.
pub fn is_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryFilesystem;
    use std::fs;
    use tempfile::TempDir;

    // =========================================================================
    // Extension classification
    // =========================================================================

    #[test]
    fn allow_listed_extensions_are_candidates() {
        for name in [
            "a.png", "a.PNG", "a.jpg", "a.jpeg", "a.gif", "a.GIF",
        ] {
            assert!(is_candidate(Path::new(name)), "{name} should be accepted");
        }
    }

    #[test]
    fn uppercase_jpg_variants_are_skipped() {
        // The allow-list is exact: .JPG and .JPEG are not on it.
        for name in ["a.JPG", "a.JPEG", "a.Png", "a.Gif"] {
            assert!(!is_candidate(Path::new(name)), "{name} should be skipped");
        }
    }

    #[test]
    fn non_images_are_skipped() {
        for name in ["notes.txt", "meta.json", "archive.zip", "png", "noext"] {
            assert!(!is_candidate(Path::new(name)), "{name} should be skipped");
        }
    }

    // =========================================================================
    // scan()
    // =========================================================================

    #[test]
    fn scan_filters_to_candidates_in_walk_order() {
        let fs_ = MemoryFilesystem::with_files([
            "/r/a.png",
            "/r/b.txt",
            "/r/c.JPG",
            "/r/sub/d.gif",
        ]);
        let found = scan(&fs_, Path::new("/r"), EntryErrorPolicy::Continue).unwrap();
        assert_eq!(
            found,
            vec![PathBuf::from("/r/a.png"), PathBuf::from("/r/sub/d.gif")]
        );
    }

    #[test]
    fn scan_missing_root_is_error() {
        let fs_ = MemoryFilesystem::new();
        let result = scan(&fs_, Path::new("/gone"), EntryErrorPolicy::Continue);
        assert!(matches!(result, Err(ScanError::RootNotFound(_))));
    }

    #[test]
    fn scan_recurses_on_disk() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("top.png"), b"x").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested/deep.jpeg"), b"x").unwrap();
        fs::write(tmp.path().join("nested/skip.JPEG"), b"x").unwrap();

        let fs_ = crate::vfs::OsFilesystem;
        let found = scan(&fs_, tmp.path(), EntryErrorPolicy::Continue).unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().any(|p| p.ends_with("top.png")));
        assert!(found.iter().any(|p| p.ends_with("nested/deep.jpeg")));
    }

    #[test]
    fn scan_of_only_non_images_is_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("readme.md"), b"x").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"x").unwrap();

        let fs_ = crate::vfs::OsFilesystem;
        let found = scan(&fs_, tmp.path(), EntryErrorPolicy::Continue).unwrap();
        assert!(found.is_empty());
    }
}
