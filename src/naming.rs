//! Filename normalization for catalog identifiers.
//!
//! Emoji shortcodes on the receiving catalog may not contain hyphens, and
//! the shortcode is derived from the file name. The rule is a single, total
//! transform applied to the base file name only (extension included):
//!
//! - `a-b.png` → `a_b.png` (shortcode `a_b`)
//! - `big-cat-sad.gif` → `big_cat_sad.gif`
//! - `dir-x/a-b.png` → `dir-x/a_b.png` (directory components untouched)

use std::path::{Path, PathBuf};

/// Normalize a base file name: every `-` becomes `_`.
pub fn normalize_file_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Target path for a candidate: same directory, normalized base name.
pub fn normalized_path(path: &Path) -> PathBuf {
    match path.file_name().map(|name| name.to_string_lossy()) {
        Some(name) => path.with_file_name(normalize_file_name(&name)),
        None => path.to_path_buf(),
    }
}

/// Shortcode for a normalized file name: the final extension stripped.
pub fn emoji_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}
