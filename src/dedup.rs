//! Copy-suffix duplicate detection.
//!
//! Bulk-saved emoji packs tend to contain byte-for-byte duplicates left
//! behind by file managers: `blob (1).png` next to `blob.png`. Any path
//! containing a parenthesized run of digits is treated as such a copy and
//! excluded from the import — not renamed, not listed, and never deleted.
//!
//! This is a heuristic over the path string, not file content. A digit
//! group anywhere in the path — a parent directory named `batch (2)`
//! included — also triggers exclusion. That over-matching is intentional:
//! for a one-shot import tool, silently importing a duplicate costs more
//! than skipping the odd false positive, and skipped files are reported so
//! the operator can rename and re-run.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static COPY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d+\)").expect("hard-coded pattern"));

/// True when the path contains a parenthesized digit run anywhere.
pub fn is_copy_duplicate(path: &Path) -> bool {
    COPY_SUFFIX.is_match(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_suffix_matches() {
        assert!(is_copy_duplicate(Path::new("photo (1).png")));
        assert!(is_copy_duplicate(Path::new("photo (23).png")));
        assert!(is_copy_duplicate(Path::new("dir/photo (2).gif")));
    }

    #[test]
    fn digit_group_in_parent_directory_matches() {
        // Heuristic over the whole path, by design.
        assert!(is_copy_duplicate(Path::new("batch (2)/photo.png")));
    }

    #[test]
    fn digit_group_mid_name_matches() {
        assert!(is_copy_duplicate(Path::new("shot(7)final.png")));
    }

    #[test]
    fn plain_names_do_not_match() {
        assert!(!is_copy_duplicate(Path::new("photo.png")));
        assert!(!is_copy_duplicate(Path::new("photo-1.png")));
        assert!(!is_copy_duplicate(Path::new("photo1.png")));
    }

    #[test]
    fn empty_parens_and_non_digits_do_not_match() {
        assert!(!is_copy_duplicate(Path::new("photo ().png")));
        assert!(!is_copy_duplicate(Path::new("photo (a).png")));
        assert!(!is_copy_duplicate(Path::new("photo (1a).png")));
    }
}
