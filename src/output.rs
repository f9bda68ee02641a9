//! CLI output formatting.
//!
//! Every reporting concern is a pure `format_*` function returning
//! `Vec<String>`, paired with a `print_*` wrapper that writes the lines to
//! stdout. Formatting stays testable; only the wrappers touch I/O.
//!
//! ```text
//! Duplicate file (skipped): packs/a-b (1).png
//! Rename failed (manifest keeps planned name): packs/c-d.png: permission denied
//!
//! 2 emojis accepted (1 duplicate skipped, 1 renamed)
//! Manifest: packs/meta.json
//! ```

use crate::plan::{ImportPlan, RenameFailure};
use std::path::Path;

/// One line per excluded duplicate, in scan order.
pub fn format_duplicates(plan: &ImportPlan) -> Vec<String> {
    plan.duplicates
        .iter()
        .map(|path| format!("Duplicate file (skipped): {}", path.display()))
        .collect()
}

/// One line per failed rename. The manifest keeps the planned name, so the
/// operator is told about the divergence.
pub fn format_rename_failures(failures: &[RenameFailure]) -> Vec<String> {
    failures
        .iter()
        .map(|failure| {
            format!(
                "Rename failed (manifest keeps planned name): {}: {}",
                failure.source.display(),
                failure.message
            )
        })
        .collect()
}

/// Run summary: counts plus the manifest location.
///
/// Renames that failed are not counted as performed.
pub fn format_summary(
    plan: &ImportPlan,
    failures: &[RenameFailure],
    manifest_path: &Path,
) -> Vec<String> {
    let planned = plan.entries.iter().filter(|entry| entry.needs_rename).count();
    let renamed = planned - failures.len();
    let accepted = plan.entries.len();
    let skipped = plan.duplicates.len();

    vec![
        format!(
            "{} emoji{} accepted ({} duplicate{} skipped, {} renamed)",
            accepted,
            if accepted == 1 { "" } else { "s" },
            skipped,
            if skipped == 1 { "" } else { "s" },
            renamed
        ),
        format!("Manifest: {}", manifest_path.display()),
    ]
}

pub fn print_duplicates(plan: &ImportPlan) {
    for line in format_duplicates(plan) {
        println!("{}", line);
    }
}

pub fn print_rename_failures(failures: &[RenameFailure]) {
    for line in format_rename_failures(failures) {
        println!("{}", line);
    }
}

pub fn print_summary(plan: &ImportPlan, failures: &[RenameFailure], manifest_path: &Path) {
    for line in format_summary(plan, failures, manifest_path) {
        println!("{}", line);
    }
}
