//! Import planning and application.
//!
//! The run is split into a read-only *plan* and a mutating *apply*:
//!
//! 1. [`build_plan`] classifies scanned candidates without touching the
//!    filesystem — which files are copy duplicates, which need renaming,
//!    and what name each record will carry.
//! 2. [`apply_renames`] performs the on-disk renames the plan calls for.
//!    Failures are collected, not propagated: the manifest still uses the
//!    planned name, so a failed rename leaves the manifest referencing a
//!    name that diverges from disk. Known gap, reported to the operator.
//! 3. [`build_records`] merges the plan with the configured defaults into
//!    wire records. Pure, no I/O.

use crate::config::EmojiConfig;
use crate::dedup;
use crate::manifest::{EmojiDetail, EmojiRecord};
use crate::naming;
use crate::vfs::Filesystem;
use std::path::PathBuf;

/// MIME type stamped on every record regardless of the on-disk extension.
/// The importer re-encodes uploads to webp, so the manifest declares the
/// post-conversion type up front.
pub const EMOJI_MIME_TYPE: &str = "image/webp";

/// One accepted candidate with its post-normalization identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedEmoji {
    /// Path discovered during the scan.
    pub source: PathBuf,
    /// Same directory, normalized base name.
    pub target: PathBuf,
    /// Base file name the manifest will reference.
    pub file_name: String,
    /// True when `target` differs from `source` and an on-disk rename is due.
    pub needs_rename: bool,
}

/// Read-only description of everything one run will do.
#[derive(Debug, Default)]
pub struct ImportPlan {
    /// Accepted candidates, scan order preserved.
    pub entries: Vec<PlannedEmoji>,
    /// Candidates excluded by the copy-suffix filter, scan order.
    pub duplicates: Vec<PathBuf>,
}

/// A rename that could not be performed.
#[derive(Debug)]
pub struct RenameFailure {
    pub source: PathBuf,
    pub message: String,
}

/// Classify scanned candidates into plan entries and excluded duplicates.
pub fn build_plan(candidates: Vec<PathBuf>) -> ImportPlan {
    let mut plan = ImportPlan::default();
    for source in candidates {
        if dedup::is_copy_duplicate(&source) {
            plan.duplicates.push(source);
            continue;
        }
        let target = naming::normalized_path(&source);
        let file_name = target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let needs_rename = target != source;
        plan.entries.push(PlannedEmoji {
            source,
            target,
            file_name,
            needs_rename,
        });
    }
    plan
}

/// Perform the in-place renames the plan calls for.
///
/// Best-effort: failures are returned for reporting, never propagated.
pub fn apply_renames<F: Filesystem>(fs: &mut F, plan: &ImportPlan) -> Vec<RenameFailure> {
    let mut failures = Vec::new();
    for entry in plan.entries.iter().filter(|entry| entry.needs_rename) {
        if let Err(err) = fs.rename(&entry.source, &entry.target) {
            failures.push(RenameFailure {
                source: entry.source.clone(),
                message: err.to_string(),
            });
        }
    }
    failures
}

/// Build one wire record per planned entry, in plan order. Pure, no I/O.
pub fn build_records(plan: &ImportPlan, config: &EmojiConfig) -> Vec<EmojiRecord> {
    plan.entries
        .iter()
        .map(|entry| EmojiRecord {
            file_name: entry.file_name.clone(),
            downloaded: true,
            emoji: EmojiDetail {
                name: naming::emoji_name(&entry.file_name),
                category: config.emoji.category.clone(),
                license: config.emoji.license.clone(),
                local_only: config.emoji.local_only,
                is_sensitive: config.emoji.is_sensitive,
                mime_type: EMOJI_MIME_TYPE.to_string(),
                aliases: Vec::new(),
                ..EmojiDetail::default()
            },
        })
        .collect()
}
