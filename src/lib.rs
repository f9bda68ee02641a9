//! # emoji-meta
//!
//! Builds a `meta.json` manifest describing a directory of image files for
//! bulk import into a Misskey-style custom-emoji catalog. Your filesystem is
//! the data source: each accepted image becomes one manifest record carrying
//! the configured default attributes, and the file's name (normalized for
//! shortcode rules) is the record's identity.
//!
//! # Architecture: Plan, Then Apply
//!
//! The run is a single linear pipeline, with the read-only decisions split
//! from the filesystem mutations:
//!
//! ```text
//! 1. Load config    cfg/config.yaml  →  EmojiConfig      (fatal on error)
//! 2. Scan           <dir>            →  candidate paths  (read-only walk)
//! 3. Plan           candidates       →  ImportPlan       (pure)
//! 4. Apply          plan             →  in-place renames (best-effort)
//! 5. Build records  plan + config    →  EmojiRecord list (pure)
//! 6. Write          records          →  <dir>/meta.json  (fatal on error)
//! ```
//!
//! This separation exists for two reasons:
//!
//! - **Testability**: planning and record building are pure functions over
//!   path lists, so the interesting edge cases (duplicate filtering, rename
//!   targets) are unit-testable without a disk.
//! - **Honest reporting**: everything the run *will* do is known before
//!   anything is mutated, so skipped duplicates and failed renames can be
//!   reported precisely.
//!
//! All filesystem access goes through the [`vfs::Filesystem`] capability;
//! tests substitute [`vfs::MemoryFilesystem`] for the real disk.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.yaml` loading and validation (host + emoji defaults) |
//! | [`vfs`] | Filesystem capability: deterministic walk, rename, write |
//! | [`scan`] | Candidate discovery against the extension allow-list |
//! | [`dedup`] | Copy-suffix duplicate heuristic (`name (1).png`) |
//! | [`naming`] | Hyphen→underscore normalization and shortcode derivation |
//! | [`plan`] | Plan building, rename application, record building |
//! | [`manifest`] | Wire types and the `meta.json` writer |
//! | [`output`] | CLI output formatting — duplicates, failures, run summary |
//!
//! # Design Decisions
//!
//! ## Case-Sensitive Extension Allow-List
//!
//! Only `.png .PNG .jpg .jpeg .gif .GIF` are imported — the exact spellings
//! the downstream converter handles. `.JPG` and `.JPEG` files are skipped
//! rather than guessed at; a bulk import that silently half-works is worse
//! than one that visibly skips.
//!
//! ## Duplicates Are Skipped, Never Deleted
//!
//! The `(N)` copy-suffix heuristic works on the path string alone and may
//! over-match (see [`dedup`]). Matched files are left untouched on disk and
//! reported, so the operator can rename a false positive and re-run.
//!
//! ## Best-Effort Mutation, Fatal Output
//!
//! Per-entry walk errors and individual rename failures never abort a run —
//! for a one-shot operator tool, a partial import beats none. The two ends
//! of the pipeline are strict: unparsable configuration and an unwritable
//! manifest are always fatal. The walk-error policy is a CLI flag
//! (`--on-entry-error`), not a hidden catch.

pub mod config;
pub mod dedup;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod plan;
pub mod scan;
pub mod vfs;
