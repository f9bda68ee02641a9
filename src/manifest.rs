//! Manifest wire format and writer.
//!
//! The output is the catalog's `metaVersion: 2` bulk-import document:
//!
//! ```json
//! {
//!   "metaVersion": 2,
//!   "host": "example.social",
//!   "exportedAt": "2026-08-07T12:00:00Z",
//!   "emojis": [
//!     {
//!       "fileName": "a_b.png",
//!       "downloaded": true,
//!       "emoji": { "name": "a_b", "category": "misc", ... }
//!     }
//!   ]
//! }
//! ```
//!
//! Field names are the receiving system's wire names, including the
//! long-winded reaction-role key, kept verbatim. Several [`EmojiDetail`]
//! fields are deliberately left at their zero values: `id`, `updatedAt`,
//! `host`, the URL triple, and the reaction-role list are filled in by the
//! importer once the records land server-side.

use crate::vfs::{Filesystem, VfsError};
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest format version understood by the importer.
pub const META_VERSION: u32 = 2;

/// Output file name, written into the scanned directory.
pub const MANIFEST_FILE_NAME: &str = "meta.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: VfsError,
    },
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The complete output document for one run.
#[derive(Debug, Serialize)]
pub struct Manifest {
    #[serde(rename = "metaVersion")]
    pub meta_version: u32,
    pub host: String,
    #[serde(rename = "exportedAt")]
    pub exported_at: String,
    pub emojis: Vec<EmojiRecord>,
}

impl Manifest {
    pub fn new(host: String, exported_at: String, emojis: Vec<EmojiRecord>) -> Self {
        Self {
            meta_version: META_VERSION,
            host,
            exported_at,
            emojis,
        }
    }
}

/// One accepted image file plus its synthesized catalog metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmojiRecord {
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Always true here: the files are already local.
    pub downloaded: bool,
    pub emoji: EmojiDetail,
}

/// Catalog-side emoji attributes.
///
/// Zero-valued fields are populated by the receiving system, not this tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiDetail {
    pub id: String,
    pub updated_at: String,
    pub name: String,
    pub host: String,
    pub category: String,
    pub original_url: String,
    pub public_url: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub aliases: Vec<String>,
    pub license: String,
    pub local_only: bool,
    pub is_sensitive: bool,
    #[serde(rename = "roleIdsThatCanBeUsedThisEmojiAsReaction")]
    pub reaction_role_ids: Vec<String>,
}

/// Current UTC wall-clock in the manifest's timestamp format.
///
/// Called once at process start; the whole run shares one stamp.
pub fn export_stamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Serialize `manifest` as two-space-indented JSON and write it to
/// `<root>/meta.json`, overwriting any previous manifest. Returns the
/// written path.
pub fn write_manifest<F: Filesystem>(
    fs: &mut F,
    root: &Path,
    manifest: &Manifest,
) -> Result<PathBuf, ManifestError> {
    let path = root.join(MANIFEST_FILE_NAME);
    let json = serde_json::to_string_pretty(manifest)?;
    fs.write(&path, json.as_bytes())
        .map_err(|source| ManifestError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{Filesystem as _, MemoryFilesystem};

    fn sample_record() -> EmojiRecord {
        EmojiRecord {
            file_name: "a_b.png".into(),
            downloaded: true,
            emoji: EmojiDetail {
                name: "a_b".into(),
                category: "misc".into(),
                license: "CC0".into(),
                mime_type: "image/webp".into(),
                ..EmojiDetail::default()
            },
        }
    }

    #[test]
    fn wire_names_match_catalog_format() {
        let manifest = Manifest::new(
            "example.social".into(),
            "2026-08-07T12:00:00Z".into(),
            vec![sample_record()],
        );
        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["metaVersion"], 2);
        assert_eq!(json["host"], "example.social");
        assert_eq!(json["exportedAt"], "2026-08-07T12:00:00Z");

        let emoji = &json["emojis"][0];
        assert_eq!(emoji["fileName"], "a_b.png");
        assert_eq!(emoji["downloaded"], true);

        let detail = &emoji["emoji"];
        assert_eq!(detail["name"], "a_b");
        assert_eq!(detail["type"], "image/webp");
        assert_eq!(detail["isSensitive"], false);
        assert_eq!(detail["localOnly"], false);
        assert_eq!(detail["updatedAt"], "");
        assert_eq!(detail["originalUrl"], "");
        assert_eq!(detail["publicUrl"], "");
        assert!(detail["aliases"].as_array().unwrap().is_empty());
        assert!(
            detail["roleIdsThatCanBeUsedThisEmojiAsReaction"]
                .as_array()
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn server_populated_fields_default_to_zero_values() {
        let detail = EmojiDetail::default();
        assert_eq!(detail.id, "");
        assert_eq!(detail.updated_at, "");
        assert_eq!(detail.host, "");
        assert_eq!(detail.uri, "");
        assert!(detail.reaction_role_ids.is_empty());
    }

    #[test]
    fn output_is_two_space_indented() {
        let manifest = Manifest::new("h".into(), "t".into(), vec![]);
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        assert!(json.contains("\n  \"metaVersion\": 2"));
    }

    #[test]
    fn export_stamp_shape() {
        let stamp = export_stamp();
        // 2026-08-07T12:34:56Z
        assert_eq!(stamp.len(), 20);
        assert!(stamp.ends_with('Z'));
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], "T");
    }

    #[test]
    fn write_manifest_lands_in_root_and_overwrites() {
        let mut fs_ = MemoryFilesystem::new();
        let root = Path::new("/packs");
        fs_.write(&root.join("meta.json"), b"stale").unwrap();

        let manifest = Manifest::new("h".into(), "t".into(), vec![sample_record()]);
        let path = write_manifest(&mut fs_, root, &manifest).unwrap();

        assert_eq!(path, root.join("meta.json"));
        let written = fs_.contents(&path).unwrap();
        assert_ne!(written, b"stale");
        let parsed: serde_json::Value = serde_json::from_slice(written).unwrap();
        assert_eq!(parsed["emojis"][0]["fileName"], "a_b.png");
    }
}
