use clap::Parser;
use emoji_meta::vfs::{EntryErrorPolicy, OsFilesystem};
use emoji_meta::{config, manifest, output, plan, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "emoji-meta")]
#[command(version)]
#[command(about = "Build a meta.json manifest for bulk custom-emoji import")]
#[command(long_about = "\
Build a meta.json manifest for bulk custom-emoji import

Scans a directory of image files and writes <dir>/meta.json in the
catalog's metaVersion 2 format, one record per accepted image:

  emojis/
  ├── blob-cat.png        → renamed to blob_cat.png, shortcode \"blob_cat\"
  ├── blob-cat (1).png    → copy duplicate: skipped, left untouched
  ├── party.gif           → shortcode \"party\"
  └── notes.txt           → not an image: ignored

Accepted extensions (exact match): .png .PNG .jpg .jpeg .gif .GIF

Each record carries the default license, category, and sensitivity flags
from the configuration file; id, URLs, and timestamps are filled in by
the receiving catalog at import time.")]
struct Cli {
    /// Directory of emoji images to scan
    dir: PathBuf,

    /// Configuration file (host + default emoji attributes)
    #[arg(long, default_value = "cfg/config.yaml")]
    config: PathBuf,

    /// What to do when a single entry cannot be read during the walk
    #[arg(long, value_enum, default_value = "continue")]
    on_entry_error: OnEntryError,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OnEntryError {
    /// Skip the unreadable entry and keep walking
    Continue,
    /// Abort the run on the first walk error
    Abort,
}

impl From<OnEntryError> for EntryErrorPolicy {
    fn from(value: OnEntryError) -> Self {
        match value {
            OnEntryError::Continue => EntryErrorPolicy::Continue,
            OnEntryError::Abort => EntryErrorPolicy::Abort,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // One stamp for the whole run, captured before any I/O.
    let exported_at = manifest::export_stamp();

    let config = config::load_config(&cli.config)?;

    let mut fs = OsFilesystem;
    let candidates = scan::scan(&fs, &cli.dir, cli.on_entry_error.into())?;

    let import_plan = plan::build_plan(candidates);
    output::print_duplicates(&import_plan);

    let failures = plan::apply_renames(&mut fs, &import_plan);
    output::print_rename_failures(&failures);

    let records = plan::build_records(&import_plan, &config);
    let document = manifest::Manifest::new(config.host.clone(), exported_at, records);
    let manifest_path = manifest::write_manifest(&mut fs, &cli.dir, &document)?;

    output::print_summary(&import_plan, &failures, &manifest_path);
    Ok(())
}
