//! Metadata file discovery and asset name extraction.
//!
//! Each asset category lives in its own `<category>-samples/` tree at the
//! repository root. [`locate_metadata_files`] finds the metadata documents in
//! that tree; [`extract_asset_name`] reads the display name out of one.

mod metadata;

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use katalog_shared::{AssetCategory, ScanOptions};

pub use metadata::{
    PIPELINE_SPEC_ANNOTATION, asset_name_from_document, extract_asset_name, load_document,
};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A metadata document found under a category's samples directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFile {
    /// Full path on disk.
    pub path: PathBuf,
    /// Path relative to the repository root, `/`-separated.
    pub relative: String,
}

impl MetadataFile {
    /// Repo-relative link, e.g. `./model-samples/max-ocr/max-ocr.yaml`.
    pub fn url(&self) -> String {
        format!("./{}", self.relative)
    }
}

// ---------------------------------------------------------------------------
// Locator
// ---------------------------------------------------------------------------

/// Find every metadata file for `category` under `root`.
///
/// Walks `<root>/<category>-samples/` recursively (following symlinks,
/// skipping dot-files and dot-directories), keeps files whose
/// extension is one of `opts.extensions`, and drops any file whose
/// root-relative path contains one of `opts.excluded`. The result is sorted
/// by relative path. A missing samples directory yields an empty list.
#[instrument(skip_all, fields(root = %root.display(), category = %category))]
pub fn locate_metadata_files(
    root: &Path,
    category: AssetCategory,
    opts: &ScanOptions,
) -> Vec<MetadataFile> {
    let samples_dir = root.join(category.samples_dir());

    if !samples_dir.is_dir() {
        debug!(path = %samples_dir.display(), "samples directory not found, skipping");
        return Vec::new();
    }

    let mut files: Vec<MetadataFile> = WalkDir::new(&samples_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_extension(entry.path(), &opts.extensions))
        .filter_map(|entry| {
            let relative = relative_path(root, entry.path())?;
            Some(MetadataFile {
                path: entry.into_path(),
                relative,
            })
        })
        .filter(|file| {
            let excluded = is_excluded(&file.relative, &opts.excluded);
            if excluded {
                debug!(path = %file.relative, "excluded");
            }
            !excluded
        })
        .collect();

    files.sort_by(|a, b| a.relative.cmp(&b.relative));

    debug!(count = files.len(), "metadata files located");
    files
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Dot-files and dot-directories such as `.ipynb_checkpoints`.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

fn is_excluded(relative: &str, excluded: &[String]) -> bool {
    excluded.iter().any(|word| relative.contains(word.as_str()))
}

/// `/`-joined path of `path` below `root`.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
