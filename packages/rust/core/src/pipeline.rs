//! End-to-end regeneration: locate → extract → normalize → assemble → render → write.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument};

use katalog_discovery::locate_metadata_files;
use katalog_shared::{
    AssetCategory, KatalogConfig, KatalogError, RenderOptions, Result, ScanOptions,
};

use crate::catalog;

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Repository root holding the `<category>-samples/` directories.
    pub root: PathBuf,
    /// Document to (over)write.
    pub output_path: PathBuf,
    /// Metadata file discovery options.
    pub scan: ScanOptions,
    /// Document preamble options.
    pub render: RenderOptions,
}

impl GenerateConfig {
    /// Resolve a run against `root` using the loaded config file settings.
    pub fn new(root: impl Into<PathBuf>, config: &KatalogConfig) -> Self {
        let root = root.into();
        Self {
            output_path: root.join(&config.output.file),
            scan: ScanOptions::from(config),
            render: RenderOptions::from(config),
            root,
        }
    }
}

/// Per-category tally of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: AssetCategory,
    /// Metadata files read.
    pub files: usize,
    /// Entries listed after duplicate names collapsed.
    pub entries: usize,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// The rendered Markdown document.
    pub document: String,
    /// Where the document is (or would be) written.
    pub output_path: PathBuf,
    /// Per-category counts, in document order.
    pub counts: Vec<CategoryCount>,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

impl GenerateResult {
    /// Total entries listed across all categories.
    pub fn total_entries(&self) -> usize {
        self.counts.iter().map(|c| c.entries).sum()
    }
}

/// Progress callback for reporting run status.
pub trait ProgressReporter: Send + Sync {
    /// Called when a category scan begins.
    fn category(&self, category: AssetCategory, file_count: usize);
    /// Called after each metadata file is read.
    fn asset_read(&self, path: &str, current: usize, total: usize);
    /// Called when the run completes.
    fn done(&self, result: &GenerateResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn category(&self, _category: AssetCategory, _file_count: usize) {}
    fn asset_read(&self, _path: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &GenerateResult) {}
}

/// Build the catalog document without touching the output file.
#[instrument(skip_all, fields(root = %config.root.display()))]
pub fn generate(
    config: &GenerateConfig,
    progress: &dyn ProgressReporter,
) -> Result<GenerateResult> {
    let start = Instant::now();

    if !config.root.is_dir() {
        return Err(KatalogError::config(format!(
            "repository root {} is not a directory",
            config.root.display()
        )));
    }

    let mut groups = Vec::with_capacity(AssetCategory::ALL.len());
    let mut file_counts = Vec::with_capacity(AssetCategory::ALL.len());

    for category in AssetCategory::ALL {
        let files = locate_metadata_files(&config.root, category, &config.scan);
        progress.category(category, files.len());

        let total = files.len();
        let mut current = 0;
        let records = catalog::read_assets(&files, category, |file| {
            current += 1;
            progress.asset_read(&file.relative, current, total);
        })?;

        file_counts.push(files.len());
        groups.push((category, records));
    }

    let catalog = catalog::assemble_catalog(groups);
    let document = katalog_markdown::render_catalog(&catalog, &config.render);

    let counts = catalog
        .sections
        .iter()
        .zip(file_counts)
        .map(|(section, files)| CategoryCount {
            category: section.category,
            files,
            entries: section.len(),
        })
        .collect();

    let result = GenerateResult {
        document,
        output_path: config.output_path.clone(),
        counts,
        elapsed: start.elapsed(),
    };

    info!(
        entries = result.total_entries(),
        elapsed_ms = result.elapsed.as_millis() as u64,
        "catalog generated"
    );

    Ok(result)
}

/// Generate the document and overwrite `config.output_path` with it.
#[instrument(skip_all, fields(output = %config.output_path.display()))]
pub fn write_catalog(
    config: &GenerateConfig,
    progress: &dyn ProgressReporter,
) -> Result<GenerateResult> {
    let result = generate(config, progress)?;

    std::fs::write(&result.output_path, &result.document)
        .map_err(|e| KatalogError::io(&result.output_path, e))?;

    info!(
        path = %result.output_path.display(),
        bytes = result.document.len(),
        "catalog written"
    );

    progress.done(&result);
    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
