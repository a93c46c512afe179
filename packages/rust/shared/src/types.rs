//! Core domain types for the asset catalog.

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// AssetCategory
// ---------------------------------------------------------------------------

/// The kinds of assets hosted in the Katalog repository.
///
/// Variant order is the order sections appear in the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetCategory {
    Pipeline,
    Component,
    Model,
    Dataset,
    Notebook,
}

impl AssetCategory {
    /// Every category, in document order.
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Pipeline,
        AssetCategory::Component,
        AssetCategory::Model,
        AssetCategory::Dataset,
        AssetCategory::Notebook,
    ];

    /// Singular tag, e.g. `pipeline`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Pipeline => "pipeline",
            Self::Component => "component",
            Self::Model => "model",
            Self::Dataset => "dataset",
            Self::Notebook => "notebook",
        }
    }

    /// Directory (relative to the repository root) holding this category's assets.
    pub fn samples_dir(self) -> String {
        format!("{}-samples", self.tag())
    }

    /// Pluralized label used as the catalog key, e.g. `components`.
    pub fn plural(self) -> String {
        format!("{}s", self.tag())
    }

    /// Section heading in the rendered document: the capitalized plural,
    /// except components, which are listed as pipeline components.
    pub fn heading(self) -> String {
        match self {
            Self::Component => "Pipeline Components".to_string(),
            _ => capitalize(&self.plural()),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// ---------------------------------------------------------------------------
// AssetRecord
// ---------------------------------------------------------------------------

/// One cataloged asset: normalized display name plus repo-relative link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    /// Normalized display name.
    pub name: String,
    /// Link relative to the repository root, always starting with `./`.
    pub url: String,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// All assets of one category, keyed by display name.
///
/// Keys keep the position of their first insertion; re-inserting a name
/// replaces its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSection {
    pub category: AssetCategory,
    pub entries: IndexMap<String, String>,
}

impl CatalogSection {
    pub fn new(category: AssetCategory) -> Self {
        Self {
            category,
            entries: IndexMap::new(),
        }
    }

    /// Insert a record, returning the URL it displaced if the name was already present.
    pub fn insert(&mut self, record: AssetRecord) -> Option<String> {
        self.entries.insert(record.name, record.url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full listing, one section per category in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub sections: Vec<CatalogSection>,
}

impl Catalog {
    /// Total number of distinct entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(CatalogSection::len).sum()
    }
}
