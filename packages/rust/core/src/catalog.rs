//! Catalog assembly.
//!
//! Turns the located metadata files of each category into normalized
//! [`AssetRecord`]s and folds them into name-keyed [`CatalogSection`]s.

use tracing::{debug, info, instrument, warn};

use katalog_discovery::{MetadataFile, extract_asset_name};
use katalog_markdown::normalize;
use katalog_shared::{AssetCategory, AssetRecord, Catalog, CatalogSection, Result};

/// Read one metadata file into a record with a normalized display name.
pub fn read_asset(file: &MetadataFile, category: AssetCategory) -> Result<AssetRecord> {
    let raw = extract_asset_name(&file.path, category)?;
    let name = normalize(&raw);

    if name.is_empty() {
        warn!(path = %file.relative, "no asset name found");
    }

    Ok(AssetRecord {
        name,
        url: file.url(),
    })
}

/// Read every file of a category, in the given order. The first unreadable
/// or unparsable document aborts with its error.
#[instrument(skip_all, fields(category = %category, files = files.len()))]
pub fn read_assets(
    files: &[MetadataFile],
    category: AssetCategory,
    mut on_read: impl FnMut(&MetadataFile),
) -> Result<Vec<AssetRecord>> {
    let mut records = Vec::with_capacity(files.len());

    for file in files {
        let record = read_asset(file, category)?;
        debug!(name = %record.name, url = %record.url, "asset read");
        on_read(file);
        records.push(record);
    }

    Ok(records)
}

/// Fold records into one section.
///
/// Sections are keyed by display name: when two records share a name the
/// later URL replaces the earlier one, keeping the earlier position.
pub fn assemble_section(category: AssetCategory, records: Vec<AssetRecord>) -> CatalogSection {
    let mut section = CatalogSection::new(category);

    for record in records {
        let name = record.name.clone();
        let url = record.url.clone();
        if let Some(replaced) = section.insert(record) {
            warn!(
                %category,
                %name,
                kept = %url,
                dropped = %replaced,
                "duplicate asset name, keeping the later file"
            );
        }
    }

    section
}

/// Build the full catalog, one section per category in the order given.
pub fn assemble_catalog(
    groups: impl IntoIterator<Item = (AssetCategory, Vec<AssetRecord>)>,
) -> Catalog {
    let sections: Vec<CatalogSection> = groups
        .into_iter()
        .map(|(category, records)| {
            let section = assemble_section(category, records);
            if section.is_empty() {
                debug!(samples_dir = %category.samples_dir(), "no assets found");
            }
            info!(section = %category.plural(), entries = section.len(), "section assembled");
            section
        })
        .collect();

    Catalog { sections }
}
