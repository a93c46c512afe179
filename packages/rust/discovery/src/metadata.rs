//! Asset name extraction from YAML metadata documents.
//!
//! Pipelines are compiled Argo workflows: the human-facing name sits inside a
//! JSON pipeline spec embedded as a string annotation. Every other category
//! declares `name` at the top level, or under `metadata.name` for
//! Kubernetes-style resources.

use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, instrument};

use katalog_markdown::title_case;
use katalog_shared::{AssetCategory, KatalogError, Result};

/// Annotation holding the JSON-encoded pipeline spec on compiled pipelines.
pub const PIPELINE_SPEC_ANNOTATION: &str = "pipelines.kubeflow.org/pipeline_spec";

/// Read and parse a metadata document. The root must be a mapping.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| KatalogError::io(path, e))?;

    let doc: Value =
        serde_yaml::from_str(&content).map_err(|e| KatalogError::parse(path, e.to_string()))?;

    if !doc.is_mapping() {
        return Err(KatalogError::parse(
            path,
            "expected a mapping at the document root",
        ));
    }

    Ok(doc)
}

/// Load `path` and pull out the (not yet normalized) asset name.
#[instrument(skip_all, fields(path = %path.display(), category = %category))]
pub fn extract_asset_name(path: &Path, category: AssetCategory) -> Result<String> {
    let doc = load_document(path)?;
    let name = asset_name_from_document(&doc, category);
    debug!(%name, "asset name extracted");
    Ok(name)
}

/// Asset name of an already-parsed document. Missing fields yield `""`.
pub fn asset_name_from_document(doc: &Value, category: AssetCategory) -> String {
    match category {
        AssetCategory::Pipeline => pipeline_name(doc),
        _ => declared_name(doc),
    }
}

// ---------------------------------------------------------------------------
// Pipelines
// ---------------------------------------------------------------------------

fn pipeline_name(doc: &Value) -> String {
    let name = pipeline_spec_name(doc).unwrap_or_default();
    let name = name.trim();

    if is_kebab_identifier(name) {
        title_case(&name.replace('-', " "))
    } else {
        name.to_string()
    }
}

/// `metadata.annotations[PIPELINE_SPEC_ANNOTATION]` decoded as JSON, then `.name`.
fn pipeline_spec_name(doc: &Value) -> Option<String> {
    let spec = doc
        .get("metadata")?
        .get("annotations")?
        .get(PIPELINE_SPEC_ANNOTATION)?
        .as_str()?;

    let spec: serde_json::Value = match serde_json::from_str(spec) {
        Ok(spec) => spec,
        Err(e) => {
            debug!(error = %e, "pipeline spec annotation is not valid JSON");
            return None;
        }
    };

    spec.get("name")?.as_str().map(str::to_string)
}

/// All lowercase, hyphenated, no spaces: `my-cool-pipeline`.
fn is_kebab_identifier(name: &str) -> bool {
    name == name.to_lowercase() && name.contains('-') && !name.contains(' ')
}

// ---------------------------------------------------------------------------
// Components, models, datasets, notebooks
// ---------------------------------------------------------------------------

/// Top-level `name` if set, else `metadata.name`.
fn declared_name(doc: &Value) -> String {
    doc.get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .or_else(|| doc.get("metadata")?.get("name")?.as_str())
        .unwrap_or_default()
        .to_string()
}
