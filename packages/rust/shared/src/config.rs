//! Generator configuration.
//!
//! An optional `katalog.toml` lives at the repository root.
//! CLI flags override config file values, which override defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KatalogError, Result};

/// Default configuration file name, looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = "katalog.toml";

// ---------------------------------------------------------------------------
// Config structs (matching katalog.toml schema)
// ---------------------------------------------------------------------------

/// Top-level config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KatalogConfig {
    /// Generated document settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Metadata file discovery settings.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Target document, relative to the repository root.
    #[serde(default = "default_output_file")]
    pub file: String,

    /// Named in the "do not edit" preamble comment.
    #[serde(default = "default_generator")]
    pub generator: String,

    /// Document title (H1).
    #[serde(default = "default_title")]
    pub title: String,

    /// Introductory paragraph under the title.
    #[serde(default = "default_intro")]
    pub intro: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            generator: default_generator(),
            title: default_title(),
            intro: default_intro(),
        }
    }
}

fn default_output_file() -> String {
    "README.md".into()
}
fn default_generator() -> String {
    "`katalog` (`make update_asset_list`)".into()
}
fn default_title() -> String {
    "MLX Katalog".into()
}
fn default_intro() -> String {
    "The MLX _Katalog_ project hosts the default assets to bootstrap the \
     _Machine Learning Exchange_."
        .into()
}

/// `[scan]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Metadata file extensions, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Paths containing any of these substrings are skipped.
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excluded: default_excluded(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["yaml".into()]
}
fn default_excluded() -> Vec<String> {
    vec!["template".into(), "test".into(), "src".into()]
}

// ---------------------------------------------------------------------------
// Runtime options (derived from config + CLI flags)
// ---------------------------------------------------------------------------

/// Options for locating metadata files.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub extensions: Vec<String>,
    pub excluded: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from(&KatalogConfig::default())
    }
}

impl From<&KatalogConfig> for ScanOptions {
    fn from(config: &KatalogConfig) -> Self {
        Self {
            extensions: config.scan.extensions.clone(),
            excluded: config.scan.excluded.clone(),
        }
    }
}

/// Options for the rendered document preamble.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub generator: String,
    pub title: String,
    pub intro: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&KatalogConfig::default())
    }
}

impl From<&KatalogConfig> for RenderOptions {
    fn from(config: &KatalogConfig) -> Self {
        Self {
            generator: config.output.generator.clone(),
            title: config.output.title.clone(),
            intro: config.output.intro.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load `katalog.toml` from the repository root. Returns defaults if the file does not exist.
pub fn load_config(root: &Path) -> Result<KatalogConfig> {
    let path = root.join(CONFIG_FILE_NAME);

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(KatalogConfig::default());
    }

    load_config_from(&path)
}

/// Load the config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<KatalogConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| KatalogError::io(path, e))?;

    let config: KatalogConfig = toml::from_str(&content)
        .map_err(|e| KatalogError::config(format!("failed to parse {}: {e}", path.display())))?;

    if config.scan.extensions.is_empty() {
        return Err(KatalogError::config(format!(
            "{}: scan.extensions must not be empty",
            path.display()
        )));
    }

    tracing::debug!(?path, "loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = KatalogConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("README.md"));
        assert!(toml_str.contains("template"));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let toml_str = r#"
[output]
title = "Internal Katalog"

[scan]
excluded = ["draft"]
"#;
        let config: KatalogConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.output.title, "Internal Katalog");
        assert_eq!(config.output.file, "README.md");
        assert_eq!(config.scan.excluded, vec!["draft".to_string()]);
        assert_eq!(config.scan.extensions, vec!["yaml".to_string()]);
    }

    #[test]
    fn options_from_config() {
        let scan = ScanOptions::default();
        assert_eq!(scan.excluded, vec!["template", "test", "src"]);

        let render = RenderOptions::default();
        assert_eq!(render.title, "MLX Katalog");
        assert!(render.intro.contains("_Machine Learning Exchange_"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(dir.path()).expect("load");
        assert_eq!(config.output.file, "README.md");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[scan]\nglob = \"*\"\n")
            .expect("write");
        let err = load_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains("config error"));
    }

    #[test]
    fn empty_extensions_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[scan]\nextensions = []\n").expect("write");
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
