//! Shared types, error model, and configuration for the Katalog asset-list generator.
//!
//! This crate is the foundation depended on by all other Katalog crates.
//! It provides:
//! - [`KatalogError`]: the unified error type
//! - Domain types ([`AssetCategory`], [`AssetRecord`], [`Catalog`], [`CatalogSection`])
//! - Configuration ([`KatalogConfig`], [`ScanOptions`], [`RenderOptions`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    CONFIG_FILE_NAME, KatalogConfig, OutputConfig, RenderOptions, ScanConfig, ScanOptions,
    load_config, load_config_from,
};
pub use error::{KatalogError, Result};
pub use types::{AssetCategory, AssetRecord, Catalog, CatalogSection};
