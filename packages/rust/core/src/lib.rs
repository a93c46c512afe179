//! Core orchestration for the Katalog asset-list generator.
//!
//! This crate ties together metadata discovery, name normalization, catalog
//! assembly, and Markdown rendering into a single regeneration pass
//! ([`pipeline::write_catalog`]).

pub mod catalog;
pub mod pipeline;

pub use pipeline::{
    CategoryCount, GenerateConfig, GenerateResult, ProgressReporter, SilentProgress, generate,
    write_catalog,
};
