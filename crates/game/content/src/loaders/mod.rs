//! Content loaders for reading game data from files.
//!
//! Catalogs (heroes, classes, weapons, consumables) are JSON maps keyed by
//! name; rules configuration is TOML.

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::{Catalog, ClassCatalog, ConsumableCatalog, HeroCatalog, WeaponCatalog};
pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory, UnitFactory};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
