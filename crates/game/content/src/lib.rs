//! Data-driven content definitions and loaders.
//!
//! This crate is the unit factory for `tactics-core`. It reads JSON catalogs
//! and TOML rules configuration:
//! - Unit classes (default stats and weapon ranks)
//! - Heroes (class, stat layers, ranks, starting inventory)
//! - Weapons and consumables
//! - Combat rules configuration
//!
//! Content is turned into [`tactics_core::Unit`] values and never appears in
//! combat code directly.

pub mod loaders;
pub mod records;

pub use loaders::{
    Catalog, ClassCatalog, ConfigLoader, ConsumableCatalog, Content, ContentFactory, HeroCatalog,
    LoadResult, UnitFactory, WeaponCatalog,
};
pub use records::{ClassRecord, HeroRecord, StatBlock};
