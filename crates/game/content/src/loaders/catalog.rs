//! Name-keyed JSON catalogs.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use tactics_core::{Consumable, Weapon};

use crate::loaders::{LoadResult, read_file};
use crate::records::{ClassRecord, HeroRecord};

/// Records that carry their own catalog key.
pub trait Named {
    fn set_name(&mut self, name: &str);
}

impl Named for Weapon {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl Named for Consumable {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl Named for ClassRecord {
    fn set_name(&mut self, _name: &str) {}
}

impl Named for HeroRecord {
    fn set_name(&mut self, name: &str) {
        if self.name.is_none() {
            self.name = Some(name.to_string());
        }
    }
}

/// A JSON object mapping names to records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

pub type WeaponCatalog = Catalog<Weapon>;
pub type ConsumableCatalog = Catalog<Consumable>;
pub type ClassCatalog = Catalog<ClassRecord>;
pub type HeroCatalog = Catalog<HeroRecord>;

impl<T: DeserializeOwned + Named> Catalog<T> {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        let catalog = Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
        tracing::debug!(
            path = %path.display(),
            entries = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(content: &str) -> LoadResult<Self> {
        let mut entries: BTreeMap<String, T> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog JSON: {}", e))?;
        for (name, record) in entries.iter_mut() {
            record.set_name(name);
        }
        Ok(Self { entries })
    }
}

impl<T> Catalog<T> {
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, name: impl Into<String>, record: T) -> Option<T> {
        self.entries.insert(name.into(), record)
    }
}

impl<T> FromIterator<(String, T)> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
