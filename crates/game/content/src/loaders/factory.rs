//! Content factory for building units from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tactics_core::{GameConfig, Item, Unit};

use crate::loaders::{
    ClassCatalog, ConfigLoader, ConsumableCatalog, HeroCatalog, LoadResult, WeaponCatalog,
};
use crate::records::HeroRecord;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── classes.json
/// ├── heroes.json
/// ├── weapons.json
/// └── consumables.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load unit class defaults from `classes.json`.
    pub fn load_classes(&self) -> LoadResult<ClassCatalog> {
        ClassCatalog::load(&self.data_dir.join("classes.json"))
    }

    /// Load hero definitions from `heroes.json`.
    pub fn load_heroes(&self) -> LoadResult<HeroCatalog> {
        HeroCatalog::load(&self.data_dir.join("heroes.json"))
    }

    /// Load weapon catalog from `weapons.json`.
    pub fn load_weapons(&self) -> LoadResult<WeaponCatalog> {
        WeaponCatalog::load(&self.data_dir.join("weapons.json"))
    }

    /// Load consumable catalog from `consumables.json`.
    pub fn load_consumables(&self) -> LoadResult<ConsumableCatalog> {
        ConsumableCatalog::load(&self.data_dir.join("consumables.json"))
    }

    /// Load every catalog in the data directory.
    pub fn load(&self) -> LoadResult<Content> {
        Ok(Content {
            config: self.load_config()?,
            classes: self.load_classes()?,
            heroes: self.load_heroes()?,
            weapons: self.load_weapons()?,
            consumables: self.load_consumables()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Every catalog needed to build units.
#[derive(Clone, Debug, Default)]
pub struct Content {
    pub config: GameConfig,
    pub classes: ClassCatalog,
    pub heroes: HeroCatalog,
    pub weapons: WeaponCatalog,
    pub consumables: ConsumableCatalog,
}

impl Content {
    pub fn unit_factory(&self) -> UnitFactory<'_> {
        UnitFactory {
            classes: &self.classes,
            heroes: &self.heroes,
            weapons: &self.weapons,
            consumables: &self.consumables,
        }
    }
}

/// Builds [`Unit`]s from hero records.
///
/// For each hero the factory merges class defaults, the hero's `baseStats`
/// block and its top-level overrides into one stat record, merges weapon
/// ranks, resolves inventory item names and optionally equips the first
/// usable weapon.
#[derive(Clone, Copy, Debug)]
pub struct UnitFactory<'a> {
    classes: &'a ClassCatalog,
    heroes: &'a HeroCatalog,
    weapons: &'a WeaponCatalog,
    consumables: &'a ConsumableCatalog,
}

impl<'a> UnitFactory<'a> {
    pub fn new(
        classes: &'a ClassCatalog,
        heroes: &'a HeroCatalog,
        weapons: &'a WeaponCatalog,
        consumables: &'a ConsumableCatalog,
    ) -> Self {
        Self {
            classes,
            heroes,
            weapons,
            consumables,
        }
    }

    /// Build the hero stored under `key`.
    pub fn build(&self, key: &str) -> LoadResult<Unit> {
        let hero = self
            .heroes
            .get(key)
            .ok_or_else(|| anyhow::anyhow!("hero '{}' not found", key))?;
        self.build_record(key, hero)
            .with_context(|| format!("Failed to build hero '{}'", key))
    }

    /// Build every hero in the catalog, in key order.
    pub fn build_all(&self) -> LoadResult<Vec<Unit>> {
        self.heroes.names().map(|key| self.build(key)).collect()
    }

    fn build_record(&self, key: &str, hero: &HeroRecord) -> LoadResult<Unit> {
        let class = self
            .classes
            .get(&hero.class)
            .ok_or_else(|| anyhow::anyhow!("class '{}' not found", hero.class))?;

        let stats = hero.merged_stats(class);
        let ranks = hero.merged_ranks(class)?;
        let items = hero
            .inventory
            .iter()
            .map(|name| self.resolve_item(name))
            .collect::<LoadResult<Vec<_>>>()?;

        let name = hero.name.as_deref().unwrap_or(key);
        let unit = Unit::builder(name, hero.class.as_str())
            .stats(stats)
            .weapon_rank(ranks)
            .items(items)
            .auto_equip(hero.auto_equip)
            .build();

        tracing::debug!(
            hero = key,
            class = %hero.class,
            items = unit.item_count(),
            weapon = unit.weapon().map(|w| w.name.as_str()),
            "built unit"
        );
        Ok(unit)
    }

    /// Look up an item by name: weapons first, then consumables.
    pub fn resolve_item(&self, name: &str) -> LoadResult<Item> {
        if let Some(weapon) = self.weapons.get(name) {
            return Ok(Item::Weapon(weapon.clone()));
        }
        if let Some(consumable) = self.consumables.get(name) {
            return Ok(Item::Consumable(consumable.clone()));
        }
        Err(anyhow::anyhow!("unknown item '{}'", name))
    }
}
