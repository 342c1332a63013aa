//! Unit model: one combatant with stats, weapon ranks, equipment and inventory.
//!
//! # Design
//!
//! - **Class is a tag**: `class` only names the data record the unit was built
//!   from; there is no per-class behavior.
//! - **Explicit outcomes**: rejected equips, no-op stat increments and full
//!   inventories are reported through outcome enums instead of being swallowed.
//! - **Equipped weapon is a copy**: the canonical equip path does not require
//!   ownership, so the unit keeps its own copy of whatever it equipped.

pub mod inventory;
pub mod ranks;
pub mod stats;

pub use inventory::{AddOutcome, Inventory};
pub use ranks::WeaponRanks;
pub use stats::{FightingStats, StatChange, StatKind, UnitStats};

use crate::item::{Item, Weapon};

/// Outcome of an equip request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum EquipOutcome {
    /// The weapon is now equipped; `previous` is what it replaced.
    Equipped { previous: Option<Weapon> },
    /// The unit has no rank in the weapon's type; nothing changed.
    CannotUse,
    /// The ownership-checked path found no such weapon in the inventory.
    NotOwned,
}

impl EquipOutcome {
    pub const fn is_equipped(&self) -> bool {
        matches!(self, EquipOutcome::Equipped { .. })
    }
}

/// One combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Unit {
    name: String,
    class: String,
    stats: UnitStats,
    weapon_rank: WeaponRanks,
    weapon: Option<Weapon>,
    inventory: Inventory,
}

impl Unit {
    /// Creates a unit with an empty inventory and nothing equipped.
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        stats: UnitStats,
        weapon_rank: WeaponRanks,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            stats,
            weapon_rank,
            weapon: None,
            inventory: Inventory::new(),
        }
    }

    /// Creates a builder for constructing a unit.
    pub fn builder(name: impl Into<String>, class: impl Into<String>) -> UnitBuilder {
        UnitBuilder::new(name, class)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn stats(&self) -> &UnitStats {
        &self.stats
    }

    /// Read-only copy of the stats combat formulas use.
    pub fn fighting_stats(&self) -> FightingStats {
        self.stats.fighting()
    }

    /// Movement range in tiles.
    pub fn movement(&self) -> i32 {
        self.stats.movement
    }

    pub fn weapon_rank(&self) -> &WeaponRanks {
        &self.weapon_rank
    }

    /// Currently equipped weapon.
    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    /// Returns true if the unit has a rank in `weapon`'s type.
    ///
    /// Ownership is not checked; see [`Unit::equip_owned`] for that.
    pub fn can_equip(&self, weapon: &Weapon) -> bool {
        self.weapon_rank.can_use(weapon.weapon_type)
    }

    /// Equips a copy of `weapon` if [`Unit::can_equip`] allows it.
    pub fn equip(&mut self, weapon: &Weapon) -> EquipOutcome {
        if !self.can_equip(weapon) {
            tracing::debug!(
                unit = %self.name,
                weapon = %weapon.name,
                kind = %weapon.weapon_type,
                "equip rejected: no rank in weapon type"
            );
            return EquipOutcome::CannotUse;
        }
        let previous = self.weapon.replace(weapon.clone());
        EquipOutcome::Equipped { previous }
    }

    /// Equips the weapon at `index` of the unit's own weapon list.
    ///
    /// Unlike [`Unit::equip`], the weapon must be carried. Indexing follows
    /// [`Inventory::weapon`], including its out-of-range fallback: an index
    /// past the end equips the weapon in slot
    /// [`GameConfig::WEAPON_FALLBACK_INDEX`] if one is carried there, and only
    /// returns [`EquipOutcome::NotOwned`] when that slot is empty too.
    ///
    /// [`GameConfig::WEAPON_FALLBACK_INDEX`]: crate::config::GameConfig::WEAPON_FALLBACK_INDEX
    pub fn equip_owned(&mut self, index: usize) -> EquipOutcome {
        let Some(weapon) = self.inventory.weapon(index).cloned() else {
            return EquipOutcome::NotOwned;
        };
        self.equip(&weapon)
    }

    /// Equips the first carried weapon the unit can use, if any.
    pub fn equip_first_usable(&mut self) -> EquipOutcome {
        let candidate = self
            .inventory
            .weapons()
            .find(|weapon| self.weapon_rank.can_use(weapon.weapon_type))
            .cloned();
        match candidate {
            Some(weapon) => self.equip(&weapon),
            None => EquipOutcome::CannotUse,
        }
    }

    /// Clears the equipped weapon, returning it.
    pub fn unequip(&mut self) -> Option<Weapon> {
        self.weapon.take()
    }

    // ========================================================================
    // Stats
    // ========================================================================

    /// Adds `value` to the stat called `name`.
    ///
    /// Unknown names and zero values leave the unit unchanged.
    pub fn increment_stat(&mut self, name: &str, value: i32) -> StatChange {
        match name.parse::<StatKind>() {
            Ok(stat) => self.increment(stat, value),
            Err(_) => {
                tracing::debug!(unit = %self.name, stat = name, "unknown stat, ignoring increment");
                StatChange::UnknownStat
            }
        }
    }

    pub fn increment(&mut self, stat: StatKind, value: i32) -> StatChange {
        self.stats.increment(stat, value)
    }

    // ========================================================================
    // Inventory proxies
    // ========================================================================

    pub fn add_item(&mut self, item: impl Into<Item>) -> AddOutcome {
        self.inventory.add(item.into())
    }

    /// Removes the first item matching the `(name, usage)` key.
    pub fn remove_item(&mut self, name: &str, usage: u32) -> Option<Item> {
        self.inventory.remove(name, usage)
    }

    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.find(name)
    }

    pub fn item_count(&self) -> usize {
        self.inventory.len()
    }

    pub fn items(&self) -> &[Item] {
        self.inventory.items()
    }
}

/// Builder for constructing units.
#[derive(Debug)]
pub struct UnitBuilder {
    name: String,
    class: String,
    stats: UnitStats,
    weapon_rank: WeaponRanks,
    items: Vec<Item>,
    auto_equip: bool,
}

impl UnitBuilder {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            stats: UnitStats::default(),
            weapon_rank: WeaponRanks::new(),
            items: Vec::new(),
            auto_equip: false,
        }
    }

    pub fn stats(mut self, stats: UnitStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn weapon_rank(mut self, weapon_rank: WeaponRanks) -> Self {
        self.weapon_rank = weapon_rank;
        self
    }

    /// Appends an item; items past capacity are dropped at build time.
    pub fn item(mut self, item: impl Into<Item>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// Equip the first usable carried weapon after building.
    pub fn auto_equip(mut self, auto_equip: bool) -> Self {
        self.auto_equip = auto_equip;
        self
    }

    pub fn build(self) -> Unit {
        let mut unit = Unit::new(self.name, self.class, self.stats, self.weapon_rank);
        unit.inventory = Inventory::from_items(self.items);
        if self.auto_equip {
            let _ = unit.equip_first_usable();
        }
        unit
    }
}
