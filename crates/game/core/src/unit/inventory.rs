//! Inventory system for units.
//!
//! A fixed-capacity ordered list of items. Order matters: it decides which
//! weapon a unit picks by default and what [`Inventory::weapon`] returns.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::item::{Item, Weapon, WeaponRange};

/// Outcome of adding an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    /// The item was appended.
    Added,
    /// The inventory was already full; the item is handed back untouched.
    Full(Item),
}

impl AddOutcome {
    pub const fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Items carried by one unit, at most [`GameConfig::MAX_INVENTORY_ITEMS`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inventory {
    items: ArrayVec<Item, { GameConfig::MAX_INVENTORY_ITEMS }>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    /// Builds an inventory from `items` in order, dropping anything past capacity.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut inventory = Self::new();
        for item in items {
            if let AddOutcome::Full(dropped) = inventory.add(item) {
                tracing::debug!(item = dropped.name(), "inventory full, dropping item");
            }
        }
        inventory
    }

    /// Appends `item` unless the inventory is full.
    ///
    /// A full inventory is a soft limit, not an error.
    pub fn add(&mut self, item: Item) -> AddOutcome {
        match self.items.try_push(item) {
            Ok(()) => AddOutcome::Added,
            Err(err) => AddOutcome::Full(err.element()),
        }
    }

    /// Removes the item at raw position `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Removes the first item matching the `(name, usage)` key.
    pub fn remove(&mut self, name: &str, usage: u32) -> Option<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.name() == name && item.usage() == usage)?;
        Some(self.items.remove(index))
    }

    /// First item with the given name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Weapons in insertion order.
    pub fn weapons(&self) -> impl Iterator<Item = &Weapon> + '_ {
        self.items.iter().filter_map(Item::as_weapon)
    }

    /// Weapon at `index` within the weapon-only view.
    ///
    /// An out-of-range index falls back to [`GameConfig::WEAPON_FALLBACK_INDEX`]
    /// with a warning. Returns `None` only when the fallback slot is empty too.
    pub fn weapon(&self, index: usize) -> Option<&Weapon> {
        let count = self.weapons().count();
        if index < count {
            return self.weapons().nth(index);
        }
        tracing::warn!(
            index,
            count,
            fallback = GameConfig::WEAPON_FALLBACK_INDEX,
            "weapon index out of range, using fallback slot"
        );
        self.weapons().nth(GameConfig::WEAPON_FALLBACK_INDEX)
    }

    /// Moves the weapon matching `weapon`'s `(name, usage)` key to the front.
    ///
    /// Returns false and leaves the order untouched when no item matches.
    pub fn move_weapon_to_top(&mut self, weapon: &Weapon) -> bool {
        let Some(index) = self.items.iter().position(|item| {
            item.as_weapon()
                .is_some_and(|w| w.same_key(&weapon.name, weapon.usage))
        }) else {
            return false;
        };
        let item = self.items.remove(index);
        self.items.insert(0, item);
        true
    }

    /// Returns true if a weapon with the same `(name, usage)` key is carried.
    pub fn holds(&self, weapon: &Weapon) -> bool {
        self.weapons()
            .any(|w| w.same_key(&weapon.name, weapon.usage))
    }

    /// Union of every carried weapon's range, or [`WeaponRange::ZERO`] if none.
    pub fn weapon_range(&self) -> WeaponRange {
        self.weapons()
            .map(|weapon| weapon.range)
            .reduce(WeaponRange::union)
            .unwrap_or(WeaponRange::ZERO)
    }
}
