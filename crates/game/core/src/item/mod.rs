//! Carryable items: weapons and consumables.
//!
//! # Design: Tagged Item Enum
//!
//! - [`Weapon`] and [`Consumable`] hold type-specific data
//! - [`Item`] is the mixed record stored in an inventory
//! - Only weapons are visible to the combat engine; consumables are opaque

pub mod kinds;
pub mod range;

pub use kinds::{DamageType, WeaponRank, WeaponType};
pub use range::{RangeParseError, WeaponRange};

/// A piece of equippable gear.
///
/// Everything except `usage` is fixed once the weapon is created. Usage is
/// decremented by the caller that resolves attacks, never by this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Weapon {
    /// Catalogs key weapons by name, so the field may be absent in records.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub atk: i32,
    /// Accuracy.
    pub hit: i32,
    #[cfg_attr(feature = "serde", serde(rename = "ctr"))]
    pub critical_rate: i32,
    pub weight: i32,
    pub range: WeaponRange,
    pub rank: WeaponRank,
    pub damage_type: DamageType,
    pub weapon_type: WeaponType,
    /// Remaining uses.
    pub usage: u32,
    /// Shop price.
    pub value: u32,
}

impl Weapon {
    /// Returns true if this weapon matches the `(name, usage)` identity key.
    ///
    /// Two copies of one weapon are told apart by their remaining uses, so the
    /// identity key is `(name, usage)`.
    pub fn same_key(&self, name: &str, usage: u32) -> bool {
        self.name == name && self.usage == usage
    }
}

/// Non-combat item such as a vulnerary or a key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Consumable {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Free-form category tag from the catalog (e.g. `"heal"`).
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub usage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: u32,
}

/// Discriminant of an [`Item`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Consumable,
}

/// Inventory entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "itemType", rename_all = "lowercase"))]
pub enum Item {
    Weapon(Weapon),
    Consumable(Consumable),
}

impl Item {
    pub fn item_type(&self) -> ItemType {
        match self {
            Item::Weapon(_) => ItemType::Weapon,
            Item::Consumable(_) => ItemType::Consumable,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(weapon) => &weapon.name,
            Item::Consumable(consumable) => &consumable.name,
        }
    }

    pub fn usage(&self) -> u32 {
        match self {
            Item::Weapon(weapon) => weapon.usage,
            Item::Consumable(consumable) => consumable.usage,
        }
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(weapon) => Some(weapon),
            Item::Consumable(_) => None,
        }
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self, Item::Weapon(_))
    }
}

impl From<Weapon> for Item {
    fn from(weapon: Weapon) -> Self {
        Item::Weapon(weapon)
    }
}

impl From<Consumable> for Item {
    fn from(consumable: Consumable) -> Self {
        Item::Consumable(consumable)
    }
}
