//! Fixture units and items shared by unit tests.

use crate::item::{Consumable, DamageType, Weapon, WeaponRange, WeaponRank, WeaponType};
use crate::unit::{Unit, UnitStats, WeaponRanks};

#[allow(clippy::too_many_arguments)]
fn weapon(
    name: &str,
    weapon_type: WeaponType,
    damage_type: DamageType,
    atk: i32,
    hit: i32,
    critical_rate: i32,
    weight: i32,
    range: WeaponRange,
) -> Weapon {
    Weapon {
        name: name.to_string(),
        atk,
        hit,
        critical_rate,
        weight,
        range,
        rank: WeaponRank::E,
        damage_type,
        weapon_type,
        usage: 46,
        value: 460,
    }
}

pub fn iron_sword() -> Weapon {
    weapon(
        "Iron Sword",
        WeaponType::Sword,
        DamageType::Physical,
        5,
        90,
        0,
        5,
        WeaponRange::single(1),
    )
}

pub fn iron_axe() -> Weapon {
    weapon(
        "Iron Axe",
        WeaponType::Axe,
        DamageType::Physical,
        8,
        75,
        0,
        10,
        WeaponRange::single(1),
    )
}

pub fn iron_lance() -> Weapon {
    weapon(
        "Iron Lance",
        WeaponType::Lance,
        DamageType::Physical,
        7,
        80,
        0,
        8,
        WeaponRange::single(1),
    )
}

pub fn iron_bow() -> Weapon {
    weapon(
        "Iron Bow",
        WeaponType::Bow,
        DamageType::Physical,
        6,
        85,
        0,
        5,
        WeaponRange::single(2),
    )
}

pub fn fire() -> Weapon {
    weapon(
        "Fire",
        WeaponType::Anima,
        DamageType::Magical,
        5,
        90,
        0,
        4,
        WeaponRange::new(1, 2),
    )
}

pub fn flux() -> Weapon {
    weapon(
        "Flux",
        WeaponType::Dark,
        DamageType::Magical,
        7,
        80,
        0,
        8,
        WeaponRange::new(1, 2),
    )
}

pub fn heal() -> Weapon {
    weapon(
        "Heal",
        WeaponType::Staff,
        DamageType::Magical,
        0,
        0,
        0,
        1,
        WeaponRange::single(1),
    )
}

pub fn vulnerary() -> Consumable {
    Consumable {
        name: "Vulnerary".to_string(),
        kind: "heal".to_string(),
        usage: 3,
        value: 300,
    }
}

fn stats(strength: i32, magic: i32, skill: i32, speed: i32, luck: i32) -> UnitStats {
    UnitStats {
        constitution: 5,
        defense: 4,
        hp: 16,
        full_hp: 16,
        magic,
        luck,
        resistance: 2,
        skill,
        speed,
        strength,
        movement: 5,
    }
}

/// Sword user with nothing equipped and an empty inventory.
pub fn lord() -> Unit {
    let ranks: WeaponRanks = [(WeaponType::Sword, WeaponRank::D)].into_iter().collect();
    Unit::new("eirika", "lord", stats(4, 2, 8, 9, 5), ranks)
}

/// Axe and lance user with nothing equipped and an empty inventory.
pub fn fighter() -> Unit {
    let ranks: WeaponRanks = [
        (WeaponType::Axe, WeaponRank::C),
        (WeaponType::Lance, WeaponRank::E),
        (WeaponType::Sword, WeaponRank::E),
    ]
    .into_iter()
    .collect();
    Unit::new("garcia", "fighter", stats(8, 0, 5, 3, 3), ranks)
}

/// Anima, dark and staff user.
pub fn mage() -> Unit {
    let ranks: WeaponRanks = [
        (WeaponType::Anima, WeaponRank::C),
        (WeaponType::Dark, WeaponRank::C),
        (WeaponType::Staff, WeaponRank::D),
    ]
    .into_iter()
    .collect();
    Unit::new("lute", "mage", stats(0, 6, 6, 7, 8), ranks)
}

/// Returns `unit` with `weapon` added to its inventory and equipped.
pub fn armed(mut unit: Unit, weapon: Weapon) -> Unit {
    let _ = unit.add_item(weapon.clone());
    let outcome = unit.equip(&weapon);
    assert!(outcome.is_equipped(), "{} cannot wield {}", unit.name(), weapon.name);
    unit
}
