//! Attack power, attack speed, evasion and reach.

use crate::config::GameConfig;
use crate::item::{DamageType, WeaponRange};
use crate::unit::Unit;

/// Attack power of `attacker` against `defender`.
///
/// # Formula
///
/// ```text
/// base      = weapon.atk + (strength | magic)
/// reduction = defender (defense | resistance), or 0 without a defender
/// atk       = max(base - reduction, 0)
/// ```
///
/// The stat pair is chosen by the weapon's damage type. No weapon, or a
/// weapon with zero attack, gives 0.
pub fn atk(attacker: &Unit, defender: Option<&Unit>) -> i32 {
    let Some(weapon) = attacker.weapon() else {
        return 0;
    };
    if weapon.atk == 0 {
        return 0;
    }

    let stats = attacker.stats();
    let base = weapon.atk
        + match weapon.damage_type {
            DamageType::Physical => stats.strength,
            DamageType::Magical => stats.magic,
        };

    let reduction = defender.map_or(0, |defender| match weapon.damage_type {
        DamageType::Physical => defender.stats().defense,
        DamageType::Magical => defender.stats().resistance,
    });

    (base - reduction).max(0)
}

/// Speed after weapon burden.
///
/// ```text
/// burden    = max(weapon.weight - constitution, 0)
/// atk_speed = speed - burden
/// ```
///
/// May be negative. No weapon gives 0.
pub fn atk_speed(unit: &Unit) -> i32 {
    let Some(weapon) = unit.weapon() else {
        return 0;
    };
    let stats = unit.stats();
    let burden = (weapon.weight - stats.constitution).max(0);
    stats.speed - burden
}

/// Dodge: `atk_speed * 2 + luck`.
pub fn evade(unit: &Unit) -> i32 {
    atk_speed(unit) * 2 + unit.stats().luck
}

/// Returns true if `attacker` is fast enough to strike `defender` twice.
pub fn can_double_attack(attacker: &Unit, defender: &Unit, config: &GameConfig) -> bool {
    attacker.weapon().is_some()
        && atk_speed(attacker) - atk_speed(defender) >= config.double_attack_threshold
}

/// Min/max strike distance across every weapon the unit carries.
///
/// A unit with nothing equipped cannot attack and gets [`WeaponRange::ZERO`],
/// as does one that carries no weapons.
pub fn attack_range(unit: &Unit) -> WeaponRange {
    if unit.weapon().is_none() {
        return WeaponRange::ZERO;
    }
    unit.inventory().weapon_range()
}

/// Returns true if a target `distance` tiles away is within [`attack_range`].
pub fn in_attack_range(unit: &Unit, distance: u32) -> bool {
    let range = attack_range(unit);
    range != WeaponRange::ZERO && range.contains(distance)
}
