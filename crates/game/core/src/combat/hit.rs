//! Hit rate, accuracy and critical chance.

use crate::config::GameConfig;
use crate::item::{WeaponRank, WeaponType};
use crate::unit::Unit;

use super::attack::evade;
use super::bonus::weapon_rank_bonus;
use super::triangle::weapon_triangle_effect;

/// Raw hit rate of `unit` before the defender's evasion.
///
/// # Formula
///
/// ```text
/// staff:  magic * 5 + skill + staff_hit_base
/// other:  skill * 2 + luck / 2 + rank_bonus.hit + weapon.hit
/// ```
///
/// Halves round down. No weapon gives 0.
pub fn hit_rate(unit: &Unit, config: &GameConfig) -> i32 {
    let Some(weapon) = unit.weapon() else {
        return 0;
    };
    let stats = unit.stats();

    if weapon.weapon_type == WeaponType::Staff {
        return stats.magic * 5 + stats.skill + config.staff_hit_base;
    }

    stats.skill * 2 + stats.luck / 2 + weapon_rank_bonus(unit).hit + weapon.hit
}

/// Hit chance of `attacker` against `defender`.
///
/// ```text
/// accuracy = hit_rate(attacker) - evade(defender) + triangle.hit
/// ```
///
/// Without a defender both the evade and triangle terms are zero.
pub fn accuracy(attacker: &Unit, defender: Option<&Unit>, config: &GameConfig) -> i32 {
    let dodge = defender.map_or(0, evade);
    let triangle = weapon_triangle_effect(
        attacker.weapon(),
        defender.and_then(Unit::weapon),
        config,
    );
    hit_rate(attacker, config) - dodge + triangle.hit
}

/// Critical chance of `attacker` against `defender`.
///
/// ```text
/// critical = skill / 2 + s_rank_bonus + weapon.critical_rate - defender.luck
/// ```
///
/// Not clamped: a negative result is a valid value for display code to clamp.
pub fn critical_hit(attacker: &Unit, defender: Option<&Unit>, config: &GameConfig) -> i32 {
    let Some(weapon) = attacker.weapon() else {
        return 0;
    };
    let s_rank_bonus = if weapon.rank == WeaponRank::S {
        config.s_rank_critical_bonus
    } else {
        0
    };
    let luck = defender.map_or(0, |defender| defender.stats().luck);

    attacker.stats().skill / 2 + s_rank_bonus + weapon.critical_rate - luck
}
