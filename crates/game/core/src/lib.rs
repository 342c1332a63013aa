//! Deterministic combat rules for a grid tactics game.
//!
//! `tactics-core` defines the canonical unit model (stats, weapon ranks,
//! inventory, equipment) and the pure combat formulas that turn one or two
//! units into battle previews. Nothing here touches rendering, input, files
//! or randomness; data loading lives in `tactics-content`.
pub mod combat;
pub mod config;
pub mod error;
pub mod item;
pub mod unit;

#[cfg(test)]
mod test_support;

pub use combat::{
    BattleStats, CombatError, CombatForecast, TriangleEffect, WeaponRankBonus, accuracy, atk,
    atk_speed, attack_range, battle_stats, can_double_attack, critical_hit, evade, hit_rate,
    in_attack_range, weapon_rank_bonus, weapon_triangle_effect,
};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use item::{
    Consumable, DamageType, Item, ItemType, RangeParseError, Weapon, WeaponRange, WeaponRank,
    WeaponType,
};
pub use unit::{
    AddOutcome, EquipOutcome, FightingStats, Inventory, StatChange, StatKind, Unit, UnitBuilder,
    UnitStats, WeaponRanks,
};
