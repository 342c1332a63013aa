//! Combat resolution system.
//!
//! This module provides pure functions for deriving battle values from one or
//! two units. All combat logic is deterministic and side-effect free; nothing
//! here mutates a unit.
//!
//! # Architecture
//!
//! - **Pure Functions**: Same units in, same numbers out
//! - **Total**: A missing weapon or defender yields zero terms, never an error
//! - **Tables**: Rank bonuses and the weapon triangle are static lookups
//!
//! # Core Functions
//!
//! - `atk`: Attack power after the defender's defense or resistance
//! - `atk_speed` / `evade`: Speed after weapon burden, and dodge built on it
//! - `hit_rate` / `accuracy`: Raw hit and hit against a specific defender
//! - `critical_hit`: Critical chance (unclamped)
//! - `attack_range`: Min/max strike distance over carried weapons
//! - `battle_stats`: The four-value preview record
//! - `CombatForecast`: Both sides of an engagement, requires an opponent

pub mod attack;
pub mod bonus;
pub mod error;
pub mod hit;
pub mod result;
pub mod triangle;

pub use attack::{atk, atk_speed, attack_range, can_double_attack, evade, in_attack_range};
pub use bonus::{WeaponRankBonus, weapon_rank_bonus};
pub use error::CombatError;
pub use hit::{accuracy, critical_hit, hit_rate};
pub use result::{BattleStats, CombatForecast, battle_stats};
pub use triangle::{TriangleEffect, weapon_triangle_effect};
