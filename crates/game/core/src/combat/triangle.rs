//! Weapon triangle advantage.

use crate::config::GameConfig;
use crate::item::Weapon;

/// Attack and hit adjustment from the weapon triangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangleEffect {
    pub atk: i32,
    pub hit: i32,
}

impl TriangleEffect {
    pub const NEUTRAL: Self = Self { atk: 0, hit: 0 };

    pub const fn is_neutral(&self) -> bool {
        self.atk == 0 && self.hit == 0
    }
}

/// Triangle effect of `weapon` when facing `opposing`, from `weapon`'s side.
///
/// Neutral when either weapon is missing or their damage types differ.
/// Advantage is `+triangle_atk / +triangle_hit`, disadvantage the negation.
pub fn weapon_triangle_effect(
    weapon: Option<&Weapon>,
    opposing: Option<&Weapon>,
    config: &GameConfig,
) -> TriangleEffect {
    let (Some(weapon), Some(opposing)) = (weapon, opposing) else {
        return TriangleEffect::NEUTRAL;
    };
    if weapon.damage_type != opposing.damage_type {
        return TriangleEffect::NEUTRAL;
    }

    if weapon.weapon_type.beats(opposing.weapon_type) {
        TriangleEffect {
            atk: config.triangle_atk,
            hit: config.triangle_hit,
        }
    } else if opposing.weapon_type.beats(weapon.weapon_type) {
        TriangleEffect {
            atk: -config.triangle_atk,
            hit: -config.triangle_hit,
        }
    } else {
        TriangleEffect::NEUTRAL
    }
}
