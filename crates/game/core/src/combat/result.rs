//! Battle preview records.

use crate::config::GameConfig;
use crate::item::WeaponRange;
use crate::unit::Unit;

use super::attack::{atk, attack_range, can_double_attack, evade};
use super::error::CombatError;
use super::hit::{accuracy, critical_hit};
use super::triangle::{TriangleEffect, weapon_triangle_effect};

/// The four derived values shown in a combat preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BattleStats {
    pub atk: i32,
    pub critical_hit: i32,
    pub evade: i32,
    pub hit: i32,
}

/// Battle stats of `attacker`, optionally against `defender`.
///
/// `hit` is [`accuracy`], which equals the raw hit rate when there is no
/// defender.
pub fn battle_stats(attacker: &Unit, defender: Option<&Unit>, config: &GameConfig) -> BattleStats {
    BattleStats {
        atk: atk(attacker, defender),
        critical_hit: critical_hit(attacker, defender, config),
        evade: evade(attacker),
        hit: accuracy(attacker, defender, config),
    }
}

/// Both sides of a prospective engagement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CombatForecast {
    pub attacker: BattleStats,
    pub defender: BattleStats,
    /// Triangle effect from the attacker's side.
    pub triangle: TriangleEffect,
    pub attacker_doubles: bool,
    pub defender_doubles: bool,
    pub attacker_range: WeaponRange,
    pub defender_range: WeaponRange,
}

impl CombatForecast {
    /// Builds a forecast of `attacker` striking `defender`.
    ///
    /// # Errors
    ///
    /// Returns [`CombatError::GhostOpponent`] when `defender` is `None`. A
    /// forecast is only requested after a target was picked, so a missing
    /// opponent means the targeting flow is broken.
    pub fn new(
        attacker: &Unit,
        defender: Option<&Unit>,
        config: &GameConfig,
    ) -> Result<Self, CombatError> {
        let Some(defender) = defender else {
            return Err(CombatError::GhostOpponent {
                attacker: attacker.name().to_string(),
            });
        };

        Ok(Self {
            attacker: battle_stats(attacker, Some(defender), config),
            defender: battle_stats(defender, Some(attacker), config),
            triangle: weapon_triangle_effect(attacker.weapon(), defender.weapon(), config),
            attacker_doubles: can_double_attack(attacker, defender, config),
            defender_doubles: can_double_attack(defender, attacker, config),
            attacker_range: attack_range(attacker),
            defender_range: attack_range(defender),
        })
    }

    /// Returns true if the defender can strike back at `distance`.
    pub fn defender_can_counter(&self, distance: u32) -> bool {
        self.defender_range != WeaponRange::ZERO && self.defender_range.contains(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};
    use crate::item::{WeaponRank, WeaponType};
    use crate::test_support::{armed, fighter, fire, iron_axe, iron_bow, iron_sword, lord, mage};

    #[test]
    fn battle_stats_bundle_the_formulas() {
        let config = GameConfig::default();
        let attacker = armed(lord(), iron_sword());
        let defender = armed(fighter(), iron_axe());

        let stats = battle_stats(&attacker, Some(&defender), &config);
        assert_eq!(
            stats,
            BattleStats {
                atk: 5,
                critical_hit: 1,
                evade: 23,
                hit: 124,
            }
        );
    }

    #[test]
    fn unarmed_preview_is_zero_except_evade() {
        let unit = lord();
        let stats = battle_stats(&unit, None, &GameConfig::default());
        assert_eq!(stats.atk, 0);
        assert_eq!(stats.hit, 0);
        assert_eq!(stats.critical_hit, 0);
        assert_eq!(stats.evade, unit.stats().luck);
    }

    #[test]
    fn battle_stats_are_deterministic() {
        let config = GameConfig::default();
        let attacker = armed(mage(), fire());
        let defender = armed(fighter(), iron_axe());
        let first = battle_stats(&attacker, Some(&defender), &config);
        let second = battle_stats(&attacker, Some(&defender), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn forecast_without_opponent_is_rejected() {
        let attacker = armed(lord(), iron_sword());
        let err = CombatForecast::new(&attacker, None, &GameConfig::default()).unwrap_err();
        assert_eq!(
            err,
            CombatError::GhostOpponent {
                attacker: "eirika".to_string()
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Internal);
        assert!(err.to_string().contains("ghost opponent not allowed"));
    }

    #[test]
    fn forecast_covers_both_sides() {
        let config = GameConfig::default();
        let attacker = armed(lord(), iron_sword());
        let defender = armed(fighter(), iron_axe());

        let forecast = CombatForecast::new(&attacker, Some(&defender), &config).unwrap();
        assert_eq!(forecast.triangle, TriangleEffect { atk: 1, hit: 15 });
        assert!(forecast.attacker_doubles);
        assert!(!forecast.defender_doubles);
        assert_eq!(forecast.defender, battle_stats(&defender, Some(&attacker), &config));
        assert!(forecast.defender_can_counter(1));
        assert!(!forecast.defender_can_counter(2));
    }

    #[test]
    fn archer_cannot_counter_adjacent() {
        let config = GameConfig::default();
        let attacker = armed(lord(), iron_sword());
        let ranks = [(WeaponType::Bow, WeaponRank::E)].into_iter().collect();
        let archer = Unit::new("neimi", "archer", *fighter().stats(), ranks);
        let archer = armed(archer, iron_bow());

        let forecast = CombatForecast::new(&attacker, Some(&archer), &config).unwrap();
        assert!(!forecast.defender_can_counter(1));
        assert!(forecast.defender_can_counter(2));
    }
}
