//! Raw class and hero records as they appear in JSON catalogs.
//!
//! A hero's final stats are layered:
//!
//! ```text
//! class defaults  <-  hero baseStats block  <-  hero top-level overrides
//! ```
//!
//! Each layer only needs to name the values it changes.

use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tactics_core::{UnitStats, WeaponRanks, WeaponType};

use crate::loaders::LoadResult;

/// Sparse stat block. Absent values fall through to the layer below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub constitution: Option<i32>,
    pub defense: Option<i32>,
    pub hp: Option<i32>,
    pub full_hp: Option<i32>,
    pub magic: Option<i32>,
    pub luck: Option<i32>,
    pub resistance: Option<i32>,
    pub skill: Option<i32>,
    pub speed: Option<i32>,
    pub strength: Option<i32>,
    #[serde(rename = "move")]
    pub movement: Option<i32>,
}

impl StatBlock {
    /// Layers `over` on top of `self`; values set in `over` win.
    #[must_use]
    pub fn overlay(self, over: &StatBlock) -> StatBlock {
        StatBlock {
            constitution: over.constitution.or(self.constitution),
            defense: over.defense.or(self.defense),
            hp: over.hp.or(self.hp),
            full_hp: over.full_hp.or(self.full_hp),
            magic: over.magic.or(self.magic),
            luck: over.luck.or(self.luck),
            resistance: over.resistance.or(self.resistance),
            skill: over.skill.or(self.skill),
            speed: over.speed.or(self.speed),
            strength: over.strength.or(self.strength),
            movement: over.movement.or(self.movement),
        }
    }

    /// Resolves to concrete stats. Missing values are zero and `fullHp`
    /// defaults to `hp`.
    pub fn resolve(&self) -> UnitStats {
        let hp = self.hp.unwrap_or(0);
        UnitStats {
            constitution: self.constitution.unwrap_or(0),
            defense: self.defense.unwrap_or(0),
            hp,
            full_hp: self.full_hp.unwrap_or(hp),
            magic: self.magic.unwrap_or(0),
            luck: self.luck.unwrap_or(0),
            resistance: self.resistance.unwrap_or(0),
            skill: self.skill.unwrap_or(0),
            speed: self.speed.unwrap_or(0),
            strength: self.strength.unwrap_or(0),
            movement: self.movement.unwrap_or(0),
        }
    }
}

/// Weapon rank letters keyed by weapon type name; `""` means "cannot use".
pub type RankSheet = BTreeMap<String, String>;

/// Layers `over` on top of `base`, entry by entry.
pub fn overlay_ranks(base: &RankSheet, over: &RankSheet) -> RankSheet {
    let mut merged = base.clone();
    merged.extend(over.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Converts a rank sheet into typed ranks.
///
/// # Errors
///
/// Fails on an unknown weapon type or a rank letter outside `E..S`.
pub fn resolve_ranks(sheet: &RankSheet) -> LoadResult<WeaponRanks> {
    let mut ranks = WeaponRanks::new();
    for (kind, letter) in sheet {
        let kind: WeaponType = kind
            .parse()
            .map_err(|_| anyhow::anyhow!("unknown weapon type '{}'", kind))?;
        ranks
            .set_letter(kind, letter)
            .map_err(|_| anyhow::anyhow!("invalid rank '{}' for {}", letter, kind))?;
    }
    Ok(ranks)
}

/// Unit class defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    #[serde(flatten)]
    pub stats: StatBlock,
    #[serde(default)]
    pub weapon_rank: RankSheet,
}

/// Hero definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRecord {
    /// Display name; defaults to the catalog key.
    #[serde(default)]
    pub name: Option<String>,
    pub class: String,
    #[serde(default)]
    pub base_stats: StatBlock,
    /// Hero-specific overrides applied last.
    #[serde(flatten)]
    pub overrides: StatBlock,
    #[serde(default)]
    pub weapon_rank: RankSheet,
    /// Item names resolved against the weapon then consumable catalogs.
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default = "default_auto_equip")]
    pub auto_equip: bool,
}

fn default_auto_equip() -> bool {
    true
}

impl HeroRecord {
    /// Flattens class defaults and this hero's layers into final stats.
    pub fn merged_stats(&self, class: &ClassRecord) -> UnitStats {
        class
            .stats
            .overlay(&self.base_stats)
            .overlay(&self.overrides)
            .resolve()
    }

    /// Merges class and hero rank sheets into typed ranks.
    pub fn merged_ranks(&self, class: &ClassRecord) -> LoadResult<WeaponRanks> {
        resolve_ranks(&overlay_ranks(&class.weapon_rank, &self.weapon_rank))
            .with_context(|| format!("weapon ranks for class '{}'", self.class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::WeaponRank;

    fn class() -> ClassRecord {
        serde_json::from_str(
            r#"{
                "hp": 16, "strength": 4, "skill": 7, "speed": 8, "move": 5,
                "weaponRank": { "sword": "E", "lance": "" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn layers_apply_in_order() {
        let hero: HeroRecord = serde_json::from_str(
            r#"{
                "class": "lord",
                "baseStats": { "strength": 5, "speed": 10, "hp": 18 },
                "speed": 12
            }"#,
        )
        .unwrap();

        let stats = hero.merged_stats(&class());
        assert_eq!(stats.strength, 5);
        assert_eq!(stats.speed, 12);
        assert_eq!(stats.skill, 7);
        assert_eq!(stats.hp, 18);
        assert_eq!(stats.full_hp, 18);
        assert_eq!(stats.movement, 5);
        assert_eq!(stats.luck, 0);
    }

    #[test]
    fn explicit_full_hp_is_kept() {
        let hero: HeroRecord =
            serde_json::from_str(r#"{ "class": "lord", "hp": 10, "fullHp": 20 }"#).unwrap();
        let stats = hero.merged_stats(&class());
        assert_eq!((stats.hp, stats.full_hp), (10, 20));
    }

    #[test]
    fn hero_ranks_override_class_ranks() {
        let hero: HeroRecord = serde_json::from_str(
            r#"{ "class": "lord", "weaponRank": { "sword": "C", "lance": "E", "axe": "" } }"#,
        )
        .unwrap();
        let ranks = hero.merged_ranks(&class()).unwrap();
        assert_eq!(ranks.rank(WeaponType::Sword), Some(WeaponRank::C));
        assert_eq!(ranks.rank(WeaponType::Lance), Some(WeaponRank::E));
        assert!(!ranks.can_use(WeaponType::Axe));
    }

    #[test]
    fn empty_rank_blocks_class_weapon() {
        let hero: HeroRecord =
            serde_json::from_str(r#"{ "class": "lord", "weaponRank": { "sword": "" } }"#).unwrap();
        let ranks = hero.merged_ranks(&class()).unwrap();
        assert!(ranks.is_empty());
    }

    #[test]
    fn unknown_weapon_type_fails() {
        let sheet: RankSheet = [("whip".to_string(), "C".to_string())].into_iter().collect();
        let err = resolve_ranks(&sheet).unwrap_err();
        assert!(err.to_string().contains("unknown weapon type 'whip'"));
    }

    #[test]
    fn bad_rank_letter_fails() {
        let sheet: RankSheet = [("sword".to_string(), "Q".to_string())].into_iter().collect();
        assert!(resolve_ranks(&sheet).is_err());
    }

    #[test]
    fn auto_equip_defaults_on() {
        let hero: HeroRecord = serde_json::from_str(r#"{ "class": "lord" }"#).unwrap();
        assert!(hero.auto_equip);
        assert!(hero.inventory.is_empty());
    }
}
