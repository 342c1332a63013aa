//! Weapon rank bonus table.

use crate::item::{WeaponRank, WeaponType};
use crate::unit::Unit;

/// Bonus granted by wielding a weapon of a given type and rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponRankBonus {
    pub atk: i32,
    pub hit: i32,
    pub recovery: i32,
}

impl WeaponRankBonus {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(atk: i32, hit: i32, recovery: i32) -> Self {
        Self { atk, hit, recovery }
    }

    /// Looks up the bonus for `(kind, rank)`.
    ///
    /// ```text
    /// type             C            B              A
    /// axe              hit+5        hit+10         hit+15
    /// bow/lance/tome   atk+1        atk+1 hit+5    atk+2 hit+5
    /// staff            recovery+1   recovery+2     recovery+3
    /// sword            atk+1        atk+2          atk+3
    /// ```
    ///
    /// Ranks E, D and S, and every other weapon type, give no bonus.
    pub const fn lookup(kind: WeaponType, rank: WeaponRank) -> Self {
        use WeaponRank::{A, B, C};
        use WeaponType::*;
        match (kind, rank) {
            (Axe, C) => Self::new(0, 5, 0),
            (Axe, B) => Self::new(0, 10, 0),
            (Axe, A) => Self::new(0, 15, 0),

            (Bow | Lance | Tome, C) => Self::new(1, 0, 0),
            (Bow | Lance | Tome, B) => Self::new(1, 5, 0),
            (Bow | Lance | Tome, A) => Self::new(2, 5, 0),

            (Staff, C) => Self::new(0, 0, 1),
            (Staff, B) => Self::new(0, 0, 2),
            (Staff, A) => Self::new(0, 0, 3),

            (Sword, C) => Self::new(1, 0, 0),
            (Sword, B) => Self::new(2, 0, 0),
            (Sword, A) => Self::new(3, 0, 0),

            _ => Self::ZERO,
        }
    }
}

/// Rank bonus of the unit's equipped weapon, keyed by the weapon's own rank.
pub fn weapon_rank_bonus(unit: &Unit) -> WeaponRankBonus {
    unit.weapon()
        .map_or(WeaponRankBonus::ZERO, |weapon| {
            WeaponRankBonus::lookup(weapon.weapon_type, weapon.rank)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{armed, iron_sword, lord};
    use strum::IntoEnumIterator;

    #[test]
    fn table_matches_rank_sheet() {
        use WeaponRank::*;
        use WeaponType::*;

        assert_eq!(WeaponRankBonus::lookup(Axe, B), WeaponRankBonus::new(0, 10, 0));
        assert_eq!(WeaponRankBonus::lookup(Lance, B), WeaponRankBonus::new(1, 5, 0));
        assert_eq!(WeaponRankBonus::lookup(Tome, A), WeaponRankBonus::new(2, 5, 0));
        assert_eq!(WeaponRankBonus::lookup(Bow, C), WeaponRankBonus::new(1, 0, 0));
        assert_eq!(WeaponRankBonus::lookup(Staff, A), WeaponRankBonus::new(0, 0, 3));
        assert_eq!(WeaponRankBonus::lookup(Sword, A), WeaponRankBonus::new(3, 0, 0));
    }

    #[test]
    fn sword_never_gains_hit() {
        for rank in WeaponRank::iter() {
            assert_eq!(WeaponRankBonus::lookup(WeaponType::Sword, rank).hit, 0);
        }
    }

    #[test]
    fn low_and_s_ranks_give_nothing() {
        for kind in WeaponType::iter() {
            for rank in [WeaponRank::E, WeaponRank::D, WeaponRank::S] {
                assert_eq!(WeaponRankBonus::lookup(kind, rank), WeaponRankBonus::ZERO);
            }
        }
    }

    #[test]
    fn magic_schools_are_not_in_table() {
        for kind in [WeaponType::Anima, WeaponType::Dark, WeaponType::Light] {
            assert_eq!(
                WeaponRankBonus::lookup(kind, WeaponRank::A),
                WeaponRankBonus::ZERO
            );
        }
    }

    #[test]
    fn unit_bonus_follows_equipped_weapon() {
        assert_eq!(weapon_rank_bonus(&lord()), WeaponRankBonus::ZERO);

        let mut sword = iron_sword();
        sword.rank = WeaponRank::B;
        let unit = armed(lord(), sword);
        assert_eq!(weapon_rank_bonus(&unit), WeaponRankBonus::new(2, 0, 0));
    }
}
