//! Per-unit weapon rank sheet.

use std::collections::BTreeMap;

use crate::item::{WeaponRank, WeaponType};

/// Mapping from weapon type to the unit's rank in it.
///
/// A type with no entry cannot be wielded. Catalogs spell "cannot use" as an
/// empty rank string; [`WeaponRanks::set_letter`] turns that into a removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeaponRanks {
    ranks: BTreeMap<WeaponType, WeaponRank>,
}

impl WeaponRanks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank(&self, kind: WeaponType) -> Option<WeaponRank> {
        self.ranks.get(&kind).copied()
    }

    /// Returns true if the unit has any rank in `kind`.
    pub fn can_use(&self, kind: WeaponType) -> bool {
        self.ranks.contains_key(&kind)
    }

    /// Sets or clears the rank for `kind`, returning the previous rank.
    pub fn set(&mut self, kind: WeaponType, rank: Option<WeaponRank>) -> Option<WeaponRank> {
        match rank {
            Some(rank) => self.ranks.insert(kind, rank),
            None => self.ranks.remove(&kind),
        }
    }

    /// Sets the rank from a catalog letter; an empty string clears it.
    pub fn set_letter(
        &mut self,
        kind: WeaponType,
        letter: &str,
    ) -> Result<Option<WeaponRank>, strum::ParseError> {
        let letter = letter.trim();
        let rank = if letter.is_empty() {
            None
        } else {
            Some(letter.parse()?)
        };
        Ok(self.set(kind, rank))
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeaponType, WeaponRank)> + '_ {
        self.ranks.iter().map(|(kind, rank)| (*kind, *rank))
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FromIterator<(WeaponType, WeaponRank)> for WeaponRanks {
    fn from_iter<T: IntoIterator<Item = (WeaponType, WeaponRank)>>(iter: T) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_letter_means_cannot_use() {
        let mut ranks: WeaponRanks = [(WeaponType::Sword, WeaponRank::D)].into_iter().collect();
        assert!(ranks.can_use(WeaponType::Sword));

        let previous = ranks.set_letter(WeaponType::Sword, "").unwrap();
        assert_eq!(previous, Some(WeaponRank::D));
        assert!(!ranks.can_use(WeaponType::Sword));
    }

    #[test]
    fn letters_are_parsed() {
        let mut ranks = WeaponRanks::new();
        ranks.set_letter(WeaponType::Axe, "b").unwrap();
        assert_eq!(ranks.rank(WeaponType::Axe), Some(WeaponRank::B));
        assert!(ranks.set_letter(WeaponType::Axe, "Z").is_err());
        assert_eq!(ranks.rank(WeaponType::Axe), Some(WeaponRank::B));
    }

    #[test]
    fn iter_is_ordered_by_weapon_type() {
        let ranks: WeaponRanks = [
            (WeaponType::Staff, WeaponRank::A),
            (WeaponType::Sword, WeaponRank::E),
            (WeaponType::Lance, WeaponRank::C),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            ranks.iter().collect::<Vec<_>>(),
            [
                (WeaponType::Sword, WeaponRank::E),
                (WeaponType::Lance, WeaponRank::C),
                (WeaponType::Staff, WeaponRank::A),
            ]
        );
    }
}
