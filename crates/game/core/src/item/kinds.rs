//! Weapon classification tags: weapon type, damage type and rank letter.

/// Weapon families.
///
/// `Anima`, `Dark` and `Light` are the magical schools that make up the
/// magical weapon triangle; `Tome` is the generic tome family used by the
/// rank bonus table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WeaponType {
    Sword,
    Axe,
    Lance,
    Bow,
    Tome,
    Staff,
    Anima,
    Dark,
    Light,
}

impl WeaponType {
    /// Returns true if `self` has triangle advantage over `other`.
    ///
    /// Physical triad: sword > axe > lance > sword.
    /// Magical triad: anima > dark > light > anima.
    /// Types outside a triad never beat anything, and nothing beats itself.
    pub const fn beats(self, other: WeaponType) -> bool {
        use WeaponType::*;
        matches!(
            (self, other),
            (Sword, Axe)
                | (Axe, Lance)
                | (Lance, Sword)
                | (Anima, Dark)
                | (Dark, Light)
                | (Light, Anima)
        )
    }
}

/// Which defensive stat reduces an attack and which offensive stat powers it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DamageType {
    /// Powered by strength, reduced by defense.
    Physical,
    /// Powered by magic, reduced by resistance.
    Magical,
}

/// Weapon rank letter, ordered from lowest (`E`) to highest (`S`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum WeaponRank {
    E,
    D,
    C,
    B,
    A,
    S,
}
