//! Unit fighting stats.
//!
//! [`UnitStats`] is the stored state; [`FightingStats`] is the read-only
//! projection handed to callers and to the combat formulas.

/// Stored numeric attributes of a unit.
///
/// All values are expected to stay non-negative. `full_hp >= hp` is expected
/// but not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct UnitStats {
    pub constitution: i32,
    pub defense: i32,
    pub hp: i32,
    pub full_hp: i32,
    pub magic: i32,
    pub luck: i32,
    pub resistance: i32,
    pub skill: i32,
    pub speed: i32,
    pub strength: i32,
    /// Movement range in tiles.
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub movement: i32,
}

impl UnitStats {
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Constitution => self.constitution,
            StatKind::Defense => self.defense,
            StatKind::Hp => self.hp,
            StatKind::FullHp => self.full_hp,
            StatKind::Magic => self.magic,
            StatKind::Luck => self.luck,
            StatKind::Resistance => self.resistance,
            StatKind::Skill => self.skill,
            StatKind::Speed => self.speed,
            StatKind::Strength => self.strength,
            StatKind::Move => self.movement,
        }
    }

    fn slot_mut(&mut self, stat: StatKind) -> &mut i32 {
        match stat {
            StatKind::Constitution => &mut self.constitution,
            StatKind::Defense => &mut self.defense,
            StatKind::Hp => &mut self.hp,
            StatKind::FullHp => &mut self.full_hp,
            StatKind::Magic => &mut self.magic,
            StatKind::Luck => &mut self.luck,
            StatKind::Resistance => &mut self.resistance,
            StatKind::Skill => &mut self.skill,
            StatKind::Speed => &mut self.speed,
            StatKind::Strength => &mut self.strength,
            StatKind::Move => &mut self.movement,
        }
    }

    /// Adds `value` to `stat`, flooring the result at zero.
    ///
    /// A zero `value` is a no-op and reported as [`StatChange::ZeroValue`].
    /// A decrease on a stat already at zero is reported as
    /// [`StatChange::AtFloor`].
    pub fn increment(&mut self, stat: StatKind, value: i32) -> StatChange {
        if value == 0 {
            return StatChange::ZeroValue;
        }
        let slot = self.slot_mut(stat);
        let from = *slot;
        let to = from.saturating_add(value).max(0);
        if to == from {
            return StatChange::AtFloor { stat };
        }
        *slot = to;
        StatChange::Applied { stat, from, to }
    }

    pub fn fighting(&self) -> FightingStats {
        FightingStats {
            constitution: self.constitution,
            defense: self.defense,
            hp: self.hp,
            magic: self.magic,
            luck: self.luck,
            resistance: self.resistance,
            skill: self.skill,
            speed: self.speed,
            strength: self.strength,
        }
    }
}

/// Snapshot of the stats the combat formulas read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FightingStats {
    pub constitution: i32,
    pub defense: i32,
    pub hp: i32,
    pub magic: i32,
    pub luck: i32,
    pub resistance: i32,
    pub skill: i32,
    pub speed: i32,
    pub strength: i32,
}

/// Name of a mutable stat.
///
/// Parses the catalog spelling (`"fullHp"`, `"move"`) as well as snake case.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum StatKind {
    Constitution,
    Defense,
    Hp,
    #[strum(to_string = "fullHp", serialize = "full_hp")]
    FullHp,
    Magic,
    Luck,
    Resistance,
    Skill,
    Speed,
    Strength,
    Move,
}

/// Outcome of a stat increment request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum StatChange {
    /// The stat moved from `from` to `to`.
    Applied { stat: StatKind, from: i32, to: i32 },
    /// The requested stat name does not exist; nothing changed.
    UnknownStat,
    /// The increment was zero; nothing changed.
    ZeroValue,
    /// The stat is already zero and the increment was negative; nothing changed.
    AtFloor { stat: StatKind },
}

impl StatChange {
    pub const fn is_applied(&self) -> bool {
        matches!(self, StatChange::Applied { .. })
    }
}
