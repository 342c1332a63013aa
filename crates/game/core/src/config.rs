/// Combat rules constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Attack-speed margin an attacker needs over its opponent to strike twice.
    pub double_attack_threshold: i32,

    /// Hit bonus granted to the side with weapon-triangle advantage.
    pub triangle_hit: i32,

    /// Attack bonus granted to the side with weapon-triangle advantage.
    pub triangle_atk: i32,

    /// Critical bonus for wielding an S-rank weapon.
    pub s_rank_critical_bonus: i32,

    /// Flat term of the staff hit formula (`magic * 5 + skill + base`).
    pub staff_hit_base: i32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of items a unit can carry.
    pub const MAX_INVENTORY_ITEMS: usize = 5;

    /// Weapon slot returned when an out-of-range weapon index is requested.
    pub const WEAPON_FALLBACK_INDEX: usize = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DOUBLE_ATTACK_THRESHOLD: i32 = 4;
    pub const DEFAULT_TRIANGLE_HIT: i32 = 15;
    pub const DEFAULT_TRIANGLE_ATK: i32 = 1;
    pub const DEFAULT_S_RANK_CRITICAL_BONUS: i32 = 5;
    pub const DEFAULT_STAFF_HIT_BASE: i32 = 30;

    pub const fn new() -> Self {
        Self {
            double_attack_threshold: Self::DEFAULT_DOUBLE_ATTACK_THRESHOLD,
            triangle_hit: Self::DEFAULT_TRIANGLE_HIT,
            triangle_atk: Self::DEFAULT_TRIANGLE_ATK,
            s_rank_critical_bonus: Self::DEFAULT_S_RANK_CRITICAL_BONUS,
            staff_hit_base: Self::DEFAULT_STAFF_HIT_BASE,
        }
    }

    pub const fn with_double_attack_threshold(mut self, threshold: i32) -> Self {
        self.double_attack_threshold = threshold;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
