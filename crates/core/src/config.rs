/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Upper bound on consecutive rejected submissions for one turn before the
    /// session gives up on the decision layer.
    pub max_retries: u32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of abilities a single player can have learned at once.
    pub const MAX_ABILITIES: usize = 16;
    /// Maximum number of actors fielded per side.
    pub const MAX_SIDE_SIZE: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    /// Minimum damage dealt by any successful attack. Attacks are never fully
    /// nullified by defense, no matter the stat disparity.
    pub const DAMAGE_FLOOR: u32 = 1;

    pub fn new() -> Self {
        Self {
            max_retries: Self::DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_max_retries(max_retries: u32) -> Self {
        Self { max_retries }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
