//! Damage calculation.

use crate::config::CombatConfig;
use crate::stats::StatBlock;

/// Calculate the damage of a basic attack.
///
/// # Formula
///
/// ```text
/// damage = max(DAMAGE_FLOOR, attacker.attack - defender.defense)
/// ```
///
/// The floor is an explicit design decision: an attack is never fully
/// nullified, no matter how lopsided the stat comparison. Both stat blocks
/// are *effective* stats as produced by the equipment resolver.
pub fn calculate_damage(attacker: &StatBlock, defender: &StatBlock) -> u32 {
    (attacker.attack - defender.defense).max(CombatConfig::DAMAGE_FLOOR as i32) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_is_attack_minus_defense() {
        assert_eq!(
            calculate_damage(&StatBlock::new(10, 0), &StatBlock::new(0, 4)),
            6
        );
    }

    #[test]
    fn damage_never_drops_below_the_floor() {
        assert_eq!(
            calculate_damage(&StatBlock::new(1, 0), &StatBlock::new(0, 50)),
            CombatConfig::DAMAGE_FLOOR
        );
        // Negative attack from penalties still floors.
        assert_eq!(
            calculate_damage(&StatBlock::new(-5, 0), &StatBlock::new(0, 0)),
            CombatConfig::DAMAGE_FLOOR
        );
    }
}
