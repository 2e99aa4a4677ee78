//! Shared ability definitions and their activation behavior.
//!
//! Abilities are defined once in an arena ([`AbilityBook`]) and referenced by
//! id from any number of players (many-to-many without duplication).
//! Definitions are immutable after registration; learning and unlearning
//! mutate only the player-side association.

use crate::state::AbilityId;
use crate::stats::StatBlock;
use crate::targetable::Targetable;

/// What an ability does when activated.
///
/// Every effect funnels through the [`Targetable`] mutation methods - an
/// ability never reaches into an actor's fields directly, keeping health
/// changes centralized and auditable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityEffect {
    /// Damage scaled by the user's effective attack, resisted by the
    /// target's innate defense (armor applies to weapon attacks, not
    /// ability strikes). Floors at 1 like any attack.
    Strike { power: u32 },

    /// Flat healing, clamped at the target's health maximum.
    Mend { amount: u32 },
}

/// Result of activating an ability against a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityOutcome {
    /// Damage was applied; `target_health` is the health after application.
    Damaged { amount: u32, target_health: u32 },

    /// Healing was applied.
    Healed { amount: u32, target_health: u32 },

    /// The target was already defeated when the ability resolved. A defined
    /// normal outcome, not an error: racing a target that just died is an
    /// ordinary occurrence in combat.
    NoOp,
}

/// A named, reusable effect shared by many players.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDefinition {
    pub id: AbilityId,
    pub name: String,
    pub effect: AbilityEffect,
}

impl AbilityDefinition {
    pub fn new(id: AbilityId, name: impl Into<String>, effect: AbilityEffect) -> Self {
        Self {
            id,
            name: name.into(),
            effect,
        }
    }

    /// Applies this ability's effect to the target.
    ///
    /// Checks `is_targetable()` before touching the target; activating
    /// against a defeated entity returns [`AbilityOutcome::NoOp`] without any
    /// state mutation. `user_stats` are the user's effective stats as
    /// computed by the equipment resolver at resolution time.
    pub fn activate(
        &self,
        user_stats: &StatBlock,
        target: &mut dyn Targetable,
    ) -> AbilityOutcome {
        if !target.is_targetable() {
            return AbilityOutcome::NoOp;
        }

        match self.effect {
            AbilityEffect::Strike { power } => {
                let raw = power as i32 + user_stats.attack - target.defense();
                let amount = raw.max(crate::config::CombatConfig::DAMAGE_FLOOR as i32) as u32;
                let dealt = target.apply_damage(amount);
                AbilityOutcome::Damaged {
                    amount: dealt,
                    target_health: target.current_health(),
                }
            }
            AbilityEffect::Mend { amount } => {
                let restored = target.apply_healing(amount);
                AbilityOutcome::Healed {
                    amount: restored,
                    target_health: target.current_health(),
                }
            }
        }
    }
}

/// Read-only lookup into the ability arena.
pub trait AbilityOracle: Send + Sync {
    fn definition(&self, id: AbilityId) -> Option<&AbilityDefinition>;
}

/// Arena of ability definitions indexed by id.
///
/// The book is assembled by the seeding layer before combat and never
/// mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityBook {
    entries: Vec<AbilityDefinition>,
}

impl AbilityBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, replacing any previous definition with the
    /// same id.
    pub fn register(&mut self, definition: AbilityDefinition) {
        self.entries.retain(|entry| entry.id != definition.id);
        self.entries.push(definition);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityDefinition> {
        self.entries.iter()
    }
}

impl AbilityOracle for AbilityBook {
    fn definition(&self, id: AbilityId) -> Option<&AbilityDefinition> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

impl FromIterator<AbilityDefinition> for AbilityBook {
    fn from_iter<I: IntoIterator<Item = AbilityDefinition>>(iter: I) -> Self {
        let mut book = Self::new();
        for definition in iter {
            book.register(definition);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityId, MonsterState};

    fn wounded_monster() -> MonsterState {
        let mut monster = MonsterState::new(EntityId(1), "Gnarl", StatBlock::new(6, 4), 20);
        monster.health.damage(12);
        monster
    }

    #[test]
    fn strike_scales_with_user_attack_and_floors_at_one() {
        let strike = AbilityDefinition::new(
            AbilityId(0),
            "Power Strike",
            AbilityEffect::Strike { power: 4 },
        );
        let mut target: crate::state::Actor = wounded_monster().into();

        // 4 power + 10 attack - 4 defense = 10 damage, clamped to the 8
        // health the wounded target has left.
        let outcome = strike.activate(&StatBlock::new(10, 0), &mut target);
        assert_eq!(
            outcome,
            AbilityOutcome::Damaged {
                amount: 8,
                target_health: 0
            }
        );

        // Overwhelming defense still deals the floor.
        let mut sturdy: crate::state::Actor =
            MonsterState::new(EntityId(2), "Hulk", StatBlock::new(0, 100), 30).into();
        let outcome = strike.activate(&StatBlock::new(1, 0), &mut sturdy);
        assert_eq!(
            outcome,
            AbilityOutcome::Damaged {
                amount: 1,
                target_health: 29
            }
        );
    }

    #[test]
    fn mend_clamps_at_maximum() {
        let mend = AbilityDefinition::new(AbilityId(1), "Mend", AbilityEffect::Mend { amount: 50 });
        let mut target: crate::state::Actor = wounded_monster().into();

        let outcome = mend.activate(&StatBlock::default(), &mut target);
        assert_eq!(
            outcome,
            AbilityOutcome::Healed {
                amount: 12,
                target_health: 20
            }
        );
    }

    #[test]
    fn defeated_target_yields_noop_without_mutation() {
        let strike = AbilityDefinition::new(
            AbilityId(0),
            "Power Strike",
            AbilityEffect::Strike { power: 4 },
        );
        let mut dead: crate::state::Actor =
            MonsterState::new(EntityId(3), "Husk", StatBlock::new(1, 1), 0).into();

        use crate::targetable::Targetable;
        assert!(!dead.is_targetable());
        assert_eq!(
            strike.activate(&StatBlock::new(10, 0), &mut dead),
            AbilityOutcome::NoOp
        );
        assert_eq!(dead.current_health(), 0);
    }

    #[test]
    fn registering_same_id_replaces_definition() {
        let mut book = AbilityBook::new();
        book.register(AbilityDefinition::new(
            AbilityId(0),
            "Strike",
            AbilityEffect::Strike { power: 1 },
        ));
        book.register(AbilityDefinition::new(
            AbilityId(0),
            "Strike II",
            AbilityEffect::Strike { power: 2 },
        ));
        assert_eq!(book.len(), 1);
        assert_eq!(book.definition(AbilityId(0)).unwrap().name, "Strike II");
    }
}
