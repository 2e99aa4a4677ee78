//! Actor state types.
//!
//! Players and monsters share the [`Targetable`] capability and the
//! equipment model; the learned-ability set is a player-only capability.
//! Actors are created by the external seeding/repository layer before combat
//! starts and are mutated only through attack/ability resolution. A defeated
//! actor stays in the roster with zero health - soft defeat, never removal.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::env::{ItemCatalog, ItemCategory, ItemKind};
use crate::error::{CoreError, ErrorSeverity};
use crate::stats::StatBlock;
use crate::targetable::Targetable;

use super::{AbilityId, EntityId, Equipment, ItemHandle, ResourceMeter};

/// Fixed-capacity set of ability ids a player has learned.
pub type LearnedAbilities = ArrayVec<AbilityId, { CombatConfig::MAX_ABILITIES }>;

/// Errors surfaced while changing an actor's equipment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    /// The handle has no definition in the catalog.
    #[error("item {0} has no catalog definition")]
    UnknownItem(ItemHandle),

    /// The item's category does not match the requested slot.
    #[error("cannot equip {actual} {handle} in the {slot} slot")]
    CategoryMismatch {
        handle: ItemHandle,
        slot: ItemCategory,
        actual: ItemCategory,
    },
}

impl CoreError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem(_) => "EQUIP_UNKNOWN_ITEM",
            Self::CategoryMismatch { .. } => "EQUIP_CATEGORY_MISMATCH",
        }
    }
}

/// Error surfaced when a player's learned-ability set is at capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("learned ability set is full ({capacity} abilities)")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilitiesFull {
    pub capacity: usize,
}

/// A player character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub id: EntityId,
    pub name: String,

    /// Base stats before equipment modifiers.
    pub base: StatBlock,
    pub health: ResourceMeter,
    pub equipment: Equipment,

    /// Ids of abilities this player has learned. The definitions live in the
    /// shared ability arena; learning and forgetting mutate this association
    /// only, never the definitions.
    pub abilities: LearnedAbilities,
}

impl PlayerState {
    pub fn new(id: EntityId, name: impl Into<String>, base: StatBlock, max_health: u32) -> Self {
        Self {
            id,
            name: name.into(),
            base,
            health: ResourceMeter::full(max_health),
            equipment: Equipment::empty(),
            abilities: LearnedAbilities::new(),
        }
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = equipment;
        self
    }

    /// Returns true if this player has learned the given ability.
    pub fn has_ability(&self, ability: AbilityId) -> bool {
        self.abilities.contains(&ability)
    }

    /// Adds an ability to the learned set. Learning an already-known ability
    /// is a no-op.
    pub fn learn(&mut self, ability: AbilityId) -> Result<(), AbilitiesFull> {
        if self.has_ability(ability) {
            return Ok(());
        }
        self.abilities.try_push(ability).map_err(|_| AbilitiesFull {
            capacity: self.abilities.capacity(),
        })
    }

    /// Removes an ability from the learned set. Returns true if it was known.
    pub fn forget(&mut self, ability: AbilityId) -> bool {
        let before = self.abilities.len();
        self.abilities.retain(|known| *known != ability);
        self.abilities.len() != before
    }
}

/// A monster.
///
/// Monsters equip items like players do, but have no ability mechanic in
/// this core; special monster behavior is an external extension point.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterState {
    pub id: EntityId,
    pub name: String,

    /// Base stats before equipment modifiers.
    pub base: StatBlock,
    pub health: ResourceMeter,
    pub equipment: Equipment,
}

impl MonsterState {
    pub fn new(id: EntityId, name: impl Into<String>, base: StatBlock, max_health: u32) -> Self {
        Self {
            id,
            name: name.into(),
            base,
            health: ResourceMeter::full(max_health),
            equipment: Equipment::empty(),
        }
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = equipment;
        self
    }
}

/// Any participant in combat.
///
/// Tagged-variant model instead of an inheritance hierarchy: each variant
/// satisfies [`Targetable`], and the enum exposes the accessors common to
/// both so the engine and resolver can stay variant-agnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Actor {
    Player(PlayerState),
    Monster(MonsterState),
}

impl Actor {
    pub fn id(&self) -> EntityId {
        match self {
            Self::Player(player) => player.id,
            Self::Monster(monster) => monster.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Player(player) => &player.name,
            Self::Monster(monster) => &monster.name,
        }
    }

    pub fn base_stats(&self) -> &StatBlock {
        match self {
            Self::Player(player) => &player.base,
            Self::Monster(monster) => &monster.base,
        }
    }

    pub fn health(&self) -> &ResourceMeter {
        match self {
            Self::Player(player) => &player.health,
            Self::Monster(monster) => &monster.health,
        }
    }

    pub fn equipment(&self) -> &Equipment {
        match self {
            Self::Player(player) => &player.equipment,
            Self::Monster(monster) => &monster.equipment,
        }
    }

    pub fn as_player(&self) -> Option<&PlayerState> {
        match self {
            Self::Player(player) => Some(player),
            Self::Monster(_) => None,
        }
    }

    /// Quick check if the actor is alive (without going through the trait).
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health().is_depleted()
    }

    fn health_mut(&mut self) -> &mut ResourceMeter {
        match self {
            Self::Player(player) => &mut player.health,
            Self::Monster(monster) => &mut monster.health,
        }
    }

    fn equipment_mut(&mut self) -> &mut Equipment {
        match self {
            Self::Player(player) => &mut player.equipment,
            Self::Monster(monster) => &mut monster.equipment,
        }
    }

    /// Equips a weapon after checking the handle resolves to a weapon in the
    /// catalog. Returns the previously equipped handle if any.
    pub fn equip_weapon(
        &mut self,
        handle: ItemHandle,
        catalog: &dyn ItemCatalog,
    ) -> Result<Option<ItemHandle>, EquipError> {
        match catalog.definition(handle) {
            None => Err(EquipError::UnknownItem(handle)),
            Some(definition) => match definition.kind {
                ItemKind::Weapon(_) => Ok(self.equipment_mut().equip_weapon(handle)),
                other => Err(EquipError::CategoryMismatch {
                    handle,
                    slot: ItemCategory::Weapon,
                    actual: other.category(),
                }),
            },
        }
    }

    /// Equips armor after checking the handle resolves to armor in the
    /// catalog. Returns the previously equipped handle if any.
    pub fn equip_armor(
        &mut self,
        handle: ItemHandle,
        catalog: &dyn ItemCatalog,
    ) -> Result<Option<ItemHandle>, EquipError> {
        match catalog.definition(handle) {
            None => Err(EquipError::UnknownItem(handle)),
            Some(definition) => match definition.kind {
                ItemKind::Armor(_) => Ok(self.equipment_mut().equip_armor(handle)),
                other => Err(EquipError::CategoryMismatch {
                    handle,
                    slot: ItemCategory::Armor,
                    actual: other.category(),
                }),
            },
        }
    }
}

impl Targetable for Actor {
    fn current_health(&self) -> u32 {
        self.health().current
    }

    fn defense(&self) -> i32 {
        self.base_stats().defense
    }

    fn apply_damage(&mut self, amount: u32) -> u32 {
        self.health_mut().damage(amount)
    }

    fn apply_healing(&mut self, amount: u32) -> u32 {
        self.health_mut().restore(amount)
    }
}

impl From<PlayerState> for Actor {
    fn from(player: PlayerState) -> Self {
        Self::Player(player)
    }
}

impl From<MonsterState> for Actor {
    fn from(monster: MonsterState) -> Self {
        Self::Monster(monster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemDefinition;

    struct OneOfEach;

    impl ItemCatalog for OneOfEach {
        fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
            static SWORD: std::sync::OnceLock<ItemDefinition> = std::sync::OnceLock::new();
            static SHIELD: std::sync::OnceLock<ItemDefinition> = std::sync::OnceLock::new();
            match handle {
                ItemHandle(1) => {
                    Some(SWORD.get_or_init(|| ItemDefinition::weapon(ItemHandle(1), "sword", 3)))
                }
                ItemHandle(2) => {
                    Some(SHIELD.get_or_init(|| ItemDefinition::armor(ItemHandle(2), "shield", 2)))
                }
                _ => None,
            }
        }
    }

    fn player() -> Actor {
        Actor::Player(PlayerState::new(
            EntityId(0),
            "Aldric",
            StatBlock::new(10, 2),
            20,
        ))
    }

    #[test]
    fn lethal_damage_makes_actor_untargetable() {
        let mut actor = player();
        assert!(actor.is_targetable());
        assert_eq!(actor.apply_damage(25), 20);
        assert_eq!(actor.current_health(), 0);
        assert!(!actor.is_targetable());
    }

    #[test]
    fn partial_damage_keeps_actor_targetable() {
        let mut actor = player();
        assert_eq!(actor.apply_damage(6), 6);
        assert_eq!(actor.current_health(), 14);
        assert!(actor.is_targetable());
    }

    #[test]
    fn equip_checks_category_against_catalog() {
        let mut actor = player();
        assert_eq!(actor.equip_weapon(ItemHandle(1), &OneOfEach), Ok(None));
        assert!(matches!(
            actor.equip_weapon(ItemHandle(2), &OneOfEach),
            Err(EquipError::CategoryMismatch { .. })
        ));
        assert_eq!(
            actor.equip_armor(ItemHandle(9), &OneOfEach),
            Err(EquipError::UnknownItem(ItemHandle(9)))
        );
    }

    #[test]
    fn learning_is_idempotent_and_forgettable() {
        let mut player = PlayerState::new(EntityId(0), "Aldric", StatBlock::new(1, 1), 10);
        player.learn(AbilityId(7)).unwrap();
        player.learn(AbilityId(7)).unwrap();
        assert_eq!(player.abilities.len(), 1);
        assert!(player.forget(AbilityId(7)));
        assert!(!player.forget(AbilityId(7)));
        assert!(!player.has_ability(AbilityId(7)));
    }
}
