//! Repository contracts for hydrated combat content.
//!
//! The core never constructs actors or item definitions from scratch; the
//! seeding layer loads them here and combats pull fully hydrated copies
//! (equipment and learned abilities included). The in-memory implementations
//! stand in for whatever persistence an embedder brings.

use std::collections::HashMap;

use skirmish_core::{
    EntityId, ItemCatalog, ItemDefinition, ItemHandle, MonsterState, PlayerState,
};

/// Errors surfaced by repository lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("player {0} not found")]
    PlayerNotFound(EntityId),

    #[error("monster {0} not found")]
    MonsterNotFound(EntityId),
}

/// Source of fully hydrated actors.
pub trait ActorRepository: Send + Sync {
    /// Returns a hydrated player: stats, equipment, and learned abilities.
    fn player(&self, id: EntityId) -> Result<PlayerState, RepositoryError>;

    /// Returns a hydrated monster.
    fn monster(&self, id: EntityId) -> Result<MonsterState, RepositoryError>;
}

/// In-memory actor store.
#[derive(Clone, Debug, Default)]
pub struct InMemoryActorRepository {
    players: HashMap<EntityId, PlayerState>,
    monsters: HashMap<EntityId, MonsterState>,
}

impl InMemoryActorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a player, replacing any previous entry with the same id.
    pub fn insert_player(&mut self, player: PlayerState) {
        self.players.insert(player.id, player);
    }

    /// Stores a monster, replacing any previous entry with the same id.
    pub fn insert_monster(&mut self, monster: MonsterState) {
        self.monsters.insert(monster.id, monster);
    }
}

impl ActorRepository for InMemoryActorRepository {
    fn player(&self, id: EntityId) -> Result<PlayerState, RepositoryError> {
        self.players
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::PlayerNotFound(id))
    }

    fn monster(&self, id: EntityId) -> Result<MonsterState, RepositoryError> {
        self.monsters
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::MonsterNotFound(id))
    }
}

/// In-memory item catalog.
#[derive(Clone, Debug, Default)]
pub struct InMemoryItemCatalog {
    items: HashMap<ItemHandle, ItemDefinition>,
}

impl InMemoryItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, replacing any previous entry with the same
    /// handle.
    pub fn insert(&mut self, definition: ItemDefinition) {
        self.items.insert(definition.handle, definition);
    }
}

impl FromIterator<ItemDefinition> for InMemoryItemCatalog {
    fn from_iter<I: IntoIterator<Item = ItemDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.insert(definition);
        }
        catalog
    }
}

impl ItemCatalog for InMemoryItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.items.get(&handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::StatBlock;

    #[test]
    fn lookups_return_hydrated_copies() {
        let mut repository = InMemoryActorRepository::new();
        let mut player = PlayerState::new(EntityId(0), "Aldric", StatBlock::new(10, 2), 20);
        player.learn(skirmish_core::AbilityId(3)).unwrap();
        repository.insert_player(player);

        let hydrated = repository.player(EntityId(0)).unwrap();
        assert!(hydrated.has_ability(skirmish_core::AbilityId(3)));
        assert_eq!(
            repository.monster(EntityId(9)).unwrap_err(),
            RepositoryError::MonsterNotFound(EntityId(9))
        );
    }
}
