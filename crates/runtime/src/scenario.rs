//! Demo content seeding.
//!
//! Stands in for the external persistence layer: registers items and
//! abilities, stores hydrated actors in the repository, and assembles a
//! roster for a small two-on-two encounter. Tests and the CLI demo both
//! build on this.

use skirmish_core::{
    AbilityBook, AbilityDefinition, AbilityEffect, AbilityId, EntityId, Equipment,
    ItemDefinition, ItemHandle, MonsterState, PlayerState, Roster, Side, StatBlock,
};

use crate::repository::{
    ActorRepository, InMemoryActorRepository, InMemoryItemCatalog, RepositoryError,
};

pub const IRON_BLADE: ItemHandle = ItemHandle(1);
pub const LEATHER_JERKIN: ItemHandle = ItemHandle(2);
pub const CRUDE_CLUB: ItemHandle = ItemHandle(3);

pub const POWER_STRIKE: AbilityId = AbilityId(1);
pub const MEND: AbilityId = AbilityId(2);

pub const ALDRIC: EntityId = EntityId(1);
pub const BRENNA: EntityId = EntityId(2);
pub const GNARL: EntityId = EntityId(10);
pub const SKIT: EntityId = EntityId(11);

/// Everything a demo combat needs, fully seeded.
pub struct Scenario {
    pub catalog: InMemoryItemCatalog,
    pub abilities: AbilityBook,
    pub repository: InMemoryActorRepository,
    pub roster: Roster,
    pub first_actor: EntityId,
}

/// Builds the stock two-on-two encounter.
pub fn demo() -> Result<Scenario, RepositoryError> {
    let catalog: InMemoryItemCatalog = [
        ItemDefinition::weapon(IRON_BLADE, "iron blade", 5),
        ItemDefinition::armor(LEATHER_JERKIN, "leather jerkin", 3),
        ItemDefinition::weapon(CRUDE_CLUB, "crude club", 2),
    ]
    .into_iter()
    .collect();

    let abilities: AbilityBook = [
        AbilityDefinition::new(POWER_STRIKE, "Power Strike", AbilityEffect::Strike { power: 4 }),
        AbilityDefinition::new(MEND, "Mend", AbilityEffect::Mend { amount: 6 }),
    ]
    .into_iter()
    .collect();

    let mut repository = InMemoryActorRepository::new();

    let mut aldric = PlayerState::new(ALDRIC, "Aldric", StatBlock::new(10, 2), 30)
        .with_equipment(Equipment::builder().weapon(IRON_BLADE).build());
    aldric
        .learn(POWER_STRIKE)
        .expect("fresh player has ability capacity");
    repository.insert_player(aldric);

    let mut brenna = PlayerState::new(BRENNA, "Brenna", StatBlock::new(7, 3), 26)
        .with_equipment(Equipment::builder().armor(LEATHER_JERKIN).build());
    brenna.learn(MEND).expect("fresh player has ability capacity");
    repository.insert_player(brenna);

    repository.insert_monster(
        MonsterState::new(GNARL, "Gnarl", StatBlock::new(6, 4), 22)
            .with_equipment(Equipment::builder().weapon(CRUDE_CLUB).build()),
    );
    repository.insert_monster(MonsterState::new(SKIT, "Skit", StatBlock::new(5, 2), 16));

    // The combat core receives hydrated actors from the repository; it never
    // constructs them itself.
    let mut roster = Roster::new();
    for id in [ALDRIC, BRENNA] {
        roster
            .add(Side::Players, repository.player(id)?)
            .expect("seeded roster fits the side capacity");
    }
    for id in [GNARL, SKIT] {
        roster
            .add(Side::Monsters, repository.monster(id)?)
            .expect("seeded roster fits the side capacity");
    }

    Ok(Scenario {
        catalog,
        abilities,
        repository,
        roster,
        first_actor: ALDRIC,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::ItemCatalog;

    #[test]
    fn demo_scenario_is_fully_hydrated() {
        let scenario = demo().unwrap();

        assert_eq!(scenario.roster.living_count(Side::Players), 2);
        assert_eq!(scenario.roster.living_count(Side::Monsters), 2);
        assert!(scenario.catalog.definition(IRON_BLADE).is_some());

        let aldric = scenario.roster.actor(ALDRIC).unwrap();
        assert_eq!(aldric.equipment().weapon, Some(IRON_BLADE));
        assert!(aldric.as_player().unwrap().has_ability(POWER_STRIKE));
    }
}
