//! End-to-end turn resolution through the public API.

use skirmish_core::{
    AbilityBook, AbilityDefinition, AbilityEffect, AbilityId, AbilityOutcome, ActionCommand,
    ActionReport, CombatEngine, CombatEnv, CombatError, CombatState, EntityId, Equipment,
    ItemCatalog, ItemDefinition, ItemHandle, MonsterState, PlayerState, Roster, Side, StatBlock,
    Targetable,
};

const SWORD: ItemHandle = ItemHandle(1);
const JERKIN: ItemHandle = ItemHandle(2);

const POWER_STRIKE: AbilityId = AbilityId(0);
const MEND: AbilityId = AbilityId(1);

struct TestCatalog(Vec<ItemDefinition>);

impl ItemCatalog for TestCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.0.iter().find(|item| item.handle == handle)
    }
}

fn catalog() -> TestCatalog {
    TestCatalog(vec![
        ItemDefinition::weapon(SWORD, "iron blade", 5),
        ItemDefinition::armor(JERKIN, "leather jerkin", 3),
    ])
}

fn abilities() -> AbilityBook {
    [
        AbilityDefinition::new(POWER_STRIKE, "Power Strike", AbilityEffect::Strike { power: 4 }),
        AbilityDefinition::new(MEND, "Mend", AbilityEffect::Mend { amount: 6 }),
    ]
    .into_iter()
    .collect()
}

/// Player #0 (attack 10, defense 2, 30 hp) vs monster #10
/// (attack 6, defense 4, `monster_health` hp).
fn duel(monster_health: u32) -> CombatState {
    let mut roster = Roster::new();
    roster
        .add(
            Side::Players,
            PlayerState::new(EntityId(0), "Aldric", StatBlock::new(10, 2), 30),
        )
        .unwrap();
    roster
        .add(
            Side::Monsters,
            MonsterState::new(EntityId(10), "Gnarl", StatBlock::new(6, 4), monster_health),
        )
        .unwrap();
    CombatState::new(roster, EntityId(0)).unwrap()
}

#[test]
fn unarmed_attack_deals_attack_minus_defense() {
    let catalog = catalog();
    let abilities = abilities();
    let env = CombatEnv::new(&catalog, &abilities);

    let mut state = duel(20);
    let mut engine = CombatEngine::new(&mut state);
    let report = engine
        .submit(&env, &ActionCommand::attack(EntityId(0), EntityId(10)))
        .unwrap();

    assert_eq!(
        report.action,
        ActionReport::Attack {
            target: EntityId(10),
            damage: 6,
            target_health: 14,
        }
    );
    assert!(report.ended.is_none());
    // Strict alternation: the monster acts next.
    assert_eq!(state.turn.current_actor, EntityId(10));
}

#[test]
fn equipped_weapon_raises_effective_attack() {
    let catalog = catalog();
    let abilities = abilities();
    let env = CombatEnv::new(&catalog, &abilities);

    let mut state = duel(20);
    if let Some(skirmish_core::Actor::Player(player)) = state.roster.actor_mut(EntityId(0)) {
        player.equipment = Equipment::builder().weapon(SWORD).build();
    }

    let mut engine = CombatEngine::new(&mut state);
    let report = engine
        .submit(&env, &ActionCommand::attack(EntityId(0), EntityId(10)))
        .unwrap();

    // (10 + 5) attack - 4 defense = 11 damage.
    assert_eq!(
        report.action,
        ActionReport::Attack {
            target: EntityId(10),
            damage: 11,
            target_health: 9,
        }
    );
}

#[test]
fn lethal_blow_ends_the_combat() {
    let catalog = catalog();
    let abilities = abilities();
    let env = CombatEnv::new(&catalog, &abilities);

    let mut state = duel(5);
    let mut engine = CombatEngine::new(&mut state);
    let report = engine
        .submit(&env, &ActionCommand::attack(EntityId(0), EntityId(10)))
        .unwrap();

    assert_eq!(
        report.action,
        ActionReport::Attack {
            target: EntityId(10),
            damage: 5,
            target_health: 0,
        }
    );
    let outcome = report.ended.expect("last monster fell");
    assert_eq!(outcome.winner, Side::Players);
    assert!(state.is_ended());
    assert!(!state.roster.actor(EntityId(10)).unwrap().is_targetable());

    // Terminal phase: any further submission is a caller bug.
    let mut engine = CombatEngine::new(&mut state);
    assert_eq!(
        engine.submit(&env, &ActionCommand::attack(EntityId(0), EntityId(10))),
        Err(CombatError::CombatAlreadyEnded)
    );
}

#[test]
fn unlearned_ability_is_rejected_without_mutation() {
    let catalog = catalog();
    let abilities = abilities();
    let env = CombatEnv::new(&catalog, &abilities);

    let mut state = duel(20);
    let before = state.clone();

    let mut engine = CombatEngine::new(&mut state);
    let err = engine
        .submit(
            &env,
            &ActionCommand::use_ability(EntityId(0), POWER_STRIKE, EntityId(10)),
        )
        .unwrap_err();

    assert_eq!(
        err,
        CombatError::IllegalAction {
            actor: EntityId(0),
            ability: POWER_STRIKE,
        }
    );
    assert_eq!(state, before);
}

#[test]
fn learned_ability_applies_its_effect() {
    let catalog = catalog();
    let abilities = abilities();
    let env = CombatEnv::new(&catalog, &abilities);

    let mut state = duel(20);
    if let Some(skirmish_core::Actor::Player(player)) = state.roster.actor_mut(EntityId(0)) {
        player.learn(POWER_STRIKE).unwrap();
    }

    let mut engine = CombatEngine::new(&mut state);
    let report = engine
        .submit(
            &env,
            &ActionCommand::use_ability(EntityId(0), POWER_STRIKE, EntityId(10)),
        )
        .unwrap();

    // 4 power + 10 attack - 4 innate defense = 10.
    assert_eq!(
        report.action,
        ActionReport::Ability {
            ability: POWER_STRIKE,
            target: EntityId(10),
            outcome: AbilityOutcome::Damaged {
                amount: 10,
                target_health: 10,
            },
        }
    );
}

#[test]
fn mend_may_target_the_users_own_side() {
    let catalog = catalog();
    let abilities = abilities();
    let env = CombatEnv::new(&catalog, &abilities);

    let mut state = duel(20);
    if let Some(skirmish_core::Actor::Player(player)) = state.roster.actor_mut(EntityId(0)) {
        player.learn(MEND).unwrap();
        player.health.damage(10);
    }

    let mut engine = CombatEngine::new(&mut state);
    let report = engine
        .submit(
            &env,
            &ActionCommand::use_ability(EntityId(0), MEND, EntityId(0)),
        )
        .unwrap();

    assert_eq!(
        report.action,
        ActionReport::Ability {
            ability: MEND,
            target: EntityId(0),
            outcome: AbilityOutcome::Healed {
                amount: 6,
                target_health: 26,
            },
        }
    );
}

#[test]
fn attacks_cannot_aim_at_the_attackers_own_side() {
    let catalog = catalog();
    let abilities = abilities();
    let env = CombatEnv::new(&catalog, &abilities);

    let mut state = duel(20);
    let mut engine = CombatEngine::new(&mut state);
    assert_eq!(
        engine.submit(&env, &ActionCommand::attack(EntityId(0), EntityId(0))),
        Err(CombatError::InvalidTarget {
            target: EntityId(0)
        })
    );
}

#[test]
fn out_of_turn_submissions_are_rejected() {
    let catalog = catalog();
    let abilities = abilities();
    let env = CombatEnv::new(&catalog, &abilities);

    let mut state = duel(20);
    let mut engine = CombatEngine::new(&mut state);
    assert_eq!(
        engine.submit(&env, &ActionCommand::attack(EntityId(10), EntityId(0))),
        Err(CombatError::ActorNotCurrent {
            actor: EntityId(10),
            current: EntityId(0),
        })
    );
}

#[test]
fn defeated_actors_are_skipped_for_scheduling_and_targeting() {
    let catalog = catalog();
    let abilities = abilities();
    let env = CombatEnv::new(&catalog, &abilities);

    let mut roster = Roster::new();
    roster
        .add(
            Side::Players,
            PlayerState::new(EntityId(0), "Aldric", StatBlock::new(30, 2), 30),
        )
        .unwrap();
    for (id, name) in [(10, "Gnarl"), (11, "Skit")] {
        roster
            .add(
                Side::Monsters,
                MonsterState::new(EntityId(id), name, StatBlock::new(6, 4), 8),
            )
            .unwrap();
    }
    let mut state = CombatState::new(roster, EntityId(0)).unwrap();

    // Kill the first monster; combat continues because one remains.
    let mut engine = CombatEngine::new(&mut state);
    let report = engine
        .submit(&env, &ActionCommand::attack(EntityId(0), EntityId(10)))
        .unwrap();
    assert!(report.ended.is_none());

    // The defeated monster is never scheduled...
    assert_eq!(state.turn.current_actor, EntityId(11));

    // ...and is no longer a legal target.
    let mut engine = CombatEngine::new(&mut state);
    engine
        .submit(&env, &ActionCommand::attack(EntityId(11), EntityId(0)))
        .unwrap();
    let mut engine = CombatEngine::new(&mut state);
    assert_eq!(
        engine.submit(&env, &ActionCommand::attack(EntityId(0), EntityId(10))),
        Err(CombatError::InvalidTarget {
            target: EntityId(10)
        })
    );
}
