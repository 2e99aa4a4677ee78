//! Turn coordination and action resolution.
//!
//! The [`CombatEngine`] is the authoritative reducer for
//! [`CombatState`]: every health mutation during a combat flows through
//! [`CombatEngine::submit`]. A submission drives one full turn pass -
//! validate, resolve, check victory, advance - synchronously and
//! deterministically, with no partial application.

mod errors;

pub use errors::CombatError;

use crate::ability::AbilityOutcome;
use crate::action::{ActionCommand, ActionKind};
use crate::combat::{ActionReport, TurnReport, calculate_damage};
use crate::env::CombatEnv;
use crate::state::{CombatOutcome, CombatPhase, CombatState, EntityId, Side};
use crate::stats::{StatBlock, effective_stats};
use crate::targetable::Targetable;

/// Combat engine that manages action validation, resolution, and turn order.
pub struct CombatEngine<'a> {
    state: &'a mut CombatState,
}

impl<'a> CombatEngine<'a> {
    /// Creates a new engine borrowing the given combat state.
    pub fn new(state: &'a mut CombatState) -> Self {
        Self { state }
    }

    /// Returns the actor currently expected to act.
    pub fn current_actor(&self) -> EntityId {
        self.state.turn.current_actor
    }

    /// Submits the active actor's chosen action and resolves the turn.
    ///
    /// The pass runs `AwaitingAction -> ResolvingAction -> CheckingVictory ->
    /// (AwaitingAction | Ended)` in one synchronous step:
    ///
    /// 1. reject anything after the terminal phase (`CombatAlreadyEnded`);
    /// 2. reject out-of-turn submissions (`ActorNotCurrent`);
    /// 3. reject a defeated active actor (`InvalidActor` - turn order never
    ///    schedules one, so this is state corruption);
    /// 4. validate the chosen target (`InvalidTarget` / `UnknownActor`) and,
    ///    for abilities, the learned-set membership (`IllegalAction`);
    /// 5. resolve the effect through the equipment resolver and the
    ///    [`Targetable`] capability;
    /// 6. end the combat if a side is out of living members, otherwise
    ///    advance to the opposing side's next living actor.
    ///
    /// Validation happens before any mutation: a rejected submission leaves
    /// the state untouched and may be corrected and resubmitted.
    pub fn submit(
        &mut self,
        env: &CombatEnv<'_>,
        command: &ActionCommand,
    ) -> Result<TurnReport, CombatError> {
        if self.state.is_ended() {
            return Err(CombatError::CombatAlreadyEnded);
        }

        let current = self.state.turn.current_actor;
        if command.actor != current {
            return Err(CombatError::ActorNotCurrent {
                actor: command.actor,
                current,
            });
        }

        let actor = self
            .state
            .roster
            .actor(command.actor)
            .ok_or(CombatError::UnknownActor(command.actor))?;
        if !actor.is_alive() {
            return Err(CombatError::InvalidActor {
                actor: command.actor,
            });
        }

        let action = match command.kind {
            ActionKind::Attack { target } => self.resolve_attack(env, command.actor, target)?,
            ActionKind::UseAbility { ability, target } => {
                self.resolve_ability(env, command.actor, ability, target)?
            }
        };

        let turn = self.state.turn.nonce;
        self.state.turn.nonce += 1;

        let ended = self.check_victory();
        if let Some(outcome) = ended {
            self.state.phase = CombatPhase::Ended(outcome);
        } else {
            self.state.turn.advance(&self.state.roster)?;
        }

        Ok(TurnReport {
            turn,
            actor: command.actor,
            action,
            ended,
        })
    }

    /// Validates a target id: fielded and still targetable.
    ///
    /// `legal_side` restricts which side the target may be on; `None` allows
    /// either side (abilities may strike enemies or mend allies).
    fn validate_target(
        &self,
        target: EntityId,
        legal_side: Option<Side>,
    ) -> Result<(), CombatError> {
        let side = self
            .state
            .roster
            .side_of(target)
            .ok_or(CombatError::UnknownActor(target))?;

        if legal_side.is_some_and(|legal| legal != side) {
            return Err(CombatError::InvalidTarget { target });
        }

        let actor = self
            .state
            .roster
            .actor(target)
            .ok_or(CombatError::UnknownActor(target))?;
        if !actor.is_targetable() {
            return Err(CombatError::InvalidTarget { target });
        }

        Ok(())
    }

    fn resolve_attack(
        &mut self,
        env: &CombatEnv<'_>,
        attacker: EntityId,
        target: EntityId,
    ) -> Result<ActionReport, CombatError> {
        let attacker_side = self
            .state
            .roster
            .side_of(attacker)
            .ok_or(CombatError::UnknownActor(attacker))?;
        self.validate_target(target, Some(attacker_side.opposing()))?;

        let attacker_stats = self.effective_stats_of(env, attacker)?;
        let defender_stats = self.effective_stats_of(env, target)?;
        let damage = calculate_damage(&attacker_stats, &defender_stats);

        let defender = self
            .state
            .roster
            .actor_mut(target)
            .ok_or(CombatError::UnknownActor(target))?;
        let dealt = defender.apply_damage(damage);

        Ok(ActionReport::Attack {
            target,
            damage: dealt,
            target_health: defender.current_health(),
        })
    }

    fn resolve_ability(
        &mut self,
        env: &CombatEnv<'_>,
        actor: EntityId,
        ability: crate::state::AbilityId,
        target: EntityId,
    ) -> Result<ActionReport, CombatError> {
        let player = self
            .state
            .roster
            .actor(actor)
            .ok_or(CombatError::UnknownActor(actor))?
            .as_player()
            .ok_or(CombatError::IllegalAction { actor, ability })?;
        if !player.has_ability(ability) {
            return Err(CombatError::IllegalAction { actor, ability });
        }

        // Abilities may legally target either side (strikes aim at enemies,
        // mends at allies); only liveness is enforced here.
        self.validate_target(target, None)?;

        let definition = env
            .abilities()
            .definition(ability)
            .ok_or(CombatError::UnknownAbility(ability))?;

        let user_stats = self.effective_stats_of(env, actor)?;
        let targetable = self
            .state
            .roster
            .actor_mut(target)
            .ok_or(CombatError::UnknownActor(target))?;
        let outcome = definition.activate(&user_stats, targetable);
        debug_assert_ne!(
            outcome,
            AbilityOutcome::NoOp,
            "target liveness was validated before activation"
        );

        Ok(ActionReport::Ability {
            ability,
            target,
            outcome,
        })
    }

    /// Effective stats of a fielded actor, resolved against the catalog.
    fn effective_stats_of(
        &self,
        env: &CombatEnv<'_>,
        id: EntityId,
    ) -> Result<StatBlock, CombatError> {
        let actor = self
            .state
            .roster
            .actor(id)
            .ok_or(CombatError::UnknownActor(id))?;
        Ok(effective_stats(
            actor.base_stats(),
            actor.equipment(),
            env.items(),
        )?)
    }

    /// Ends the combat exactly when one side's entire roster is defeated.
    fn check_victory(&self) -> Option<CombatOutcome> {
        for side in [Side::Players, Side::Monsters] {
            if self.state.roster.is_defeated(side) {
                return Some(CombatOutcome {
                    winner: side.opposing(),
                });
            }
        }
        None
    }
}
