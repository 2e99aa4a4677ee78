//! Combat session orchestration.
//!
//! [`CombatSession`] owns one combat's state and drives the turn loop: pull a
//! decision from the side's provider, submit it to the engine, publish the
//! outcome, repeat until a side falls. Retriable rejections are surfaced back
//! to the decision layer as a re-prompt; internal and fatal errors abort the
//! session.

use std::sync::Arc;

use skirmish_core::{
    AbilityBook, ActionCommand, CombatConfig, CombatEngine, CombatEnv, CombatError, CombatOutcome,
    CombatState, CoreError, EntityId, EquipError, ItemCatalog, ItemHandle, Roster, SetupError,
    Side, TurnReport,
};

use crate::events::{CombatEvent, Event, EventBus, SessionEvent};
use crate::providers::{DecisionProvider, ProviderError};

/// Errors surfaced by session orchestration.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session builder is missing its {0}")]
    MissingComponent(&'static str),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("decision provider failed: {0}")]
    Provider(#[from] ProviderError),

    /// The provider kept submitting rejected actions for one turn.
    #[error("provider exhausted {attempts} attempts for actor {actor}")]
    ProviderExhausted { actor: EntityId, attempts: u32 },

    #[error("combat engine error: {0}")]
    Engine(#[from] CombatError),

    /// Equipment changes are not allowed while a combat is in progress;
    /// they are rejected, not queued.
    #[error("equipment cannot change during an active combat")]
    CombatInProgress,

    #[error("actor {0} is not fielded in this session")]
    UnknownActor(EntityId),

    #[error(transparent)]
    Equip(#[from] EquipError),
}

/// Orchestrates one combat from first turn to outcome.
pub struct CombatSession {
    state: CombatState,
    catalog: Arc<dyn ItemCatalog>,
    abilities: Arc<AbilityBook>,
    players: Arc<dyn DecisionProvider>,
    monsters: Arc<dyn DecisionProvider>,
    bus: EventBus,
    config: CombatConfig,
}

impl CombatSession {
    pub fn builder() -> CombatSessionBuilder {
        CombatSessionBuilder::default()
    }

    /// Read-only view of the combat state.
    pub fn state(&self) -> &CombatState {
        &self.state
    }

    /// The bus this session publishes to.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn current_actor(&self) -> EntityId {
        self.state.turn.current_actor
    }

    /// Runs the combat to its terminal phase and returns the outcome.
    pub async fn run_to_completion(&mut self) -> Result<CombatOutcome, SessionError> {
        self.bus.publish(Event::Session(SessionEvent::Started {
            players: side_names(&self.state.roster, Side::Players),
            monsters: side_names(&self.state.roster, Side::Monsters),
        }));

        while !self.state.is_ended() {
            self.step().await?;
        }

        let outcome = self
            .state
            .outcome()
            .expect("loop exits only once the combat has ended");
        tracing::info!(winner = %outcome.winner, "combat finished");
        Ok(outcome)
    }

    /// Drives a single turn: decision, submission, events.
    ///
    /// Retriable rejections re-prompt the same provider up to
    /// `config.max_retries` times before giving up on the decision layer.
    pub async fn step(&mut self) -> Result<TurnReport, SessionError> {
        let actor = self.state.turn.current_actor;
        let side = self
            .state
            .roster
            .side_of(actor)
            .ok_or(SessionError::UnknownActor(actor))?;
        let provider = match side {
            Side::Players => Arc::clone(&self.players),
            Side::Monsters => Arc::clone(&self.monsters),
        };

        let mut attempts = 0u32;
        loop {
            let kind = provider.decide(actor, &self.state).await?;
            let command = ActionCommand::new(actor, kind);

            let env = CombatEnv::new(self.catalog.as_ref(), self.abilities.as_ref());
            let submitted = CombatEngine::new(&mut self.state).submit(&env, &command);

            match submitted {
                Ok(report) => {
                    tracing::debug!(
                        turn = report.turn,
                        %actor,
                        action = command.kind.as_snake_case(),
                        "turn resolved"
                    );
                    let actor_name = self
                        .state
                        .roster
                        .actor(actor)
                        .map(|fielded| fielded.name().to_owned())
                        .unwrap_or_default();
                    self.bus.publish(Event::Combat(CombatEvent::TurnResolved {
                        actor,
                        actor_name,
                        report,
                    }));
                    if let Some(outcome) = report.ended {
                        self.bus.publish(Event::Combat(CombatEvent::CombatEnded {
                            winner: outcome.winner,
                        }));
                    }
                    return Ok(report);
                }
                Err(err) if err.severity().is_retriable() => {
                    attempts += 1;
                    tracing::warn!(
                        %actor,
                        code = err.error_code(),
                        attempts,
                        "submission rejected, re-prompting"
                    );
                    self.bus.publish(Event::Combat(CombatEvent::ActionRejected {
                        actor,
                        severity: err.severity(),
                        reason: err.to_string(),
                    }));
                    if attempts >= self.config.max_retries {
                        return Err(SessionError::ProviderExhausted { actor, attempts });
                    }
                }
                Err(err) => {
                    tracing::error!(%actor, code = err.error_code(), "combat session aborted");
                    return Err(err.into());
                }
            }
        }
    }

    /// Re-equips a fielded actor's weapon slot.
    ///
    /// Only legal once the combat has ended: equipment is read, never
    /// mutated, during resolution, and mid-combat changes are rejected.
    pub fn equip_weapon(
        &mut self,
        actor: EntityId,
        handle: ItemHandle,
    ) -> Result<Option<ItemHandle>, SessionError> {
        if !self.state.is_ended() {
            return Err(SessionError::CombatInProgress);
        }
        let fielded = self
            .state
            .roster
            .actor_mut(actor)
            .ok_or(SessionError::UnknownActor(actor))?;
        Ok(fielded.equip_weapon(handle, self.catalog.as_ref())?)
    }

    /// Re-equips a fielded actor's armor slot. Same restriction as
    /// [`CombatSession::equip_weapon`].
    pub fn equip_armor(
        &mut self,
        actor: EntityId,
        handle: ItemHandle,
    ) -> Result<Option<ItemHandle>, SessionError> {
        if !self.state.is_ended() {
            return Err(SessionError::CombatInProgress);
        }
        let fielded = self
            .state
            .roster
            .actor_mut(actor)
            .ok_or(SessionError::UnknownActor(actor))?;
        Ok(fielded.equip_armor(handle, self.catalog.as_ref())?)
    }
}

fn side_names(roster: &Roster, side: Side) -> Vec<String> {
    roster
        .members(side)
        .iter()
        .map(|actor| actor.name().to_owned())
        .collect()
}

/// Builder wiring a session's collaborators together.
#[derive(Default)]
pub struct CombatSessionBuilder {
    catalog: Option<Arc<dyn ItemCatalog>>,
    abilities: Option<Arc<AbilityBook>>,
    players: Option<Arc<dyn DecisionProvider>>,
    monsters: Option<Arc<dyn DecisionProvider>>,
    bus: Option<EventBus>,
    config: Option<CombatConfig>,
}

impl CombatSessionBuilder {
    pub fn catalog(mut self, catalog: Arc<dyn ItemCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn abilities(mut self, abilities: Arc<AbilityBook>) -> Self {
        self.abilities = Some(abilities);
        self
    }

    /// Decision provider for the players' side.
    pub fn players(mut self, provider: Arc<dyn DecisionProvider>) -> Self {
        self.players = Some(provider);
        self
    }

    /// Decision provider for the monsters' side.
    pub fn monsters(mut self, provider: Arc<dyn DecisionProvider>) -> Self {
        self.monsters = Some(provider);
        self
    }

    pub fn bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn config(mut self, config: CombatConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Assembles the session around a seeded roster.
    pub fn build(
        self,
        roster: Roster,
        first_actor: EntityId,
    ) -> Result<CombatSession, SessionError> {
        let catalog = self
            .catalog
            .ok_or(SessionError::MissingComponent("item catalog"))?;
        let abilities = self
            .abilities
            .ok_or(SessionError::MissingComponent("ability book"))?;
        let players = self
            .players
            .ok_or(SessionError::MissingComponent("players provider"))?;
        let monsters = self
            .monsters
            .ok_or(SessionError::MissingComponent("monsters provider"))?;

        let state = CombatState::new(roster, first_actor)?;

        Ok(CombatSession {
            state,
            catalog,
            abilities,
            players,
            monsters,
            bus: self.bus.unwrap_or_default(),
            config: self.config.unwrap_or_default(),
        })
    }
}
