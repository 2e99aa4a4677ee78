//! Asynchronous abstraction for sourcing actor intent.
//!
//! The session plugs in [`DecisionProvider`] implementations so a combat can
//! run with human input, scripted fixtures, or roster-scanning behavior. The
//! engine pulls exactly one decision per `AwaitingAction` state; resolution
//! itself stays synchronous.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use skirmish_core::{ActionKind, CombatState, EntityId};

/// Errors surfaced while sourcing a decision.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// A scripted provider ran out of queued actions.
    #[error("script exhausted: no action queued for {0}")]
    ScriptExhausted(EntityId),

    /// No legal target exists for the acting entity.
    #[error("no legal target available for {0}")]
    NoLegalTarget(EntityId),
}

/// Trait for choosing an action for the active actor.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed actions
/// - Basic monster behavior
#[async_trait]
pub trait DecisionProvider: Send + Sync {
    /// Choose an action for the given actor based on the current combat
    /// state.
    ///
    /// The session validates the returned target before applying it; a
    /// provider returning an illegal choice is re-prompted, not trusted.
    async fn decide(
        &self,
        actor: EntityId,
        state: &CombatState,
    ) -> Result<ActionKind, ProviderError>;
}

/// Replays a fixed queue of actions. Useful for tests and demos.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    queue: Mutex<VecDeque<ActionKind>>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = ActionKind>) -> Self {
        Self {
            queue: Mutex::new(actions.into_iter().collect()),
        }
    }

    /// Appends another action to the end of the script.
    pub fn push(&self, action: ActionKind) {
        self.queue
            .lock()
            .expect("script queue lock poisoned")
            .push_back(action);
    }
}

#[async_trait]
impl DecisionProvider for ScriptedProvider {
    async fn decide(
        &self,
        actor: EntityId,
        _state: &CombatState,
    ) -> Result<ActionKind, ProviderError> {
        self.queue
            .lock()
            .expect("script queue lock poisoned")
            .pop_front()
            .ok_or(ProviderError::ScriptExhausted(actor))
    }
}

/// Attacks the first living member of the opposing side.
///
/// This is the extent of target selection this crate ships; anything
/// smarter is an embedder concern.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostileProvider;

#[async_trait]
impl DecisionProvider for HostileProvider {
    async fn decide(
        &self,
        actor: EntityId,
        state: &CombatState,
    ) -> Result<ActionKind, ProviderError> {
        let side = state
            .roster
            .side_of(actor)
            .ok_or(ProviderError::NoLegalTarget(actor))?;
        let target = state
            .roster
            .living(side.opposing())
            .map(|enemy| enemy.id())
            .next()
            .ok_or(ProviderError::NoLegalTarget(actor))?;
        Ok(ActionKind::Attack { target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::{
        CombatState, MonsterState, PlayerState, Roster, Side, StatBlock,
    };

    fn state() -> CombatState {
        let mut roster = Roster::new();
        roster
            .add(
                Side::Players,
                PlayerState::new(EntityId(0), "Aldric", StatBlock::new(10, 2), 20),
            )
            .unwrap();
        roster
            .add(
                Side::Monsters,
                MonsterState::new(EntityId(10), "Gnarl", StatBlock::new(6, 4), 12),
            )
            .unwrap();
        CombatState::new(roster, EntityId(0)).unwrap()
    }

    #[tokio::test]
    async fn scripted_provider_replays_in_order() {
        let provider = ScriptedProvider::new([
            ActionKind::Attack {
                target: EntityId(10),
            },
            ActionKind::Attack {
                target: EntityId(11),
            },
        ]);
        let state = state();

        assert_eq!(
            provider.decide(EntityId(0), &state).await.unwrap(),
            ActionKind::Attack {
                target: EntityId(10)
            }
        );
        assert_eq!(
            provider.decide(EntityId(0), &state).await.unwrap(),
            ActionKind::Attack {
                target: EntityId(11)
            }
        );
        assert_eq!(
            provider.decide(EntityId(0), &state).await.unwrap_err(),
            ProviderError::ScriptExhausted(EntityId(0))
        );
    }

    #[tokio::test]
    async fn hostile_provider_picks_first_living_enemy() {
        let provider = HostileProvider;
        let state = state();

        assert_eq!(
            provider.decide(EntityId(0), &state).await.unwrap(),
            ActionKind::Attack {
                target: EntityId(10)
            }
        );
        assert_eq!(
            provider.decide(EntityId(10), &state).await.unwrap(),
            ActionKind::Attack {
                target: EntityId(0)
            }
        );
    }
}
