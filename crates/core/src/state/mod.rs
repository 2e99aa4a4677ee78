//! Combat state types.
//!
//! [`CombatState`] is the single mutable aggregate: the roster of both sides,
//! the turn protocol state, and the phase. All mutation flows through
//! [`CombatEngine`](crate::engine::CombatEngine).

mod actor;
mod common;
mod equipment;
mod roster;
mod turn;

pub use actor::{
    AbilitiesFull, Actor, EquipError, LearnedAbilities, MonsterState, PlayerState,
};
pub use common::{AbilityId, EntityId, ItemHandle, ResourceMeter, Side};
pub use equipment::{Equipment, EquipmentBuilder};
pub use roster::{Roster, RosterError, SideRoster};
pub use turn::{TurnError, TurnState};

use crate::error::{CoreError, ErrorSeverity};

/// How a finished combat ended.
///
/// With a single active actor per turn, exactly one side can be defeated by
/// any resolution pass, so a draw is impossible by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatOutcome {
    pub winner: Side,
}

/// Lifecycle phase of a combat.
///
/// The transient resolving/victory-checking steps of a turn happen inside a
/// single synchronous engine pass and are not stored; between passes a combat
/// is either awaiting the next action or over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    /// Waiting for the scheduled actor's action.
    AwaitingAction,

    /// Terminal. No further actions are accepted.
    Ended(CombatOutcome),
}

/// Errors surfaced while assembling a combat.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("side {0} has no living members")]
    EmptySide(Side),

    #[error("first actor {0} is not fielded")]
    UnknownFirstActor(EntityId),

    #[error("first actor {0} is already defeated")]
    DefeatedFirstActor(EntityId),
}

impl CoreError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptySide(_) => "SETUP_EMPTY_SIDE",
            Self::UnknownFirstActor(_) => "SETUP_UNKNOWN_FIRST_ACTOR",
            Self::DefeatedFirstActor(_) => "SETUP_DEFEATED_FIRST_ACTOR",
        }
    }
}

/// Complete state of one combat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub roster: Roster,
    pub turn: TurnState,
    pub phase: CombatPhase,
}

impl CombatState {
    /// Assembles a combat from a seeded roster and a designated first actor.
    ///
    /// Both sides must field at least one living member; the first actor must
    /// be fielded and alive.
    pub fn new(roster: Roster, first_actor: EntityId) -> Result<Self, SetupError> {
        for side in [Side::Players, Side::Monsters] {
            if roster.is_defeated(side) {
                return Err(SetupError::EmptySide(side));
            }
        }

        match roster.actor(first_actor) {
            None => return Err(SetupError::UnknownFirstActor(first_actor)),
            Some(actor) if !actor.is_alive() => {
                return Err(SetupError::DefeatedFirstActor(first_actor));
            }
            Some(_) => {}
        }

        let turn = TurnState::starting(&roster, first_actor)
            .expect("first actor validated against the roster");

        Ok(Self {
            roster,
            turn,
            phase: CombatPhase::AwaitingAction,
        })
    }

    /// True once the combat has reached its terminal phase.
    pub fn is_ended(&self) -> bool {
        matches!(self.phase, CombatPhase::Ended(_))
    }

    /// The outcome, if the combat is over.
    pub fn outcome(&self) -> Option<CombatOutcome> {
        match self.phase {
            CombatPhase::Ended(outcome) => Some(outcome),
            CombatPhase::AwaitingAction => None,
        }
    }
}
