//! Error types for the action submission pipeline.

use crate::error::{CoreError, ErrorSeverity};
use crate::state::{AbilityId, EntityId};
use crate::stats::ResolveError;

/// Errors surfaced while submitting an action to the combat engine.
///
/// Severity drives the decision layer's recovery strategy: retriable errors
/// are surfaced for a corrected resubmission of the same turn, internal and
/// fatal errors abort the session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// The chosen target is not eligible (defeated, or not on a legal side
    /// for the action). Non-fatal: the turn is re-prompted.
    #[error("target {target} is not a legal target")]
    InvalidTarget { target: EntityId },

    /// The active actor is itself defeated. A defeated actor may never act;
    /// turn order excludes them, so this signals corrupted engine state.
    #[error("active actor {actor} is defeated and may not act")]
    InvalidActor { actor: EntityId },

    /// The acting player attempted an ability outside its learned set, or a
    /// non-player attempted an ability at all. Non-fatal: re-prompted.
    #[error("actor {actor} cannot use {ability}")]
    IllegalAction { actor: EntityId, ability: AbilityId },

    /// An action was submitted after the combat reached its terminal phase.
    /// Programming-error class: fatal to the caller.
    #[error("combat has already ended")]
    CombatAlreadyEnded,

    /// The submitted command names an actor other than the scheduled one.
    #[error("actor {actor} acted out of turn (current: {current})")]
    ActorNotCurrent { actor: EntityId, current: EntityId },

    /// The command references an id that is not fielded in this combat.
    #[error("actor {0} is not fielded in this combat")]
    UnknownActor(EntityId),

    /// The ability id has no definition in the arena.
    #[error("{0} has no definition")]
    UnknownAbility(AbilityId),

    /// Effective-stat resolution failed (corrupted equipment reference).
    #[error("stat resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// Turn advancement failed after a resolved action. The victory check
    /// runs first, so this signals corrupted scheduling state.
    #[error("turn advancement failed: {0}")]
    Turn(#[from] crate::state::TurnError),
}

impl CoreError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidTarget { .. } => ErrorSeverity::Recoverable,
            Self::InvalidActor { .. } => ErrorSeverity::Internal,
            Self::IllegalAction { .. } => ErrorSeverity::Validation,
            Self::CombatAlreadyEnded => ErrorSeverity::Fatal,
            Self::ActorNotCurrent { .. } => ErrorSeverity::Validation,
            Self::UnknownActor(_) => ErrorSeverity::Validation,
            Self::UnknownAbility(_) => ErrorSeverity::Validation,
            Self::Resolve(_) => ErrorSeverity::Fatal,
            Self::Turn(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTarget { .. } => "COMBAT_INVALID_TARGET",
            Self::InvalidActor { .. } => "COMBAT_INVALID_ACTOR",
            Self::IllegalAction { .. } => "COMBAT_ILLEGAL_ACTION",
            Self::CombatAlreadyEnded => "COMBAT_ALREADY_ENDED",
            Self::ActorNotCurrent { .. } => "COMBAT_ACTOR_NOT_CURRENT",
            Self::UnknownActor(_) => "COMBAT_UNKNOWN_ACTOR",
            Self::UnknownAbility(_) => "COMBAT_UNKNOWN_ABILITY",
            Self::Resolve(_) => "COMBAT_RESOLVE_FAILED",
            Self::Turn(_) => "COMBAT_TURN_ADVANCE",
        }
    }
}
