//! Turn state and the alternation turn-order policy.

use crate::error::{CoreError, ErrorSeverity};

use super::{EntityId, Roster, Side};

/// Errors that can occur during turn advancement.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("actor {0} is not fielded in this combat")]
    UnknownActor(EntityId),

    #[error("side {0} has no living members to schedule")]
    NoLivingMembers(Side),
}

impl CoreError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        // Advancement only runs after the victory check, so either variant
        // signals corrupted turn state.
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownActor(_) => "TURN_UNKNOWN_ACTOR",
            Self::NoLivingMembers(_) => "TURN_NO_LIVING_MEMBERS",
        }
    }
}

/// Scheduling state for the turn protocol.
///
/// # Turn order policy
///
/// Strict alternation between the two sides: after an actor on one side acts,
/// the next turn goes to the opposing side's next living member in roster
/// order (wrapping). Defeated actors are skipped and are never scheduled.
/// Speed-based ordering is an integration decision left to embedders; this
/// core ships alternation only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Monotonic counter of successfully executed actions.
    pub nonce: u64,

    /// The actor currently expected to act.
    pub current_actor: EntityId,

    /// Per-side rotation cursors: index of the next candidate in
    /// `[players, monsters]` roster order.
    cursors: [usize; 2],
}

impl TurnState {
    /// Creates turn state with a designated first actor.
    ///
    /// The caller (combat state construction) has already validated that the
    /// first actor is fielded and alive.
    pub fn starting(roster: &Roster, first_actor: EntityId) -> Result<Self, TurnError> {
        let side = roster
            .side_of(first_actor)
            .ok_or(TurnError::UnknownActor(first_actor))?;
        let index = roster
            .members(side)
            .iter()
            .position(|actor| actor.id() == first_actor)
            .ok_or(TurnError::UnknownActor(first_actor))?;

        let mut cursors = [0, 0];
        cursors[side_index(side)] = (index + 1) % roster.members(side).len().max(1);

        Ok(Self {
            nonce: 0,
            current_actor: first_actor,
            cursors,
        })
    }

    /// Advances to the opposing side's next living member and returns it.
    pub fn advance(&mut self, roster: &Roster) -> Result<EntityId, TurnError> {
        let acting_side = roster
            .side_of(self.current_actor)
            .ok_or(TurnError::UnknownActor(self.current_actor))?;
        let next_side = acting_side.opposing();

        let members = roster.members(next_side);
        if members.is_empty() {
            return Err(TurnError::NoLivingMembers(next_side));
        }

        let cursor = &mut self.cursors[side_index(next_side)];
        for offset in 0..members.len() {
            let index = (*cursor + offset) % members.len();
            if members[index].is_alive() {
                *cursor = (index + 1) % members.len();
                self.current_actor = members[index].id();
                return Ok(self.current_actor);
            }
        }

        Err(TurnError::NoLivingMembers(next_side))
    }
}

const fn side_index(side: Side) -> usize {
    match side {
        Side::Players => 0,
        Side::Monsters => 1,
    }
}
