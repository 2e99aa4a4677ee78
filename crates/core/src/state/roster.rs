//! The two opposing rosters of a combat.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::error::{CoreError, ErrorSeverity};

use super::{Actor, EntityId, Side};

/// Fixed-capacity list of actors fielded by one side.
pub type SideRoster = ArrayVec<Actor, { CombatConfig::MAX_SIDE_SIZE }>;

/// Errors surfaced while assembling a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    #[error("side {side} is full ({capacity} actors)")]
    SideFull { side: Side, capacity: usize },

    #[error("actor {0} is already fielded")]
    DuplicateId(EntityId),
}

impl CoreError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SideFull { .. } => "ROSTER_SIDE_FULL",
            Self::DuplicateId(_) => "ROSTER_DUPLICATE_ID",
        }
    }
}

/// All participants of a combat, grouped by side.
///
/// Actors are never removed mid-combat; a defeated actor stays in its side's
/// list with zero health and is skipped by target selection and turn order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    players: SideRoster,
    monsters: SideRoster,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields an actor on the given side. Ids must be unique across both
    /// sides.
    pub fn add(&mut self, side: Side, actor: impl Into<Actor>) -> Result<(), RosterError> {
        let actor = actor.into();
        if self.actor(actor.id()).is_some() {
            return Err(RosterError::DuplicateId(actor.id()));
        }
        let members = self.members_mut(side);
        members.try_push(actor).map_err(|_| RosterError::SideFull {
            side,
            capacity: CombatConfig::MAX_SIDE_SIZE,
        })
    }

    /// All members of one side, defeated actors included.
    pub fn members(&self, side: Side) -> &[Actor] {
        match side {
            Side::Players => &self.players,
            Side::Monsters => &self.monsters,
        }
    }

    fn members_mut(&mut self, side: Side) -> &mut SideRoster {
        match side {
            Side::Players => &mut self.players,
            Side::Monsters => &mut self.monsters,
        }
    }

    /// Looks up an actor by id on either side.
    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.players
            .iter()
            .chain(self.monsters.iter())
            .find(|actor| actor.id() == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.players
            .iter_mut()
            .chain(self.monsters.iter_mut())
            .find(|actor| actor.id() == id)
    }

    /// Which side an actor is fielded on.
    pub fn side_of(&self, id: EntityId) -> Option<Side> {
        if self.players.iter().any(|actor| actor.id() == id) {
            Some(Side::Players)
        } else if self.monsters.iter().any(|actor| actor.id() == id) {
            Some(Side::Monsters)
        } else {
            None
        }
    }

    /// Living members of one side.
    pub fn living(&self, side: Side) -> impl Iterator<Item = &Actor> {
        self.members(side).iter().filter(|actor| actor.is_alive())
    }

    pub fn living_count(&self, side: Side) -> usize {
        self.living(side).count()
    }

    /// True once a side has no targetable members left.
    pub fn is_defeated(&self, side: Side) -> bool {
        self.living_count(side) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MonsterState, PlayerState};
    use crate::stats::StatBlock;

    fn roster() -> Roster {
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
                MonsterState::new(EntityId(1), "Gnarl", StatBlock::new(6, 4), 12),
            )
            .unwrap();
        roster
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut roster = roster();
        let err = roster
            .add(
                Side::Monsters,
                MonsterState::new(EntityId(0), "Imposter", StatBlock::default(), 5),
            )
            .unwrap_err();
        assert_eq!(err, RosterError::DuplicateId(EntityId(0)));
    }

    #[test]
    fn defeat_tracks_living_members_only() {
        use crate::targetable::Targetable;

        let mut roster = roster();
        assert!(!roster.is_defeated(Side::Monsters));
        roster.actor_mut(EntityId(1)).unwrap().apply_damage(u32::MAX);
        assert!(roster.is_defeated(Side::Monsters));
        // Soft defeat: the actor stays in the roster.
        assert_eq!(roster.members(Side::Monsters).len(), 1);
    }
}
