//! Action commands submitted to the combat engine.

use crate::state::{AbilityId, EntityId};

/// The kinds of action an actor can take on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Basic attack with whatever is equipped.
    Attack { target: EntityId },

    /// Activate a learned ability. Player-only.
    UseAbility {
        ability: AbilityId,
        target: EntityId,
    },
}

impl ActionKind {
    /// The entity this action is aimed at.
    pub fn target(&self) -> EntityId {
        match self {
            Self::Attack { target } => *target,
            Self::UseAbility { target, .. } => *target,
        }
    }

    /// Returns the snake_case name of the action, for logging and events.
    pub const fn as_snake_case(&self) -> &'static str {
        match self {
            Self::Attack { .. } => "attack",
            Self::UseAbility { .. } => "use_ability",
        }
    }
}

/// A complete submission: who acts, and what they do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCommand {
    pub actor: EntityId,
    pub kind: ActionKind,
}

impl ActionCommand {
    pub fn new(actor: EntityId, kind: ActionKind) -> Self {
        Self { actor, kind }
    }

    pub fn attack(actor: EntityId, target: EntityId) -> Self {
        Self::new(actor, ActionKind::Attack { target })
    }

    pub fn use_ability(actor: EntityId, ability: AbilityId, target: EntityId) -> Self {
        Self::new(actor, ActionKind::UseAbility { ability, target })
    }
}
