//! Turn outcome reports.

use crate::ability::AbilityOutcome;
use crate::state::{AbilityId, CombatOutcome, EntityId};

/// What a single resolved action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionReport {
    /// A basic attack landed.
    Attack {
        target: EntityId,
        damage: u32,
        /// The target's health after application.
        target_health: u32,
    },

    /// An ability was activated (including the defined no-op outcome).
    Ability {
        ability: AbilityId,
        target: EntityId,
        outcome: AbilityOutcome,
    },
}

/// Complete outcome of one turn's resolution pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Which action in the combat this was (0-based).
    pub turn: u64,

    /// The actor that acted.
    pub actor: EntityId,

    pub action: ActionReport,

    /// Set when this action ended the combat.
    pub ended: Option<CombatOutcome>,
}
