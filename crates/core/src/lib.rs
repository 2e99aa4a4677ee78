//! Deterministic combat resolution core.
//!
//! `skirmish-core` defines the canonical combat rules (actors, equipment
//! resolution, abilities, the turn protocol) and exposes pure APIs with no
//! I/O. All combat-state mutation flows through [`engine::CombatEngine`];
//! the runtime crate layers decision providers, repositories, and event
//! plumbing on top of the types re-exported here.

pub mod ability;
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;
pub mod targetable;

pub use ability::{
    AbilityBook, AbilityDefinition, AbilityEffect, AbilityOracle, AbilityOutcome,
};
pub use action::{ActionCommand, ActionKind};
pub use combat::{ActionReport, TurnReport, calculate_damage};
pub use config::CombatConfig;
pub use engine::{CombatEngine, CombatError};
pub use env::{
    ArmorData, CombatEnv, ItemCatalog, ItemCategory, ItemDefinition, ItemKind, WeaponData,
};
pub use error::{CoreError, ErrorSeverity};
pub use state::{
    AbilitiesFull, AbilityId, Actor, CombatOutcome, CombatPhase, CombatState, EntityId,
    EquipError, Equipment, EquipmentBuilder, ItemHandle, MonsterState, PlayerState,
    ResourceMeter, Roster, RosterError, SetupError, Side, TurnError, TurnState,
};
pub use stats::{ResolveError, StatBlock, effective_stats};
pub use targetable::Targetable;
