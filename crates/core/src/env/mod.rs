//! Traits describing read-only content the engine resolves against.
//!
//! Item definitions and ability definitions are owned outside the combat
//! state: the state references them by handle/id and the engine looks them up
//! through these traits. [`CombatEnv`] bundles both lookups so the engine can
//! access everything it needs without hard coupling to concrete catalogs.

mod items;

pub use items::{ArmorData, ItemCatalog, ItemCategory, ItemDefinition, ItemKind, WeaponData};

use crate::ability::AbilityOracle;

/// Aggregates the read-only lookups required by action resolution.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    items: &'a dyn ItemCatalog,
    abilities: &'a dyn AbilityOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(items: &'a dyn ItemCatalog, abilities: &'a dyn AbilityOracle) -> Self {
        Self { items, abilities }
    }

    /// Returns the item catalog.
    pub fn items(&self) -> &'a dyn ItemCatalog {
        self.items
    }

    /// Returns the ability definition arena.
    pub fn abilities(&self) -> &'a dyn AbilityOracle {
        self.abilities
    }
}
