//! Combat stat types and the equipment resolver.
//!
//! Base stats are stored state; effective stats are never stored. They are
//! recomputed from base stats plus currently equipped modifiers at the moment
//! an action resolves, so an equip change between turns is always reflected.

mod resolver;

pub use resolver::{ResolveError, effective_stats};

/// Offensive/defensive stat pair.
///
/// Used both for an actor's stored base stats and for the effective stats the
/// resolver computes. Values are signed so penalties can be expressed; damage
/// calculation applies its own floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub attack: i32,
    pub defense: i32,
}

impl StatBlock {
    pub const fn new(attack: i32, defense: i32) -> Self {
        Self { attack, defense }
    }
}
