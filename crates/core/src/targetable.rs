//! The minimal capability required to be the recipient of an attack or ability.
//!
//! All health mutation during combat funnels through this trait so that
//! damage and healing stay centralized and auditable. Abilities and attacks
//! never reach into an actor's internal fields directly.

/// Contract satisfied by any entity that can be chosen as a combat target.
pub trait Targetable {
    /// Current health of the entity.
    fn current_health(&self) -> u32;

    /// The entity's innate defense value.
    ///
    /// Equipment modifiers are layered on top by the equipment resolver;
    /// ability effects that resist through this method see bare defense only.
    fn defense(&self) -> i32;

    /// True iff the entity is eligible to be targeted.
    ///
    /// An entity at zero health is defeated and must be excluded from target
    /// selection; it stays in the roster (soft defeat, never removal).
    fn is_targetable(&self) -> bool {
        self.current_health() > 0
    }

    /// Applies damage, clamped so health never drops below zero.
    ///
    /// Returns the damage actually dealt. Reaching zero health transitions
    /// the entity to non-targetable.
    fn apply_damage(&mut self, amount: u32) -> u32;

    /// Applies healing, clamped at the entity's health maximum.
    ///
    /// Returns the amount actually restored.
    fn apply_healing(&mut self, amount: u32) -> u32;
}
