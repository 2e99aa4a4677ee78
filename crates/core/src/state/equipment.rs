//! Equipment slots for actors.
//!
//! An actor owns at most one weapon and one armor reference, each optional.
//! Slots store handles into the external item catalog; the actual item data
//! lives in the catalog and is referenced, never owned, here.

use crate::state::ItemHandle;

/// Slot-pair association for an actor's equipped items.
///
/// The raw mutators below do not validate item categories; use
/// [`Actor::equip_weapon`](crate::state::Actor::equip_weapon) and
/// [`Actor::equip_armor`](crate::state::Actor::equip_armor) to equip with
/// catalog-backed category checking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Currently equipped weapon (contributes an attack modifier).
    pub weapon: Option<ItemHandle>,

    /// Currently equipped armor (contributes a defense modifier).
    pub armor: Option<ItemHandle>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    /// Equips a weapon, returning the previously equipped weapon handle if any.
    pub fn equip_weapon(&mut self, handle: ItemHandle) -> Option<ItemHandle> {
        self.weapon.replace(handle)
    }

    /// Unequips the current weapon, returning its handle if any was equipped.
    pub fn unequip_weapon(&mut self) -> Option<ItemHandle> {
        self.weapon.take()
    }

    /// Equips armor, returning the previously equipped armor handle if any.
    pub fn equip_armor(&mut self, handle: ItemHandle) -> Option<ItemHandle> {
        self.armor.replace(handle)
    }

    /// Unequips the current armor, returning its handle if any was equipped.
    pub fn unequip_armor(&mut self) -> Option<ItemHandle> {
        self.armor.take()
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    weapon: Option<ItemHandle>,
    armor: Option<ItemHandle>,
}

impl EquipmentBuilder {
    /// Sets the weapon by item handle.
    pub fn weapon(mut self, handle: ItemHandle) -> Self {
        self.weapon = Some(handle);
        self
    }

    /// Sets the armor by item handle.
    pub fn armor(mut self, handle: ItemHandle) -> Self {
        self.armor = Some(handle);
        self
    }

    /// Builds the equipment.
    pub fn build(self) -> Equipment {
        Equipment {
            weapon: self.weapon,
            armor: self.armor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_returns_previous_handle() {
        let mut equipment = Equipment::empty();
        assert_eq!(equipment.equip_weapon(ItemHandle(1)), None);
        assert_eq!(equipment.equip_weapon(ItemHandle(2)), Some(ItemHandle(1)));
        assert_eq!(equipment.unequip_weapon(), Some(ItemHandle(2)));
        assert_eq!(equipment.unequip_weapon(), None);
    }
}
