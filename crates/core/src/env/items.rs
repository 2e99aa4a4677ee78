use crate::state::ItemHandle;

/// Read-only lookup into the equipment catalog.
///
/// The catalog owns item definitions; combat state only holds handles. The
/// resolver and equip validation consult this trait and never cache results,
/// since the catalog backing store may change between combats.
pub trait ItemCatalog: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;
}

/// Item definition with common fields and category-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (handle, display name)
/// - `kind` enum holds category-specific stat modifiers
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            handle,
            name: name.into(),
            kind,
        }
    }

    /// Convenience constructor for a weapon definition.
    pub fn weapon(handle: ItemHandle, name: impl Into<String>, attack: i32) -> Self {
        Self::new(handle, name, ItemKind::Weapon(WeaponData { attack }))
    }

    /// Convenience constructor for an armor definition.
    pub fn armor(handle: ItemHandle, name: impl Into<String>, defense: i32) -> Self {
        Self::new(handle, name, ItemKind::Armor(ArmorData { defense }))
    }
}

/// Equipment category, also naming the slot an item goes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    Weapon,
    Armor,
}

impl ItemCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item category with category-specific stat payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon(WeaponData),

    /// Equippable armor.
    Armor(ArmorData),
}

impl ItemKind {
    pub const fn category(&self) -> ItemCategory {
        match self {
            Self::Weapon(_) => ItemCategory::Weapon,
            Self::Armor(_) => ItemCategory::Armor,
        }
    }
}

/// Weapon-specific stat modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    /// Flat attack bonus granted while equipped.
    pub attack: i32,
}

/// Armor-specific stat modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    /// Flat defense bonus granted while equipped.
    pub defense: i32,
}
