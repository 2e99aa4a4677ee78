//! Equipment resolver - composes base stats with equipped modifiers.

use crate::env::{ItemCatalog, ItemCategory, ItemKind};
use crate::error::{CoreError, ErrorSeverity};
use crate::state::{Equipment, ItemHandle};

use super::StatBlock;

/// Errors surfaced while resolving effective stats.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolveError {
    /// An equipped handle has no definition in the catalog.
    ///
    /// An *empty* slot is a zero modifier, never an error; a handle the
    /// catalog cannot resolve means the equipment association is corrupt.
    #[error("equipped item {0} has no catalog definition")]
    UnknownItem(ItemHandle),

    /// An equipped handle resolves to an item of the wrong category.
    #[error("item {handle} in {slot} slot is a {actual}")]
    CategoryMismatch {
        handle: ItemHandle,
        slot: ItemCategory,
        actual: ItemCategory,
    },
}

impl CoreError for ResolveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem(_) => "RESOLVE_UNKNOWN_ITEM",
            Self::CategoryMismatch { .. } => "RESOLVE_CATEGORY_MISMATCH",
        }
    }
}

/// Computes effective stats: base stats plus the flat modifiers of whatever
/// is currently equipped.
///
/// Policy (stated, not inferred): bonuses are additive flat integers, an
/// absent weapon or armor slot contributes zero, and the result is the same
/// whichever slot is summed first. Pure function of the arguments - nothing
/// is cached across calls, since equipment can change between turns.
pub fn effective_stats(
    base: &StatBlock,
    equipment: &Equipment,
    catalog: &dyn ItemCatalog,
) -> Result<StatBlock, ResolveError> {
    let mut stats = *base;

    if let Some(handle) = equipment.weapon {
        match lookup(catalog, handle)? {
            ItemKind::Weapon(weapon) => stats.attack += weapon.attack,
            other => {
                return Err(ResolveError::CategoryMismatch {
                    handle,
                    slot: ItemCategory::Weapon,
                    actual: other.category(),
                });
            }
        }
    }

    if let Some(handle) = equipment.armor {
        match lookup(catalog, handle)? {
            ItemKind::Armor(armor) => stats.defense += armor.defense,
            other => {
                return Err(ResolveError::CategoryMismatch {
                    handle,
                    slot: ItemCategory::Armor,
                    actual: other.category(),
                });
            }
        }
    }

    Ok(stats)
}

fn lookup(catalog: &dyn ItemCatalog, handle: ItemHandle) -> Result<ItemKind, ResolveError> {
    catalog
        .definition(handle)
        .map(|definition| definition.kind)
        .ok_or(ResolveError::UnknownItem(handle))
}
