//! Equip, unequip, and use-consumable transitions over the ordered inventory
//! and the three equipment slots.

use crate::game_state::GameState;
use crate::items::{EquipSlot, Item, ItemCategory};
use crate::planet::{apply_consumable_effect, PickupEffect};
use thiserror::Error;

/// A rejected inventory operation. The state is untouched; callers treat
/// these as no-ops, not failures worth propagating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("no item at inventory index {0}")]
    NoSuchItem(usize),
    #[error("{0} is a consumable and cannot be equipped")]
    NotEquippable(String),
    #[error("{0} is not a consumable")]
    NotConsumable(String),
    #[error("the {0:?} slot is empty")]
    SlotEmpty(EquipSlot),
}

/// What to do with the previous occupant of a slot when equipping over it.
///
/// `DiscardReplaced` silently drops it (the item vanishes from both inventory
/// and equipment); `ReturnReplacedToInventory` hands it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EquipPolicy {
    #[default]
    DiscardReplaced,
    ReturnReplacedToInventory,
}

/// Moves the item at `index` into its matching equipment slot.
/// Returns the equipped item's name for display.
pub fn equip(
    state: &mut GameState,
    index: usize,
    policy: EquipPolicy,
) -> Result<String, InventoryError> {
    let item = state
        .inventory
        .get(index)
        .ok_or(InventoryError::NoSuchItem(index))?;
    let slot = EquipSlot::for_category(item.category)
        .ok_or_else(|| InventoryError::NotEquippable(item.name.clone()))?;

    let item = state.inventory.remove(index);
    let name = item.name.clone();
    let replaced = state.equipment.replace(slot, item);
    if let Some(prior) = replaced {
        match policy {
            EquipPolicy::DiscardReplaced => {
                tracing::debug!(item = %prior.name, "replaced equipment discarded")
            }
            EquipPolicy::ReturnReplacedToInventory => state.inventory.push(prior),
        }
    }
    Ok(name)
}

/// Moves the occupant of `slot` back to the end of the inventory.
pub fn unequip(state: &mut GameState, slot: EquipSlot) -> Result<String, InventoryError> {
    let item = state
        .equipment
        .take(slot)
        .ok_or(InventoryError::SlotEmpty(slot))?;
    let name = item.name.clone();
    state.inventory.push(item);
    Ok(name)
}

/// Consumes the item at `index`, applying its by-name effect.
pub fn use_consumable(
    state: &mut GameState,
    index: usize,
) -> Result<(String, PickupEffect), InventoryError> {
    let item = state
        .inventory
        .get(index)
        .ok_or(InventoryError::NoSuchItem(index))?;
    if item.category != ItemCategory::Consumable {
        return Err(InventoryError::NotConsumable(item.name.clone()));
    }

    let item: Item = state.inventory.remove(index);
    let effect = apply_consumable_effect(state, &item);
    Ok((item.name, effect))
}

/// Clamps a selection cursor after a removal. `None` once the inventory is
/// empty.
pub fn clamp_selection(inventory_len: usize, selected: usize) -> Option<usize> {
    if inventory_len == 0 {
        None
    } else {
        Some(selected.min(inventory_len - 1))
    }
}
