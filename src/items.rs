use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Shield,
    Engine,
    Consumable,
}

impl ItemCategory {
    pub fn all() -> [ItemCategory; 4] {
        [
            ItemCategory::Weapon,
            ItemCategory::Shield,
            ItemCategory::Engine,
            ItemCategory::Consumable,
        ]
    }

    /// Returns the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Weapon => "weapon",
            ItemCategory::Shield => "shield",
            ItemCategory::Engine => "engine",
            ItemCategory::Consumable => "consumable",
        }
    }
}

/// One of the three ship hardpoints. Consumables have no slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Shield,
    Engine,
}

impl EquipSlot {
    pub fn all() -> [EquipSlot; 3] {
        [EquipSlot::Weapon, EquipSlot::Shield, EquipSlot::Engine]
    }

    /// The slot an item of the given category occupies, if any.
    pub fn for_category(category: ItemCategory) -> Option<EquipSlot> {
        match category {
            ItemCategory::Weapon => Some(EquipSlot::Weapon),
            ItemCategory::Shield => Some(EquipSlot::Shield),
            ItemCategory::Engine => Some(EquipSlot::Engine),
            ItemCategory::Consumable => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "weapon",
            EquipSlot::Shield => "shield",
            EquipSlot::Engine => "engine",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A player-held item. Acquiring an item copies the catalog definition into
/// an owned snapshot; later catalog changes never affect held items.
///
/// `attribute` is damage for weapons, a max-health bonus for shields, a speed
/// bonus for engines, and the heal/gold/energy amount for consumables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub category: ItemCategory,
    pub name: String,
    pub price: u32,
    pub color: Rgb,
    pub attribute: i32,
}
