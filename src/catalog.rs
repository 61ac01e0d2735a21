//! Static table of every purchasable or collectible item definition.

use crate::items::{Item, ItemCategory, Rgb};

// Consumables are matched by name when their effect is applied.
pub const HEALTH_PACK: &str = "Health Pack";
pub const GOLD_ORE: &str = "Gold Ore";
pub const ENERGY_CELL: &str = "Energy Cell";

/// An immutable catalog definition. Acquisition copies this into an owned
/// [`Item`] snapshot via [`CatalogEntry::to_item`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub category: ItemCategory,
    pub name: &'static str,
    pub price: u32,
    pub color: Rgb,
    pub attribute: i32,
}

impl CatalogEntry {
    pub fn to_item(&self) -> Item {
        Item {
            category: self.category,
            name: self.name.to_string(),
            price: self.price,
            color: self.color,
            attribute: self.attribute,
        }
    }
}

const fn entry(
    category: ItemCategory,
    name: &'static str,
    price: u32,
    color: Rgb,
    attribute: i32,
) -> CatalogEntry {
    CatalogEntry {
        category,
        name,
        price,
        color,
        attribute,
    }
}

pub const CATALOG: [CatalogEntry; 12] = [
    entry(ItemCategory::Weapon, "Laser Cannon", 50, Rgb(255, 100, 100), 15),
    entry(ItemCategory::Weapon, "Plasma Gun", 100, Rgb(100, 255, 100), 25),
    entry(ItemCategory::Weapon, "Ion Blaster", 200, Rgb(100, 100, 255), 40),
    entry(ItemCategory::Shield, "Basic Shield", 75, Rgb(200, 200, 100), 50),
    entry(ItemCategory::Shield, "Energy Shield", 150, Rgb(100, 200, 200), 100),
    entry(ItemCategory::Shield, "Quantum Shield", 300, Rgb(200, 100, 200), 200),
    entry(ItemCategory::Engine, "Boost Engine", 60, Rgb(255, 200, 100), 50),
    entry(ItemCategory::Engine, "Warp Drive", 120, Rgb(200, 255, 100), 100),
    entry(ItemCategory::Engine, "Quantum Drive", 250, Rgb(100, 255, 200), 200),
    entry(ItemCategory::Consumable, HEALTH_PACK, 25, Rgb(255, 100, 255), 50),
    entry(ItemCategory::Consumable, GOLD_ORE, 0, Rgb(255, 215, 0), 50),
    entry(ItemCategory::Consumable, ENERGY_CELL, 30, Rgb(0, 255, 255), 100),
];

/// All catalog entries of the given category, in listing order.
pub fn entries_in(category: ItemCategory) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |e| e.category == category)
}

pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.name == name)
}
