use crate::items::{EquipSlot, Item};
use serde::{Deserialize, Serialize};

/// The three ship hardpoints. At most one item per slot; an equipped item is
/// never simultaneously present in the inventory.
///
/// Empty slots serialize as explicit `null`s so the persisted layout always
/// carries all three fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub shield: Option<Item>,
    pub engine: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            weapon: None,
            shield: None,
            engine: None,
        }
    }

    pub fn get(&self, slot: EquipSlot) -> &Option<Item> {
        match slot {
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Shield => &self.shield,
            EquipSlot::Engine => &self.engine,
        }
    }

    /// Places `item` in `slot` and returns the previous occupant.
    pub fn replace(&mut self, slot: EquipSlot, item: Item) -> Option<Item> {
        match slot {
            EquipSlot::Weapon => self.weapon.replace(item),
            EquipSlot::Shield => self.shield.replace(item),
            EquipSlot::Engine => self.engine.replace(item),
        }
    }

    /// Empties `slot`, returning what was there.
    pub fn take(&mut self, slot: EquipSlot) -> Option<Item> {
        match slot {
            EquipSlot::Weapon => self.weapon.take(),
            EquipSlot::Shield => self.shield.take(),
            EquipSlot::Engine => self.engine.take(),
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.shield, &self.engine]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemCategory, Rgb};

    fn test_item(category: ItemCategory, name: &str) -> Item {
        Item {
            category,
            name: name.to_string(),
            price: 50,
            color: Rgb(255, 255, 255),
            attribute: 10,
        }
    }

    #[test]
    fn test_equipment_starts_empty() {
        let eq = Equipment::new();
        assert!(eq.weapon.is_none());
        assert!(eq.shield.is_none());
        assert!(eq.engine.is_none());
        assert_eq!(eq.iter_equipped().count(), 0);
    }

    #[test]
    fn test_replace_returns_prior_occupant() {
        let mut eq = Equipment::new();
        let first = test_item(ItemCategory::Weapon, "Laser Cannon");
        let second = test_item(ItemCategory::Weapon, "Plasma Gun");

        assert_eq!(eq.replace(EquipSlot::Weapon, first.clone()), None);
        assert_eq!(eq.replace(EquipSlot::Weapon, second), Some(first));
    }

    #[test]
    fn test_take_empties_slot() {
        let mut eq = Equipment::new();
        let shield = test_item(ItemCategory::Shield, "Basic Shield");
        eq.replace(EquipSlot::Shield, shield.clone());

        assert_eq!(eq.take(EquipSlot::Shield), Some(shield));
        assert!(eq.shield.is_none());
        assert_eq!(eq.take(EquipSlot::Shield), None);
    }

    #[test]
    fn test_empty_slots_serialize_as_null() {
        let eq = Equipment::new();
        let json = serde_json::to_value(&eq).unwrap();
        assert!(json["weapon"].is_null());
        assert!(json["shield"].is_null());
        assert!(json["engine"].is_null());
    }
}
