//! Procedural planet loot and its collection.

use crate::catalog::{self, GOLD_ORE, HEALTH_PACK};
use crate::constants::*;
use crate::entities::Vec2;
use crate::game_state::GameState;
use crate::items::{Item, ItemCategory};
use crate::stats::compute_effective_stats;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A placed, uncollected piece of loot on the current planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetItem {
    pub item: Item,
    pub position: Vec2,
}

/// Stocks a planet for one exploration session: a uniform count of items in
/// [`PLANET_ITEM_MIN`], [`PLANET_ITEM_MAX`], each drawn independently
/// (category first, then name within the category), at a uniform position
/// within the exploration bounds. Duplicates are allowed.
pub fn generate_planet_items(rng: &mut impl Rng) -> Vec<PlanetItem> {
    let count = rng.gen_range(PLANET_ITEM_MIN..=PLANET_ITEM_MAX);
    (0..count).map(|_| random_planet_item(rng)).collect()
}

fn random_planet_item(rng: &mut impl Rng) -> PlanetItem {
    let categories = ItemCategory::all();
    let category = categories[rng.gen_range(0..categories.len())];
    let entries: Vec<_> = catalog::entries_in(category).collect();
    let entry = entries[rng.gen_range(0..entries.len())];
    PlanetItem {
        item: entry.to_item(),
        position: Vec2::new(
            rng.gen_range(PLANET_X_MIN..=PLANET_X_MAX),
            rng.gen_range(PLANET_Y_MIN..=PLANET_Y_MAX),
        ),
    }
}

/// Immediate effect of picking up a consumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupEffect {
    Healed(i32),
    GoldGained(u32),
    Stored,
}

/// Collects the planet item at `index`: the snapshot joins the inventory and
/// the placement is removed. Consumables additionally apply their effect on
/// the spot while still entering the inventory.
///
/// Returns `None` for a stale index (already collected).
pub fn collect_item(state: &mut GameState, index: usize) -> Option<(Item, PickupEffect)> {
    if index >= state.planet_items.len() {
        return None;
    }
    let placed = state.planet_items.remove(index);
    let item = placed.item;
    state.inventory.push(item.clone());

    let effect = if item.category == ItemCategory::Consumable {
        apply_consumable_effect(state, &item)
    } else {
        PickupEffect::Stored
    };
    Some((item, effect))
}

/// Applies a consumable's by-name effect. Unknown names have no defined
/// effect.
pub fn apply_consumable_effect(state: &mut GameState, item: &Item) -> PickupEffect {
    match item.name.as_str() {
        HEALTH_PACK => {
            let effective_max = compute_effective_stats(state).max_health;
            let before = state.player_health;
            state.player_health = (state.player_health + item.attribute).min(effective_max);
            PickupEffect::Healed(state.player_health - before)
        }
        GOLD_ORE => {
            let amount = item.attribute.max(0) as u32;
            state.gold += amount;
            PickupEffect::GoldGained(amount)
        }
        _ => PickupEffect::Stored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generated_count_is_within_bounds() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let items = generate_planet_items(&mut rng);
            assert!((PLANET_ITEM_MIN..=PLANET_ITEM_MAX).contains(&items.len()));
        }
    }

    #[test]
    fn test_positions_are_within_exploration_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for placed in generate_planet_items(&mut rng) {
            assert!((PLANET_X_MIN..=PLANET_X_MAX).contains(&placed.position.x));
            assert!((PLANET_Y_MIN..=PLANET_Y_MAX).contains(&placed.position.y));
        }
    }

    #[test]
    fn test_items_are_catalog_snapshots() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for placed in generate_planet_items(&mut rng) {
            let entry = catalog::find(&placed.item.name).unwrap();
            assert_eq!(placed.item, entry.to_item());
        }
    }

    #[test]
    fn test_collect_moves_item_to_inventory() {
        let mut state = GameState::new();
        let entry = catalog::find("Laser Cannon").unwrap();
        state.planet_items.push(PlanetItem {
            item: entry.to_item(),
            position: Vec2::new(200.0, 200.0),
        });

        let (item, effect) = collect_item(&mut state, 0).unwrap();
        assert_eq!(item.name, "Laser Cannon");
        assert_eq!(effect, PickupEffect::Stored);
        assert!(state.planet_items.is_empty());
        assert_eq!(state.inventory.len(), 1);
    }

    #[test]
    fn test_collect_consumable_applies_effect_and_keeps_item() {
        let mut state = GameState::new();
        state.player_health = 30;
        state.planet_items.push(PlanetItem {
            item: catalog::find(HEALTH_PACK).unwrap().to_item(),
            position: Vec2::new(200.0, 200.0),
        });

        let (_, effect) = collect_item(&mut state, 0).unwrap();
        assert_eq!(effect, PickupEffect::Healed(50));
        assert_eq!(state.player_health, 80);
        // The pack still lands in the inventory and can be used again later.
        assert_eq!(state.inventory.len(), 1);
    }

    #[test]
    fn test_collect_gold_ore_grants_gold() {
        let mut state = GameState::new();
        state.planet_items.push(PlanetItem {
            item: catalog::find(GOLD_ORE).unwrap().to_item(),
            position: Vec2::new(300.0, 300.0),
        });

        let (_, effect) = collect_item(&mut state, 0).unwrap();
        assert_eq!(effect, PickupEffect::GoldGained(50));
        assert_eq!(state.gold, 150);
    }

    #[test]
    fn test_stale_index_is_a_no_op() {
        let mut state = GameState::new();
        assert!(collect_item(&mut state, 0).is_none());
    }
}
