use crate::constants::*;
use crate::equipment::Equipment;
use crate::items::Item;
use crate::planet::PlanetItem;
use serde::{Deserialize, Serialize};

/// The root aggregate: every piece of progress a session accumulates.
///
/// A single instance is shared by reference across all session phases and
/// mutated in place by the wave, combat, inventory, and shop logic. It is the
/// exact shape that gets persisted; base stats here are pre-equipment, with
/// effective stats derived on demand by [`crate::stats`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub wave: u32,
    pub score: u32,
    pub gold: u32,
    pub player_health: i32,
    pub max_health: i32,
    pub ship_speed: f64,
    pub fire_rate: f64,
    pub damage: f64,
    /// Order is meaningful: the selection cursor indexes into it.
    pub inventory: Vec<Item>,
    pub equipment: Equipment,
    /// Uncollected loot on the current planet.
    pub planet_items: Vec<PlanetItem>,
}

impl GameState {
    /// Fresh-session defaults, used on new game, restart after defeat, and as
    /// the fallback when no save exists.
    pub fn new() -> Self {
        Self {
            wave: 1,
            score: 0,
            gold: STARTING_GOLD,
            player_health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            ship_speed: BASE_SHIP_SPEED,
            fire_rate: BASE_FIRE_RATE,
            damage: BASE_DAMAGE,
            inventory: Vec::new(),
            equipment: Equipment::new(),
            planet_items: Vec::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_defaults() {
        let state = GameState::new();
        assert_eq!(state.wave, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.gold, 100);
        assert_eq!(state.player_health, 100);
        assert_eq!(state.max_health, 100);
        assert_eq!(state.ship_speed, 200.0);
        assert_eq!(state.fire_rate, 0.3);
        assert_eq!(state.damage, 10.0);
        assert!(state.inventory.is_empty());
        assert!(state.equipment.iter_equipped().next().is_none());
        assert!(state.planet_items.is_empty());
    }
}
