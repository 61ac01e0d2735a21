//! Derives effective combat and movement stats from base stats plus equipped
//! gear.

use crate::constants::*;
use crate::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveStats {
    pub speed: f64,
    pub damage: f64,
    pub fire_rate: f64,
    pub max_health: i32,
}

/// Pure derivation: base stats plus equipment bonuses.
///
/// Any equipped weapon also grants a flat fire-rate bonus (lower is faster),
/// floored at [`MIN_FIRE_RATE`]. Only one weapon slot exists, so bonuses
/// never stack.
pub fn compute_effective_stats(state: &GameState) -> EffectiveStats {
    let mut stats = EffectiveStats {
        speed: state.ship_speed,
        damage: state.damage,
        fire_rate: state.fire_rate,
        max_health: state.max_health,
    };

    if let Some(weapon) = &state.equipment.weapon {
        stats.damage += weapon.attribute as f64;
        stats.fire_rate = (state.fire_rate - WEAPON_FIRE_RATE_BONUS).max(MIN_FIRE_RATE);
    }
    if let Some(engine) = &state.equipment.engine {
        stats.speed += engine.attribute as f64;
    }
    if let Some(shield) = &state.equipment.shield {
        stats.max_health += shield.attribute;
    }

    stats
}

/// The one documented side effect of stat recomputation: if an equipped
/// shield raises max health above current health, heal the player by up to
/// [`OVERCHARGE_HEAL_CAP`]. Returns the amount healed.
///
/// Must be invoked explicitly, exactly once per recomputation (on entering
/// combat), never per frame.
pub fn apply_shield_overcharge(state: &mut GameState) -> i32 {
    if state.equipment.shield.is_none() {
        return 0;
    }
    let effective_max = compute_effective_stats(state).max_health;
    if state.player_health >= effective_max {
        return 0;
    }
    let heal = (effective_max - state.player_health).min(OVERCHARGE_HEAL_CAP);
    state.player_health += heal;
    heal
}
