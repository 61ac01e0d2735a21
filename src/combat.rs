//! Collision-outcome resolution. The host's collision layer decides *that*
//! two entities overlapped; these functions decide what it means.
//!
//! Health mutations write straight into `GameState::player_health`, so a
//! save taken mid-combat reflects current health.

use crate::constants::*;
use crate::entities::{Battlefield, EntityId};
use crate::game_state::GameState;
use crate::wave::WaveState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    EnemyDamaged { enemy: EntityId, health_left: i32 },
    EnemyDestroyed { enemy: EntityId },
    PlayerHit { damage: i32 },
    /// Terminal: the session transitions to game over.
    PlayerDestroyed,
}

/// Player bullet hit an enemy. The bullet is consumed; the enemy loses one
/// point of health regardless of the bullet's carried damage value. A kill
/// credits the wave counter and awards score and gold.
///
/// Stale ids (either entity already gone) resolve to `None`.
pub fn resolve_bullet_enemy_hit(
    state: &mut GameState,
    wave: &mut WaveState,
    field: &mut Battlefield,
    bullet: EntityId,
    enemy: EntityId,
) -> Option<CombatOutcome> {
    field.remove_bullet(bullet)?;
    let hit = field.enemy_mut(enemy)?;
    hit.health -= 1;
    if hit.health > 0 {
        let health_left = hit.health;
        return Some(CombatOutcome::EnemyDamaged { enemy, health_left });
    }

    field.remove_enemy(enemy);
    wave.enemies_killed += 1;
    state.score += KILL_SCORE;
    state.gold += KILL_GOLD;
    Some(CombatOutcome::EnemyDestroyed { enemy })
}

/// Enemy bullet hit the player. The bullet is consumed.
pub fn resolve_enemy_bullet_player_hit(
    state: &mut GameState,
    field: &mut Battlefield,
    bullet: EntityId,
) -> Option<CombatOutcome> {
    field.remove_enemy_bullet(bullet)?;
    Some(damage_player(state, ENEMY_BULLET_DAMAGE))
}

/// Enemy rammed the player. The enemy is destroyed without crediting a kill.
pub fn resolve_enemy_player_collision(
    state: &mut GameState,
    field: &mut Battlefield,
    enemy: EntityId,
) -> Option<CombatOutcome> {
    field.remove_enemy(enemy)?;
    Some(damage_player(state, ENEMY_RAM_DAMAGE))
}

fn damage_player(state: &mut GameState, damage: i32) -> CombatOutcome {
    state.player_health = (state.player_health - damage).max(0);
    if state.player_health == 0 {
        CombatOutcome::PlayerDestroyed
    } else {
        CombatOutcome::PlayerHit { damage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Vec2;

    fn setup() -> (GameState, WaveState, Battlefield) {
        (GameState::new(), WaveState::new(), Battlefield::new())
    }

    #[test]
    fn test_two_point_enemy_takes_two_hits() {
        let (mut state, mut wave, mut field) = setup();
        let enemy = field.add_enemy(Vec2::new(100.0, 100.0), 60.0, 2);

        let b1 = field.add_bullet(Vec2::new(100.0, 100.0), 10.0);
        let outcome = resolve_bullet_enemy_hit(&mut state, &mut wave, &mut field, b1, enemy);
        assert_eq!(
            outcome,
            Some(CombatOutcome::EnemyDamaged {
                enemy,
                health_left: 1
            })
        );
        // No reward for a wound.
        assert_eq!(state.score, 0);
        assert_eq!(state.gold, 100);
        assert_eq!(wave.enemies_killed, 0);

        let b2 = field.add_bullet(Vec2::new(100.0, 100.0), 10.0);
        let outcome = resolve_bullet_enemy_hit(&mut state, &mut wave, &mut field, b2, enemy);
        assert_eq!(outcome, Some(CombatOutcome::EnemyDestroyed { enemy }));
        assert_eq!(state.score, 10);
        assert_eq!(state.gold, 105);
        assert_eq!(wave.enemies_killed, 1);
        assert!(field.enemies.is_empty());
    }

    #[test]
    fn test_bullet_damage_value_is_informational() {
        let (mut state, mut wave, mut field) = setup();
        let enemy = field.add_enemy(Vec2::new(100.0, 100.0), 60.0, 3);
        let bullet = field.add_bullet(Vec2::new(100.0, 100.0), 40.0);

        resolve_bullet_enemy_hit(&mut state, &mut wave, &mut field, bullet, enemy);
        assert_eq!(field.enemy_mut(enemy).unwrap().health, 2);
    }

    #[test]
    fn test_stale_collision_is_a_no_op() {
        let (mut state, mut wave, mut field) = setup();
        let enemy = field.add_enemy(Vec2::new(100.0, 100.0), 60.0, 1);
        let bullet = field.add_bullet(Vec2::new(100.0, 100.0), 10.0);
        let _ = field.remove_bullet(bullet);

        let outcome = resolve_bullet_enemy_hit(&mut state, &mut wave, &mut field, bullet, enemy);
        assert_eq!(outcome, None);
        assert_eq!(field.enemy_mut(enemy).unwrap().health, 1);
    }

    #[test]
    fn test_enemy_bullet_chips_ten_health() {
        let (mut state, _, mut field) = setup();
        let bullet = field.add_enemy_bullet(Vec2::new(400.0, 500.0));

        let outcome = resolve_enemy_bullet_player_hit(&mut state, &mut field, bullet);
        assert_eq!(outcome, Some(CombatOutcome::PlayerHit { damage: 10 }));
        assert_eq!(state.player_health, 90);
        assert!(field.enemy_bullets.is_empty());
    }

    #[test]
    fn test_ramming_enemy_is_destroyed_without_kill_credit() {
        let (mut state, mut wave, mut field) = setup();
        wave.enemy_count = 5;
        let enemy = field.add_enemy(Vec2::new(400.0, 500.0), 60.0, 1);

        let outcome = resolve_enemy_player_collision(&mut state, &mut field, enemy);
        assert_eq!(outcome, Some(CombatOutcome::PlayerHit { damage: 20 }));
        assert_eq!(state.player_health, 80);
        assert!(field.enemies.is_empty());
        assert_eq!(wave.enemies_killed, 0);
    }

    #[test]
    fn test_lethal_hit_is_terminal() {
        let (mut state, _, mut field) = setup();
        state.player_health = 10;
        let bullet = field.add_enemy_bullet(Vec2::new(400.0, 500.0));

        let outcome = resolve_enemy_bullet_player_hit(&mut state, &mut field, bullet);
        assert_eq!(outcome, Some(CombatOutcome::PlayerDestroyed));
        assert_eq!(state.player_health, 0);
    }
}
