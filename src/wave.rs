//! Wave progression: spawn escalation, per-tick enemy behavior, and the
//! completion gate.

use crate::constants::*;
use crate::entities::{Battlefield, EntityId, Vec2};
use crate::game_state::GameState;
use rand::Rng;

/// `Spawning → InProgress → Clearing → Complete`; the session routes
/// `Complete` on to the shop or exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavePhase {
    Spawning,
    InProgress,
    /// Gate satisfied; the post-wave delay is running.
    Clearing,
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaveState {
    pub phase: WavePhase,
    pub enemy_count: u32,
    pub enemies_killed: u32,
    pub clear_timer: f64,
}

impl WaveState {
    pub fn new() -> Self {
        Self {
            phase: WavePhase::Spawning,
            enemy_count: 0,
            enemies_killed: 0,
            clear_timer: 0.0,
        }
    }
}

impl Default for WaveState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WaveEvent {
    /// Completion gate satisfied; the post-wave delay started.
    WaveCleared,
    /// Delay elapsed, wave counter advanced. `shop` routes every
    /// [`SHOP_WAVE_INTERVAL`]th wave to the shop instead of a planet.
    WaveComplete { next_wave: u32, shop: bool },
    EnemyEscaped { enemy: EntityId },
    EnemyFired { enemy: EntityId },
}

pub fn enemy_count_for(wave: u32) -> u32 {
    wave * WAVE_ENEMY_PER_WAVE + WAVE_ENEMY_BASE
}

pub fn enemy_health_for(wave: u32) -> i32 {
    (wave / 2 + 1) as i32
}

/// Instantiates the current wave's enemies above the play area, each with an
/// independently randomized descent speed, and resets the kill counters.
pub fn spawn_wave(
    state: &GameState,
    wave: &mut WaveState,
    field: &mut Battlefield,
    rng: &mut impl Rng,
) {
    let count = enemy_count_for(state.wave);
    let health = enemy_health_for(state.wave);
    for _ in 0..count {
        let position = Vec2::new(
            rng.gen_range(50.0..=PLAY_WIDTH - 50.0),
            rng.gen_range(-200.0..=-50.0),
        );
        let speed = rng.gen_range(ENEMY_SPEED_MIN..=ENEMY_SPEED_MAX);
        field.add_enemy(position, speed, health);
    }
    wave.enemy_count = count;
    wave.enemies_killed = 0;
    wave.clear_timer = 0.0;
    wave.phase = WavePhase::InProgress;
    tracing::info!(wave = state.wave, enemies = count, "wave spawned");
}

/// Advances one combat tick: entity movement, probabilistic enemy fire,
/// off-screen culling, the completion gate, and the post-wave delay.
///
/// An enemy that leaves the play area despawns without crediting a kill, so
/// a wave where any enemy escapes can never satisfy the gate
/// (`remaining == 0 && kills >= enemy_count`). Known gating defect, kept.
pub fn tick_wave(
    state: &mut GameState,
    wave: &mut WaveState,
    field: &mut Battlefield,
    dt: f64,
    rng: &mut impl Rng,
) -> Vec<WaveEvent> {
    let mut events = Vec::new();
    match wave.phase {
        WavePhase::Spawning | WavePhase::Complete => {}
        WavePhase::InProgress => {
            advance_bullets(field, dt);
            advance_enemies(field, dt, rng, &mut events);

            if field.enemies.is_empty() && wave.enemies_killed >= wave.enemy_count {
                wave.phase = WavePhase::Clearing;
                wave.clear_timer = 0.0;
                events.push(WaveEvent::WaveCleared);
            }
        }
        WavePhase::Clearing => {
            wave.clear_timer += dt;
            if wave.clear_timer >= WAVE_CLEAR_DELAY_SECONDS {
                // Read the wave counter now, not from anything captured when
                // the delay started.
                state.wave += 1;
                wave.phase = WavePhase::Complete;
                let next_wave = state.wave;
                tracing::info!(next_wave, "wave complete");
                events.push(WaveEvent::WaveComplete {
                    next_wave,
                    shop: next_wave % SHOP_WAVE_INTERVAL == 0,
                });
            }
        }
    }
    events
}

fn advance_bullets(field: &mut Battlefield, dt: f64) {
    for bullet in &mut field.bullets {
        bullet.position.y -= PLAYER_BULLET_SPEED * dt;
    }
    field.bullets.retain(|b| b.position.y >= 0.0);

    for bullet in &mut field.enemy_bullets {
        bullet.position.y += ENEMY_BULLET_SPEED * dt;
    }
    field.enemy_bullets.retain(|b| b.position.y <= PLAY_HEIGHT);
}

fn advance_enemies(
    field: &mut Battlefield,
    dt: f64,
    rng: &mut impl Rng,
    events: &mut Vec<WaveEvent>,
) {
    let mut fired = Vec::new();
    let mut escaped = Vec::new();

    for enemy in &mut field.enemies {
        enemy.position.y += enemy.speed * dt;
        enemy.fire_cooldown -= dt;

        if enemy.position.y > PLAY_HEIGHT + ENEMY_DESPAWN_MARGIN {
            escaped.push(enemy.id);
            continue;
        }

        if enemy.fire_cooldown <= 0.0 && rng.gen::<f64>() < ENEMY_FIRE_CHANCE {
            fired.push((
                enemy.id,
                Vec2::new(enemy.position.x, enemy.position.y + 10.0),
            ));
            enemy.fire_cooldown = ENEMY_FIRE_COOLDOWN_SECONDS;
        }
    }

    for id in escaped {
        field.remove_enemy(id);
        events.push(WaveEvent::EnemyEscaped { enemy: id });
    }
    for (id, position) in fired {
        field.add_enemy_bullet(position);
        events.push(WaveEvent::EnemyFired { enemy: id });
    }
}
