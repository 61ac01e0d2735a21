//! The session: one shared [`GameState`] driven scene by scene through
//! explicit events.
//!
//! Everything routes through [`Session::handle_event`], which runs to
//! completion before the next event (single-threaded, cooperative). Hosts on
//! other threading models must serialize access themselves.

use crate::catalog::CATALOG;
use crate::combat::{
    resolve_bullet_enemy_hit, resolve_enemy_bullet_player_hit, resolve_enemy_player_collision,
    CombatOutcome,
};
use crate::constants::*;
use crate::entities::{Battlefield, Vec2};
use crate::events::{CollisionEvent, Direction, Effect, GameEvent, Input, Scene};
use crate::game_state::GameState;
use crate::inventory::{self, clamp_selection, EquipPolicy};
use crate::planet::generate_planet_items;
use crate::shop;
use crate::stats::{apply_shield_overcharge, compute_effective_stats, EffectiveStats};
use crate::wave::{spawn_wave, tick_wave, WaveEvent, WavePhase, WaveState};
use rand::Rng;

pub struct Session {
    state: GameState,
    scene: Scene,
    wave: WaveState,
    field: Battlefield,
    /// Stat snapshot taken on combat entry; recomputed only there.
    stats: EffectiveStats,
    fire_cooldown: f64,
    explore_pos: Vec2,
    selected: usize,
    equip_policy: EquipPolicy,
    /// Where Inventory/ShipScreen return to on close.
    return_scene: Scene,
    last_dt: f64,
}

impl Session {
    pub fn new() -> Self {
        Self::with_policy(EquipPolicy::default())
    }

    pub fn with_policy(equip_policy: EquipPolicy) -> Self {
        let state = GameState::new();
        let stats = compute_effective_stats(&state);
        Self {
            state,
            scene: Scene::Menu,
            wave: WaveState::new(),
            field: Battlefield::new(),
            stats,
            fire_cooldown: 0.0,
            explore_pos: Vec2::new(100.0, 100.0),
            selected: 0,
            equip_policy,
            return_scene: Scene::Menu,
            last_dt: 0.0,
        }
    }

    /// Replaces the in-memory state wholesale with a loaded one and heads
    /// into combat. The caller owns the load itself (and the "no save
    /// found" warning on [`crate::save_manager::SaveError::NotFound`]).
    pub fn resume(&mut self, state: GameState) -> Vec<Effect> {
        tracing::info!(wave = state.wave, "session resumed from save");
        self.state = state;
        self.selected = 0;
        self.enter_combat()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn wave_state(&self) -> &WaveState {
        &self.wave
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.field
    }

    pub fn player_position(&self) -> Vec2 {
        match self.scene {
            Scene::Exploration => self.explore_pos,
            _ => self.field.player_pos,
        }
    }

    /// Selection cursor into the inventory, or `None` when it is empty.
    pub fn selected_index(&self) -> Option<usize> {
        clamp_selection(self.state.inventory.len(), self.selected)
    }

    /// Stats as currently derivable from equipment; the ship screen renders
    /// from this.
    pub fn current_stats(&self) -> EffectiveStats {
        compute_effective_stats(&self.state)
    }

    // Derived display values for the host to render.

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.state.score)
    }

    pub fn gold_text(&self) -> String {
        format!("Gold: {}", self.state.gold)
    }

    pub fn wave_text(&self) -> String {
        format!("Wave: {}", self.state.wave)
    }

    pub fn health_fraction(&self) -> f64 {
        let max = self.current_stats().max_health.max(1);
        (self.state.player_health as f64 / max as f64).clamp(0.0, 1.0)
    }

    /// Dispatches one event with ambient randomness.
    pub fn handle_event(&mut self, event: GameEvent) -> Vec<Effect> {
        self.handle_event_with(event, &mut rand::thread_rng())
    }

    /// Dispatches one event with caller-supplied randomness, for
    /// deterministic hosts and tests.
    pub fn handle_event_with(&mut self, event: GameEvent, rng: &mut impl Rng) -> Vec<Effect> {
        match event {
            GameEvent::Tick { dt } => self.tick(dt, rng),
            GameEvent::Input(input) => self.handle_input(input, rng),
            GameEvent::Collision(collision) => self.handle_collision(collision),
        }
    }

    fn tick(&mut self, dt: f64, rng: &mut impl Rng) -> Vec<Effect> {
        self.last_dt = dt;
        if self.scene != Scene::Combat {
            return Vec::new();
        }

        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        if self.wave.phase == WavePhase::Spawning {
            spawn_wave(&self.state, &mut self.wave, &mut self.field, rng);
        }

        let mut effects = Vec::new();
        for event in tick_wave(&mut self.state, &mut self.wave, &mut self.field, dt, rng) {
            match event {
                WaveEvent::WaveCleared => {
                    effects.push(Effect::Notice(
                        "Wave Complete! Proceeding to planet...".to_string(),
                    ));
                }
                WaveEvent::WaveComplete { shop, .. } => {
                    effects.push(Effect::SaveRequested);
                    if shop {
                        self.scene = Scene::Shop;
                        effects.push(Effect::SceneChanged(Scene::Shop));
                    } else {
                        self.state.planet_items = generate_planet_items(rng);
                        self.explore_pos = Vec2::new(100.0, 100.0);
                        self.scene = Scene::Exploration;
                        effects.push(Effect::SceneChanged(Scene::Exploration));
                    }
                }
                WaveEvent::EnemyEscaped { .. } | WaveEvent::EnemyFired { .. } => {}
            }
        }
        effects
    }

    fn handle_input(&mut self, input: Input, _rng: &mut impl Rng) -> Vec<Effect> {
        match (self.scene, input) {
            (Scene::Menu | Scene::GameOver, Input::NewGame) => {
                self.state = GameState::new();
                self.selected = 0;
                self.enter_combat()
            }

            (Scene::Combat, Input::Move(direction)) => {
                let step = self.stats.speed * self.last_dt;
                self.field.player_pos = displace(
                    self.field.player_pos,
                    direction,
                    step,
                    PLAYER_EDGE_MARGIN,
                );
                Vec::new()
            }
            (Scene::Combat, Input::Fire) => {
                if self.fire_cooldown <= 0.0 {
                    let muzzle =
                        Vec2::new(self.field.player_pos.x, self.field.player_pos.y - 20.0);
                    self.field.add_bullet(muzzle, self.stats.damage);
                    self.fire_cooldown = self.stats.fire_rate;
                }
                Vec::new()
            }
            (Scene::Combat, Input::Pause) => self.change_scene(Scene::Paused),

            (Scene::Paused, Input::Pause | Input::CloseScreen) => self.change_scene(Scene::Combat),
            (Scene::Paused, Input::SaveAndQuit) => {
                self.scene = Scene::Menu;
                vec![Effect::SaveRequested, Effect::SceneChanged(Scene::Menu)]
            }

            (Scene::Exploration, Input::Move(direction)) => {
                let step = EXPLORE_SPEED * self.last_dt;
                self.explore_pos =
                    displace(self.explore_pos, direction, step, EXPLORE_EDGE_MARGIN);
                Vec::new()
            }
            (Scene::Exploration, Input::ReturnToShip) => {
                let mut effects = vec![Effect::SaveRequested];
                effects.extend(self.enter_combat());
                effects
            }

            (Scene::Shop, Input::Buy(index)) => self.buy(index),
            (Scene::Shop, Input::Checkout) => {
                let mut effects = vec![Effect::SaveRequested];
                effects.extend(self.enter_combat());
                effects
            }

            (Scene::Exploration | Scene::Shop | Scene::Paused, Input::OpenInventory) => {
                self.open_screen(Scene::Inventory)
            }
            (Scene::Exploration | Scene::Shop | Scene::Paused, Input::OpenShipScreen) => {
                self.open_screen(Scene::ShipScreen)
            }

            (Scene::Inventory, Input::SelectUp) => {
                self.selected = self.selected.saturating_sub(1);
                Vec::new()
            }
            (Scene::Inventory, Input::SelectDown) => {
                if let Some(selected) = clamp_selection(self.state.inventory.len(), self.selected + 1)
                {
                    self.selected = selected;
                }
                Vec::new()
            }
            (Scene::Inventory, Input::Equip) => self.equip_selected(),
            (Scene::Inventory, Input::UseItem) => self.use_selected(),
            (Scene::Inventory, Input::CloseScreen) => self.change_scene(self.return_scene),

            (Scene::ShipScreen, Input::Unequip(slot)) => {
                match inventory::unequip(&mut self.state, slot) {
                    Ok(name) => vec![Effect::Notice(format!("Removed: {name}"))],
                    Err(error) => {
                        tracing::debug!(%error, "unequip rejected");
                        Vec::new()
                    }
                }
            }
            (Scene::ShipScreen, Input::CloseScreen) => self.change_scene(self.return_scene),

            // Everything else is meaningless in the current scene.
            _ => Vec::new(),
        }
    }

    fn handle_collision(&mut self, collision: CollisionEvent) -> Vec<Effect> {
        match (self.scene, collision) {
            (Scene::Combat, CollisionEvent::BulletEnemy { bullet, enemy }) => {
                let _ = resolve_bullet_enemy_hit(
                    &mut self.state,
                    &mut self.wave,
                    &mut self.field,
                    bullet,
                    enemy,
                );
                Vec::new()
            }
            (Scene::Combat, CollisionEvent::EnemyBulletPlayer { bullet }) => {
                match resolve_enemy_bullet_player_hit(&mut self.state, &mut self.field, bullet) {
                    Some(CombatOutcome::PlayerDestroyed) => self.game_over(),
                    _ => Vec::new(),
                }
            }
            (Scene::Combat, CollisionEvent::EnemyPlayer { enemy }) => {
                match resolve_enemy_player_collision(&mut self.state, &mut self.field, enemy) {
                    Some(CombatOutcome::PlayerDestroyed) => self.game_over(),
                    _ => Vec::new(),
                }
            }
            (Scene::Exploration, CollisionEvent::PlayerItem { index }) => {
                match crate::planet::collect_item(&mut self.state, index) {
                    Some((item, _)) => vec![Effect::Notice(format!("Found: {}", item.name))],
                    None => Vec::new(),
                }
            }
            // Stale events from a scene already left.
            _ => Vec::new(),
        }
    }

    /// Combat entry point: stat snapshot, one overcharge application, fresh
    /// battlefield, wave in `Spawning`.
    fn enter_combat(&mut self) -> Vec<Effect> {
        self.stats = compute_effective_stats(&self.state);
        let healed = apply_shield_overcharge(&mut self.state);
        if healed > 0 {
            tracing::info!(healed, "shield overcharge");
        }
        self.field = Battlefield::new();
        self.wave = WaveState::new();
        self.fire_cooldown = 0.0;
        self.scene = Scene::Combat;
        vec![Effect::SceneChanged(Scene::Combat)]
    }

    fn change_scene(&mut self, scene: Scene) -> Vec<Effect> {
        self.scene = scene;
        vec![Effect::SceneChanged(scene)]
    }

    fn open_screen(&mut self, screen: Scene) -> Vec<Effect> {
        self.return_scene = self.scene;
        self.change_scene(screen)
    }

    fn buy(&mut self, index: usize) -> Vec<Effect> {
        let Some(entry) = CATALOG.get(index) else {
            return Vec::new();
        };
        match shop::purchase(&mut self.state, entry) {
            Ok(()) => vec![Effect::Notice(format!("Bought: {}", entry.name))],
            Err(error) => {
                tracing::debug!(%error, "purchase rejected");
                vec![Effect::Notice("Not enough gold!".to_string())]
            }
        }
    }

    fn equip_selected(&mut self) -> Vec<Effect> {
        let Some(selected) = self.selected_index() else {
            return Vec::new();
        };
        match inventory::equip(&mut self.state, selected, self.equip_policy) {
            Ok(name) => {
                self.selected = clamp_selection(self.state.inventory.len(), self.selected)
                    .unwrap_or(0);
                vec![Effect::Notice(format!("Equipped: {name}"))]
            }
            Err(error) => {
                tracing::debug!(%error, "equip rejected");
                Vec::new()
            }
        }
    }

    fn use_selected(&mut self) -> Vec<Effect> {
        let Some(selected) = self.selected_index() else {
            return Vec::new();
        };
        match inventory::use_consumable(&mut self.state, selected) {
            Ok((name, _)) => {
                self.selected = clamp_selection(self.state.inventory.len(), self.selected)
                    .unwrap_or(0);
                vec![Effect::Notice(format!("Used: {name}"))]
            }
            Err(error) => {
                tracing::debug!(%error, "use rejected");
                Vec::new()
            }
        }
    }

    fn game_over(&mut self) -> Vec<Effect> {
        let score = self.state.score;
        let waves_survived = self.state.wave.saturating_sub(1);
        tracing::info!(score, waves_survived, "game over");
        self.scene = Scene::GameOver;
        vec![
            Effect::GameOver {
                score,
                waves_survived,
            },
            Effect::SceneChanged(Scene::GameOver),
        ]
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn displace(position: Vec2, direction: Direction, step: f64, margin: f64) -> Vec2 {
    let mut next = position;
    match direction {
        Direction::Left => next.x -= step,
        Direction::Right => next.x += step,
        Direction::Up => next.y -= step,
        Direction::Down => next.y += step,
    }
    next.x = next.x.clamp(margin, PLAY_WIDTH - margin);
    next.y = next.y.clamp(margin, PLAY_HEIGHT - margin);
    next
}
