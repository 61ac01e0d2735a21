//! Transient combat entities. Unlike [`crate::game_state::GameState`] these
//! live only for the duration of one combat scene and are never persisted.
//!
//! Each variant carries only the fields it needs; collision resolution
//! dispatches on concrete types, never on string tags.

use crate::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Stable handle for a battlefield entity. Ids are never reused within a
/// combat scene, so stale collision events resolve to a harmless no-op.
pub type EntityId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Vec2,
    pub speed: f64,
    pub health: i32,
    pub fire_cooldown: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub id: EntityId,
    pub position: Vec2,
    /// The effective weapon damage at fire time. Informational: hit
    /// resolution applies a fixed one-point decrement regardless.
    pub damage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyBullet {
    pub id: EntityId,
    pub position: Vec2,
}

/// All live entities of the current combat scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Battlefield {
    next_id: EntityId,
    pub player_pos: Vec2,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
}

impl Battlefield {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            player_pos: Vec2::new(PLAY_WIDTH / 2.0, PLAY_HEIGHT - 100.0),
            enemies: Vec::new(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
        }
    }

    fn alloc_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_enemy(&mut self, position: Vec2, speed: f64, health: i32) -> EntityId {
        let id = self.alloc_id();
        self.enemies.push(Enemy {
            id,
            position,
            speed,
            health,
            fire_cooldown: 0.0,
        });
        id
    }

    pub fn add_bullet(&mut self, position: Vec2, damage: f64) -> EntityId {
        let id = self.alloc_id();
        self.bullets.push(Bullet {
            id,
            position,
            damage,
        });
        id
    }

    pub fn add_enemy_bullet(&mut self, position: Vec2) -> EntityId {
        let id = self.alloc_id();
        self.enemy_bullets.push(EnemyBullet { id, position });
        id
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    pub fn remove_enemy(&mut self, id: EntityId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(index))
    }

    pub fn remove_bullet(&mut self, id: EntityId) -> Option<Bullet> {
        let index = self.bullets.iter().position(|b| b.id == id)?;
        Some(self.bullets.remove(index))
    }

    pub fn remove_enemy_bullet(&mut self, id: EntityId) -> Option<EnemyBullet> {
        let index = self.enemy_bullets.iter().position(|b| b.id == id)?;
        Some(self.enemy_bullets.remove(index))
    }
}

impl Default for Battlefield {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_across_entity_kinds() {
        let mut field = Battlefield::new();
        let a = field.add_enemy(Vec2::new(0.0, 0.0), 50.0, 1);
        let b = field.add_bullet(Vec2::new(0.0, 0.0), 10.0);
        let c = field.add_enemy_bullet(Vec2::new(0.0, 0.0));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut field = Battlefield::new();
        let id = field.add_enemy(Vec2::new(0.0, 0.0), 50.0, 1);
        assert!(field.remove_enemy(id).is_some());
        assert!(field.remove_enemy(id).is_none());
    }
}
