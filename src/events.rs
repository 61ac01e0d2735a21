//! The contract with the excluded presentation layer.
//!
//! The host engine captures input, detects collisions, and drives frame
//! ticks; it feeds everything through [`GameEvent`] and renders from the
//! [`Effect`]s and accessors the session exposes. The core never draws.

use crate::entities::EntityId;
use crate::items::EquipSlot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Discrete input events. Which ones are meaningful depends on the current
/// [`Scene`]; the rest are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(Direction),
    Fire,
    Pause,
    SelectUp,
    SelectDown,
    Equip,
    UseItem,
    Unequip(EquipSlot),
    /// Buy the catalog entry at this index of [`crate::catalog::CATALOG`].
    Buy(usize),
    /// Leave the shop and head back into combat.
    Checkout,
    ReturnToShip,
    OpenInventory,
    OpenShipScreen,
    CloseScreen,
    NewGame,
    SaveAndQuit,
}

/// A collision the host's shape-detection layer observed. Entity ids may be
/// stale by the time the event arrives; resolution treats those as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    BulletEnemy { bullet: EntityId, enemy: EntityId },
    EnemyBulletPlayer { bullet: EntityId },
    EnemyPlayer { enemy: EntityId },
    /// Player walked over the planet item at this index.
    PlayerItem { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Tick { dt: f64 },
    Input(Input),
    Collision(CollisionEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    Menu,
    Combat,
    Exploration,
    Shop,
    Inventory,
    ShipScreen,
    Paused,
    GameOver,
}

/// Side effects the host must carry out. Pure declarations: the session
/// never touches the disk or the screen itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show a transient message.
    Notice(String),
    /// Persist the current state now. Emitted before the scene change it
    /// gates; the host must complete (or loudly fail) the save before
    /// feeding further events.
    SaveRequested,
    SceneChanged(Scene),
    /// Terminal transition. The session stays in [`Scene::GameOver`] until a
    /// `NewGame` input restarts it.
    GameOver { score: u32, waves_survived: u32 },
}
