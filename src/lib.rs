//! Starfall - session-based arcade progression engine.
//!
//! The canonical game state, the rules that derive effective combat stats
//! from equipped gear, wave escalation and completion, combat-hit
//! resolution, inventory and shop transitions, and checksummed save files.
//! Rendering, input capture, and collision-shape detection belong to the
//! host; it feeds events into [`session::Session`] and renders from the
//! effects and accessors it gets back.

pub mod catalog;
pub mod combat;
pub mod constants;
pub mod entities;
pub mod equipment;
pub mod events;
pub mod game_state;
pub mod inventory;
pub mod items;
pub mod planet;
pub mod save_manager;
pub mod session;
pub mod shop;
pub mod stats;
pub mod wave;
