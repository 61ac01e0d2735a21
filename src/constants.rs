// Fresh-session defaults
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_HEALTH: i32 = 100;
pub const BASE_SHIP_SPEED: f64 = 200.0;
pub const BASE_FIRE_RATE: f64 = 0.3;
pub const BASE_DAMAGE: f64 = 10.0;

// Play area
pub const PLAY_WIDTH: f64 = 800.0;
pub const PLAY_HEIGHT: f64 = 600.0;
pub const PLAYER_EDGE_MARGIN: f64 = 20.0;
pub const ENEMY_DESPAWN_MARGIN: f64 = 50.0;

// Wave escalation
pub const WAVE_ENEMY_PER_WAVE: u32 = 3;
pub const WAVE_ENEMY_BASE: u32 = 2;
pub const ENEMY_SPEED_MIN: f64 = 50.0;
pub const ENEMY_SPEED_MAX: f64 = 100.0;
pub const WAVE_CLEAR_DELAY_SECONDS: f64 = 2.0;
pub const SHOP_WAVE_INTERVAL: u32 = 5;

// Combat
pub const PLAYER_BULLET_SPEED: f64 = 400.0;
pub const ENEMY_BULLET_SPEED: f64 = 200.0;
pub const ENEMY_FIRE_COOLDOWN_SECONDS: f64 = 2.0;
pub const ENEMY_FIRE_CHANCE: f64 = 0.01;
pub const ENEMY_BULLET_DAMAGE: i32 = 10;
pub const ENEMY_RAM_DAMAGE: i32 = 20;
pub const KILL_SCORE: u32 = 10;
pub const KILL_GOLD: u32 = 5;

// Equipment effects
pub const WEAPON_FIRE_RATE_BONUS: f64 = 0.05;
pub const MIN_FIRE_RATE: f64 = 0.1;
pub const OVERCHARGE_HEAL_CAP: i32 = 50;

// Exploration
pub const EXPLORE_SPEED: f64 = 150.0;
pub const EXPLORE_EDGE_MARGIN: f64 = 10.0;
pub const PLANET_ITEM_MIN: usize = 5;
pub const PLANET_ITEM_MAX: usize = 12;
pub const PLANET_X_MIN: f64 = 100.0;
pub const PLANET_X_MAX: f64 = 700.0;
pub const PLANET_Y_MIN: f64 = 100.0;
pub const PLANET_Y_MAX: f64 = 500.0;

// Save system
pub const SAVE_VERSION_MAGIC: u64 = 0x53544152464C4C31; // "STARFLL1" in hex
