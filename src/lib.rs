//! Space Striker - A fixed-tick top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, movement, collisions, game state)
//! - `platform`: Input/audio/render collaborator seams and the fixed tick gate
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical updates per second
    pub const GAME_FPS: u64 = 30;
    /// Fixed logical tick period in milliseconds (1000 / 30, truncated)
    pub const TICK_MS: u64 = 1000 / GAME_FPS;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 320.0;
    /// Strip at the bottom of the playfield reserved for the HUD
    pub const HUD_MARGIN: f32 = 20.0;

    /// Pool capacities (hard ceilings, spawns beyond these are dropped)
    pub const MAX_PLAYERS: usize = 1;
    pub const MAX_ENEMIES: usize = 20;
    pub const MAX_PLAYER_BULLETS: usize = 30;
    pub const MAX_ENEMY_BULLETS: usize = 40;
    pub const MAX_POWERUPS: usize = 5;
    pub const MAX_EXPLOSIONS: usize = 10;
    pub const MAX_PARTICLES: usize = 50;

    /// Session limits
    pub const START_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 5;
    pub const MAX_WEAPON_LEVEL: u8 = 3;
}
