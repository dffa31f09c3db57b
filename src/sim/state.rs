//! Game session state and core simulation types
//!
//! Everything the simulation reads or writes during a tick lives in
//! `GameState`, which is threaded explicitly through every call.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Category, Color, Entity};
use super::pool::{PoolId, Pools, SlotRef};
use crate::consts::*;
use crate::tuning::Tuning;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first activation
    #[default]
    Title,
    /// Active gameplay
    Playing,
    /// Lives exhausted, waiting for activation to restart
    GameOver,
}

/// Fire-and-forget cues for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player shot accepted
    Shoot,
    /// Enemy destroyed or body collision
    Explosion,
    /// Non-lethal hit on an enemy, or the player hit by an enemy bullet
    Hit,
    /// Powerup collected
    Powerup,
    /// Enemy fired
    EnemyShoot,
}

/// Player spawn point
pub fn player_start() -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 60.0)
}

/// Player size
pub const PLAYER_SIZE: f32 = 24.0;
/// Player hit points (unused by gameplay, lives are tracked on the session)
pub const PLAYER_HEALTH: i32 = 100;

/// Complete game session (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving every random draw
    pub rng: Pcg32,
    /// Gameplay balance
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u64,
    /// Player lives, in [0, MAX_LIVES]
    pub lives: u8,
    /// Wave/difficulty counter (1-based)
    pub wave: u32,
    /// Background scroll offset (cosmetic)
    pub scroll: f32,
    /// Weapon level, in [1, MAX_WEAPON_LEVEL]
    pub weapon_level: u8,
    /// Logical clock (ms), advanced by TICK_MS every tick
    pub time_ms: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Time of the last enemy spawn (None = spawn gate open)
    pub last_spawn_ms: Option<u64>,
    /// Time of the last accepted shot (None = fire gate open)
    pub last_shot_ms: Option<u64>,
    /// Entity pools
    pub pools: Pools,
    /// Cues raised during the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session on the title screen with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning: tuning.sanitized(),
            phase: GamePhase::Title,
            score: 0,
            lives: START_LIVES,
            wave: 1,
            scroll: 0.0,
            weapon_level: 1,
            time_ms: 0,
            time_ticks: 0,
            last_spawn_ms: None,
            last_shot_ms: None,
            pools: Pools::new(),
            events: Vec::new(),
        };
        state.reset_session();
        state
    }

    /// Clear all pools, re-initialize the player and zero the counters.
    ///
    /// The clock and RNG keep running across runs.
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.wave = 1;
        self.scroll = 0.0;
        self.weapon_level = 1;
        self.last_spawn_ms = None;
        self.last_shot_ms = None;
        self.pools.clear();

        let player = Entity::new(
            Category::Player,
            player_start(),
            Vec2::ZERO,
            Vec2::splat(PLAYER_SIZE),
            PLAYER_HEALTH,
            Color::Cyan,
        )
        .stamped_at(self.time_ms);
        self.pools.spawn(player);
    }

    /// Reset and enter Playing
    pub fn start_run(&mut self) {
        self.reset_session();
        self.phase = GamePhase::Playing;
        log::info!("Run started (seed {}, t={}ms)", self.seed, self.time_ms);
    }

    /// Slot of the player entity
    pub fn player_slot() -> SlotRef {
        SlotRef {
            pool: PoolId::Player,
            index: 0,
        }
    }

    /// The player entity (always present after a reset)
    pub fn player(&self) -> Option<&Entity> {
        self.pools.get(Self::player_slot())
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.pools.get_mut(Self::player_slot())
    }

    /// Raise an audio cue for this tick
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Cues raised during the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Lose one life (saturating at zero)
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Gain one life, capped at MAX_LIVES
    pub fn gain_life(&mut self) {
        self.lives = (self.lives + 1).min(MAX_LIVES);
    }

    /// Raise weapon level, capped at MAX_WEAPON_LEVEL
    pub fn upgrade_weapon(&mut self) {
        self.weapon_level = (self.weapon_level + 1).min(MAX_WEAPON_LEVEL);
    }
}
