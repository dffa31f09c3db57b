//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so it can be
//! overridden from a JSON file. Missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

/// Player movement and weapon tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Max speed in pixels per tick (input vector is scaled by this)
    pub speed: f32,
    /// Minimum time between accepted shots (ms, strictly exceeded)
    pub fire_cooldown_ms: u64,
    /// Player bullet speed (pixels per tick, upward)
    pub bullet_speed: f32,
    /// Horizontal offset of the side guns
    pub gun_offset: f32,
    /// Horizontal speed of the angled outer shots at weapon level 3
    pub spread_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            fire_cooldown_ms: 150,
            bullet_speed: 8.0,
            gun_offset: 8.0,
            spread_speed: 1.0,
        }
    }
}

/// Per-kind enemy stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub health: i32,
    pub speed: f32,
    pub size: f32,
}

impl EnemyStats {
    pub const BASIC: Self = Self {
        health: 10,
        speed: 1.5,
        size: 20.0,
    };
    pub const FAST: Self = Self {
        health: 5,
        speed: 3.0,
        size: 16.0,
    };
    pub const TANK: Self = Self {
        health: 30,
        speed: 0.8,
        size: 28.0,
    };
}

/// Per-kind override as written in a tuning file; absent fields keep the kind's stats
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnemyStatsOverride {
    health: Option<i32>,
    speed: Option<f32>,
    size: Option<f32>,
}

impl EnemyStatsOverride {
    fn over(self, base: EnemyStats) -> EnemyStats {
        EnemyStats {
            health: self.health.unwrap_or(base.health),
            speed: self.speed.unwrap_or(base.speed),
            size: self.size.unwrap_or(base.size),
        }
    }
}

fn basic_stats<'de, D: Deserializer<'de>>(d: D) -> Result<EnemyStats, D::Error> {
    EnemyStatsOverride::deserialize(d).map(|o| o.over(EnemyStats::BASIC))
}

fn fast_stats<'de, D: Deserializer<'de>>(d: D) -> Result<EnemyStats, D::Error> {
    EnemyStatsOverride::deserialize(d).map(|o| o.over(EnemyStats::FAST))
}

fn tank_stats<'de, D: Deserializer<'de>>(d: D) -> Result<EnemyStats, D::Error> {
    EnemyStatsOverride::deserialize(d).map(|o| o.over(EnemyStats::TANK))
}

/// Enemy behavior tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    #[serde(deserialize_with = "basic_stats")]
    pub basic: EnemyStats,
    #[serde(deserialize_with = "fast_stats")]
    pub fast: EnemyStats,
    #[serde(deserialize_with = "tank_stats")]
    pub tank: EnemyStats,
    /// Horizontal homing speed as a multiple of the enemy's vertical speed
    pub homing_factor: f32,
    /// Chance out of 100 that an enemy fires on a given tick
    pub fire_chance: u32,
    /// Enemy bullet speed (pixels per tick, downward)
    pub bullet_speed: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            basic: EnemyStats::BASIC,
            fast: EnemyStats::FAST,
            tank: EnemyStats::TANK,
            homing_factor: 1.5,
            fire_chance: 2,
            bullet_speed: 3.0,
        }
    }
}

/// Timed enemy spawn policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// Minimum time between enemy spawns (ms, strictly exceeded)
    pub interval_ms: u64,
    /// Rolls in [0, fast_threshold) spawn a basic enemy
    pub fast_threshold: u32,
    /// Rolls in [fast_threshold, tank_threshold) spawn a fast enemy, the rest tanks
    pub tank_threshold: u32,
    /// Horizontal margin kept clear on both sides when picking a spawn x
    pub edge_margin: f32,
    /// Spawn y (just above the top edge)
    pub spawn_y: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            interval_ms: 2000,
            fast_threshold: 70,
            tank_threshold: 90,
            edge_margin: 30.0,
            spawn_y: -20.0,
        }
    }
}

/// Damage, rewards and pickups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub bullet_damage: i32,
    pub kill_reward: u64,
    /// Chance out of 100 that a destroyed enemy drops a powerup
    pub powerup_drop_chance: u32,
    /// Powerup fall speed (pixels per tick)
    pub powerup_fall_speed: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            bullet_damage: 10,
            kill_reward: 100,
            powerup_drop_chance: 20,
            powerup_fall_speed: 1.0,
        }
    }
}

/// Cosmetic effects (explosions, particles, background scroll)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTuning {
    /// Explosion animation cadence (ms, strictly exceeded)
    pub explosion_frame_ms: u64,
    /// Frames an explosion plays before it despawns
    pub explosion_frames: i32,
    /// Radial particles fanned out by each explosion
    pub particles_per_explosion: u32,
    pub particle_speed: f32,
    /// Particle lifetime in ticks
    pub particle_life: i32,
    /// Background scroll per tick, wraps to zero past `scroll_wrap`
    pub scroll_speed: f32,
    pub scroll_wrap: f32,
}

impl Default for EffectTuning {
    fn default() -> Self {
        Self {
            explosion_frame_ms: 50,
            explosion_frames: 6,
            particles_per_explosion: 8,
            particle_speed: 2.0,
            particle_life: 10,
            scroll_speed: 1.0,
            scroll_wrap: 32.0,
        }
    }
}

/// Complete gameplay tuning
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub spawn: SpawnTuning,
    pub combat: CombatTuning,
    pub effects: EffectTuning,
}

impl Tuning {
    /// Parse tuning from JSON (missing fields keep their defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON (useful as a template for overrides)
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Clamp values that would break simulation invariants
    pub fn sanitized(mut self) -> Self {
        self.player.speed = self.player.speed.max(0.0);
        self.player.bullet_speed = self.player.bullet_speed.max(0.0);

        for stats in [&mut self.enemy.basic, &mut self.enemy.fast, &mut self.enemy.tank] {
            stats.health = stats.health.max(1);
            stats.speed = stats.speed.max(0.0);
            stats.size = stats.size.max(1.0);
        }
        self.enemy.fire_chance = self.enemy.fire_chance.min(100);
        self.enemy.bullet_speed = self.enemy.bullet_speed.max(0.0);

        self.spawn.tank_threshold = self.spawn.tank_threshold.min(100);
        self.spawn.fast_threshold = self.spawn.fast_threshold.min(self.spawn.tank_threshold);
        self.spawn.edge_margin = self
            .spawn
            .edge_margin
            .clamp(0.0, crate::consts::SCREEN_WIDTH / 2.0 - 1.0);

        self.combat.bullet_damage = self.combat.bullet_damage.max(0);
        self.combat.powerup_drop_chance = self.combat.powerup_drop_chance.min(100);

        self.effects.explosion_frames = self.effects.explosion_frames.max(1);
        self.effects.particle_life = self.effects.particle_life.max(1);
        self.effects.scroll_speed = self.effects.scroll_speed.max(0.0);
        if self.effects.scroll_wrap <= 0.0 {
            self.effects.scroll_wrap = EffectTuning::default().scroll_wrap;
        }

        self
    }
}
