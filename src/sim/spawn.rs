//! Entity spawning
//!
//! Stamps full initial state for each category and implements the timed
//! enemy spawn policy. Every helper silently drops its request when the
//! target pool is saturated.

use glam::Vec2;
use rand::Rng;

use super::entity::{Category, Color, Entity};
use super::pool::SlotRef;
use super::state::GameState;
use crate::consts::*;

/// Player and enemy bullet size
pub const BULLET_SIZE: Vec2 = Vec2::new(4.0, 8.0);
/// Powerup size
pub const POWERUP_SIZE: f32 = 16.0;
/// Particle size
pub const PARTICLE_SIZE: f32 = 2.0;

/// Enemy kind selected by a roll in [0, 100)
pub fn enemy_kind_for_roll(state: &GameState, roll: u32) -> Category {
    let spawn = &state.tuning.spawn;
    if roll < spawn.fast_threshold {
        Category::EnemyBasic
    } else if roll < spawn.tank_threshold {
        Category::EnemyFast
    } else {
        Category::EnemyTank
    }
}

/// Spawn an enemy of `kind` moving straight down at its fixed speed
pub fn spawn_enemy(state: &mut GameState, kind: Category, pos: Vec2) -> Option<SlotRef> {
    let enemy = &state.tuning.enemy;
    let (stats, color) = match kind {
        Category::EnemyFast => (enemy.fast, Color::Yellow),
        Category::EnemyTank => (enemy.tank, Color::Purple),
        _ => (enemy.basic, Color::Red),
    };
    let kind = if kind.is_enemy() { kind } else { Category::EnemyBasic };
    let entity = Entity::new(
        kind,
        pos,
        Vec2::new(0.0, stats.speed),
        Vec2::splat(stats.size),
        stats.health,
        color,
    )
    .stamped_at(state.time_ms);
    state.pools.spawn(entity)
}

pub fn spawn_player_bullet(state: &mut GameState, pos: Vec2, vel: Vec2) -> Option<SlotRef> {
    let bullet = Entity::new(Category::PlayerBullet, pos, vel, BULLET_SIZE, 1, Color::White)
        .stamped_at(state.time_ms);
    state.pools.spawn(bullet)
}

pub fn spawn_enemy_bullet(state: &mut GameState, pos: Vec2) -> Option<SlotRef> {
    let vel = Vec2::new(0.0, state.tuning.enemy.bullet_speed);
    let bullet = Entity::new(Category::EnemyBullet, pos, vel, BULLET_SIZE, 1, Color::Orange)
        .stamped_at(state.time_ms);
    state.pools.spawn(bullet)
}

pub fn spawn_particle(state: &mut GameState, pos: Vec2, vel: Vec2) -> Option<SlotRef> {
    let particle = Entity::new(
        Category::Particle,
        pos,
        vel,
        Vec2::splat(PARTICLE_SIZE),
        state.tuning.effects.particle_life,
        Color::Yellow,
    )
    .stamped_at(state.time_ms);
    state.pools.spawn(particle)
}

/// Spawn an explosion of `size` at `pos` and fan out radial particles.
///
/// The particles are spawned even when the explosion pool is full.
pub fn spawn_explosion(state: &mut GameState, pos: Vec2, size: f32) -> Option<SlotRef> {
    let explosion = Entity::new(
        Category::Explosion,
        pos,
        Vec2::ZERO,
        Vec2::splat(size),
        state.tuning.effects.explosion_frames,
        Color::Orange,
    )
    .stamped_at(state.time_ms);
    let slot = state.pools.spawn(explosion);

    let count = state.tuning.effects.particles_per_explosion;
    let speed = state.tuning.effects.particle_speed;
    for j in 0..count {
        let angle = j as f32 / count as f32 * std::f32::consts::TAU;
        let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
        spawn_particle(state, pos, vel);
    }

    slot
}

pub fn spawn_powerup(state: &mut GameState, pos: Vec2, kind: Category) -> Option<SlotRef> {
    let (kind, color) = match kind {
        Category::PowerupHealth => (Category::PowerupHealth, Color::Magenta),
        _ => (Category::PowerupWeapon, Color::Green),
    };
    let vel = Vec2::new(0.0, state.tuning.combat.powerup_fall_speed);
    let powerup = Entity::new(kind, pos, vel, Vec2::splat(POWERUP_SIZE), 1, color)
        .stamped_at(state.time_ms);
    state.pools.spawn(powerup)
}

/// Roll the drop chance for a destroyed enemy and maybe spawn a powerup
pub fn maybe_drop_powerup(state: &mut GameState, pos: Vec2) -> Option<SlotRef> {
    let chance = state.tuning.combat.powerup_drop_chance;
    if state.rng.random_range(0..100) >= chance {
        return None;
    }
    let kind = if state.rng.random_bool(0.5) {
        Category::PowerupWeapon
    } else {
        Category::PowerupHealth
    };
    spawn_powerup(state, pos, kind)
}

/// True once more than `interval_ms` has passed since `last` (or there is no `last`)
pub fn gate_open(now_ms: u64, last: Option<u64>, interval_ms: u64) -> bool {
    match last {
        Some(last) => now_ms.saturating_sub(last) > interval_ms,
        None => true,
    }
}

/// Timed enemy spawn: attempts one spawn when the interval has elapsed.
///
/// The spawn clock restarts on every attempt, even if the pool was full.
pub fn run_spawn_policy(state: &mut GameState) -> Option<SlotRef> {
    if !gate_open(state.time_ms, state.last_spawn_ms, state.tuning.spawn.interval_ms) {
        return None;
    }

    let roll = state.rng.random_range(0..100);
    let kind = enemy_kind_for_roll(state, roll);
    let margin = state.tuning.spawn.edge_margin;
    let x = state.rng.random_range(margin..SCREEN_WIDTH - margin);
    let pos = Vec2::new(x, state.tuning.spawn.spawn_y);

    let slot = spawn_enemy(state, kind, pos);
    state.last_spawn_ms = Some(state.time_ms);
    if slot.is_some() {
        log::debug!("Spawned {:?} at x={:.1} (t={}ms)", kind, x, state.time_ms);
    }
    slot
}
