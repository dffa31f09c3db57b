//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one logical frame.

use glam::Vec2;
use rand::Rng;

use super::collision::resolve_collisions;
use super::geom::direction;
use super::spawn::{gate_open, run_spawn_policy, spawn_enemy_bullet, spawn_player_bullet};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input sampled for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Movement vector, each axis in [-1, 1]
    pub movement: Vec2,
    /// Fire button held
    pub fire: bool,
    /// Any touch/press; only consumed outside of Playing
    pub activate: bool,
}

/// Advance the game by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;
    state.time_ms += TICK_MS;

    match state.phase {
        GamePhase::Title | GamePhase::GameOver => {
            if input.activate {
                state.start_run();
            }
        }
        GamePhase::Playing => {
            run_spawn_policy(state);
            step(state, input);
            resolve_collisions(state);

            if state.lives == 0 {
                state.phase = GamePhase::GameOver;
                log::info!(
                    "Game over: score {} after {} ticks",
                    state.score,
                    state.time_ticks
                );
            }
        }
    }
}

/// Per-category simulation, in fixed order
pub fn step(state: &mut GameState, input: &TickInput) {
    update_scroll(state);
    update_player(state, input);
    update_player_fire(state, input.fire);
    update_enemies(state);
    update_bullets(state);
    update_powerups(state);
    update_explosions(state);
    update_particles(state);
}

/// Advance the background offset, wrapping past the threshold
pub fn update_scroll(state: &mut GameState) {
    let effects = &state.tuning.effects;
    state.scroll += effects.scroll_speed;
    if state.scroll > effects.scroll_wrap {
        state.scroll = 0.0;
    }
}

/// Inclusive bounds the player's center is clamped to
pub fn player_bounds(size: Vec2) -> (Vec2, Vec2) {
    let half = size / 2.0;
    let min = half;
    let max = Vec2::new(SCREEN_WIDTH - half.x, SCREEN_HEIGHT - half.y - HUD_MARGIN);
    (min, max)
}

pub fn update_player(state: &mut GameState, input: &TickInput) {
    let speed = state.tuning.player.speed;
    let Some(player) = state.player_mut() else {
        return;
    };
    let movement = input.movement.clamp(Vec2::NEG_ONE, Vec2::ONE);
    player.vel = movement * speed;
    player.pos += player.vel;

    let (min, max) = player_bounds(player.size);
    player.pos = player.pos.clamp(min, max);
}

/// Fire-rate gate plus weapon-level shot pattern
pub fn update_player_fire(state: &mut GameState, fire: bool) {
    let cooldown = state.tuning.player.fire_cooldown_ms;
    if !fire || !gate_open(state.time_ms, state.last_shot_ms, cooldown) {
        return;
    }
    let Some(pos) = state.player().map(|p| p.pos) else {
        return;
    };

    state.emit(GameEvent::Shoot);
    for (offset, vel) in shot_pattern(state) {
        spawn_player_bullet(state, pos + offset, vel);
    }
    state.last_shot_ms = Some(state.time_ms);
}

/// Bullet offsets and velocities for the current weapon level
pub fn shot_pattern(state: &GameState) -> Vec<(Vec2, Vec2)> {
    let player = &state.tuning.player;
    let up = Vec2::new(0.0, -player.bullet_speed);
    let side = Vec2::new(player.gun_offset, 0.0);
    let spread = Vec2::new(player.spread_speed, 0.0);

    match state.weapon_level {
        0 | 1 => vec![(Vec2::ZERO, up)],
        2 => vec![(-side, up), (side, up)],
        // Outer shots converge toward the center line
        _ => vec![(Vec2::ZERO, up), (-side, up + spread), (side, up - spread)],
    }
}

/// Homing drift, despawn past the bottom, opportunistic fire
pub fn update_enemies(state: &mut GameState) {
    let Some(target) = state.player().map(|p| p.pos) else {
        return;
    };
    let homing = state.tuning.enemy.homing_factor;
    let fire_chance = state.tuning.enemy.fire_chance;

    for i in 0..state.pools.enemies.capacity() {
        let Some(enemy) = state.pools.enemies.get_mut(i) else {
            continue;
        };

        let dir = direction(enemy.pos, target);
        enemy.vel.x = dir.x * enemy.vel.y * homing;
        enemy.pos += enemy.vel;

        if enemy.pos.y > SCREEN_HEIGHT + 20.0 {
            enemy.deactivate();
            continue;
        }

        let muzzle = enemy.pos;
        if state.rng.random_range(0..100) < fire_chance {
            spawn_enemy_bullet(state, muzzle);
            state.emit(GameEvent::EnemyShoot);
        }
    }
}

/// Linear motion for both bullet pools
pub fn update_bullets(state: &mut GameState) {
    state.pools.player_bullets.for_each_active(|_, bullet| {
        bullet.pos += bullet.vel;
        if bullet.pos.y < -10.0 {
            bullet.deactivate();
        }
    });

    state.pools.enemy_bullets.for_each_active(|_, bullet| {
        bullet.pos += bullet.vel;
        if bullet.pos.y > SCREEN_HEIGHT + 10.0 {
            bullet.deactivate();
        }
    });
}

pub fn update_powerups(state: &mut GameState) {
    state.pools.powerups.for_each_active(|_, powerup| {
        powerup.pos += powerup.vel;
        if powerup.pos.y > SCREEN_HEIGHT + 20.0 {
            powerup.deactivate();
        }
    });
}

/// Advance animation frames on a fixed cadence; despawn after the last frame
pub fn update_explosions(state: &mut GameState) {
    let now = state.time_ms;
    let cadence = state.tuning.effects.explosion_frame_ms;
    state.pools.explosions.for_each_active(|_, explosion| {
        if now.saturating_sub(explosion.last_anim_ms) > cadence {
            explosion.anim_frame += 1;
            explosion.last_anim_ms = now;
            if explosion.anim_frame as i32 >= explosion.health {
                explosion.deactivate();
            }
        }
    });
}

/// Linear motion with a countdown lifetime
pub fn update_particles(state: &mut GameState) {
    state.pools.particles.for_each_active(|_, particle| {
        particle.pos += particle.vel;
        particle.health -= 1;
        if particle.health <= 0 {
            particle.deactivate();
        }
    });
}
