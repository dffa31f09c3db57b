//! Collision resolution
//!
//! Four independent all-pairs AABB sweeps, run once per tick after the
//! simulation step. Pools are walked in ascending index order, so ties
//! (e.g. a bullet overlapping two enemies) always resolve to the lowest slot.

use super::entity::Category;
use super::spawn::{maybe_drop_powerup, spawn_explosion};
use super::state::{GameEvent, GameState};

/// Run every sweep in order
pub fn resolve_collisions(state: &mut GameState) {
    player_bullets_vs_enemies(state);
    enemy_bullets_vs_player(state);
    enemies_vs_player(state);
    powerups_vs_player(state);
}

/// Single-hit bullets: each bullet damages at most one enemy per tick
pub fn player_bullets_vs_enemies(state: &mut GameState) {
    let damage = state.tuning.combat.bullet_damage;
    let reward = state.tuning.combat.kill_reward;

    for bi in 0..state.pools.player_bullets.capacity() {
        let Some(bullet) = state.pools.player_bullets.get(bi).copied() else {
            continue;
        };

        for ei in 0..state.pools.enemies.capacity() {
            let Some(enemy) = state.pools.enemies.get_mut(ei) else {
                continue;
            };
            if !bullet.overlaps(enemy) {
                continue;
            }

            enemy.health -= damage;
            let killed = enemy.health <= 0;
            let (pos, width, kind) = (enemy.pos, enemy.size.x, enemy.category);
            if killed {
                enemy.deactivate();
            }
            state.pools.player_bullets.deactivate(bi);

            if killed {
                state.score += reward;
                spawn_explosion(state, pos, width);
                state.emit(GameEvent::Explosion);
                maybe_drop_powerup(state, pos);
                log::debug!(
                    "{:?} destroyed at ({:.0}, {:.0}), score {}",
                    kind,
                    pos.x,
                    pos.y,
                    state.score
                );
            } else {
                state.emit(GameEvent::Hit);
            }
            break;
        }
    }
}

pub fn enemy_bullets_vs_player(state: &mut GameState) {
    for bi in 0..state.pools.enemy_bullets.capacity() {
        let Some(player) = state.player().copied() else {
            return;
        };
        let hit = state
            .pools
            .enemy_bullets
            .get(bi)
            .is_some_and(|bullet| bullet.overlaps(&player));
        if !hit {
            continue;
        }

        state.pools.enemy_bullets.deactivate(bi);
        state.lose_life();
        spawn_explosion(state, player.pos, player.size.x);
        state.emit(GameEvent::Hit);
    }
}

/// Body collisions consume the enemy on first contact
pub fn enemies_vs_player(state: &mut GameState) {
    for ei in 0..state.pools.enemies.capacity() {
        let Some(player) = state.player().copied() else {
            return;
        };
        let Some(enemy) = state.pools.enemies.get(ei).copied() else {
            continue;
        };
        if !enemy.overlaps(&player) {
            continue;
        }

        state.lose_life();
        spawn_explosion(state, enemy.pos, enemy.size.x);
        spawn_explosion(state, player.pos, player.size.x);
        state.emit(GameEvent::Explosion);
        state.pools.enemies.deactivate(ei);
    }
}

pub fn powerups_vs_player(state: &mut GameState) {
    for pi in 0..state.pools.powerups.capacity() {
        let Some(player) = state.player().copied() else {
            return;
        };
        let Some(powerup) = state.pools.powerups.get(pi).copied() else {
            continue;
        };
        if !powerup.overlaps(&player) {
            continue;
        }

        match powerup.category {
            Category::PowerupWeapon => state.upgrade_weapon(),
            Category::PowerupHealth => state.gain_life(),
            _ => {}
        }
        state.emit(GameEvent::Powerup);
        state.pools.powerups.deactivate(pi);
    }
}
