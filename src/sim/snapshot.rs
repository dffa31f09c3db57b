//! Read-only view of the session for the render collaborator

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Category, Color};
use super::pool::PoolId;
use super::state::{GamePhase, GameState};

/// Pools in back-to-front draw order
pub const DRAW_ORDER: [PoolId; 7] = [
    PoolId::Particles,
    PoolId::Powerups,
    PoolId::PlayerBullets,
    PoolId::EnemyBullets,
    PoolId::Enemies,
    PoolId::Player,
    PoolId::Explosions,
];

/// Session counters shown on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub weapon_level: u8,
    pub wave: u32,
}

/// Everything needed to draw one active entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub category: Category,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub anim_frame: u32,
}

/// One frame's worth of render input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub hud: Hud,
    pub scroll: f32,
    /// Active entities in draw order (empty outside of Playing)
    pub sprites: Vec<SpriteView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let hud = Hud {
            phase: state.phase,
            score: state.score,
            lives: state.lives,
            weapon_level: state.weapon_level,
            wave: state.wave,
        };

        let sprites = if state.phase == GamePhase::Playing {
            DRAW_ORDER
                .iter()
                .flat_map(|&id| state.pools.iter_active(id))
                .map(|(_, e)| SpriteView {
                    category: e.category,
                    pos: e.pos,
                    size: e.size,
                    color: e.color,
                    anim_frame: e.anim_frame,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            hud,
            scroll: state.scroll,
            sprites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::{spawn_enemy, spawn_explosion};

    #[test]
    fn test_title_snapshot_has_no_sprites() {
        let state = GameState::new(1);
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.hud.phase, GamePhase::Title);
        assert!(snap.sprites.is_empty());
    }

    #[test]
    fn test_sprites_follow_draw_order() {
        let mut state = GameState::new(1);
        state.start_run();
        spawn_explosion(&mut state, Vec2::new(10.0, 10.0), 20.0);
        spawn_enemy(&mut state, Category::EnemyBasic, Vec2::new(100.0, 10.0));

        let snap = Snapshot::capture(&state);
        let categories: Vec<Category> = snap.sprites.iter().map(|s| s.category).collect();
        assert_eq!(categories.len(), 8 + 1 + 1 + 1);
        assert!(categories[..8].iter().all(|c| *c == Category::Particle));
        assert_eq!(
            &categories[8..],
            &[Category::EnemyBasic, Category::Player, Category::Explosion]
        );
        assert_eq!(snap.hud.lives, state.lives);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(1);
        state.start_run();
        let json = serde_json::to_string(&Snapshot::capture(&state)).unwrap();
        assert!(json.contains("\"Player\""));
    }
}
