//! The single entity record shared by every category

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::pool::PoolId;

/// Fixed entity roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Player,
    EnemyBasic,
    EnemyFast,
    EnemyTank,
    PlayerBullet,
    EnemyBullet,
    PowerupWeapon,
    PowerupHealth,
    Explosion,
    Particle,
}

impl Category {
    /// Pool that stores entities of this category
    pub fn pool(self) -> PoolId {
        match self {
            Category::Player => PoolId::Player,
            Category::EnemyBasic | Category::EnemyFast | Category::EnemyTank => PoolId::Enemies,
            Category::PlayerBullet => PoolId::PlayerBullets,
            Category::EnemyBullet => PoolId::EnemyBullets,
            Category::PowerupWeapon | Category::PowerupHealth => PoolId::Powerups,
            Category::Explosion => PoolId::Explosions,
            Category::Particle => PoolId::Particles,
        }
    }

    pub fn is_enemy(self) -> bool {
        self.pool() == PoolId::Enemies
    }

    pub fn is_powerup(self) -> bool {
        self.pool() == PoolId::Powerups
    }
}

/// Display color tag (the renderer owns the actual palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Cyan,
    Red,
    Yellow,
    Purple,
    Orange,
    Green,
    Magenta,
}

/// One slot's worth of entity state
///
/// The meaning of `health` depends on the category: hit points for the
/// player and enemies, total frame count for explosions, remaining ticks
/// for particles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
    pub active: bool,
    pub category: Category,
    /// Center of the bounding box
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Bounding box width/height
    pub size: Vec2,
    pub health: i32,
    pub color: Color,
    pub anim_frame: u32,
    /// Logical time (ms) of the last animation frame advance
    pub last_anim_ms: u64,
}

impl Entity {
    /// A fully stamped, active entity
    pub fn new(
        category: Category,
        pos: Vec2,
        vel: Vec2,
        size: Vec2,
        health: i32,
        color: Color,
    ) -> Self {
        Self {
            active: true,
            category,
            pos,
            vel,
            size,
            health,
            color,
            anim_frame: 0,
            last_anim_ms: 0,
        }
    }

    /// Set the animation clock origin
    pub fn stamped_at(mut self, now_ms: u64) -> Self {
        self.last_anim_ms = now_ms;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    pub fn overlaps(&self, other: &Entity) -> bool {
        self.rect().intersects(&other.rect())
    }

    /// Idempotent
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
