//! Fixed-capacity entity pools
//!
//! Each pool is allocated once at its capacity and never grows. Spawning
//! claims the lowest-indexed inactive slot; when none is free the request is
//! dropped. Slots carry no generation tag, so a `SlotRef` is only meaningful
//! within the tick that produced it.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::consts::*;

/// Which pool a slot lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolId {
    Player,
    Enemies,
    PlayerBullets,
    EnemyBullets,
    Powerups,
    Explosions,
    Particles,
}

impl PoolId {
    pub const ALL: [PoolId; 7] = [
        PoolId::Player,
        PoolId::Enemies,
        PoolId::PlayerBullets,
        PoolId::EnemyBullets,
        PoolId::Powerups,
        PoolId::Explosions,
        PoolId::Particles,
    ];

    pub fn capacity(self) -> usize {
        match self {
            PoolId::Player => MAX_PLAYERS,
            PoolId::Enemies => MAX_ENEMIES,
            PoolId::PlayerBullets => MAX_PLAYER_BULLETS,
            PoolId::EnemyBullets => MAX_ENEMY_BULLETS,
            PoolId::Powerups => MAX_POWERUPS,
            PoolId::Explosions => MAX_EXPLOSIONS,
            PoolId::Particles => MAX_PARTICLES,
        }
    }
}

/// Pool + index pair identifying one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub pool: PoolId,
    pub index: usize,
}

/// A fixed array of entity slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool {
    slots: Vec<Entity>,
}

impl Pool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Entity::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of active slots
    pub fn occupancy(&self) -> usize {
        self.slots.iter().filter(|e| e.active).count()
    }

    /// Copy `entity` into the first free slot, returning its index.
    ///
    /// Returns `None` without touching any slot when the pool is full.
    pub fn spawn(&mut self, entity: Entity) -> Option<usize> {
        let index = self.slots.iter().position(|e| !e.active)?;
        self.slots[index] = Entity {
            active: true,
            ..entity
        };
        Some(index)
    }

    /// Free a slot. No-op for inactive or out-of-range indices.
    pub fn deactivate(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.deactivate();
        }
    }

    /// Deactivate every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
    }

    /// Active entity at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.slots.get(index).filter(|e| e.active)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.slots.get_mut(index).filter(|e| e.active)
    }

    /// Active slots in ascending index order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Entity)> {
        self.slots.iter().enumerate().filter(|(_, e)| e.active)
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut Entity)> {
        self.slots.iter_mut().enumerate().filter(|(_, e)| e.active)
    }

    /// Call `f` on every active slot in index order
    pub fn for_each_active(&mut self, mut f: impl FnMut(usize, &mut Entity)) {
        for (i, e) in self.iter_active_mut() {
            f(i, e);
        }
    }
}

/// All pools, one per `PoolId`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pools {
    pub player: Pool,
    pub enemies: Pool,
    pub player_bullets: Pool,
    pub enemy_bullets: Pool,
    pub powerups: Pool,
    pub explosions: Pool,
    pub particles: Pool,
}

impl Default for Pools {
    fn default() -> Self {
        Self::new()
    }
}

impl Pools {
    pub fn new() -> Self {
        Self {
            player: Pool::with_capacity(PoolId::Player.capacity()),
            enemies: Pool::with_capacity(PoolId::Enemies.capacity()),
            player_bullets: Pool::with_capacity(PoolId::PlayerBullets.capacity()),
            enemy_bullets: Pool::with_capacity(PoolId::EnemyBullets.capacity()),
            powerups: Pool::with_capacity(PoolId::Powerups.capacity()),
            explosions: Pool::with_capacity(PoolId::Explosions.capacity()),
            particles: Pool::with_capacity(PoolId::Particles.capacity()),
        }
    }

    pub fn pool(&self, id: PoolId) -> &Pool {
        match id {
            PoolId::Player => &self.player,
            PoolId::Enemies => &self.enemies,
            PoolId::PlayerBullets => &self.player_bullets,
            PoolId::EnemyBullets => &self.enemy_bullets,
            PoolId::Powerups => &self.powerups,
            PoolId::Explosions => &self.explosions,
            PoolId::Particles => &self.particles,
        }
    }

    pub fn pool_mut(&mut self, id: PoolId) -> &mut Pool {
        match id {
            PoolId::Player => &mut self.player,
            PoolId::Enemies => &mut self.enemies,
            PoolId::PlayerBullets => &mut self.player_bullets,
            PoolId::EnemyBullets => &mut self.enemy_bullets,
            PoolId::Powerups => &mut self.powerups,
            PoolId::Explosions => &mut self.explosions,
            PoolId::Particles => &mut self.particles,
        }
    }

    /// Spawn into the pool that owns `entity.category`
    pub fn spawn(&mut self, entity: Entity) -> Option<SlotRef> {
        let pool = entity.category.pool();
        let spawned = self
            .pool_mut(pool)
            .spawn(entity)
            .map(|index| SlotRef { pool, index });
        if spawned.is_none() {
            log::trace!("{:?} pool full, dropped {:?} spawn", pool, entity.category);
        }
        spawned
    }

    pub fn deactivate(&mut self, slot: SlotRef) {
        self.pool_mut(slot.pool).deactivate(slot.index);
    }

    pub fn get(&self, slot: SlotRef) -> Option<&Entity> {
        self.pool(slot.pool).get(slot.index)
    }

    pub fn get_mut(&mut self, slot: SlotRef) -> Option<&mut Entity> {
        self.pool_mut(slot.pool).get_mut(slot.index)
    }

    pub fn iter_active(&self, id: PoolId) -> impl Iterator<Item = (usize, &Entity)> {
        self.pool(id).iter_active()
    }

    /// Deactivate every slot in every pool
    pub fn clear(&mut self) {
        for id in PoolId::ALL {
            self.pool_mut(id).clear();
        }
    }

    /// Total active entities across all pools
    pub fn total_active(&self) -> usize {
        PoolId::ALL.iter().map(|&id| self.pool(id).occupancy()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Category, Color};
    use glam::Vec2;
    use proptest::prelude::*;

    fn fast_enemy(x: f32) -> Entity {
        Entity::new(
            Category::EnemyFast,
            Vec2::new(x, -20.0),
            Vec2::new(0.0, 3.0),
            Vec2::splat(16.0),
            5,
            Color::Yellow,
        )
    }

    #[test]
    fn test_spawn_uses_lowest_free_index() {
        let mut pool = Pool::with_capacity(4);
        assert_eq!(pool.spawn(fast_enemy(0.0)), Some(0));
        assert_eq!(pool.spawn(fast_enemy(1.0)), Some(1));
        assert_eq!(pool.spawn(fast_enemy(2.0)), Some(2));
        pool.deactivate(1);
        assert_eq!(pool.spawn(fast_enemy(3.0)), Some(1));
        assert_eq!(pool.get(1).map(|e| e.pos.x), Some(3.0));
    }

    #[test]
    fn test_full_pool_drops_spawn() {
        let mut pools = Pools::new();
        for i in 0..MAX_ENEMIES - 1 {
            assert!(pools.spawn(fast_enemy(i as f32)).is_some());
        }
        // Exactly one free slot left
        let first = pools.spawn(fast_enemy(100.0));
        let second = pools.spawn(fast_enemy(200.0));
        assert_eq!(
            first,
            Some(SlotRef {
                pool: PoolId::Enemies,
                index: MAX_ENEMIES - 1
            })
        );
        assert_eq!(second, None);
        assert_eq!(pools.enemies.occupancy(), MAX_ENEMIES);
        assert!(pools.enemies.iter_active().all(|(_, e)| e.pos.x != 200.0));
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut pools = Pools::new();
        let slot = pools.spawn(fast_enemy(5.0)).unwrap();
        pools.deactivate(slot);
        let after_once = pools.enemies.occupancy();
        pools.deactivate(slot);
        assert_eq!(pools.enemies.occupancy(), after_once);
        assert!(pools.get(slot).is_none());
    }

    #[test]
    fn test_iter_active_is_ordered_and_restartable() {
        let mut pool = Pool::with_capacity(6);
        for i in 0..6 {
            pool.spawn(fast_enemy(i as f32));
        }
        pool.deactivate(0);
        pool.deactivate(3);
        let first: Vec<usize> = pool.iter_active().map(|(i, _)| i).collect();
        let second: Vec<usize> = pool.iter_active().map(|(i, _)| i).collect();
        assert_eq!(first, vec![1, 2, 4, 5]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_spawn_routes_by_category() {
        let mut pools = Pools::new();
        let bullet = Entity::new(
            Category::EnemyBullet,
            Vec2::ZERO,
            Vec2::new(0.0, 3.0),
            Vec2::new(4.0, 8.0),
            1,
            Color::Orange,
        );
        let slot = pools.spawn(bullet).unwrap();
        assert_eq!(slot.pool, PoolId::EnemyBullets);
        assert_eq!(pools.total_active(), 1);
        pools.clear();
        assert_eq!(pools.total_active(), 0);
    }

    proptest! {
        #[test]
        fn prop_occupancy_never_exceeds_capacity(
            ops in proptest::collection::vec((any::<bool>(), 0usize..MAX_PARTICLES), 0..300)
        ) {
            let mut pools = Pools::new();
            for (spawn, index) in ops {
                if spawn {
                    let before: Vec<Entity> = pools.particles.iter_active().map(|(_, e)| *e).collect();
                    let full = pools.particles.occupancy() == pools.particles.capacity();
                    let particle = Entity::new(
                        Category::Particle,
                        Vec2::new(index as f32, 0.0),
                        Vec2::ZERO,
                        Vec2::splat(2.0),
                        10,
                        Color::Yellow,
                    );
                    let slot = pools.spawn(particle);
                    if full {
                        prop_assert!(slot.is_none());
                        let after: Vec<Entity> = pools.particles.iter_active().map(|(_, e)| *e).collect();
                        prop_assert_eq!(before, after);
                    }
                } else {
                    pools.particles.deactivate(index);
                }
                prop_assert!(pools.particles.occupancy() <= MAX_PARTICLES);
            }
        }

        #[test]
        fn prop_double_deactivate_matches_single(
            count in 1usize..MAX_EXPLOSIONS,
            target in 0usize..MAX_EXPLOSIONS
        ) {
            let mut once = Pool::with_capacity(MAX_EXPLOSIONS);
            for i in 0..count {
                once.spawn(Entity::new(
                    Category::Explosion,
                    Vec2::splat(i as f32),
                    Vec2::ZERO,
                    Vec2::splat(20.0),
                    6,
                    Color::Orange,
                ));
            }
            let mut twice = once.clone();
            once.deactivate(target);
            twice.deactivate(target);
            twice.deactivate(target);
            let a: Vec<(usize, Entity)> = once.iter_active().map(|(i, e)| (i, *e)).collect();
            let b: Vec<(usize, Entity)> = twice.iter_active().map(|(i, e)| (i, *e)).collect();
            prop_assert_eq!(a, b);
        }
    }
}
