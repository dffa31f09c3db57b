//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical tick only
//! - Seeded RNG only
//! - Stable iteration order (ascending pool index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod geom;
pub mod pool;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::resolve_collisions;
pub use entity::{Category, Color, Entity};
pub use geom::Rect;
pub use pool::{Pool, PoolId, Pools, SlotRef};
pub use snapshot::{Hud, Snapshot, SpriteView};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
