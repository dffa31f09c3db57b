//! Headless collaborators for the native runner
//!
//! `Autopilot` plays the game (demo mode); the audio and render sinks only
//! log what a real device would have done.

use glam::Vec2;

use super::{AudioSink, InputSource, Renderer};
use crate::consts::GAME_FPS;
use crate::sim::{GameEvent, GamePhase, GameState, Hud, PoolId, Snapshot, TickInput};

/// Demo-mode input: chase the nearest enemy horizontally and keep firing
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks to linger on Title/GameOver before activating
    pub idle_ticks: u32,
    waited: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(GAME_FPS as u32)
    }
}

impl Autopilot {
    pub fn new(idle_ticks: u32) -> Self {
        Self {
            idle_ticks,
            waited: 0,
        }
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self, state: &GameState) -> TickInput {
        if state.phase != GamePhase::Playing {
            self.waited += 1;
            let activate = self.waited > self.idle_ticks;
            if activate {
                self.waited = 0;
            }
            return TickInput {
                activate,
                ..Default::default()
            };
        }

        let Some(player) = state.player() else {
            return TickInput::default();
        };
        let target = state
            .pools
            .iter_active(PoolId::Enemies)
            .map(|(_, e)| e.pos)
            .min_by(|a, b| {
                a.distance_squared(player.pos)
                    .partial_cmp(&b.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        match target {
            Some(target) => TickInput {
                movement: Vec2::new(((target.x - player.pos.x) / 20.0).clamp(-1.0, 1.0), 0.0),
                fire: true,
                activate: false,
            },
            None => TickInput::default(),
        }
    }
}

/// Audio sink that logs each cue
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: u64,
}

impl AudioSink for LogAudio {
    fn play(&mut self, event: GameEvent) {
        self.played += 1;
        log::trace!("cue {:?}", event);
    }
}

/// Renderer that logs the HUD once per second of game time
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
    pub last_hud: Option<Hud>,
}

impl Renderer for LogRenderer {
    fn present(&mut self, snapshot: &Snapshot) {
        self.frames += 1;
        if self.frames % GAME_FPS == 0 {
            log::debug!(
                "frame {} {:?}: score {} lives {} weapon {} sprites {}",
                self.frames,
                snapshot.hud.phase,
                snapshot.hud.score,
                snapshot.hud.lives,
                snapshot.hud.weapon_level,
                snapshot.sprites.len()
            );
        }
        self.last_hud = Some(snapshot.hud);
    }
}
