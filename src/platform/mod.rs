//! Platform abstraction layer
//!
//! The simulation core talks to the outside world through three seams:
//! - Input: one `TickInput` sample per tick
//! - Audio: fire-and-forget `GameEvent` cues
//! - Render: read-only `Snapshot` of the session
//!
//! plus the fixed tick gate that decides when a frame runs.

pub mod clock;
pub mod headless;

pub use clock::FrameGate;
pub use headless::{Autopilot, LogAudio, LogRenderer};

use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};

/// Produces the input for the next tick
pub trait InputSource {
    fn sample(&mut self, state: &GameState) -> TickInput;
}

/// Plays sound cues; the core never waits for acknowledgment
pub trait AudioSink {
    fn play(&mut self, event: GameEvent);
}

/// Presents a frame; must not feed anything back into the simulation
pub trait Renderer {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Run one full frame: sample input, tick, dispatch cues, present
pub fn run_frame(
    state: &mut GameState,
    input: &mut impl InputSource,
    audio: &mut impl AudioSink,
    renderer: &mut impl Renderer,
) {
    let sample = input.sample(state);
    tick(state, &sample);
    for &event in state.events() {
        audio.play(event);
    }
    renderer.present(&Snapshot::capture(state));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    struct Scripted(Vec<TickInput>);

    impl InputSource for Scripted {
        fn sample(&mut self, _state: &GameState) -> TickInput {
            if self.0.is_empty() {
                TickInput::default()
            } else {
                self.0.remove(0)
            }
        }
    }

    #[derive(Default)]
    struct Recorder {
        cues: Vec<GameEvent>,
        frames: Vec<Snapshot>,
    }

    impl AudioSink for Recorder {
        fn play(&mut self, event: GameEvent) {
            self.cues.push(event);
        }
    }

    impl Renderer for Recorder {
        fn present(&mut self, snapshot: &Snapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    #[test]
    fn test_run_frame_wires_collaborators() {
        let mut state = GameState::new(11);
        state.tuning.spawn.interval_ms = u64::MAX;
        state.tuning.enemy.fire_chance = 0;
        let mut input = Scripted(vec![
            TickInput {
                activate: true,
                ..Default::default()
            },
            TickInput {
                fire: true,
                ..Default::default()
            },
        ]);
        let mut audio = Recorder::default();
        let mut renderer = Recorder::default();

        run_frame(&mut state, &mut input, &mut audio, &mut renderer);
        run_frame(&mut state, &mut input, &mut audio, &mut renderer);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(audio.cues, vec![GameEvent::Shoot]);
        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.frames[1].hud.phase, GamePhase::Playing);
    }
}
