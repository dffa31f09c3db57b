//! Space Striker entry point
//!
//! Runs the simulation headless at the fixed tick rate with the autopilot
//! at the controls. Usage: `space-striker [tuning.json] [seed] [frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Instant;

    use space_striker::Tuning;
    use space_striker::consts::GAME_FPS;
    use space_striker::platform::{Autopilot, FrameGate, LogAudio, LogRenderer, run_frame};
    use space_striker::sim::{GamePhase, GameState};

    env_logger::init();
    log::info!("Space Striker (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next().filter(|a| a.as_str() != "-") {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5EED_u64);
    let frames: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(GAME_FPS * 60);

    let mut state = GameState::with_tuning(seed, tuning);
    let mut input = Autopilot::default();
    let mut audio = LogAudio::default();
    let mut renderer = LogRenderer::default();
    let mut gate = FrameGate::default();

    let start = Instant::now();
    let mut runs = 0u32;
    let mut last_phase = state.phase;
    while renderer.frames < frames {
        let now_ms = start.elapsed().as_millis() as u64;
        if !gate.ready(now_ms) {
            std::hint::spin_loop();
            continue;
        }

        run_frame(&mut state, &mut input, &mut audio, &mut renderer);

        if state.phase != last_phase {
            if state.phase == GamePhase::GameOver {
                runs += 1;
            }
            last_phase = state.phase;
        }
    }

    println!(
        "{} frames, {} finished runs, score {}, lives {}, {} cues",
        renderer.frames, runs, state.score, state.lives, audio.played
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is driven by an embedding host on wasm
}
