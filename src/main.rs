//! Solo Pong entry point
//!
//! Native headless host: runs the game loop at a simulated 60 Hz display rate
//! through the fixed-step clock, building the draw list each frame as a real
//! host would before presenting it.
//!
//! Usage: `solo-pong [settings.json]`

use std::collections::HashSet;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use solo_pong::Settings;
use solo_pong::platform::{FixedStep, Key};
use solo_pong::renderer::{as_bytes, draw_list};
use solo_pong::sim::{GameEvent, GameState, Snapshot, tick};

/// Host display rate for the headless loop
const HOST_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Solo Pong (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(time_seed);
    let mut state = GameState::new(seed);
    log::info!("Game initialized with seed: {}", seed);
    log::info!("Controls: {}", settings.bindings.hint());

    let mut clock = FixedStep::new(solo_pong::consts::SIM_DT, settings.max_substeps);
    let draw_options = settings.draw_options();
    let mut held = HashSet::new();
    let mut points = 0u32;
    let mut uploaded = 0usize;

    for _ in 0..settings.frames {
        if settings.autoplay {
            autopilot(&state.snapshot(), &mut held);
        }
        let input = settings.bindings.signals(&held);

        for _ in 0..clock.advance(HOST_DT) {
            tick(&mut state, &input);
            for event in &state.events {
                match event {
                    GameEvent::PointScored { .. } => points += 1,
                    GameEvent::MatchReset { winner } => log::info!("Match over, {:?} won", winner),
                    _ => {}
                }
            }
        }

        let vertices = draw_list(&state.snapshot(), &draw_options);
        uploaded += as_bytes(&vertices).len();
    }

    log::info!(
        "Ran {} frames ({} steps): {} points, score {} - {}, {} KiB of vertices",
        settings.frames,
        state.frame,
        points,
        state.score.player,
        state.score.opponent,
        uploaded / 1024
    );

    if settings.dump_final_snapshot {
        match serde_json::to_string_pretty(&state.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not serialize snapshot: {}", e),
        }
    }
}

/// Seed from the wall clock
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Hold up/down to keep the player paddle under the ball
fn autopilot(snapshot: &Snapshot, held: &mut HashSet<Key>) {
    held.clear();
    let paddle = snapshot.player.center().y;
    let ball = snapshot.ball.center().y;
    if ball < paddle - 8.0 {
        held.insert(Key::W);
    } else if ball > paddle + 8.0 {
        held.insert(Key::S);
    }
}
