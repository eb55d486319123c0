//! Per-frame simulation step
//!
//! One call advances the game by one fixed frame. There is no delta time:
//! velocities are pixels per step, and the host is responsible for calling
//! at a fixed rate (see `platform::clock`).

use super::collision::rects_overlap;
use super::opponent::track_ball;
use super::pause::{PauseMode, PauseSignals, PauseTransition};
use super::state::{GameEvent, GameState, Side};
use crate::consts::*;

/// Held controls for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    /// Pauses while held; cannot resume
    pub hold_pause: bool,
    /// Flips pause (debounced)
    pub toggle_pause: bool,
}

impl TickInput {
    fn pause_signals(&self) -> PauseSignals {
        PauseSignals {
            hold_pause: self.hold_pause,
            toggle_pause: self.toggle_pause,
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Pause gate
    let outcome = state.pause.advance(input.pause_signals());
    match outcome.transition {
        Some(PauseTransition::HoldPaused) | Some(PauseTransition::Toggled(PauseMode::Paused)) => {
            log::debug!("Paused at frame {}", state.frame);
            state.events.push(GameEvent::Paused);
        }
        Some(PauseTransition::Toggled(PauseMode::Running)) => {
            log::debug!("Resumed at frame {}", state.frame);
            state.events.push(GameEvent::Resumed);
        }
        None => {}
    }
    if !outcome.run_frame {
        return;
    }

    state.frame += 1;

    // Player paddle; opposing keys cancel
    if input.up {
        state.player.y -= state.player.max_speed;
    }
    if input.down {
        state.player.y += state.player.max_speed;
    }
    state.player.clamp_to_board();

    track_ball(&mut state.opponent, &state.ball);

    // Euler step
    state.ball.pos += state.ball.vel;

    resolve_walls(state);
    resolve_paddles(state);

    // Scoring: left edge is the player's goal
    if state.ball.pos.x + state.ball.size < 0.0 {
        state.score_point(Side::Opponent);
    } else if state.ball.pos.x > BOARD_WIDTH {
        state.score_point(Side::Player);
    }

    state.check_win();

    debug_assert!(state.player.in_bounds(), "player paddle escaped the board");
    debug_assert!(state.opponent.in_bounds(), "opponent paddle escaped the board");
    debug_assert!(state.ball.in_vertical_bounds(), "ball escaped vertically");
    debug_assert!(
        state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::PointScored { .. }))
            .count()
            <= 1,
        "more than one point in a frame"
    );
}

/// Bounce off the top and bottom edges
fn resolve_walls(state: &mut GameState) {
    let ball = &mut state.ball;
    let mut bounced = false;

    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }
    if ball.pos.y + ball.size >= BOARD_HEIGHT {
        ball.pos.y = BOARD_HEIGHT - ball.size;
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }

    if bounced {
        state.events.push(GameEvent::WallBounce);
    }
}

/// Return the ball off either paddle.
///
/// The ball is placed flush against the paddle face and sent away from it at
/// the same horizontal speed. Vertical speed comes from where it struck: the
/// further from the paddle center, the steeper the return.
fn resolve_paddles(state: &mut GameState) {
    for side in [Side::Player, Side::Opponent] {
        let paddle = match side {
            Side::Player => state.player,
            Side::Opponent => state.opponent,
        };
        if !rects_overlap(&state.ball.rect(), &paddle.rect()) {
            continue;
        }

        let ball = &mut state.ball;
        match side {
            Side::Player => {
                ball.pos.x = paddle.x + paddle.width;
                ball.vel.x = ball.vel.x.abs();
            }
            Side::Opponent => {
                ball.pos.x = paddle.x - ball.size;
                ball.vel.x = -ball.vel.x.abs();
            }
        }
        let offset = ball.center_y() - paddle.center_y();
        ball.vel.y = offset * DEFLECTION_FACTOR;

        log::debug!("{:?} paddle hit, offset {:.1}", side, offset);
        state.events.push(GameEvent::PaddleHit { side });
        state.randomize_background();
    }
}
