//! Scripted opponent
//!
//! A rate-limited proportional tracker: it chases the ball center but can only
//! move `max_speed` per step, which is what makes it beatable.

use super::state::{Ball, Paddle};
use crate::consts::OPPONENT_DEAD_ZONE;

/// Next y for a paddle tracking `ball_center_y` (not clamped).
///
/// Offsets within the dead zone are ignored so the paddle does not jitter
/// around a resting target.
pub fn track_y(paddle_y: f32, paddle_height: f32, ball_center_y: f32, max_speed: f32) -> f32 {
    let target = ball_center_y - paddle_height / 2.0;
    let diff = target - paddle_y;
    if diff.abs() <= OPPONENT_DEAD_ZONE {
        return paddle_y;
    }
    paddle_y + diff.signum() * max_speed.min(diff.abs())
}

/// Move `paddle` one step toward the ball and clamp it to the board
pub fn track_ball(paddle: &mut Paddle, ball: &Ball) {
    paddle.y = track_y(paddle.y, paddle.height, ball.center_y(), paddle.max_speed);
    paddle.clamp_to_board();
}
