//! Serving and round bookkeeping
//!
//! A serve puts the ball back at the center with a random launch angle. Point
//! and match bookkeeping sit alongside but never run inside the serve itself.

use std::f32::consts::{FRAC_PI_3, FRAC_PI_6, PI};

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, GameEvent, GameState, Side};
use crate::consts::*;

/// Launch velocity for a serve.
///
/// The angle is uniform in [-30°, +30°]. `rightward = false` turns it around
/// by 180°. Near-horizontal launches get a small random vertical nudge so a
/// rally can never lock into a flat back-and-forth.
pub fn serve_velocity<R: Rng + ?Sized>(rng: &mut R, rightward: bool, speed: f32) -> Vec2 {
    let mut angle = rng.random::<f32>() * FRAC_PI_3 - FRAC_PI_6;
    if !rightward {
        angle += PI;
    }

    let mut vel = Vec2::new(speed * angle.cos(), speed * angle.sin());
    if vel.y.abs() < MIN_SERVE_VY {
        vel.y += 0.5 * (rng.random::<f32>() - 0.5);
    }
    vel
}

impl GameState {
    /// Re-serve the ball from the center.
    ///
    /// `toward_player = true` launches with `vx > 0`, `false` with `vx < 0`.
    /// Scores are not touched.
    pub fn reset_ball(&mut self, toward_player: bool) {
        self.ball.pos = Ball::center_spawn(self.ball.size);
        self.ball.vel = serve_velocity(&mut self.rng, toward_player, BALL_SPEED);
        log::trace!("Serve: vel=({:.2}, {:.2})", self.ball.vel.x, self.ball.vel.y);
    }

    /// Award a point to `side` and re-serve. An opponent point serves
    /// rightward, a player point leftward.
    pub fn score_point(&mut self, side: Side) {
        self.score.award(side);
        self.events.push(GameEvent::PointScored { side });
        log::info!(
            "{:?} scores: {} - {}",
            side,
            self.score.player,
            self.score.opponent
        );
        self.reset_ball(side == Side::Opponent);
    }

    /// Reset the match once either side reaches [`WIN_SCORE`].
    ///
    /// Returns the winner when a reset happened.
    pub fn check_win(&mut self) -> Option<Side> {
        let winner = self.score.has_winner(WIN_SCORE)?;
        log::info!(
            "{:?} wins {} - {}, starting a new match",
            winner,
            self.score.player,
            self.score.opponent
        );
        self.score.reset();
        self.events.push(GameEvent::MatchReset { winner });
        self.reset_ball(true);
        Some(winner)
    }
}
