//! Game state and core simulation types
//!
//! Everything the step mutates lives in [`GameState`], including the RNG, so a
//! fixed seed replays the same game.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::color::{Rgb, random_background};
use super::pause::PauseState;
use crate::consts::*;

/// Which side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human paddle, left edge
    Player,
    /// Scripted paddle, right edge
    Opponent,
}

/// A paddle. `x` never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Maximum movement per step
    pub max_speed: f32,
}

impl Paddle {
    /// Paddle vertically centered on the board
    pub fn new(x: f32, max_speed: f32) -> Self {
        Self {
            x,
            y: BOARD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            max_speed,
        }
    }

    /// Left paddle, driven by input
    pub fn player() -> Self {
        Self::new(PADDLE_MARGIN, PLAYER_SPEED)
    }

    /// Right paddle, driven by the tracking policy
    pub fn opponent() -> Self {
        Self::new(BOARD_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH, OPPONENT_MAX_SPEED)
    }

    /// Largest legal y
    #[inline]
    pub fn max_y(&self) -> f32 {
        BOARD_HEIGHT - self.height
    }

    /// Clamp y into `[0, board height - paddle height]`
    pub fn clamp_to_board(&mut self) {
        self.y = self.y.clamp(0.0, self.max_y());
    }

    pub fn in_bounds(&self) -> bool {
        (0.0..=self.max_y()).contains(&self.y)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The ball. Square, `pos` is its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Self::center_spawn(BALL_SIZE),
            vel: Vec2::ZERO,
            size: BALL_SIZE,
        }
    }
}

impl Ball {
    /// Top-left position that centers a ball of `size` on the board
    pub fn center_spawn(size: f32) -> Vec2 {
        Vec2::new(BOARD_WIDTH / 2.0 - size / 2.0, BOARD_HEIGHT / 2.0 - size / 2.0)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Vertical position within `[0, board height - size]`
    pub fn in_vertical_bounds(&self) -> bool {
        (0.0..=BOARD_HEIGHT - self.size).contains(&self.pos.y)
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    /// Side that has reached `win_score`, if any (player checked first)
    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Something that happened during a step (cleared every step)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball was returned by a paddle; the background changed
    PaddleHit { side: Side },
    /// Ball left the board and `side` was awarded a point
    PointScored { side: Side },
    /// `winner` reached the win score; both counters went back to zero
    MatchReset { winner: Side },
    Paused,
    Resumed,
}

/// Complete simulation state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// The one random source; never reseeded
    pub(crate) rng: Pcg32,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub background: Rgb,
    pub pause: PauseState,
    /// Unpaused steps executed
    pub frame: u64,
    /// Events from the most recent step
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given seed: random background, ball served
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let background = random_background(&mut rng);

        let mut state = Self {
            seed,
            rng,
            player: Paddle::player(),
            opponent: Paddle::opponent(),
            ball: Ball::default(),
            score: Score::new(),
            background,
            pause: PauseState::default(),
            frame: 0,
            events: Vec::new(),
        };

        state.reset_ball(true);
        log::debug!("New game with seed {}", seed);

        state
    }

    /// Replace the background with a fresh random color
    pub fn randomize_background(&mut self) {
        self.background = random_background(&mut self.rng);
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_positions() {
        let player = Paddle::player();
        let opponent = Paddle::opponent();
        assert_eq!(player.x, 20.0);
        assert_eq!(opponent.x, 768.0);
        assert_eq!(player.y, 255.0);
        assert_eq!(opponent.y, 255.0);
        assert_eq!(player.max_speed, PLAYER_SPEED);
        assert_eq!(opponent.max_speed, OPPONENT_MAX_SPEED);
    }

    #[test]
    fn test_paddle_clamp() {
        let mut p = Paddle::player();
        p.y = -10.0;
        p.clamp_to_board();
        assert_eq!(p.y, 0.0);

        p.y = 1000.0;
        p.clamp_to_board();
        assert_eq!(p.y, 510.0);
        assert!(p.in_bounds());

        p.y = 123.0;
        p.clamp_to_board();
        assert_eq!(p.y, 123.0);
    }

    #[test]
    fn test_ball_center_spawn() {
        assert_eq!(Ball::center_spawn(12.0), Vec2::new(394.0, 294.0));
    }

    #[test]
    fn test_score_award_and_winner() {
        let mut score = Score::new();
        for _ in 0..6 {
            score.award(Side::Opponent);
        }
        score.award(Side::Player);
        assert_eq!(score, Score { player: 1, opponent: 6 });
        assert_eq!(score.has_winner(WIN_SCORE), None);

        score.award(Side::Opponent);
        assert_eq!(score.has_winner(WIN_SCORE), Some(Side::Opponent));

        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_new_game_is_served_and_running() {
        let state = GameState::new(12345);
        assert!(!state.is_paused());
        assert_eq!(state.score, Score::new());
        assert_eq!(state.ball.pos, Vec2::new(394.0, 294.0));
        assert!(state.ball.vel.x > 0.0);
        assert!(state.background.luminance() <= MAX_BACKGROUND_LUMINANCE + 0.0001);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_same_seed_same_start() {
        let a = GameState::new(2024);
        let b = GameState::new(2024);
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.background, b.background);
    }
}
