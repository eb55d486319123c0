//! Read-only view of the world for renderers

use serde::Serialize;

use super::collision::Rect;
use super::color::Rgb;
use super::state::GameState;

/// Everything a renderer needs for one frame. A copy, so drawing can never
/// mutate the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: Rect,
    pub opponent: Rect,
    pub ball: Rect,
    pub background: Rgb,
    pub player_score: u32,
    pub opponent_score: u32,
    pub paused: bool,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.rect(),
            opponent: self.opponent.rect(),
            ball: self.ball.rect(),
            background: self.background,
            player_score: self.score.player,
            opponent_score: self.score.opponent,
            paused: self.is_paused(),
        }
    }
}
