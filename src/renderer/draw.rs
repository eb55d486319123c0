//! Snapshot to draw list
//!
//! Layer order, back to front: background, center line, paddles, ball,
//! scores, controls hint, pause veil.

use glam::Vec2;

use super::shapes::{number, number_width, push_quad};
use super::vertex::{Vertex, colors};
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::sim::{Rect, Snapshot};

/// Center line dash spacing and size
const DASH_SPACING: f32 = 20.0;
const DASH_WIDTH: f32 = 4.0;
const DASH_HEIGHT: f32 = 12.0;

/// Score digit cell and placement
const SCORE_DIGIT: Vec2 = Vec2::new(14.0, 24.0);
const SCORE_TOP: f32 = 12.0;
/// Gap between each score and the center line
const SCORE_GAP: f32 = 24.0;

/// Controls hint bar along the bottom edge
const HINT_HEIGHT: f32 = 4.0;
const HINT_MARGIN: f32 = 10.0;

/// Host-selectable extras
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOptions {
    /// Draw a placeholder bar where the controls hint goes. Text is not
    /// tessellated; hosts with a font draw `KeyBindings::hint()` over it.
    pub show_controls_hint: bool,
    /// Dim the board while paused
    pub pause_veil: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            show_controls_hint: true,
            pause_veil: true,
        }
    }
}

/// Build the full triangle list for one frame
pub fn draw_list(snapshot: &Snapshot, options: &DrawOptions) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(512);
    let board = Rect::new(0.0, 0.0, BOARD_WIDTH, BOARD_HEIGHT);

    push_quad(&mut out, &board, snapshot.background.to_rgba_f32());

    let mut y = 0.0;
    while y < BOARD_HEIGHT {
        let dash = Rect::new(BOARD_WIDTH / 2.0 - DASH_WIDTH / 2.0, y, DASH_WIDTH, DASH_HEIGHT);
        push_quad(&mut out, &dash, colors::CENTER_LINE);
        y += DASH_SPACING;
    }

    push_quad(&mut out, &snapshot.player, colors::PADDLE);
    push_quad(&mut out, &snapshot.opponent, colors::PADDLE);
    push_quad(&mut out, &snapshot.ball, colors::BALL);

    // Player score right-aligned left of center, opponent's left-aligned right of it
    let player_x = BOARD_WIDTH / 2.0 - SCORE_GAP - number_width(snapshot.player_score, SCORE_DIGIT);
    number(
        &mut out,
        snapshot.player_score,
        Vec2::new(player_x, SCORE_TOP),
        SCORE_DIGIT,
        colors::SCORE,
    );
    number(
        &mut out,
        snapshot.opponent_score,
        Vec2::new(BOARD_WIDTH / 2.0 + SCORE_GAP, SCORE_TOP),
        SCORE_DIGIT,
        colors::SCORE,
    );

    if options.show_controls_hint {
        let bar = Rect::new(
            HINT_MARGIN,
            BOARD_HEIGHT - HINT_MARGIN - HINT_HEIGHT,
            BOARD_WIDTH / 2.0 - 2.0 * HINT_MARGIN,
            HINT_HEIGHT,
        );
        push_quad(&mut out, &bar, colors::HINT);
    }

    if snapshot.paused && options.pause_veil {
        push_quad(&mut out, &board, colors::PAUSE_VEIL);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::shapes::QUAD_VERTICES;
    use crate::sim::GameState;

    const DASHES: usize = 30;
    /// Background, dashes, two paddles, ball
    const BASE_QUADS: usize = 1 + DASHES + 3;

    fn no_extras() -> DrawOptions {
        DrawOptions {
            show_controls_hint: false,
            pause_veil: false,
        }
    }

    #[test]
    fn test_fresh_game_draw_list() {
        let snap = GameState::new(1).snapshot();
        let out = draw_list(&snap, &no_extras());
        // Two zeros, six segments each
        let score_quads = 12;
        assert_eq!(out.len(), (BASE_QUADS + score_quads) * QUAD_VERTICES);
    }

    #[test]
    fn test_background_drawn_first() {
        let snap = GameState::new(2).snapshot();
        let out = draw_list(&snap, &DrawOptions::default());
        let bg = snap.background.to_rgba_f32();
        assert!(out[..QUAD_VERTICES].iter().all(|v| v.color == bg));
        assert_eq!(out[0].position, [0.0, 0.0]);
    }

    #[test]
    fn test_ball_quad_uses_ball_color() {
        let snap = GameState::new(3).snapshot();
        let out = draw_list(&snap, &no_extras());
        let ball = &out[(1 + DASHES + 2) * QUAD_VERTICES..(1 + DASHES + 3) * QUAD_VERTICES];
        assert!(ball.iter().all(|v| v.color == colors::BALL));
        assert!(ball.iter().any(|v| v.position == [394.0, 294.0]));
    }

    #[test]
    fn test_extras_add_quads() {
        let mut state = GameState::new(4);
        let plain = draw_list(&state.snapshot(), &no_extras()).len();

        let with_hint = draw_list(&state.snapshot(), &DrawOptions::default()).len();
        assert_eq!(with_hint, plain + QUAD_VERTICES);

        state.pause.advance(crate::sim::PauseSignals {
            hold_pause: true,
            toggle_pause: false,
        });
        let paused = draw_list(&state.snapshot(), &DrawOptions::default()).len();
        assert_eq!(paused, plain + 2 * QUAD_VERTICES);
    }

    #[test]
    fn test_hint_is_one_bar_along_bottom() {
        let snap = GameState::new(6).snapshot();
        let out = draw_list(&snap, &DrawOptions::default());
        let bar = &out[out.len() - QUAD_VERTICES..];
        assert!(bar.iter().all(|v| v.color == colors::HINT));
        assert!(bar.iter().all(|v| v.position[1] >= BOARD_HEIGHT - HINT_MARGIN - HINT_HEIGHT));
        assert!(bar.iter().all(|v| v.position[1] <= BOARD_HEIGHT - HINT_MARGIN));
    }

    #[test]
    fn test_scores_straddle_center() {
        let mut state = GameState::new(5);
        state.score.player = 6;
        state.score.opponent = 3;
        let out = draw_list(&state.snapshot(), &no_extras());
        let scores = &out[BASE_QUADS * QUAD_VERTICES..];
        let (left, right): (Vec<&Vertex>, Vec<&Vertex>) =
            scores.iter().partition(|v| v.position[0] < BOARD_WIDTH / 2.0);
        assert!(!left.is_empty() && !right.is_empty());
        assert!(left.iter().all(|v| v.position[0] <= BOARD_WIDTH / 2.0 - SCORE_GAP));
        assert!(right.iter().all(|v| v.position[0] >= BOARD_WIDTH / 2.0 + SCORE_GAP));
    }
}
