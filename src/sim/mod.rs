//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per fixed frame, no delta time
//! - Seeded RNG only, owned by the game state
//! - No rendering or platform dependencies

pub mod collision;
pub mod color;
pub mod opponent;
pub mod pause;
pub mod serve;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use color::{Rgb, random_background};
pub use opponent::{track_ball, track_y};
pub use pause::{PauseMode, PauseOutcome, PauseSignals, PauseState, PauseTransition};
pub use serve::serve_velocity;
pub use snapshot::Snapshot;
pub use state::{Ball, GameEvent, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
