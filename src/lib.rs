//! Solo Pong - one human paddle against a scripted opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scoring, pause, game state)
//! - `renderer`: Snapshot to vertex list tessellation
//! - `platform`: Key bindings and fixed-step timing for hosts
//! - `settings`: Host preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// Distances are pixels, speeds are pixels per simulation step.
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the rate the physics is tuned for)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    /// Gap between a paddle and its side of the board
    pub const PADDLE_MARGIN: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const OPPONENT_MAX_SPEED: f32 = 4.0;
    /// Opponent ignores target offsets up to this many pixels
    pub const OPPONENT_DEAD_ZONE: f32 = 1.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 12.0;
    pub const BALL_SPEED: f32 = 5.0;
    /// Vertical speed per pixel of hit offset from paddle center
    pub const DEFLECTION_FACTOR: f32 = 0.12;
    /// Serves with less vertical speed than this get a random nudge
    pub const MIN_SERVE_VY: f32 = 0.5;

    /// First to this many points resets the match
    pub const WIN_SCORE: u32 = 7;

    /// Frames the toggle-pause key is ignored after flipping (~120 ms)
    pub const TOGGLE_DEBOUNCE_FRAMES: u32 = 7;

    /// Background luminance cap (keeps white paddles and text readable)
    pub const MAX_BACKGROUND_LUMINANCE: f32 = 180.0;
}
