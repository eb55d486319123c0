//! Pause state machine
//!
//! Two held-key signals drive one mode:
//! - hold-to-pause only ever pauses; releasing it does nothing
//! - toggle flips the mode, then ignores itself for a few frames so a held
//!   key does not flip every frame
//!
//! The debounce counts frames instead of sleeping, so a step never blocks.

use serde::{Deserialize, Serialize};

use crate::consts::TOGGLE_DEBOUNCE_FRAMES;

/// Current pause mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PauseMode {
    #[default]
    Running,
    Paused,
}

impl PauseMode {
    fn flipped(self) -> Self {
        match self {
            PauseMode::Running => PauseMode::Paused,
            PauseMode::Paused => PauseMode::Running,
        }
    }
}

/// Raw pause signals for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseSignals {
    pub hold_pause: bool,
    pub toggle_pause: bool,
}

/// A mode change taken this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseTransition {
    /// Hold-to-pause fired while running
    HoldPaused,
    /// Toggle fired; carries the new mode
    Toggled(PauseMode),
}

/// Result of feeding one frame of signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseOutcome {
    pub transition: Option<PauseTransition>,
    /// Whether the rest of the step should run
    pub run_frame: bool,
}

/// Pause mode plus toggle debounce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseState {
    pub mode: PauseMode,
    /// Frames left before the toggle is honoured again
    toggle_cooldown: u32,
}

impl PauseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.mode == PauseMode::Paused
    }

    /// Feed one frame of signals.
    ///
    /// Hold-to-pause is checked first. When it fires, the toggle is not
    /// looked at this frame. When the game is already paused and hold-to-pause
    /// is still held, the toggle can still resume it.
    pub fn advance(&mut self, signals: PauseSignals) -> PauseOutcome {
        let toggle_ready = self.toggle_cooldown == 0;
        self.toggle_cooldown = self.toggle_cooldown.saturating_sub(1);

        if signals.hold_pause && self.mode == PauseMode::Running {
            self.mode = PauseMode::Paused;
            return PauseOutcome {
                transition: Some(PauseTransition::HoldPaused),
                run_frame: false,
            };
        }

        let mut transition = None;
        if signals.toggle_pause && toggle_ready {
            self.mode = self.mode.flipped();
            self.toggle_cooldown = TOGGLE_DEBOUNCE_FRAMES;
            transition = Some(PauseTransition::Toggled(self.mode));
        }

        PauseOutcome {
            transition,
            run_frame: self.mode == PauseMode::Running,
        }
    }
}
