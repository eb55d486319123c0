//! Fixed-step timing
//!
//! The simulation moves a fixed distance per step, so hosts must step it at a
//! fixed rate regardless of display refresh. This accumulator turns variable
//! host frame times into a whole number of steps.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Largest host frame time accepted (seconds); longer stalls are dropped
const MAX_FRAME_DT: f32 = 0.1;

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        debug_assert!(step > 0.0, "fixed step must be positive");
        Self {
            step,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds of host time and return how many steps to run now.
    ///
    /// Never returns more than `max_substeps`; time beyond that is discarded
    /// so a long stall cannot snowball.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == self.max_substeps && self.accumulator >= self.step {
            log::trace!("Dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        steps
    }
}
