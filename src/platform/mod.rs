//! Platform abstraction layer
//!
//! Host-side plumbing around the simulation:
//! - Key bindings (held keys to per-frame input)
//! - Fixed-step timing (host frame time to simulation steps)

pub mod clock;
pub mod input;

pub use clock::FixedStep;
pub use input::{Key, KeyBindings};
