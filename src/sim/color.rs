//! Background color generation
//!
//! The background changes on every paddle hit as visual feedback. Colors are
//! kept away from near-black and near-white, and bright draws are darkened so
//! the white paddles and score stay readable.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_BACKGROUND_LUMINANCE;

/// Opaque RGB color (alpha is always 255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceptual luminance (ITU-R BT.601 weights)
    pub fn luminance(&self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }

    /// Normalized RGBA for vertex colors
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Draw a random background color with luminance capped at
/// [`MAX_BACKGROUND_LUMINANCE`].
///
/// Each channel is uniform in `[10, 239]`. When the draw is too bright all
/// three channels are scaled by the same factor, which keeps the hue.
pub fn random_background<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let color = Rgb::new(
        rng.random_range(10..=239),
        rng.random_range(10..=239),
        rng.random_range(10..=239),
    );

    let lum = color.luminance();
    if lum <= MAX_BACKGROUND_LUMINANCE {
        return color;
    }

    // Truncation only ever lowers the channels, so the cap still holds
    let factor = MAX_BACKGROUND_LUMINANCE / lum;
    Rgb::new(
        (color.r as f32 * factor) as u8,
        (color.g as f32 * factor) as u8,
        (color.b as f32 * factor) as u8,
    )
}
