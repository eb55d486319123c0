//! Shape generation for 2D primitives
//!
//! Everything is built from axis-aligned quads (two triangles each).

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Vertices per quad
pub const QUAD_VERTICES: usize = 6;

/// Generate vertices for a filled axis-aligned rectangle
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; QUAD_VERTICES] {
    let (l, t) = (rect.left(), rect.top());
    let (r, b) = (rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Push a quad onto a vertex list
pub fn push_quad(out: &mut Vec<Vertex>, rect: &Rect, color: [f32; 4]) {
    out.extend_from_slice(&quad(rect, color));
}

/// Seven-segment layout, bit order: top, top-right, bottom-right, bottom,
/// bottom-left, top-left, middle
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, // 0
    0b0000110, // 1
    0b1011011, // 2
    0b1001111, // 3
    0b1100110, // 4
    0b1101101, // 5
    0b1111101, // 6
    0b0000111, // 7
    0b1111111, // 8
    0b1101111, // 9
];

/// Segment rectangles of a digit cell at `origin`, `size` = (width, height)
fn segment_rects(origin: Vec2, size: Vec2, thickness: f32) -> [Rect; 7] {
    let (w, h, t) = (size.x, size.y, thickness);
    let half = h / 2.0;
    let (x, y) = (origin.x, origin.y);
    [
        Rect::new(x, y, w, t),                      // top
        Rect::new(x + w - t, y, t, half),           // top-right
        Rect::new(x + w - t, y + half, t, half),    // bottom-right
        Rect::new(x, y + h - t, w, t),              // bottom
        Rect::new(x, y + half, t, half),            // bottom-left
        Rect::new(x, y, t, half),                   // top-left
        Rect::new(x, y + half - t / 2.0, w, t),     // middle
    ]
}

/// Generate vertices for one decimal digit as seven-segment quads
pub fn digit(out: &mut Vec<Vertex>, value: u8, origin: Vec2, size: Vec2, color: [f32; 4]) {
    let mask = DIGIT_SEGMENTS[(value % 10) as usize];
    let thickness = (size.x / 5.0).max(1.0);
    for (i, rect) in segment_rects(origin, size, thickness).iter().enumerate() {
        if mask & (1 << i) != 0 {
            push_quad(out, rect, color);
        }
    }
}

/// Width of `value` drawn with [`number`]
pub fn number_width(value: u32, size: Vec2) -> f32 {
    let digits = value.to_string().len() as f32;
    digits * size.x + (digits - 1.0) * digit_gap(size)
}

fn digit_gap(size: Vec2) -> f32 {
    size.x / 2.0
}

/// Generate vertices for a decimal number, left edge at `origin.x`
pub fn number(out: &mut Vec<Vertex>, value: u32, origin: Vec2, size: Vec2, color: [f32; 4]) {
    let step = size.x + digit_gap(size);
    for (i, ch) in value.to_string().bytes().enumerate() {
        let at = origin + Vec2::new(i as f32 * step, 0.0);
        digit(out, ch - b'0', at, size, color);
    }
}
