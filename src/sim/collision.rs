//! Axis-aligned rectangle geometry
//!
//! Everything on the board (paddles, ball) is an axis-aligned box, so a single
//! overlap test covers every ball/paddle contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// True iff the two rectangles share positive-area overlap.
///
/// All four half-plane tests are strict, so rectangles that only touch along
/// an edge or a corner do not overlap.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(20.0, 255.0, 12.0, 90.0);
        let inner = Rect::new(22.0, 300.0, 4.0, 4.0);
        assert!(rects_overlap(&outer, &inner));
        assert!(rects_overlap(&inner, &outer));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the vertical edge x = 10
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        // Shares the horizontal edge y = 10
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        // Shares only the corner (10, 10)
        let corner = Rect::new(10.0, 10.0, 10.0, 10.0);

        assert!(!rects_overlap(&a, &right));
        assert!(!rects_overlap(&a, &below));
        assert!(!rects_overlap(&a, &corner));
    }

    #[test]
    fn test_separated_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &Rect::new(50.0, 0.0, 10.0, 10.0)));
        assert!(!rects_overlap(&a, &Rect::new(0.0, -30.0, 10.0, 10.0)));
    }

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(20.0, 255.0, 12.0, 90.0);
        assert_eq!(r.left(), 20.0);
        assert_eq!(r.right(), 32.0);
        assert_eq!(r.top(), 255.0);
        assert_eq!(r.bottom(), 345.0);
        assert_eq!(r.center(), Vec2::new(26.0, 300.0));
    }
}
