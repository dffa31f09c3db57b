//! Axis-aligned rectangles and overlap tests
//!
//! Vector math comes from `glam::Vec2`; this module only adds the AABB type
//! every collision sweep is built on.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with a top-left origin (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[cfg(test)]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            w: size.x,
            h: size.y,
        }
    }

    /// True when the rectangles share a region of non-zero area.
    ///
    /// Edges that merely touch do not count as an overlap.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Unit vector pointing from `from` to `to`, or zero when they coincide
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(r, Rect::new(90.0, 45.0, 20.0, 10.0));
    }

    #[test]
    fn test_direction_of_zero_vector_is_zero() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(direction(p, p), Vec2::ZERO);
        let d = direction(Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..100.0, 0.0f32..100.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersects_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_edge_touching_never_intersects(a in rect_strategy(), h in 0.0f32..100.0, dy in -50.0f32..50.0) {
            let right = Rect::new(a.x + a.w, a.y + dy, 10.0, h);
            let below = Rect::new(a.x + dy, a.y + a.h, 10.0, h);
            prop_assert!(!a.intersects(&right));
            prop_assert!(!a.intersects(&below));
        }
    }
}
