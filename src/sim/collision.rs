//! Axis-aligned hit detection with forgiving hitboxes
//!
//! Sprites have transparent corners, so both rectangles are shrunk inward by a
//! fixed padding before the overlap test. Touching edges never count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Rectangle shrunk by `pad` on every edge
    #[inline]
    pub fn shrink(&self, pad: f32) -> Rect {
        Rect {
            pos: self.pos + Vec2::splat(pad),
            size: self.size - Vec2::splat(2.0 * pad),
        }
    }

    /// Strict overlap (shared edges are not an overlap)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// True if the padded hitboxes of `runner` and `obstacle` overlap
#[inline]
pub fn check_collision(runner: &Rect, obstacle: &Rect, padding: f32) -> bool {
    runner.shrink(padding).overlaps(&obstacle.shrink(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HITBOX_PADDING;
    use proptest::prelude::*;

    #[test]
    fn test_heavy_overlap_hits() {
        let runner = Rect::new(100.0, 260.0, 80.0, 90.0);
        let dragon = Rect::new(100.0, 260.0, 70.0, 60.0);
        assert!(check_collision(&runner, &dragon, HITBOX_PADDING));
    }

    #[test]
    fn test_obstacle_above_runner_misses() {
        let runner = Rect::new(100.0, 260.0, 80.0, 90.0);
        // Bottom edge at runner.y + 15: inside the visual box, outside the hitbox
        let dragon = Rect::new(100.0, 215.0, 70.0, 60.0);
        assert!(!check_collision(&runner, &dragon, HITBOX_PADDING));
    }

    #[test]
    fn test_padding_forgives_grazes() {
        let runner = Rect::new(100.0, 260.0, 80.0, 90.0);
        // Visual overlap of 20px on x
        let dragon = Rect::new(160.0, 260.0, 70.0, 60.0);
        assert!(runner.overlaps(&dragon));
        assert!(!check_collision(&runner, &dragon, HITBOX_PADDING));
    }

    fn rect() -> impl Strategy<Value = Rect> {
        (0.0f32..800.0, 0.0f32..400.0, 1.0f32..200.0, 1.0f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn disjoint_rects_never_hit(a in rect(), b in rect(), pad in 0.0f32..30.0) {
            prop_assume!(!a.overlaps(&b));
            prop_assert!(!check_collision(&a, &b, pad));
        }

        #[test]
        fn identical_rects_always_hit(a in rect(), frac in 0.0f32..0.49) {
            let pad = a.size.min_element() * frac;
            prop_assert!(check_collision(&a, &a, pad));
        }
    }
}
