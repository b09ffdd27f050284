//! Axis-aligned rectangle geometry for bricks, paddle and ball
//!
//! Coordinates have their origin at the top-left of the arena with y growing
//! downward. A rectangle is defined by its top-left corner and its size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square with the given top-left corner and side length
    pub fn square(top_left: Vec2, side: f32) -> Self {
        Self {
            pos: top_left,
            size: Vec2::splat(side),
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

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Check if a point is inside the rectangle (see [`rect_contains`])
    pub fn contains(&self, point: Vec2) -> bool {
        rect_contains(self, point)
    }

    /// Whether the horizontal extents of two rectangles overlap
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && other.left() < self.right()
    }
}

/// Point-in-rectangle test used by every collision probe.
///
/// Bounds are half-open: the left and top edges are inside, the right and
/// bottom edges are not. Adjacent rectangles therefore never both claim a
/// point on their shared edge.
#[inline]
pub fn rect_contains(rect: &Rect, point: Vec2) -> bool {
    point.x >= rect.left()
        && point.x < rect.right()
        && point.y >= rect.top()
        && point.y < rect.bottom()
}

/// Corners of a square in probe order: top-left, top-right, bottom-left, bottom-right
pub fn probe_corners(top_left: Vec2, side: f32) -> [Vec2; 4] {
    [
        top_left,
        top_left + Vec2::new(side, 0.0),
        top_left + Vec2::new(0.0, side),
        top_left + Vec2::new(side, side),
    ]
}
