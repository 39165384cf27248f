//! Axis-aligned rectangle helpers used for hit detection

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in arena pixels (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: IVec2, radius: i32) -> Self {
        Self {
            pos: center - IVec2::splat(radius),
            size: IVec2::splat(radius * 2),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
