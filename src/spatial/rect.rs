//! Rectangles and candidate divider lines
//!
//! Both originate from the same subdivision pass and share integer canvas
//! coordinates.

use crate::spatial::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned integer rectangle with positive extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width, always positive
    pub w: i32,
    /// Height, always positive
    pub h: i32,
}

impl Rect {
    /// Construct from origin and extent
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Shorter of the two sides
    pub const fn min_side(&self) -> i32 {
        if self.w < self.h { self.w } else { self.h }
    }

    /// Center point in canvas coordinates
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.x) + f64::from(self.w) / 2.0,
            f64::from(self.y) + f64::from(self.h) / 2.0,
        )
    }

    /// Corner points in drawing order: top-left, top-right, bottom-right,
    /// bottom-left. Seeds the watercolor polygon for a painted block.
    pub fn corners(&self) -> Vec<Vec2> {
        let (x0, y0) = (f64::from(self.x), f64::from(self.y));
        let (x1, y1) = (x0 + f64::from(self.w), y0 + f64::from(self.h));
        vec![
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ]
    }
}

/// Full-span candidate divider produced at a subdivision split
///
/// Always axis-aligned and never shortened; the stochastic selection pass
/// trims endpoints when turning a candidate into a drawn line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialLine {
    /// Start x
    pub x1: i32,
    /// Start y
    pub y1: i32,
    /// End x
    pub x2: i32,
    /// End y
    pub y2: i32,
}

impl PotentialLine {
    /// Midpoint in canvas coordinates
    pub fn midpoint(&self) -> (f64, f64) {
        (
            f64::from(self.x1 + self.x2) / 2.0,
            f64::from(self.y1 + self.y2) / 2.0,
        )
    }
}
