//! Spatial primitives and canvas subdivision
//!
//! This module contains the geometric side of the generator:
//! - Canvas dimensions and center-distance measures
//! - Rectangles and candidate divider lines
//! - The recursive quadrant subdivision pass

/// Validated canvas dimensions and edgeness
pub mod canvas;
/// Rectangles and full-span candidate dividers
pub mod rect;
/// Recursive quadrant subdivision
pub mod subdivide;
/// Minimal 2-D vector used by the watercolor engine
pub mod vec2;

pub use canvas::Canvas;
pub use rect::{PotentialLine, Rect};
pub use vec2::Vec2;
