//! The generated scene data model
//!
//! A [`Scene`] is the sole output artifact of the generator: canvas
//! dimensions, the painted blocks, the selected lines and the master seed
//! that lets watercolor layer stacks be regenerated on demand. Scenes
//! serialize to JSON and an imported scene is equivalent input to a
//! freshly generated one.

use crate::color::families::{ColorFamily, Rgb};
use crate::io::error::{GeneratorError, Result};
use crate::spatial::canvas::Canvas;
use crate::spatial::rect::Rect;
use serde::{Deserialize, Serialize};

/// Per-block jitter offsets
///
/// The jitter scales currently sit at zero, but the draws that produce
/// these values are part of the deterministic stream and the fields stay
/// in the exchange format.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Jitter {
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
    /// Width adjustment
    pub w: f64,
    /// Height adjustment
    pub h: f64,
}

/// A colored terminal block of the subdivision
///
/// Created once by the builder and immutable afterwards. Blocks sampled
/// into the reserved white family are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Region of the canvas this block covers
    pub rect: Rect,
    /// Sampled color family
    pub family: ColorFamily,
    /// Literal color drawn from the family palette
    pub color: Rgb,
    /// How strongly this block exhibits watercolor character, in [0, 1]
    pub painterliness: f64,
    /// Whether the rect lies on the canvas's outer edge
    pub touches_border: bool,
    /// Painterly jitter applied when painting
    pub jitter: Jitter,
}

impl Block {
    /// The rect actually painted: jitter applied, clamped to the canvas
    /// origin and to a positive extent.
    pub fn painted_rect(&self) -> Rect {
        let x = (f64::from(self.rect.x) + self.jitter.x) as i32;
        let y = (f64::from(self.rect.y) + self.jitter.y) as i32;
        let w = (f64::from(self.rect.w) + self.jitter.w) as i32;
        let h = (f64::from(self.rect.h) + self.jitter.h) as i32;
        Rect::new(x.max(0), y.max(0), w.max(1), h.max(1))
    }
}

/// A drawn composition line
///
/// Produced from a full-span candidate divider by optional endpoint
/// trimming; `thickness` multiplies the caller's base stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedLine {
    /// Start x
    pub x1: f64,
    /// Start y
    pub y1: f64,
    /// End x
    pub x2: f64,
    /// End y
    pub y2: f64,
    /// Stroke width multiplier, roughly in [0.6, 1.4]
    pub thickness: f64,
}

/// A complete generated painting description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Master seed; watercolor layers fork from `(seed, block index)`
    pub seed: u64,
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Painted blocks in subdivision order
    pub blocks: Vec<Block>,
    /// Drawn lines in candidate order
    pub lines: Vec<SelectedLine>,
}

impl Scene {
    /// The validated canvas for this scene
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidDimension`] for a zero dimension.
    pub const fn canvas(&self) -> Result<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Validate an imported scene before accepting it
    ///
    /// An imported scene is either accepted whole or rejected whole;
    /// generation never proceeds from a partially valid import.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MalformedScene`] naming the first
    /// inconsistency found.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(malformed(format!(
                "canvas dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        for (index, block) in self.blocks.iter().enumerate() {
            if block.rect.w <= 0 || block.rect.h <= 0 {
                return Err(malformed(format!(
                    "block {index} has non-positive extent {}x{}",
                    block.rect.w, block.rect.h
                )));
            }
            if !block.painterliness.is_finite()
                || !(0.0..=1.0).contains(&block.painterliness)
            {
                return Err(malformed(format!(
                    "block {index} painterliness {} outside [0, 1]",
                    block.painterliness
                )));
            }
            if block.family == ColorFamily::White {
                return Err(malformed(format!(
                    "block {index} carries the reserved white family"
                )));
            }
        }
        for (index, line) in self.lines.iter().enumerate() {
            let coords = [line.x1, line.y1, line.x2, line.y2];
            if coords.iter().any(|c| !c.is_finite()) {
                return Err(malformed(format!("line {index} has non-finite coordinates")));
            }
            if !line.thickness.is_finite() || line.thickness < 0.0 {
                return Err(malformed(format!(
                    "line {index} thickness {} must be non-negative",
                    line.thickness
                )));
            }
        }
        Ok(())
    }
}

fn malformed(reason: String) -> GeneratorError {
    GeneratorError::MalformedScene { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(rect: Rect) -> Block {
        Block {
            rect,
            family: ColorFamily::Red,
            color: Rgb::new(227, 28, 37),
            painterliness: 0.5,
            touches_border: false,
            jitter: Jitter::default(),
        }
    }

    fn valid_scene() -> Scene {
        Scene {
            seed: 42,
            width: 1200,
            height: 600,
            blocks: vec![block(Rect::new(40, 40, 100, 80))],
            lines: vec![SelectedLine { x1: 0.0, y1: 10.0, x2: 50.0, y2: 10.0, thickness: 1.0 }],
        }
    }

    #[test]
    fn valid_scene_passes_validation() {
        assert!(valid_scene().validate().is_ok());
    }

    #[test]
    fn zero_canvas_dimension_is_rejected() {
        let mut scene = valid_scene();
        scene.height = 0;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn non_positive_block_extent_is_rejected() {
        let mut scene = valid_scene();
        scene.blocks = vec![block(Rect::new(0, 0, 0, 10))];
        assert!(scene.validate().is_err());
    }

    #[test]
    fn out_of_range_painterliness_is_rejected() {
        let mut scene = valid_scene();
        if let Some(b) = scene.blocks.get_mut(0) {
            b.painterliness = 1.5;
        }
        assert!(scene.validate().is_err());
    }

    #[test]
    fn white_family_block_is_rejected() {
        let mut scene = valid_scene();
        if let Some(b) = scene.blocks.get_mut(0) {
            b.family = ColorFamily::White;
        }
        assert!(scene.validate().is_err());
    }

    #[test]
    fn negative_line_thickness_is_rejected() {
        let mut scene = valid_scene();
        if let Some(line) = scene.lines.get_mut(0) {
            line.thickness = -0.1;
        }
        assert!(scene.validate().is_err());
    }

    #[test]
    fn painted_rect_clamps_to_canvas_origin_and_positive_extent() {
        let mut b = block(Rect::new(0, 0, 2, 2));
        b.jitter = Jitter { x: -5.0, y: -5.0, w: -10.0, h: -10.0 };
        let painted = b.painted_rect();
        assert_eq!(painted, Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn painted_rect_without_jitter_is_the_block_rect() {
        let b = block(Rect::new(7, 9, 30, 40));
        assert_eq!(b.painted_rect(), b.rect);
    }

    #[test]
    fn scene_json_round_trip_preserves_equality() {
        let scene = valid_scene();
        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, back);
    }
}
