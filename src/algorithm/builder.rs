//! Scene construction
//!
//! Runs the three generation passes in a fixed order over one seeded
//! stream: subdivision, block coloring, line selection. The order and the
//! exact number of draws each pass consumes are part of the output
//! contract; any reordering changes the painting.

use crate::algorithm::lines::select_lines;
use crate::algorithm::scene::{Block, Jitter, Scene};
use crate::color::families::ColorFamily;
use crate::color::sampler::{pick_color, sample_family};
use crate::io::configuration::{
    BASE_CANVAS_HEIGHT, BASE_CANVAS_WIDTH, JITTER_POSITION_SCALE, JITTER_SIZE_SCALE,
};
use crate::io::error::Result;
use crate::math::random::RandomStream;
use crate::spatial::canvas::Canvas;
use crate::spatial::subdivide::subdivide_canvas;

/// Inputs of a generation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    /// Master seed
    pub seed: u64,
    /// Canvas width in canvas units
    pub width: u32,
    /// Canvas height in canvas units
    pub height: u32,
}

impl GeneratorParams {
    /// Parameters for the canonical 2:1 canvas scaled by a multiplier
    pub fn scaled(seed: u64, size_multiplier: f64) -> Self {
        Self {
            seed,
            width: (f64::from(BASE_CANVAS_WIDTH) * size_multiplier) as u32,
            height: (f64::from(BASE_CANVAS_HEIGHT) * size_multiplier) as u32,
        }
    }
}

/// Builds a [`Scene`] from seed and parameters
#[derive(Debug, Clone, Copy)]
pub struct SceneBuilder {
    params: GeneratorParams,
}

impl SceneBuilder {
    /// Create a builder for the given parameters
    pub const fn new(params: GeneratorParams) -> Self {
        Self { params }
    }

    /// Run the full generation pipeline
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidDimension`] when either
    /// canvas dimension is zero; dimensions are validated before any
    /// subdivision begins.
    pub fn build(&self) -> Result<Scene> {
        let canvas = Canvas::new(self.params.width, self.params.height)?;
        let mut stream = RandomStream::new(self.params.seed);

        let (rects, candidates) = subdivide_canvas(&canvas, &mut stream);

        let mut blocks = Vec::new();
        for rect in rects {
            let (center_x, center_y) = rect.center();
            let painterliness = (1.0 - canvas.edgeness(center_x, center_y)).max(0.0);

            let family = sample_family(painterliness.sqrt(), &mut stream);
            if family == ColorFamily::White {
                // No paint; the stream moves on without further draws
                continue;
            }
            let color = pick_color(family, &mut stream);
            let touches_border = canvas.touches_border(&rect);

            // The jitter scales are zero, but these four draws are part
            // of the stream contract and are always consumed
            let jitter = Jitter {
                x: stream.uniform().mul_add(2.0, -1.0) * painterliness * JITTER_POSITION_SCALE,
                y: stream.uniform().mul_add(2.0, -1.0) * painterliness * JITTER_POSITION_SCALE,
                w: stream.uniform().mul_add(4.0, -2.0) * painterliness * JITTER_SIZE_SCALE,
                h: stream.uniform().mul_add(4.0, -2.0) * painterliness * JITTER_SIZE_SCALE,
            };

            blocks.push(Block {
                rect,
                family,
                color,
                painterliness,
                touches_border,
                jitter,
            });
        }

        let lines = select_lines(&candidates, &canvas, &mut stream);

        Ok(Scene {
            seed: self.params.seed,
            width: self.params.width,
            height: self.params.height,
            blocks,
            lines,
        })
    }
}
