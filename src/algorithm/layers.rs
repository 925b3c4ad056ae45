//! Watercolor layer schedule
//!
//! Turns a block's initial quadrilateral into the ordered sequence of
//! translucent polygon layers a renderer composites. Four polygon
//! lineages evolve from the seed shape at different rates; every
//! iteration emits one snapshot of each, the main lineage with a stroke.
//! Erosion passes, emitted after all paint layers, tell the renderer
//! where to lift small flecks of paint back off the paper.

use crate::algorithm::scene::{Block, Scene};
use crate::algorithm::watercolor::{BleedMode, Polygon};
use crate::math::mapping::rmap;
use crate::math::random::RandomStream;

/// Span of the layer count and stroke weight schedules
///
/// The stroke weight ramp always runs over `[0, 24]` even when the layer
/// count is below 24; the mismatch is part of the source algorithm's
/// look and is kept as-is.
const LAYER_SCHEDULE_SPAN: f64 = 24.0;
/// Upper end of the bleed strength domain
const MAX_BLEED_STRENGTH: f64 = 0.15;
/// Upper end of the opacity base domain
const MAX_OPACITY_BASE: f64 = 155.0;

/// One translucent polygon layer
#[derive(Debug, Clone, PartialEq)]
pub struct PaintLayer {
    /// Shape to fill
    pub polygon: Polygon,
    /// Fill alpha on the 0-255 scale (small; layers accumulate)
    pub alpha: f64,
    /// Whether the layer outline is stroked
    pub has_stroke: bool,
    /// Stroke alpha on the 0-255 scale
    pub stroke_alpha: f64,
    /// Stroke weight in canvas units
    pub stroke_weight: f64,
}

/// One renderer-side erosion pass
///
/// The renderer lifts paint with small random circles around the
/// polygon's centroid; circle count and radii are drawn renderer-side,
/// the engine only fixes the shape snapshot and the erase strength.
#[derive(Debug, Clone, PartialEq)]
pub struct ErosionPass {
    /// Main-lineage snapshot after the iteration that spawned this pass
    pub polygon: Polygon,
    /// Erase strength; passes are only emitted when positive
    pub strength: f64,
}

/// The complete paint plan for one block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerStack {
    /// Paint layers in compositing order
    pub layers: Vec<PaintLayer>,
    /// Erosion passes, applied after every paint layer
    pub erosions: Vec<ErosionPass>,
}

/// Watercolor tuning for one block, derived from its painterliness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BleedParams {
    /// Outward spread of the paint, in [0, 0.15]
    pub bleed_strength: f64,
    /// Paper texture intensity
    pub texture_strength: f64,
    /// Edge darkening of the painted shape
    pub border_strength: f64,
    /// Overall opacity on the 0-155 scale
    pub opacity_base: f64,
}

impl BleedParams {
    /// Derive block parameters from painterliness
    ///
    /// Painterly central blocks bleed and texture more but sit lighter
    /// on the paper, echoing the source's 75%-to-55% opacity ramp.
    pub fn from_painterliness(painterliness: f64) -> Self {
        Self {
            bleed_strength: MAX_BLEED_STRENGTH * painterliness,
            texture_strength: 0.5 * painterliness,
            border_strength: 1.0 - painterliness,
            opacity_base: MAX_OPACITY_BASE * 0.2f64.mul_add(-painterliness, 0.75),
        }
    }
}

/// Build the layer sequence for one seed polygon
///
/// Deterministic over the supplied stream: the same polygon, parameters
/// and stream state always produce the same stack.
pub fn build_layers(
    initial: &Polygon,
    params: &BleedParams,
    stream: &mut RandomStream,
) -> LayerStack {
    let bleed = rmap(params.bleed_strength, 0.0, MAX_BLEED_STRENGTH, 0.6, 1.0, true);
    let num_layers = (LAYER_SCHEDULE_SPAN * bleed) as usize;
    let intensity = rmap(params.opacity_base, 0.0, MAX_OPACITY_BASE, 0.0, 20.0, true);
    let texture = params.texture_strength * 3.0;

    // Lineage fill alphas, in lineage order
    let alpha_main = intensity / 5.0;
    let alpha_second = (texture * intensity).mul_add(1.0 / 3.0, intensity / 7.0);
    let alpha_third = (texture * intensity).mul_add(1.0 / 3.0, intensity / 4.0);
    let alpha_fourth = (texture * intensity).mul_add(1.0 / 6.0, intensity / 5.0);
    let stroke_alpha = params.border_strength * intensity;

    let erosion_strength = 3.5f64.mul_add(texture, -rmap(intensity, 80.0, 120.0, 0.3, 1.0, true));

    let mut pol = initial.grow_default(stream);
    let mut pol2 = pol.grow_default(stream).grow(0.9, false, stream);
    let mut pol3 = pol2.grow(0.75, false, stream);
    let mut pol4 = initial.grow(0.6, false, stream);

    let mut stack = LayerStack::default();

    for i in 0..num_layers {
        if i == num_layers / 4 || i == num_layers / 2 || i == 3 * num_layers / 4 {
            pol = pol.grow_default(stream);
            if bleed >= 0.99 || i == num_layers / 2 {
                pol2 = pol2.grow(0.75, false, stream);
                pol3 = pol3.grow(0.75, false, stream);
                pol4 = pol4.grow(0.1, true, stream);
            }
        }

        let stroke_weight = rmap(i as f64, 0.0, LAYER_SCHEDULE_SPAN, 6.0, 0.5, false);

        push_layer(
            &mut stack.layers,
            pol.grow_default(stream),
            alpha_main,
            true,
            stroke_alpha,
            stroke_weight,
        );
        push_layer(
            &mut stack.layers,
            pol2.grow_default(stream),
            alpha_second,
            false,
            0.0,
            stroke_weight,
        );
        push_layer(
            &mut stack.layers,
            pol3.grow_default(stream),
            alpha_third,
            false,
            0.0,
            stroke_weight,
        );
        push_layer(
            &mut stack.layers,
            pol4.grow_default(stream),
            alpha_fourth,
            false,
            0.0,
            stroke_weight,
        );

        if erosion_strength > 0.0 {
            stack.erosions.push(ErosionPass {
                polygon: pol.clone(),
                strength: erosion_strength,
            });
        }
    }

    stack
}

/// Build the paint plan for one scene block, or `None` when the block is
/// not watercolored (border blocks are filled solid).
///
/// Uses an independent stream forked from `(scene seed, block index)`,
/// so plans can be computed lazily, in any order, or in parallel without
/// changing the result — including for scenes restored from an export.
pub fn paint_plan(scene: &Scene, block_index: usize) -> Option<LayerStack> {
    let block = scene.blocks.get(block_index)?;
    if block.touches_border {
        return None;
    }
    let mut stream = RandomStream::fork_for_block(scene.seed, block_index);
    Some(block_plan(block, &mut stream))
}

fn block_plan(block: &Block, stream: &mut RandomStream) -> LayerStack {
    let params = BleedParams::from_painterliness(block.painterliness);
    let corners = block.painted_rect().corners();
    let initial = Polygon::initial(corners, params.bleed_strength, BleedMode::Out, stream);
    build_layers(&initial, &params, stream)
}

fn push_layer(
    layers: &mut Vec<PaintLayer>,
    polygon: Polygon,
    alpha: f64,
    has_stroke: bool,
    stroke_alpha: f64,
    stroke_weight: f64,
) {
    // Degenerate snapshots contribute nothing visible
    if polygon.vertices.len() < 3 {
        return;
    }
    layers.push(PaintLayer {
        polygon,
        alpha,
        has_stroke,
        stroke_alpha,
        stroke_weight,
    });
}
