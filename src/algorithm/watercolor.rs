//! Immutable watercolor polygon and its growth transform
//!
//! A painted block's quadrilateral is deformed into progressively softer
//! shapes by repeatedly doubling its vertex count: every edge gains a
//! displaced midpoint, pushed outward (or inward) perpendicular to the
//! edge by an amount controlled by per-vertex bleed modifiers. The
//! polygon is an immutable value; [`Polygon::grow`] returns a new one and
//! never mutates in place, which keeps the layer schedule replayable.

use crate::math::random::RandomStream;
use crate::spatial::vec2::Vec2;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Bleed modifier ceiling for "fluid" vertices
const FLUID_MODIFIER_CAP: f64 = 0.9;
/// Vertex count above which a growth step may trim before doubling
const TRIM_VERTEX_THRESHOLD: usize = 10;
/// Growth factor below which trimming is skipped
const TRIM_GROWTH_FLOOR: f64 = 0.2;
/// Growth factor that marks a texture pass with forced modifiers
const TEXTURE_PASS_FACTOR: f64 = 0.1;

/// Which side of its original edge the paint spreads toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BleedMode {
    /// Spread away from the polygon center
    Out,
    /// Spread toward the polygon center
    In,
}

/// An immutable watercolor polygon state
///
/// `vertices`, `modifiers` and `directions` are parallel arrays: one
/// bleed modifier per vertex and one outward flag per edge (edge `i`
/// connects vertex `i` to vertex `i + 1`, cyclically). `center` and
/// `size` are fixed at construction from the seed vertices and carried
/// unchanged through every growth step.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertex ring
    pub vertices: Vec<Vec2>,
    /// Per-vertex bleed modifiers
    pub modifiers: Vec<f64>,
    /// Per-edge outward flags
    pub directions: Vec<bool>,
    /// Centroid of the original seed vertices
    pub center: Vec2,
    /// Max centroid-to-vertex distance at construction
    pub size: f64,
    /// Bleed strength this polygon was seeded with, in [0, ~0.15]
    pub bleed_strength: f64,
    /// Bleed direction
    pub mode: BleedMode,
}

impl Polygon {
    /// Build the initial polygon for a painted region
    ///
    /// A random leading run of vertices becomes "fluid" (doubled,
    /// capped modifiers), then the vertex and modifier rings are rotated
    /// by a random offset so the fluid run does not pin a fixed seam
    /// vertex. Edge direction flags are computed after the rotation.
    pub fn initial(
        vertices: Vec<Vec2>,
        bleed_strength: f64,
        mode: BleedMode,
        stream: &mut RandomStream,
    ) -> Self {
        let n = vertices.len();
        let center = centroid(&vertices);
        let size = vertices
            .iter()
            .map(|v| (*v - center).length())
            .fold(0.0, f64::max);

        let fluid = (n as f64 * stream.range(0.0, 0.4)) as usize;
        let mut modifiers: Vec<f64> = vertices
            .iter()
            .map(|_| stream.range(0.8, 1.2) * bleed_strength)
            .collect();
        for modifier in modifiers.iter_mut().take(fluid) {
            *modifier = (*modifier * 2.0).clamp(0.0, FLUID_MODIFIER_CAP);
        }

        let mut vertices = vertices;
        if n > 0 {
            let shift = stream.pick_index(n);
            vertices.rotate_left(shift);
            modifiers.rotate_left(shift);
        }

        let directions = edge_directions(&vertices, center);

        Self {
            vertices,
            modifiers,
            directions,
            center,
            size,
            bleed_strength,
            mode,
        }
    }

    /// One growth step with the default factor
    pub fn grow_default(&self, stream: &mut RandomStream) -> Self {
        self.grow(1.0, false, stream)
    }

    /// Produce the successor polygon
    ///
    /// When the polygon is large enough and the factor permits, a
    /// centered run of `round((1 - factor) * n)` vertices is removed
    /// first. Every surviving edge then contributes its start vertex and
    /// a displaced midpoint, so the vertex count exactly doubles.
    ///
    /// `degrow` halves and inverts the modifiers, retracting the paint
    /// instead of spreading it. A factor of exactly 0.1 marks a texture
    /// pass: modifiers are forced to 0.25 (weak bleed) or 0.75 before
    /// the degrow inversion.
    ///
    /// A polygon with fewer than 3 vertices is returned unchanged
    /// without consuming any draws; degenerate shapes can arise from
    /// aggressive trimming and simply contribute nothing visible.
    pub fn grow(&self, growth_factor: f64, degrow: bool, stream: &mut RandomStream) -> Self {
        if self.vertices.len() < 3 {
            return self.clone();
        }

        let mut vertices = self.vertices.clone();
        let mut modifiers = self.modifiers.clone();
        let mut directions = self.directions.clone();

        let n = vertices.len();
        if n > TRIM_VERTEX_THRESHOLD && growth_factor >= TRIM_GROWTH_FLOOR {
            let count = ((1.0 - growth_factor) * n as f64).round() as usize;
            if count > 0 && count <= n {
                let start = (n / 2).saturating_sub(count / 2);
                let end = (start + count).min(n);
                vertices.drain(start..end);
                modifiers.drain(start..end);
                directions.drain(start..end);
            }
        }

        let remaining = vertices.len();
        let mut grown_vertices = Vec::with_capacity(remaining * 2);
        let mut grown_modifiers = Vec::with_capacity(remaining * 2);
        let mut grown_directions = Vec::with_capacity(remaining * 2);

        let flip = self.mode == BleedMode::In;

        for (i, ((&current, &stored), &outward)) in vertices
            .iter()
            .zip(modifiers.iter())
            .zip(directions.iter())
            .enumerate()
        {
            let next = vertices
                .get((i + 1) % remaining)
                .copied()
                .unwrap_or(current);

            let mut modifier = stored;
            if growth_factor == TEXTURE_PASS_FACTOR {
                modifier = if self.bleed_strength <= 0.1 { 0.25 } else { 0.75 };
            }
            if degrow {
                modifier *= -0.5;
            }

            grown_vertices.push(current);
            grown_modifiers.push(jittered(modifier, stream));
            grown_directions.push(outward);

            let t = stream.gaussian(0.5, 0.2).clamp(0.1, 0.9);
            let edge = next - current;
            let midpoint = current + edge * t;

            let side = if outward == flip { -1.0 } else { 1.0 };
            let angle = side * stream.gaussian(0.0, 0.4).mul_add(FRAC_PI_4, FRAC_PI_2);
            let magnitude = stream.gaussian(0.5, 0.2) * stream.range(0.6, 1.4) * modifier;
            let displaced = midpoint + edge.rotated(angle) * magnitude;

            grown_vertices.push(displaced);
            grown_modifiers.push(jittered(modifier, stream));
            grown_directions.push(outward);
        }

        Self {
            vertices: grown_vertices,
            modifiers: grown_modifiers,
            directions: grown_directions,
            center: self.center,
            size: self.size,
            bleed_strength: self.bleed_strength,
            mode: self.mode,
        }
    }
}

/// Small gaussian wobble applied to every emitted modifier
fn jittered(modifier: f64, stream: &mut RandomStream) -> f64 {
    (stream.gaussian(0.5, 0.1) - 0.5).mul_add(0.1, modifier)
}

fn centroid(vertices: &[Vec2]) -> Vec2 {
    if vertices.is_empty() {
        return Vec2::default();
    }
    let sum = vertices.iter().fold(Vec2::default(), |acc, v| acc + *v);
    sum * (1.0 / vertices.len() as f64)
}

/// Outward flag per edge: sign of the cross product between the edge
/// vector and the vector from the edge start to the centroid.
fn edge_directions(vertices: &[Vec2], center: Vec2) -> Vec<bool> {
    let n = vertices.len();
    vertices
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let next = vertices.get((i + 1) % n).copied().unwrap_or(*v);
            let edge = next - *v;
            let to_center = center - *v;
            edge.cross(to_center) >= 0.0
        })
        .collect()
}
