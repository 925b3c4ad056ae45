//! Scene rasterization and PNG export
//!
//! Thin raster layer over the generative core. Border blocks are filled
//! solid; interior blocks composite their watercolor layer stacks
//! through a per-block alpha accumulator; lines are stamped last in
//! black. The visual details here (scanline fill, stamped strokes,
//! erosion discs) are rendering choices, not part of the core contract.

use crate::algorithm::layers::{ErosionPass, LayerStack, PaintLayer, paint_plan};
use crate::algorithm::scene::{Block, Scene, SelectedLine};
use crate::color::families::{BACKGROUND, LINE_COLOR, Rgb};
use crate::io::configuration::{
    ERASE_CIRCLES_MAX, ERASE_CIRCLES_MIN, ERASE_RADIUS_MAX_FRACTION, ERASE_RADIUS_MIN_FRACTION,
};
use crate::io::error::{GeneratorError, Result};
use crate::io::progress::ProgressManager;
use crate::math::random::RandomStream;
use crate::spatial::rect::Rect;
use crate::spatial::vec2::Vec2;
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

// Renderer draws (erase circle counts, radii, positions) come from a
// stream forked off the scene seed with this salt, keeping them apart
// from the per-block layer streams.
const RENDER_STREAM_SALT: u64 = 0x52454E44;

/// Rasterize a scene to an RGBA image
///
/// `line_thickness` is the base stroke width multiplied by each line's
/// thickness value. Progress is reported per painted block.
pub fn render_scene(
    scene: &Scene,
    line_thickness: f64,
    progress: &ProgressManager,
) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(
        scene.width,
        scene.height,
        Rgba([BACKGROUND.r, BACKGROUND.g, BACKGROUND.b, 255]),
    );

    let mut stream = RandomStream::new(scene.seed ^ RENDER_STREAM_SALT);

    progress.start_blocks(scene.blocks.len());
    for (index, block) in scene.blocks.iter().enumerate() {
        if block.touches_border {
            fill_rect(&mut img, &block.painted_rect(), block.color, 1.0);
        } else if let Some(stack) = paint_plan(scene, index) {
            composite_block(&mut img, block, &stack, &mut stream);
        }
        progress.block_done();
    }

    progress.start_lines(scene.lines.len());
    for line in &scene.lines {
        stamp_line(&mut img, line, line_thickness);
    }
    progress.finish();

    img
}

/// Save a rendered image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// image cannot be encoded and written.
pub fn export_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GeneratorError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    img.save(path).map_err(|e| GeneratorError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Composite one interior block's layer stack onto the canvas
fn composite_block(
    img: &mut RgbaImage,
    block: &Block,
    stack: &LayerStack,
    stream: &mut RandomStream,
) {
    let mut coverage = Array2::<f32>::zeros((img.height() as usize, img.width() as usize));

    for layer in &stack.layers {
        paint_layer(&mut coverage, layer);
    }
    for pass in &stack.erosions {
        erode(&mut coverage, pass, stream);
    }

    for ((row, col), &alpha) in coverage.indexed_iter() {
        if alpha > 0.0 {
            blend_pixel(img, col as u32, row as u32, block.color, alpha.min(1.0));
        }
    }
}

fn paint_layer(coverage: &mut Array2<f32>, layer: &PaintLayer) {
    fill_polygon(coverage, &layer.polygon.vertices, (layer.alpha / 255.0) as f32);
    if layer.has_stroke && layer.stroke_weight > 0.0 {
        stroke_polygon(
            coverage,
            &layer.polygon.vertices,
            layer.stroke_weight,
            (layer.stroke_alpha / 255.0) as f32,
        );
    }
}

/// Even-odd scanline fill, accumulating alpha with src-over blending
fn fill_polygon(coverage: &mut Array2<f32>, vertices: &[Vec2], alpha: f32) {
    // Degenerate shapes contribute nothing visible
    if vertices.len() < 3 || alpha <= 0.0 {
        return;
    }
    let (rows, cols) = coverage.dim();

    let y_min = vertices.iter().map(|v| v.y).fold(f64::INFINITY, f64::min);
    let y_max = vertices.iter().map(|v| v.y).fold(f64::NEG_INFINITY, f64::max);
    let row_start = (y_min.floor().max(0.0)) as usize;
    let row_end = (y_max.ceil().min(rows as f64).max(0.0)) as usize;

    let n = vertices.len();
    let mut crossings: Vec<f64> = Vec::with_capacity(8);

    for row in row_start..row_end {
        let scan_y = row as f64 + 0.5;
        crossings.clear();

        for (i, v) in vertices.iter().enumerate() {
            let w = vertices.get((i + 1) % n).copied().unwrap_or(*v);
            let (lo, hi) = if v.y <= w.y { (*v, w) } else { (w, *v) };
            if scan_y >= lo.y && scan_y < hi.y && hi.y > lo.y {
                let t = (scan_y - lo.y) / (hi.y - lo.y);
                crossings.push((hi.x - lo.x).mul_add(t, lo.x));
            }
        }
        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        for span in crossings.chunks_exact(2) {
            if let [x_enter, x_exit] = span {
                let col_start = (x_enter.round().max(0.0)) as usize;
                let col_end = (x_exit.round().min(cols as f64).max(0.0)) as usize;
                for col in col_start..col_end {
                    if let Some(cell) = coverage.get_mut((row, col)) {
                        *cell += alpha * (1.0 - *cell);
                    }
                }
            }
        }
    }
}

/// Stroke the polygon outline with stamped discs
fn stroke_polygon(coverage: &mut Array2<f32>, vertices: &[Vec2], weight: f64, alpha: f32) {
    if vertices.len() < 3 || alpha <= 0.0 {
        return;
    }
    let radius = (weight / 2.0).max(0.5);
    let n = vertices.len();
    for (i, v) in vertices.iter().enumerate() {
        let w = vertices.get((i + 1) % n).copied().unwrap_or(*v);
        let edge = w - *v;
        let length = edge.length();
        let steps = (length / radius).ceil().max(1.0) as usize;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            stamp_disc(coverage, *v + edge * t, radius, alpha);
        }
    }
}

fn stamp_disc(coverage: &mut Array2<f32>, center: Vec2, radius: f64, alpha: f32) {
    let (rows, cols) = coverage.dim();
    let row_start = ((center.y - radius).floor().max(0.0)) as usize;
    let row_end = ((center.y + radius).ceil().min(rows as f64).max(0.0)) as usize;
    let col_start = ((center.x - radius).floor().max(0.0)) as usize;
    let col_end = ((center.x + radius).ceil().min(cols as f64).max(0.0)) as usize;

    for row in row_start..row_end {
        for col in col_start..col_end {
            let dx = col as f64 + 0.5 - center.x;
            let dy = row as f64 + 0.5 - center.y;
            if dx.mul_add(dx, dy * dy) <= radius * radius {
                if let Some(cell) = coverage.get_mut((row, col)) {
                    *cell += alpha * (1.0 - *cell);
                }
            }
        }
    }
}

/// Lift paint off the paper with small random discs around the centroid
fn erode(coverage: &mut Array2<f32>, pass: &ErosionPass, stream: &mut RandomStream) {
    let erase = (pass.strength * 0.1).clamp(0.0, 0.85) as f32;
    let count = stream.range(ERASE_CIRCLES_MIN, ERASE_CIRCLES_MAX) as usize;
    let size = pass.polygon.size;
    let center = pass.polygon.center;
    let (rows, cols) = coverage.dim();

    // The first circle is always placed; the count governs additions
    for _ in 0..count.max(1) {
        let offset = Vec2::new(
            stream.gaussian(0.0, 0.5) * size,
            stream.gaussian(0.0, 0.5) * size,
        );
        let radius = stream.range(
            ERASE_RADIUS_MIN_FRACTION * size,
            ERASE_RADIUS_MAX_FRACTION * size,
        );
        let at = center + offset;

        let row_start = ((at.y - radius).floor().max(0.0)) as usize;
        let row_end = ((at.y + radius).ceil().min(rows as f64).max(0.0)) as usize;
        let col_start = ((at.x - radius).floor().max(0.0)) as usize;
        let col_end = ((at.x + radius).ceil().min(cols as f64).max(0.0)) as usize;

        for row in row_start..row_end {
            for col in col_start..col_end {
                let dx = col as f64 + 0.5 - at.x;
                let dy = row as f64 + 0.5 - at.y;
                if dx.mul_add(dx, dy * dy) <= radius * radius {
                    if let Some(cell) = coverage.get_mut((row, col)) {
                        *cell *= 1.0 - erase;
                    }
                }
            }
        }
    }
}

/// Fill an axis-aligned rect at a flat alpha
fn fill_rect(img: &mut RgbaImage, rect: &Rect, color: Rgb, alpha: f32) {
    let x_start = rect.x.max(0) as u32;
    let y_start = rect.y.max(0) as u32;
    let x_end = (rect.x + rect.w).max(0) as u32;
    let y_end = (rect.y + rect.h).max(0) as u32;
    for y in y_start..y_end.min(img.height()) {
        for x in x_start..x_end.min(img.width()) {
            blend_pixel(img, x, y, color, alpha);
        }
    }
}

/// Stamp one composition line as a thickness-expanded rectangle
///
/// Every line is axis-aligned, so expanding the segment's bounding box by
/// half the stroke width in both axes gives the pencil-like square-capped
/// stroke of the source renderer.
fn stamp_line(img: &mut RgbaImage, line: &SelectedLine, base_thickness: f64) {
    let half = base_thickness * line.thickness / 2.0;
    let x_start = (line.x1.min(line.x2) - half).round().max(0.0) as u32;
    let x_end = (line.x1.max(line.x2) + half).round().max(0.0) as u32;
    let y_start = (line.y1.min(line.y2) - half).round().max(0.0) as u32;
    let y_end = (line.y1.max(line.y2) + half).round().max(0.0) as u32;

    for y in y_start..y_end.min(img.height()) {
        for x in x_start..x_end.min(img.width()) {
            blend_pixel(img, x, y, LINE_COLOR, 1.0);
        }
    }
}

fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Rgb, alpha: f32) {
    if x >= img.width() || y >= img.height() {
        return;
    }
    let pixel = img.get_pixel_mut(x, y);
    let Rgba([pr, pg, pb, pa]) = *pixel;
    let blend = |src: u8, dst: u8| -> u8 {
        (f32::from(src) * alpha + f32::from(dst) * (1.0 - alpha)).round() as u8
    };
    *pixel = Rgba([
        blend(color.r, pr),
        blend(color.g, pg),
        blend(color.b, pb),
        pa.max((alpha * 255.0).round() as u8),
    ]);
}
