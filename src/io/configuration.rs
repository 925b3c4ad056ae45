//! Tuning constants and runtime defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Base canvas width before the size multiplier
pub const BASE_CANVAS_WIDTH: u32 = 1200;

/// Base canvas height before the size multiplier
pub const BASE_CANVAS_HEIGHT: u32 = 600;

/// Default canvas size multiplier
pub const DEFAULT_SIZE_MULTIPLIER: f64 = 2.0;

/// Default base line thickness in canvas units
pub const DEFAULT_LINE_THICKNESS: f64 = 8.0;

// Painterly jitter. Both scales are zero: the effect is disabled, but
// the four per-block draws remain part of the deterministic stream and
// the scales remain the single place to re-enable it.
/// Block position jitter scale
pub const JITTER_POSITION_SCALE: f64 = 0.0;
/// Block extent jitter scale
pub const JITTER_SIZE_SCALE: f64 = 0.0;

// Renderer-side erosion
/// Minimum erase circles per erosion pass
pub const ERASE_CIRCLES_MIN: f64 = 130.0;
/// Maximum erase circles per erosion pass
pub const ERASE_CIRCLES_MAX: f64 = 200.0;
/// Smallest erase circle radius as a fraction of polygon size
pub const ERASE_RADIUS_MIN_FRACTION: f64 = 0.025;
/// Largest erase circle radius as a fraction of polygon size
pub const ERASE_RADIUS_MAX_FRACTION: f64 = 0.19;
