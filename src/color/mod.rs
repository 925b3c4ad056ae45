//! Color families, palettes and position-weighted sampling

/// Fixed color families, literal palettes and proportion tables
pub mod families;
/// Painterliness-weighted family and color sampling
pub mod sampler;

pub use families::{ColorFamily, Rgb};
