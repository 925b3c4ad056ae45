//! Procedural Mondrian-style watercolor painting generator
//!
//! The generator subdivides a canvas into colored blocks and composition
//! lines, then simulates a watercolor bleed over every interior block by
//! growing its rectangle into layered, organically edged polygons. A run
//! is a pure function of its seed and parameters; scenes round-trip
//! through JSON and keep producing identical watercolor layers.

#![forbid(unsafe_code)]

/// Scene construction, line selection and the watercolor engine
pub mod algorithm;
/// Color families, palettes and position-weighted sampling
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Random stream and numeric mapping utilities
pub mod math;
/// Spatial primitives and canvas subdivision
pub mod spatial;

pub use algorithm::builder::{GeneratorParams, SceneBuilder};
pub use algorithm::scene::Scene;
pub use io::error::{GeneratorError, Result};
